//! Native plist decoding
//!
//! Decodes binary property lists in-process with the plist crate, for
//! systems where plutil is not available.

use std::io::Cursor;
use std::path::Path;

use anyhow::{anyhow, Result};

use super::PlistDecoder;
use crate::models::PlistFields;

/// Decoder for binary (and any other plist crate supported) encodings
#[derive(Debug, Default, Clone, Copy)]
pub struct NativeBinaryDecoder;

impl PlistDecoder for NativeBinaryDecoder {
    fn name(&self) -> &'static str {
        "native"
    }

    fn decode(&self, _path: &Path, bytes: &[u8]) -> Result<PlistFields> {
        let value = plist::Value::from_reader(Cursor::new(bytes))
            .map_err(|e| anyhow!("Failed to parse binary plist: {}", e))?;
        plist_to_fields(value)
    }
}

/// Keep the string entries of a root dictionary
pub(crate) fn plist_to_fields(value: plist::Value) -> Result<PlistFields> {
    let dict = value
        .into_dictionary()
        .ok_or_else(|| anyhow!("plist root is not a dictionary"))?;

    Ok(dict
        .into_iter()
        .filter_map(|(key, value)| value.into_string().map(|s| (key, s)))
        .collect())
}
