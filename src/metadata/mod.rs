//! Application bundle metadata module
//!
//! Handles:
//! - Locating Contents/Info.plist inside an application bundle
//! - XML plist parsing, with fallback to a binary plist decoder
//! - Bundle modification time for the patch release date

use std::fs;
use std::io::Cursor;
use std::path::Path;

use anyhow::{anyhow, Result as DecodeResult};
use chrono::{DateTime, Utc};
use log::debug;

use crate::constants::{INFO_PLIST_PATH, PLUTIL};
use crate::error::{PatchError, Result};
use crate::models::{BundleMetadata, PlistFields};

pub mod native;
pub mod plutil;

pub use native::NativeBinaryDecoder;
pub use plutil::PlutilDecoder;

/// A way of turning Info.plist contents into string fields
pub trait PlistDecoder {
    /// Short name used in log output
    fn name(&self) -> &'static str;

    /// Decode the plist stored at `path` whose raw contents are `bytes`
    fn decode(&self, path: &Path, bytes: &[u8]) -> DecodeResult<PlistFields>;
}

/// Decoder for XML encoded property lists
#[derive(Debug, Default, Clone, Copy)]
pub struct XmlDecoder;

impl PlistDecoder for XmlDecoder {
    fn name(&self) -> &'static str {
        "xml"
    }

    fn decode(&self, _path: &Path, bytes: &[u8]) -> DecodeResult<PlistFields> {
        let value = plist::Value::from_reader_xml(Cursor::new(bytes))
            .map_err(|e| anyhow!("Failed to parse XML plist: {}", e))?;
        native::plist_to_fields(value)
    }
}

/// Reads Info.plist files, trying XML first and then the fallback decoder
pub struct PlistReader {
    primary: Box<dyn PlistDecoder>,
    fallback: Box<dyn PlistDecoder>,
}

impl PlistReader {
    pub fn new(fallback: Box<dyn PlistDecoder>) -> Self {
        Self {
            primary: Box::new(XmlDecoder),
            fallback,
        }
    }

    /// Use plutil for binary plists when it is installed, otherwise decode natively
    pub fn system_default() -> Self {
        match which::which(PLUTIL) {
            Ok(path) => {
                debug!("Using {} for binary plists", path.display());
                Self::new(Box::new(PlutilDecoder::new(path)))
            }
            Err(_) => {
                debug!("{} not found, using native binary plist decoder", PLUTIL);
                Self::new(Box::new(NativeBinaryDecoder))
            }
        }
    }

    /// Read and decode the plist at `path`
    pub fn read(&self, path: &Path) -> Result<PlistFields> {
        let bytes = fs::read(path).map_err(|source| PatchError::Unreadable {
            path: path.to_path_buf(),
            source,
        })?;

        match self.primary.decode(path, &bytes) {
            Ok(fields) => return Ok(fields),
            Err(err) => debug!(
                "{} decoder rejected {}: {}; trying {}",
                self.primary.name(),
                path.display(),
                err,
                self.fallback.name()
            ),
        }

        self.fallback
            .decode(path, &bytes)
            .map_err(|err| PatchError::MalformedPlist {
                path: path.to_path_buf(),
                reason: err.to_string(),
            })
    }
}

/// Load the metadata of the application bundle at `app_path`
pub fn read_bundle(app_path: &Path, reader: &PlistReader) -> Result<BundleMetadata> {
    let generated_at = Utc::now();
    let plist_path = app_path.join(INFO_PLIST_PATH);
    let fields = reader.read(&plist_path)?;
    debug!("Read {} fields from {}", fields.len(), plist_path.display());

    let modified = fs::metadata(app_path)
        .and_then(|meta| meta.modified())
        .map_err(|source| PatchError::Unreadable {
            path: app_path.to_path_buf(),
            source,
        })?;

    Ok(BundleMetadata {
        plist_path,
        app_filename: bundle_filename(app_path),
        fields,
        generated_at,
        modified_at: DateTime::<Utc>::from(modified),
    })
}

/// Final path component of the bundle, resolving `.` and friends when needed
fn bundle_filename(app_path: &Path) -> String {
    app_path
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .or_else(|| {
            fs::canonicalize(app_path)
                .ok()
                .and_then(|p| p.file_name().map(|name| name.to_string_lossy().to_string()))
        })
        .unwrap_or_else(|| app_path.display().to_string())
}
