//! Binary plist conversion through plutil
//!
//! Runs `plutil -convert json -o - <file>` and reads the JSON it prints.

use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::{anyhow, Result};
use serde_json::Value;

use super::PlistDecoder;
use crate::models::PlistFields;

/// Decoder that shells out to the system plutil utility
#[derive(Debug, Clone)]
pub struct PlutilDecoder {
    program: PathBuf,
}

impl PlutilDecoder {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl PlistDecoder for PlutilDecoder {
    fn name(&self) -> &'static str {
        "plutil"
    }

    fn decode(&self, path: &Path, _bytes: &[u8]) -> Result<PlistFields> {
        let output = Command::new(&self.program)
            .arg("-convert")
            .arg("json")
            .arg("-o")
            .arg("-")
            .arg(path)
            .output()
            .map_err(|e| anyhow!("Failed to run {}: {}", self.program.display(), e))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(anyhow!(
                "{} exited with {}: {}",
                self.program.display(),
                output.status,
                stderr.trim()
            ));
        }

        json_to_fields(&output.stdout)
    }
}

/// Keep the string entries of a JSON object
fn json_to_fields(stdout: &[u8]) -> Result<PlistFields> {
    let value: Value = serde_json::from_slice(stdout)
        .map_err(|e| anyhow!("plutil produced invalid JSON: {}", e))?;

    match value {
        Value::Object(map) => Ok(map
            .into_iter()
            .filter_map(|(key, value)| match value {
                Value::String(s) => Some((key, s)),
                _ => None,
            })
            .collect()),
        _ => Err(anyhow!("plist root is not a dictionary")),
    }
}
