//! Output module
//!
//! Handles:
//! - Compact JSON files named after the app id
//! - 4-space indented JSON on stdout when no output directory is given

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use log::info;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::error::{PatchError, Result};
use crate::models::Document;

/// File name for a document: `<id>-patch.json` or `<id>.json`
pub fn output_filename(app_id: &str, patch_only: bool) -> String {
    if patch_only {
        format!("{}-patch.json", app_id)
    } else {
        format!("{}.json", app_id)
    }
}

/// Serialize with stable 4-space indentation
pub fn to_pretty_json(document: &Document) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    document.serialize(&mut serializer)?;

    String::from_utf8(buf)
        .map_err(|e| PatchError::Serialize(<serde_json::Error as serde::ser::Error>::custom(e)))
}

/// Write the compact document into `dir`, returning the file path
pub fn write_document(dir: &Path, app_id: &str, document: &Document) -> Result<PathBuf> {
    let path = dir.join(output_filename(app_id, document.is_patch_only()));
    let json = serde_json::to_string(document)?;

    fs::write(&path, json).map_err(|source| PatchError::OutputWrite {
        path: path.clone(),
        source,
    })?;

    info!("Wrote {}", path.display());
    Ok(path)
}

/// Write the document to a file when a directory is configured, otherwise print it
pub fn emit(output_dir: Option<&Path>, app_id: &str, document: &Document) -> Result<Option<PathBuf>> {
    match output_dir {
        Some(dir) => write_document(dir, app_id, document).map(Some),
        None => {
            let json = to_pretty_json(document)?;
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            writeln!(handle, "{}", json).map_err(|source| PatchError::OutputWrite {
                path: PathBuf::from("<stdout>"),
                source,
            })?;
            Ok(None)
        }
    }
}
