//! Error types for patch definition generation
//!
//! Every fatal condition is a `PatchError` variant. Nothing below `main`
//! terminates the process; the binary maps any error to exit code 1.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PatchError {
    #[error("Unable to read {}: {source}", .path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unable to read application plist: {} ({reason})", .path.display())]
    MalformedPlist { path: PathBuf, reason: String },

    #[error("{key} is missing from {}", .path.display())]
    MissingBundleId { key: &'static str, path: PathBuf },

    #[error("Application name for {} is blank; pass --name", .path.display())]
    EmptyAppId { path: PathBuf },

    #[error("No application version found in {} and none was provided", .path.display())]
    MissingVersion { path: PathBuf },

    #[error("Unable to read extension attribute {}: {source}", .path.display())]
    ExtensionAttribute {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unable to write {}: {source}", .path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize patch definition: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Prompt failed: {message}")]
    Prompt { message: String },
}

impl From<inquire::InquireError> for PatchError {
    fn from(err: inquire::InquireError) -> Self {
        PatchError::Prompt {
            message: err.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, PatchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_offending_path() {
        let err = PatchError::MalformedPlist {
            path: PathBuf::from("/Applications/Foo.app/Contents/Info.plist"),
            reason: "not a dictionary".to_string(),
        };
        let message = err.to_string();
        assert!(message.contains("Unable to read application plist"));
        assert!(message.contains("/Applications/Foo.app/Contents/Info.plist"));

        let err = PatchError::ExtensionAttribute {
            path: PathBuf::from("/tmp/ea.sh"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        assert!(err.to_string().contains("/tmp/ea.sh"));
    }

    #[test]
    fn test_missing_bundle_id_names_key() {
        let err = PatchError::MissingBundleId {
            key: "CFBundleIdentifier",
            path: PathBuf::from("Foo.app/Contents/Info.plist"),
        };
        assert_eq!(
            err.to_string(),
            "CFBundleIdentifier is missing from Foo.app/Contents/Info.plist"
        );
    }
}
