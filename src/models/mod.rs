//! Data models module
//!
//! Defines core data structures:
//! - Config: Resolved command-line inputs
//! - BundleMetadata: Fields read from the bundle's Info.plist
//! - ResolvedFields: Values derived from metadata and overrides
//! - Patch / Definition: The JSON documents consumed by the patch server

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::constants::{CRITERION_BUNDLE_ID, CRITERION_TYPE_RECON, OPERATOR_IS};

/// Configuration for a single generation run
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Path to the application bundle
    pub app_path: PathBuf,
    /// Directory to write the JSON file into (stdout when absent)
    pub output_dir: Option<PathBuf>,
    /// Publisher name (defaults to the app name)
    pub publisher: Option<String>,
    /// Display name override
    pub name: Option<String>,
    /// Extension attribute scripts, in argument order
    pub extension_attributes: Vec<PathBuf>,
    /// Version override
    pub app_version: Option<String>,
    /// Minimum OS override
    pub min_sys_version: Option<String>,
    /// Emit only the patch object
    pub patch_only: bool,
    /// Enable debug logging
    pub verbose: bool,
}

/// String-valued plist fields keyed by plist key
pub type PlistFields = BTreeMap<String, String>;

/// Metadata loaded from an application bundle
#[derive(Debug, Clone)]
pub struct BundleMetadata {
    /// Path of the Info.plist the fields came from
    pub plist_path: PathBuf,
    /// Bundle directory name, e.g. `Example.app`
    pub app_filename: String,
    pub fields: PlistFields,
    /// When this run started
    pub generated_at: DateTime<Utc>,
    /// Last modification time of the bundle directory
    pub modified_at: DateTime<Utc>,
}

impl BundleMetadata {
    /// Look up a string field that is not blank
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .get(key)
            .map(String::as_str)
            .filter(|value| !value.trim().is_empty())
    }
}

/// Values derived from metadata, overrides and prompts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedFields {
    pub app_name: String,
    /// App name with spaces removed; JSON `id` and output filename stem
    pub app_id: String,
    pub app_filename: String,
    pub bundle_id: String,
    pub version: String,
    pub minimum_os: String,
    pub publisher: String,
    /// Bundle modification time
    pub release_date: String,
    /// Generation time
    pub last_modified: String,
}

/// A single matching rule evaluated by the patch server
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Criterion {
    pub name: String,
    pub operator: String,
    pub value: String,
    #[serde(rename = "type")]
    pub criterion_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub and: Option<bool>,
}

impl Criterion {
    /// Recon criterion with the given name, operator and value
    pub fn recon(name: &str, operator: &str, value: &str) -> Self {
        Self {
            name: name.to_string(),
            operator: operator.to_string(),
            value: value.to_string(),
            criterion_type: CRITERION_TYPE_RECON.to_string(),
            and: None,
        }
    }

    /// Primary bundle id match, always joined with `and`
    pub fn bundle_id(bundle_id: &str) -> Self {
        Self {
            and: Some(true),
            ..Self::recon(CRITERION_BUNDLE_ID, OPERATOR_IS, bundle_id)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KillApp {
    pub bundle_id: String,
    pub app_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Component {
    pub name: String,
    pub version: String,
    pub criteria: Vec<Criterion>,
}

/// One patch entry for a single application version
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Patch {
    pub version: String,
    pub release_date: String,
    pub standalone: bool,
    pub minimum_operating_system: String,
    pub reboot: bool,
    pub kill_apps: Vec<KillApp>,
    pub components: Vec<Component>,
    pub capabilities: Vec<Criterion>,
    pub dependencies: Vec<serde_json::Value>,
}

/// Script embedded into a definition for inventory collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtensionAttribute {
    pub key: String,
    /// Base64 encoded script contents
    pub value: String,
    pub display_name: String,
}

/// Full software title definition wrapping its patches
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Definition {
    pub id: String,
    pub name: String,
    pub publisher: String,
    pub app_name: String,
    pub bundle_id: String,
    pub last_modified: String,
    pub current_version: String,
    pub requirements: Vec<Criterion>,
    pub patches: Vec<Patch>,
    pub extension_attributes: Vec<ExtensionAttribute>,
}

/// The JSON document produced by one run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Document {
    Patch(Patch),
    Definition(Definition),
}

impl Document {
    pub fn is_patch_only(&self) -> bool {
        matches!(self, Document::Patch(_))
    }
}
