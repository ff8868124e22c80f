//! Field resolution module
//!
//! Derives every value the definition needs. Each field is taken from the
//! command line first, then from Info.plist, then from the missing-value
//! resolver, then from its default.

use log::{debug, warn};

use crate::constants::{
    KEY_BUNDLE_IDENTIFIER, KEY_BUNDLE_NAME, KEY_BUNDLE_VERSION, KEY_MINIMUM_SYSTEM_VERSION,
    KEY_SHORT_VERSION, TIMESTAMP_FORMAT,
};
use crate::error::{PatchError, Result};
use crate::models::{BundleMetadata, Config, ResolvedFields};

pub mod prompt;

pub use prompt::{ConsolePrompt, MissingField, MissingValueResolver, NoPrompt};

/// Resolve all fields for one bundle
pub fn resolve_fields(
    config: &Config,
    metadata: &BundleMetadata,
    resolver: &dyn MissingValueResolver,
) -> Result<ResolvedFields> {
    let app_name = resolve_app_name(config, metadata);
    let app_id = app_id(&app_name);
    if app_id.is_empty() {
        return Err(PatchError::EmptyAppId {
            path: metadata.plist_path.clone(),
        });
    }

    let bundle_id = metadata
        .get(KEY_BUNDLE_IDENTIFIER)
        .ok_or_else(|| PatchError::MissingBundleId {
            key: KEY_BUNDLE_IDENTIFIER,
            path: metadata.plist_path.clone(),
        })?
        .to_string();

    let version = resolve_version(config, metadata, resolver)?;
    let minimum_os = resolve_minimum_os(config, metadata, resolver)?;

    let publisher = match non_empty(&config.publisher) {
        Some(publisher) => publisher.to_string(),
        None => {
            debug!("No publisher given, using app name '{}'", app_name);
            app_name.clone()
        }
    };

    Ok(ResolvedFields {
        app_id,
        app_filename: metadata.app_filename.clone(),
        bundle_id,
        version,
        minimum_os,
        publisher,
        release_date: metadata.modified_at.format(TIMESTAMP_FORMAT).to_string(),
        last_modified: metadata.generated_at.format(TIMESTAMP_FORMAT).to_string(),
        app_name,
    })
}

/// App name with all spaces removed
pub fn app_id(app_name: &str) -> String {
    app_name.replace(' ', "")
}

fn resolve_app_name(config: &Config, metadata: &BundleMetadata) -> String {
    if let Some(name) = non_empty(&config.name) {
        return name.to_string();
    }
    if let Some(name) = metadata.get(KEY_BUNDLE_NAME) {
        return name.to_string();
    }

    let filename = &metadata.app_filename;
    let name = filename.strip_suffix(".app").unwrap_or(filename);
    debug!("{} missing, using bundle filename '{}'", KEY_BUNDLE_NAME, name);
    name.to_string()
}

fn resolve_version(
    config: &Config,
    metadata: &BundleMetadata,
    resolver: &dyn MissingValueResolver,
) -> Result<String> {
    if let Some(version) = non_empty(&config.app_version) {
        return Ok(version.to_string());
    }
    if let Some(version) = metadata.get(KEY_SHORT_VERSION) {
        return Ok(version.to_string());
    }
    if let Some(version) = metadata.get(KEY_BUNDLE_VERSION) {
        debug!("{} missing, using {}", KEY_SHORT_VERSION, KEY_BUNDLE_VERSION);
        return Ok(version.to_string());
    }

    resolver
        .resolve(MissingField::Version)?
        .ok_or_else(|| PatchError::MissingVersion {
            path: metadata.plist_path.clone(),
        })
}

fn resolve_minimum_os(
    config: &Config,
    metadata: &BundleMetadata,
    resolver: &dyn MissingValueResolver,
) -> Result<String> {
    if let Some(min_os) = non_empty(&config.min_sys_version) {
        return Ok(min_os.to_string());
    }
    if let Some(min_os) = metadata.get(KEY_MINIMUM_SYSTEM_VERSION) {
        return Ok(min_os.to_string());
    }

    let field = MissingField::MinimumOs;
    match resolver.resolve(field)? {
        Some(min_os) => Ok(min_os),
        None => {
            let default = field.default_value().unwrap_or_default();
            warn!(
                "{} not found in {}, defaulting to {}",
                KEY_MINIMUM_SYSTEM_VERSION,
                metadata.plist_path.display(),
                default
            );
            Ok(default.to_string())
        }
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}
