//! Patch definition builder
//!
//! Turns resolved fields into the patch server's JSON documents and embeds
//! extension attribute scripts as base64.

use std::fs;
use std::path::PathBuf;

use base64::Engine;
use log::{debug, warn};

use crate::constants::{
    CRITERION_APP_VERSION, CRITERION_OS_VERSION, OPERATOR_GREATER_OR_EQUAL, OPERATOR_IS,
};
use crate::error::{PatchError, Result};
use crate::models::{
    Component, Criterion, Definition, Document, ExtensionAttribute, KillApp, Patch,
    ResolvedFields,
};

/// Build the single patch entry for the resolved application version
pub fn build_patch(fields: &ResolvedFields) -> Patch {
    Patch {
        version: fields.version.clone(),
        release_date: fields.release_date.clone(),
        standalone: true,
        minimum_operating_system: fields.minimum_os.clone(),
        reboot: false,
        kill_apps: vec![KillApp {
            bundle_id: fields.bundle_id.clone(),
            app_name: fields.app_filename.clone(),
        }],
        components: vec![Component {
            name: fields.app_name.clone(),
            version: fields.version.clone(),
            criteria: vec![
                Criterion::bundle_id(&fields.bundle_id),
                Criterion::recon(CRITERION_APP_VERSION, OPERATOR_IS, &fields.version),
            ],
        }],
        capabilities: vec![Criterion::recon(
            CRITERION_OS_VERSION,
            OPERATOR_GREATER_OR_EQUAL,
            &fields.minimum_os,
        )],
        dependencies: Vec::new(),
    }
}

/// Wrap a patch into a full software title definition
pub fn build_definition(
    fields: &ResolvedFields,
    patch: Patch,
    extension_attributes: Vec<ExtensionAttribute>,
) -> Definition {
    Definition {
        id: fields.app_id.clone(),
        name: fields.app_name.clone(),
        publisher: fields.publisher.clone(),
        app_name: fields.app_filename.clone(),
        bundle_id: fields.bundle_id.clone(),
        last_modified: fields.last_modified.clone(),
        current_version: fields.version.clone(),
        requirements: vec![Criterion::bundle_id(&fields.bundle_id)],
        patches: vec![patch],
        extension_attributes,
    }
}

/// Read each script in order and embed it as an extension attribute
pub fn load_extension_attributes(
    paths: &[PathBuf],
    app_name: &str,
) -> Result<Vec<ExtensionAttribute>> {
    let key = extension_attribute_key(app_name);

    paths
        .iter()
        .map(|path| {
            let bytes = fs::read(path).map_err(|source| PatchError::ExtensionAttribute {
                path: path.clone(),
                source,
            })?;
            debug!("Embedding {} ({} bytes)", path.display(), bytes.len());

            Ok(ExtensionAttribute {
                key: key.clone(),
                value: base64::engine::general_purpose::STANDARD.encode(&bytes),
                display_name: app_name.to_string(),
            })
        })
        .collect()
}

/// Lowercased app name with spaces replaced by hyphens
pub fn extension_attribute_key(app_name: &str) -> String {
    app_name.to_lowercase().replace(' ', "-")
}

/// Build the document for this run: a bare patch or a full definition
pub fn build_document(
    fields: &ResolvedFields,
    patch_only: bool,
    extension_attributes: &[PathBuf],
) -> Result<Document> {
    let patch = build_patch(fields);
    if patch_only {
        if !extension_attributes.is_empty() {
            let ignored: Vec<String> = extension_attributes
                .iter()
                .map(|path| path.display().to_string())
                .collect();
            warn!(
                "Extension attributes are not part of a patch, ignoring: {}",
                ignored.join(", ")
            );
        }
        return Ok(Document::Patch(patch));
    }

    let attributes = load_extension_attributes(extension_attributes, &fields.app_name)?;
    Ok(Document::Definition(build_definition(
        fields, patch, attributes,
    )))
}
