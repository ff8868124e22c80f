//! patchstarter - macOS Patch Definition Library
//!
//! This library exposes the pipeline that reads an application bundle's
//! Info.plist and builds a patch definition document from it.

pub mod cli;
pub mod constants;
pub mod definition;
pub mod error;
pub mod metadata;
pub mod models;
pub mod output;
pub mod resolver;

use crate::error::Result;
use crate::metadata::PlistReader;
use crate::models::{Config, Document};
use crate::resolver::MissingValueResolver;

/// Build the document for `config`, returning it with the app id used to name it
pub fn generate(
    config: &Config,
    reader: &PlistReader,
    resolver: &dyn MissingValueResolver,
) -> Result<(String, Document)> {
    let metadata = metadata::read_bundle(&config.app_path, reader)?;
    let fields = resolver::resolve_fields(config, &metadata, resolver)?;
    log::debug!(
        "Resolved {} {} ({}) for macOS {}+",
        fields.app_name,
        fields.version,
        fields.bundle_id,
        fields.minimum_os
    );

    let document =
        definition::build_document(&fields, config.patch_only, &config.extension_attributes)?;
    Ok((fields.app_id, document))
}
