//! CLI argument parsing module
//!
//! Handles command-line interface using clap, including:
//! - The application bundle path
//! - Metadata overrides (name, publisher, version, minimum OS)
//! - Extension attribute scripts
//! - Output directory and patch-only mode

use clap::{Arg, ArgAction, ArgMatches, Command};
use std::ffi::OsString;
use std::path::PathBuf;

use crate::models::Config;

const LONG_ABOUT: &str = "Create a basic patch definition from an existing macOS application.

Fields are derived from the bundle's Info.plist:
    * The \"name\" is CFBundleName (or the bundle filename)
    * The \"id\" is the name without spaces
    * The \"version\" is CFBundleShortVersionString, then CFBundleVersion
    * The minimum OS is LSMinimumSystemVersion (default 10.9)
    * The \"releaseDate\" is the bundle's last modified time
    * The \"publisher\" defaults to the name unless passed as an argument";

/// Build the clap command definition
pub fn build_command() -> Command {
    Command::new("patchstarter")
        .version(env!("PATCHSTARTER_VERSION"))
        .long_version(concat!(env!("PATCHSTARTER_VERSION"), " (", env!("GIT_HASH"), ")"))
        .about("Create a patch definition from a macOS application bundle")
        .long_about(LONG_ABOUT)
        .arg(
            Arg::new("path")
                .value_name("PATH")
                .help("Path to the application bundle")
                .value_parser(clap::value_parser!(PathBuf))
                .required(true)
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("DIR")
                .help("Directory path to write JSON file")
                .value_parser(clap::value_parser!(PathBuf))
        )
        .arg(
            Arg::new("publisher")
                .short('p')
                .long("publisher")
                .value_name("NAME")
                .help("Publisher name for a full definition (defaults to the app name)")
        )
        .arg(
            Arg::new("name")
                .short('n')
                .long("name")
                .value_name("NAME")
                .help("Display name to use instead of CFBundleName")
        )
        .arg(
            Arg::new("extension-attribute")
                .short('e')
                .long("extension-attribute")
                .value_name("FILE")
                .help("Script to embed as an extension attribute (repeatable)")
                .value_parser(clap::value_parser!(PathBuf))
                .action(ArgAction::Append)
        )
        .arg(
            Arg::new("app-version")
                .long("app-version")
                .value_name("VERSION")
                .help("Application version to use instead of the bundle's")
        )
        .arg(
            Arg::new("min-sys-version")
                .long("min-sys-version")
                .value_name("VERSION")
                .help("Minimum macOS version to use instead of LSMinimumSystemVersion")
        )
        .arg(
            Arg::new("patch-only")
                .long("patch-only")
                .help("Only create a patch, not a full definition")
                .action(ArgAction::SetTrue)
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Log how each field was resolved")
                .action(ArgAction::SetTrue)
        )
}

/// Parse process arguments, exiting with a usage error when they are invalid
pub fn parse_args() -> Config {
    config_from_matches(&build_command().get_matches())
}

/// Parse an explicit argument list
pub fn try_parse_from<I, T>(args: I) -> Result<Config, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let matches = build_command().try_get_matches_from(args)?;
    Ok(config_from_matches(&matches))
}

fn config_from_matches(matches: &ArgMatches) -> Config {
    let string = |id: &str| matches.get_one::<String>(id).cloned();

    Config {
        app_path: matches.get_one::<PathBuf>("path").cloned().unwrap_or_default(),
        output_dir: matches.get_one::<PathBuf>("output").cloned(),
        publisher: string("publisher"),
        name: string("name"),
        extension_attributes: matches
            .get_many::<PathBuf>("extension-attribute")
            .map(|values| values.cloned().collect())
            .unwrap_or_default(),
        app_version: string("app-version"),
        min_sys_version: string("min-sys-version"),
        patch_only: matches.get_flag("patch-only"),
        verbose: matches.get_flag("verbose"),
    }
}
