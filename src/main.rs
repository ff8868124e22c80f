#![forbid(unsafe_code)]

use std::process::ExitCode;

use anyhow::Result;
use log::error;

use patchstarter::metadata::PlistReader;
use patchstarter::models::Config;
use patchstarter::resolver::ConsolePrompt;
use patchstarter::{cli, generate, output};

fn main() -> ExitCode {
    let config = cli::parse_args();
    init_logging(&config);

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{:#}", err);
            eprintln!("Error: {}", err);
            ExitCode::from(1)
        }
    }
}

fn run(config: &Config) -> Result<()> {
    let reader = PlistReader::system_default();
    let (app_id, document) = generate(config, &reader, &ConsolePrompt)?;
    output::emit(config.output_dir.as_deref(), &app_id, &document)?;
    Ok(())
}

/// Logs go to stderr; RUST_LOG overrides the default level
fn init_logging(config: &Config) {
    let default_level = if config.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}
