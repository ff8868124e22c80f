//! Answers for metadata that Info.plist does not provide

use std::io::IsTerminal;

use inquire::{InquireError, Text};
use log::debug;

use crate::constants::{DEFAULT_MINIMUM_OS, KEY_MINIMUM_SYSTEM_VERSION, KEY_SHORT_VERSION};
use crate::error::Result;

/// A field that may need to be asked for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingField {
    Version,
    MinimumOs,
}

impl MissingField {
    pub fn plist_key(self) -> &'static str {
        match self {
            MissingField::Version => KEY_SHORT_VERSION,
            MissingField::MinimumOs => KEY_MINIMUM_SYSTEM_VERSION,
        }
    }

    pub fn question(self) -> &'static str {
        match self {
            MissingField::Version => "Application version:",
            MissingField::MinimumOs => "Minimum macOS version:",
        }
    }

    /// Value suggested to the user and used when nothing is answered
    pub fn default_value(self) -> Option<&'static str> {
        match self {
            MissingField::Version => None,
            MissingField::MinimumOs => Some(DEFAULT_MINIMUM_OS),
        }
    }
}

/// Supplies values for fields missing from the bundle metadata
pub trait MissingValueResolver {
    /// `Ok(None)` means "not provided"
    fn resolve(&self, field: MissingField) -> Result<Option<String>>;
}

/// Asks on the terminal; answers "not provided" when stdin is not a terminal
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsolePrompt;

impl MissingValueResolver for ConsolePrompt {
    fn resolve(&self, field: MissingField) -> Result<Option<String>> {
        if !std::io::stdin().is_terminal() {
            debug!("stdin is not a terminal, not prompting for {}", field.plist_key());
            return Ok(None);
        }

        let help = format!("{} was not found in Info.plist", field.plist_key());
        let mut prompt = Text::new(field.question()).with_help_message(&help);
        if let Some(default) = field.default_value() {
            prompt = prompt.with_default(default);
        }

        match prompt.prompt() {
            Ok(answer) => Ok(Some(answer.trim().to_string()).filter(|a| !a.is_empty())),
            Err(InquireError::OperationCanceled)
            | Err(InquireError::OperationInterrupted)
            | Err(InquireError::NotTTY) => Ok(None),
            Err(err) => Err(err.into()),
        }
    }
}

/// Never provides a value
#[derive(Debug, Default, Clone, Copy)]
pub struct NoPrompt;

impl MissingValueResolver for NoPrompt {
    fn resolve(&self, _field: MissingField) -> Result<Option<String>> {
        Ok(None)
    }
}
