use crate::errors::{Error, Result};
use crate::extensions::enums::valid_csv;
use std::str::FromStr;
use strum_macros::{AsRefStr, Display, EnumIter as EnumIterDerive, EnumString};

/// How commands render their result.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, EnumString, Display, AsRefStr, EnumIterDerive,
)]
#[strum(serialize_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    pub fn try_from(s: &str) -> Result<Self> {
        Self::from_str(s).map_err(|_| {
            Error::Parse(format!(
                "argument --output: invalid choice: '{}' (choose from {})",
                s,
                valid_csv::<OutputFormat>()
            ))
        })
    }
}

/// Subcommands understood by the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display, AsRefStr, EnumIterDerive)]
#[strum(serialize_all = "lowercase")]
pub enum ProfileCommand {
    Info,
    Skills,
    Projects,
    Json,
}

impl ProfileCommand {
    pub fn try_from(s: &str) -> Result<Self> {
        Self::from_str(s).map_err(|_| Error::unknown(s))
    }

    pub fn summary(&self) -> &'static str {
        match self {
            ProfileCommand::Info => "Show full information",
            ProfileCommand::Skills => "Show skills only",
            ProfileCommand::Projects => "Show projects only",
            ProfileCommand::Json => "Print all information as JSON",
        }
    }
}

/// Switches that end processing as soon as they are seen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flag {
    Help,
    Version,
}
