use thiserror::Error;

// Re-export a simple Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can stop an invocation short.
#[derive(Error, Debug)]
pub enum Error {
    // ---- Parsing & Routing --------------------------------------------------
    /// Malformed command line (missing option value, bad choice, stray token).
    #[error("Parse error: {0}")]
    Parse(String),

    /// Subcommand token that does not name any known command.
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    // ---- Startup ------------------------------------------------------------
    /// The runtime context could not be prepared.
    #[error("Startup error: {0}")]
    Startup(String),

    // ---- Plumbing / Wrappers ------------------------------------------------
    /// IO passthrough (stdout writes, stdin reads, log files).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serde JSON passthrough (record rendering).
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

// ----------------------- Convenience constructors ----------------------------

impl Error {
    /// Helper to create a parse error from any displayable value.
    pub fn parse<S: Into<String>>(msg: S) -> Self {
        Error::Parse(msg.into())
    }
    /// Helper for unknown command.
    pub fn unknown<S: Into<String>>(cmd: S) -> Self {
        Error::UnknownCommand(cmd.into())
    }
    /// Helper for a failed startup.
    pub fn startup<S: Into<String>>(msg: S) -> Self {
        Error::Startup(msg.into())
    }

    /// Process exit code reported for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            Error::Parse(_) => 2,
            Error::UnknownCommand(_) | Error::Startup(_) | Error::Io(_) | Error::Json(_) => 1,
        }
    }
}

// ----------------------- Small result helpers --------------------------------

/// Map an `Option<T>` into `Result<T, Error::Parse>` with a custom message.
/// Used when an option flag is the last token and its value never arrives.
pub fn require_value<T, S: Into<String>>(opt: Option<T>, msg: S) -> Result<T> {
    opt.ok_or_else(|| Error::Parse(msg.into()))
}
