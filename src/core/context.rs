use crate::core::cli::CliOptions;
use crate::errors::Result;
use crate::logging::Logger;
use crate::profile::Profile;

/// Per-invocation state shared by every command.
#[derive(Debug)]
pub struct AppContext {
    pub options: CliOptions,
    pub logger: Logger,
}

impl AppContext {
    pub fn new(options: CliOptions) -> Result<Self> {
        let logger = Logger::new();
        if let Some(dir) = &options.logs_dir {
            logger.open_log_dir(dir)?;
        }
        Ok(Self { options, logger })
    }

    /// Fresh profile for the configured name.
    pub fn profile(&self) -> Profile {
        Profile::new(self.options.name.as_str())
    }
}
