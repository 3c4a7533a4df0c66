
use std::fmt;
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use chrono::Local;

use crate::errors::{Error, Result};
use crate::extensions::chrono::RecordStampExt;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Warn,
    Error,
}

impl LogLevel {
    fn label(self) -> &'static str {
        match self {
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // pad so that `{:<5}` lines up the file columns
        f.pad(self.label())
    }
}

#[derive(Debug, Copy, Clone, Default)]
pub enum LogTarget {
    #[default]
    ConsoleOnly,
    ConsoleAndFile,
    FileOnly,
}

impl LogTarget {
    fn console(self) -> bool {
        matches!(self, LogTarget::ConsoleOnly | LogTarget::ConsoleAndFile)
    }

    fn file(self) -> bool {
        matches!(self, LogTarget::ConsoleAndFile | LogTarget::FileOnly)
    }
}

/// INFO goes to stdout, WARN and ERROR to stderr.
fn to_console(level: LogLevel, message: &str) {
    match level {
        LogLevel::Info => println!("{message}"),
        LogLevel::Warn | LogLevel::Error => eprintln!("{message}"),
    }
}

/// Session file state. `Pending` holds the directory until the first line.
enum SessionFile {
    Off,
    Pending(PathBuf),
    Open { file: File, path: PathBuf },
    Unavailable,
}

impl SessionFile {
    fn create(dir: &Path) -> std::io::Result<(File, PathBuf)> {
        let stamp = Local::now().format("%Y%m%d-%H%M%S");
        let path = dir.join(format!("session-{stamp}.log"));
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        Ok((file, path))
    }

    fn write_line(&mut self, line: &str) {
        if let SessionFile::Pending(dir) = self {
            let next = match Self::create(dir) {
                Ok((file, path)) => SessionFile::Open { file, path },
                Err(err) => {
                    eprintln!("WARN: File logging unavailable; continuing without a log file. ({err})");
                    SessionFile::Unavailable
                }
            };
            *self = next;
        }
        if let SessionFile::Open { file, .. } = self {
            let _ = writeln!(file, "{line}");
        }
    }

    fn path(&self) -> Option<PathBuf> {
        match self {
            SessionFile::Open { path, .. } => Some(path.clone()),
            _ => None,
        }
    }
}

/// Console logger with an opt-in session file.
///
/// File-targeted lines are dropped until [`Logger::open_log_dir`] succeeds;
/// the file itself is created when the first such line arrives. Clones share
/// the same file.
#[derive(Clone)]
pub struct Logger {
    session: Arc<Mutex<SessionFile>>,
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger {
    pub fn new() -> Self {
        Self {
            session: Arc::new(Mutex::new(SessionFile::Off)),
        }
    }

    /// Creates `dir` if needed and routes file-targeted lines into it.
    pub fn open_log_dir(&self, dir: impl AsRef<Path>) -> Result<()> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir).map_err(|err| {
            Error::startup(format!("cannot prepare log directory '{}': {err}", dir.display()))
        })?;
        if let Ok(mut session) = self.session.lock() {
            if !matches!(*session, SessionFile::Open { .. }) {
                *session = SessionFile::Pending(dir.to_path_buf());
            }
        }
        Ok(())
    }

    fn log(&self, level: LogLevel, message: &str, target: LogTarget) {
        if target.console() {
            to_console(level, message);
        }
        if !target.file() {
            return;
        }
        if let Ok(mut session) = self.session.lock() {
            if matches!(*session, SessionFile::Off | SessionFile::Unavailable) {
                return;
            }
            let stamp = Local::now().to_record_stamp();
            session.write_line(&format!("[{stamp}] {level:<5} {message}"));
        }
    }

    pub fn info(&self, message: impl AsRef<str>, target: LogTarget) {
        self.log(LogLevel::Info, message.as_ref(), target);
    }

    pub fn warn(&self, message: impl AsRef<str>, target: LogTarget) {
        self.log(LogLevel::Warn, message.as_ref(), target);
    }

    pub fn error(&self, message: impl AsRef<str>, target: LogTarget) {
        self.log(LogLevel::Error, message.as_ref(), target);
    }

    pub fn file_logging_enabled(&self) -> bool {
        self.session
            .lock()
            .map(|s| !matches!(*s, SessionFile::Off))
            .unwrap_or(false)
    }

    pub fn log_path(&self) -> Option<PathBuf> {
        self.session.lock().ok().and_then(|s| s.path())
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("log_path", &self.log_path())
            .finish()
    }
}
