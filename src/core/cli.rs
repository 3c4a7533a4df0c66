use std::path::PathBuf;

use crate::arg::arg_parser::ArgParser;
use crate::arg::args::{Arg, TokenStream};
use crate::core::types::{Flag, OutputFormat, ProfileCommand};
use crate::errors::Result;
use crate::profile::DEFAULT_NAME;

/// Settings taken from the global options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliOptions {
    pub name: String,
    pub output: OutputFormat,
    pub logs_dir: Option<PathBuf>,
}

impl Default for CliOptions {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            output: OutputFormat::default(),
            logs_dir: None,
        }
    }
}

impl CliOptions {
    fn apply(&mut self, arg: Arg) {
        match arg {
            Arg::Name(name) => self.name = name,
            Arg::Output(format) => self.output = format,
            Arg::Logs(dir) => self.logs_dir = Some(dir),
            Arg::Flag(_) | Arg::AddSkill(_) | Arg::AddProject(_) => {}
        }
    }
}

/// One parsed command line.
#[derive(Debug, Clone, Default)]
pub struct Invocation {
    pub options: CliOptions,
    /// Global `--help`/`--version`, which preempt everything else.
    pub flag: Option<Flag>,
    /// Raw subcommand token, still unresolved.
    pub command: Option<String>,
    pub command_args: Vec<Arg>,
    pub line: String,
}

impl Invocation {
    pub fn from_env() -> Result<Self> {
        Self::from_args(std::env::args().skip(1))
    }

    pub fn from_args<I, S>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let raw: Vec<String> = args.into_iter().map(Into::into).collect();
        let mut invocation = Self {
            line: raw.join(" "),
            ..Self::default()
        };
        let mut ts = TokenStream::new(&raw);

        for arg in ArgParser::global().parse_options(&mut ts)? {
            match arg {
                Arg::Flag(flag) => {
                    invocation.flag = Some(flag);
                    return Ok(invocation);
                }
                other => invocation.options.apply(other),
            }
        }

        if ts.eof() {
            return Ok(invocation);
        }

        let command = ts.next()?;
        let rest = ts.rest();
        // Unknown commands keep their tokens unparsed; resolution reports them.
        if let Ok(known) = ProfileCommand::try_from(&command) {
            invocation.command_args = ArgParser::for_command(known).parse(&rest)?;
        }
        invocation.command = Some(command);
        Ok(invocation)
    }
}
