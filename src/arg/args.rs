use std::fmt;
use std::marker::PhantomData;
use std::path::PathBuf;

use crate::core::types::{Flag, OutputFormat};
use crate::errors::{Error, Result, require_value};
use crate::profile::DEFAULT_NAME;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Arg {
    Flag(Flag),
    Name(String),
    Output(OutputFormat),
    Logs(PathBuf),
    AddSkill(String),
    AddProject(String),
}

impl fmt::Display for Arg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arg::Flag(Flag::Help) => write!(f, "--help"),
            Arg::Flag(Flag::Version) => write!(f, "--version"),
            Arg::Name(x) => write!(f, "--name \"{x}\""),
            Arg::Output(x) => write!(f, "--output {x}"),
            Arg::Logs(x) => write!(f, "--logs {}", x.display()),
            Arg::AddSkill(x) => write!(f, "--add-skill \"{x}\""),
            Arg::AddProject(x) => write!(f, "--add-project \"{x}\""),
        }
    }
}

#[derive(Debug, Clone)]
pub struct TokenStream {
    toks: Vec<String>,
    i: usize,
}
impl TokenStream {
    pub fn new(raw: &[String]) -> Self {
        Self {
            toks: raw.to_vec(),
            i: 0,
        }
    }
    pub fn eof(&self) -> bool {
        self.i >= self.toks.len()
    }
    pub fn peek(&self) -> Result<&str> {
        self.toks
            .get(self.i)
            .map(|s| s.as_str())
            .ok_or_else(|| Error::Parse("EOF".into()))
    }
    pub fn next(&mut self) -> Result<String> {
        let s = self.peek()?.to_string();
        self.i += 1;
        Ok(s)
    }
    /// Drains every token not consumed yet.
    pub fn rest(&mut self) -> Vec<String> {
        let out = self.toks[self.i.min(self.toks.len())..].to_vec();
        self.i = self.toks.len();
        out
    }
}

/// An option that takes no value, e.g. `--version`.
pub trait SwitchArg {
    const TOKENS: &'static [&'static str];
    const HELP: &'static str;
    fn build() -> Arg;
}

/// An option followed by one value, as `--flag value` or `--flag=value`.
pub trait ValueArg {
    const FLAG: &'static str;
    const METAVAR: &'static str;
    fn help() -> String;
    fn build(value: String) -> Result<Arg>;
}

pub trait ArgFactory {
    fn can_start(&self, tok: &str) -> bool;
    fn parse(&self, ts: &mut TokenStream) -> Result<Arg>;
    /// Bracketed fragment for the usage line, e.g. `[--name NAME]`.
    fn usage(&self) -> String;
    /// Left column of the options table.
    fn invocation(&self) -> String;
    fn help(&self) -> String;
}

pub struct SwitchFactory<A: SwitchArg>(PhantomData<A>);
impl<A: SwitchArg> SwitchFactory<A> {
    pub fn new() -> Self {
        Self(PhantomData)
    }
}
impl<A: SwitchArg> ArgFactory for SwitchFactory<A> {
    fn can_start(&self, tok: &str) -> bool {
        A::TOKENS.contains(&tok)
    }
    fn parse(&self, ts: &mut TokenStream) -> Result<Arg> {
        ts.next()?;
        Ok(A::build())
    }
    fn usage(&self) -> String {
        format!("[{}]", A::TOKENS[0])
    }
    fn invocation(&self) -> String {
        A::TOKENS.join(", ")
    }
    fn help(&self) -> String {
        A::HELP.to_string()
    }
}

pub struct ValueFactory<A: ValueArg>(PhantomData<A>);
impl<A: ValueArg> ValueFactory<A> {
    pub fn new() -> Self {
        Self(PhantomData)
    }
}
impl<A: ValueArg> ArgFactory for ValueFactory<A> {
    fn can_start(&self, tok: &str) -> bool {
        tok == A::FLAG
            || tok
                .strip_prefix(A::FLAG)
                .is_some_and(|rest| rest.starts_with('='))
    }
    fn parse(&self, ts: &mut TokenStream) -> Result<Arg> {
        let tok = ts.next()?;
        let value = match tok.strip_prefix(A::FLAG).and_then(|r| r.strip_prefix('=')) {
            Some(inline) => inline.to_string(),
            None => require_value(
                ts.next().ok(),
                format!("argument {}: expected one argument", A::FLAG),
            )?,
        };
        A::build(value)
    }
    fn usage(&self) -> String {
        format!("[{} {}]", A::FLAG, A::METAVAR)
    }
    fn invocation(&self) -> String {
        format!("{} {}", A::FLAG, A::METAVAR)
    }
    fn help(&self) -> String {
        A::help()
    }
}

pub struct HelpArg;
impl SwitchArg for HelpArg {
    const TOKENS: &'static [&'static str] = &["-h", "--help"];
    const HELP: &'static str = "show this help message and exit";
    fn build() -> Arg {
        Arg::Flag(Flag::Help)
    }
}

pub struct VersionArg;
impl SwitchArg for VersionArg {
    const TOKENS: &'static [&'static str] = &["--version"];
    const HELP: &'static str = "show program's version number and exit";
    fn build() -> Arg {
        Arg::Flag(Flag::Version)
    }
}

pub struct NameArg;
impl ValueArg for NameArg {
    const FLAG: &'static str = "--name";
    const METAVAR: &'static str = "NAME";
    fn help() -> String {
        format!("Developer name (default: {DEFAULT_NAME})")
    }
    fn build(value: String) -> Result<Arg> {
        Ok(Arg::Name(value))
    }
}

pub struct OutputArg;
impl ValueArg for OutputArg {
    const FLAG: &'static str = "--output";
    const METAVAR: &'static str = "{text,json}";
    fn help() -> String {
        format!("Output format (default: {})", OutputFormat::default())
    }
    fn build(value: String) -> Result<Arg> {
        Ok(Arg::Output(OutputFormat::try_from(&value)?))
    }
}

pub struct LogsArg;
impl ValueArg for LogsArg {
    const FLAG: &'static str = "--logs";
    const METAVAR: &'static str = "DIR";
    fn help() -> String {
        "Diagnostics only: write a session log into DIR (off by default)".to_string()
    }
    fn build(value: String) -> Result<Arg> {
        Ok(Arg::Logs(PathBuf::from(value)))
    }
}

pub struct AddSkillArg;
impl ValueArg for AddSkillArg {
    const FLAG: &'static str = "--add-skill";
    const METAVAR: &'static str = "ADD_SKILL";
    fn help() -> String {
        "Add an extra skill (repeatable)".to_string()
    }
    fn build(value: String) -> Result<Arg> {
        Ok(Arg::AddSkill(value))
    }
}

pub struct AddProjectArg;
impl ValueArg for AddProjectArg {
    const FLAG: &'static str = "--add-project";
    const METAVAR: &'static str = "ADD_PROJECT";
    fn help() -> String {
        "Add an extra project (repeatable)".to_string()
    }
    fn build(value: String) -> Result<Arg> {
        Ok(Arg::AddProject(value))
    }
}
