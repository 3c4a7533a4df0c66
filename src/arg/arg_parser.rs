use super::args::*;
use crate::core::types::ProfileCommand;
use crate::errors::{Error, Result};

pub struct ArgParser {
    factories: Vec<Box<dyn ArgFactory>>,
}

impl ArgParser {
    /// Options accepted before the subcommand.
    pub fn global() -> Self {
        Self {
            factories: vec![
                Box::new(SwitchFactory::<HelpArg>::new()),
                Box::new(SwitchFactory::<VersionArg>::new()),
                Box::new(ValueFactory::<NameArg>::new()),
                Box::new(ValueFactory::<OutputArg>::new()),
                Box::new(ValueFactory::<LogsArg>::new()),
            ],
        }
    }

    /// Options accepted after `command`.
    pub fn for_command(command: ProfileCommand) -> Self {
        let mut factories: Vec<Box<dyn ArgFactory>> =
            vec![Box::new(SwitchFactory::<HelpArg>::new())];
        if command == ProfileCommand::Info {
            factories.push(Box::new(ValueFactory::<AddSkillArg>::new()));
            factories.push(Box::new(ValueFactory::<AddProjectArg>::new()));
        }
        Self { factories }
    }

    pub fn factories(&self) -> &[Box<dyn ArgFactory>] {
        &self.factories
    }

    /// Consumes options until the first positional token. Returns right after
    /// a help/version switch; whatever follows it is left unread.
    pub fn parse_options(&self, ts: &mut TokenStream) -> Result<Vec<Arg>> {
        let mut out = Vec::new();

        while !ts.eof() {
            let tok = ts.peek()?.to_string();
            let factory = self.factories.iter().find(|f| f.can_start(&tok));

            match factory {
                Some(f) => {
                    let arg = f.parse(ts)?;
                    let stop = matches!(arg, Arg::Flag(_));
                    out.push(arg);
                    if stop {
                        break;
                    }
                }
                None if tok.starts_with('-') && tok != "-" => {
                    return Err(Error::Parse(format!("unrecognized arguments: {tok}")));
                }
                None => break,
            }
        }
        Ok(out)
    }

    /// Every token must be an option.
    pub fn parse(&self, raw: &[String]) -> Result<Vec<Arg>> {
        let mut ts = TokenStream::new(raw);
        let out = self.parse_options(&mut ts)?;
        if !ts.eof() && !matches!(out.last(), Some(Arg::Flag(_))) {
            return Err(Error::Parse(format!(
                "unrecognized arguments: {}",
                ts.rest().join(" ")
            )));
        }
        Ok(out)
    }
}
