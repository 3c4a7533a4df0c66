use crate::arg::args::Arg;
use crate::command::commands::{
    CommandDyn, InfoCommand, JsonCommand, ProjectsCommand, SkillsCommand,
};
use crate::core::types::ProfileCommand;
use crate::errors::Result;

#[derive(Debug, Default)]
pub struct CommandParser;

impl CommandParser {
    pub fn new() -> Self {
        Self
    }

    /// Resolves a raw subcommand token; unknown tokens yield `Error::UnknownCommand`.
    pub fn parse<'a>(&self, command: &str, args: &'a [Arg]) -> Result<CommandDyn<'a>> {
        let resolved: CommandDyn<'a> = match ProfileCommand::try_from(command)? {
            ProfileCommand::Info => Box::new(InfoCommand::new(args)),
            ProfileCommand::Skills => Box::new(SkillsCommand::new(args)),
            ProfileCommand::Projects => Box::new(ProjectsCommand::new(args)),
            ProfileCommand::Json => Box::new(JsonCommand::new(args)),
        };
        Ok(resolved)
    }
}
