use crate::arg::args::Arg;
use crate::command::manual::HelpCatalog;
use crate::command::policies::flag_policy::{FlagDecision, FlagPolicy};
use crate::core::context::AppContext;
use crate::core::types::{OutputFormat, ProfileCommand};
use crate::errors::Result;
use crate::logging::LogTarget;
use crate::ui::render::ProfileRenderer;

pub struct CommandCore<'a> {
    pub args: &'a [Arg],
    pub flag_policy: FlagPolicy,
}
impl<'a> CommandCore<'a> {
    pub fn new(args: &'a [Arg], flag_policy: FlagPolicy) -> Self {
        Self { args, flag_policy }
    }
}

mod sealed {
    use super::CommandCore;

    pub trait Sealed<'a> {
        fn core(&self) -> &CommandCore<'a>;
    }
}

/// A resolved subcommand. `execute` yields the text to print on stdout.
pub trait Command<'a>: sealed::Sealed<'a> {
    fn kind(&self) -> ProfileCommand;
    fn perform(&self, ctx: &mut AppContext) -> Result<String>;

    fn usage(&self) -> String {
        HelpCatalog::new().command_usage(self.kind())
    }

    fn execute(&self, ctx: &mut AppContext) -> Result<String> {
        let core = self.core(); // available because Sealed is a supertrait (but not public)
        match core.flag_policy.evaluate(core.args) {
            FlagDecision::ShortCircuitUsage => Ok(self.usage()),
            FlagDecision::Continue => self.perform(ctx),
        }
    }
}

pub type CommandDyn<'a> = Box<dyn Command<'a> + 'a>;

macro_rules! impl_sealed {
    ($($ty:ident),+) => {
        $(impl<'a> sealed::Sealed<'a> for $ty<'a> {
            fn core(&self) -> &CommandCore<'a> {
                &self.core
            }
        })+
    };
}

/// `info`: apply `--add-skill`/`--add-project` in order, then render the record.
pub struct InfoCommand<'a> {
    core: CommandCore<'a>,
}

impl<'a> InfoCommand<'a> {
    pub fn new(args: &'a [Arg]) -> Self {
        Self {
            core: CommandCore::new(args, FlagPolicy::help_only()),
        }
    }
}

impl<'a> Command<'a> for InfoCommand<'a> {
    fn kind(&self) -> ProfileCommand {
        ProfileCommand::Info
    }

    fn perform(&self, ctx: &mut AppContext) -> Result<String> {
        let mut profile = ctx.profile();
        for arg in self.core.args {
            let (kind, value, added) = match arg {
                Arg::AddSkill(skill) => ("skill", skill, profile.add_skill(skill.as_str())),
                Arg::AddProject(project) => {
                    ("project", project, profile.add_project(project.as_str()))
                }
                _ => continue,
            };
            if added {
                ctx.logger
                    .info(format!("Added {kind} '{value}'."), LogTarget::FileOnly);
            } else {
                ctx.logger.warn(
                    format!("Skipped duplicate {kind} '{value}'."),
                    LogTarget::FileOnly,
                );
            }
        }
        ProfileRenderer::new(ctx.options.output).record(&profile)
    }
}

/// `skills`: the default skill list of the named profile.
pub struct SkillsCommand<'a> {
    core: CommandCore<'a>,
}

impl<'a> SkillsCommand<'a> {
    pub fn new(args: &'a [Arg]) -> Self {
        Self {
            core: CommandCore::new(args, FlagPolicy::help_only()),
        }
    }
}

impl<'a> Command<'a> for SkillsCommand<'a> {
    fn kind(&self) -> ProfileCommand {
        ProfileCommand::Skills
    }

    fn perform(&self, ctx: &mut AppContext) -> Result<String> {
        ProfileRenderer::new(ctx.options.output).skills(&ctx.profile())
    }
}

/// `projects`: the default project list of the named profile.
pub struct ProjectsCommand<'a> {
    core: CommandCore<'a>,
}

impl<'a> ProjectsCommand<'a> {
    pub fn new(args: &'a [Arg]) -> Self {
        Self {
            core: CommandCore::new(args, FlagPolicy::help_only()),
        }
    }
}

impl<'a> Command<'a> for ProjectsCommand<'a> {
    fn kind(&self) -> ProfileCommand {
        ProfileCommand::Projects
    }

    fn perform(&self, ctx: &mut AppContext) -> Result<String> {
        ProfileRenderer::new(ctx.options.output).projects(&ctx.profile())
    }
}

/// `json`: the full record as JSON, whatever `--output` says.
pub struct JsonCommand<'a> {
    core: CommandCore<'a>,
}

impl<'a> JsonCommand<'a> {
    pub fn new(args: &'a [Arg]) -> Self {
        Self {
            core: CommandCore::new(args, FlagPolicy::help_only()),
        }
    }
}

impl<'a> Command<'a> for JsonCommand<'a> {
    fn kind(&self) -> ProfileCommand {
        ProfileCommand::Json
    }

    fn perform(&self, ctx: &mut AppContext) -> Result<String> {
        ProfileRenderer::new(OutputFormat::Json).record(&ctx.profile())
    }
}

impl_sealed!(InfoCommand, SkillsCommand, ProjectsCommand, JsonCommand);
