use once_cell::sync::Lazy;
use strum::IntoEnumIterator;

use crate::arg::arg_parser::ArgParser;
use crate::core::types::ProfileCommand;
use crate::extensions::enums::valid_choices;

pub const PROG: &str = "kgrv";

/// Column where help text starts in option tables.
const HELP_COLUMN: usize = 24;

static GENERAL_HELP: Lazy<String> = Lazy::new(|| HelpCatalog::new().build_general());

#[derive(Debug, Clone)]
struct HelpSection {
    title: String,
    rows: Vec<(String, String)>,
}

/// argparse-style help screen.
#[derive(Debug, Clone)]
pub struct HelpPage {
    usage: String,
    description: String,
    sections: Vec<HelpSection>,
    epilog: Vec<String>,
}

impl HelpPage {
    pub fn render(&self) -> String {
        let mut out = format!("{}\n\n{}\n", self.usage, self.description);
        for section in &self.sections {
            out.push('\n');
            out.push_str(&section.title);
            out.push_str(":\n");
            for (left, help) in &section.rows {
                out.push_str(&format_row(left, help));
                out.push('\n');
            }
        }
        if !self.epilog.is_empty() {
            out.push('\n');
            for line in &self.epilog {
                out.push_str(line);
                out.push('\n');
            }
        }
        out.trim_end().to_string()
    }
}

fn format_row(left: &str, help: &str) -> String {
    let lead = format!("  {left}");
    if help.is_empty() {
        return lead;
    }
    let width = lead.chars().count();
    if width + 2 <= HELP_COLUMN {
        format!("{lead}{}{help}", " ".repeat(HELP_COLUMN - width))
    } else {
        format!("{lead}\n{}{help}", " ".repeat(HELP_COLUMN))
    }
}

fn options_section(parser: &ArgParser) -> HelpSection {
    HelpSection {
        title: "options".to_string(),
        rows: parser
            .factories()
            .iter()
            .map(|f| (f.invocation(), f.help()))
            .collect(),
    }
}

fn usage_fragments(parser: &ArgParser) -> String {
    parser
        .factories()
        .iter()
        .map(|f| f.usage())
        .collect::<Vec<_>>()
        .join(" ")
}

#[derive(Debug, Default, Clone)]
pub struct HelpCatalog;

impl HelpCatalog {
    pub fn new() -> Self {
        Self
    }

    pub fn usage_line(&self) -> String {
        format!(
            "usage: {PROG} {} {} ...",
            usage_fragments(&ArgParser::global()),
            valid_choices::<ProfileCommand>()
        )
    }

    pub fn general(&self) -> &'static str {
        GENERAL_HELP.as_str()
    }

    pub fn command_usage(&self, command: ProfileCommand) -> String {
        let parser = ArgParser::for_command(command);
        HelpPage {
            usage: format!("usage: {PROG} {command} {}", usage_fragments(&parser)),
            description: command.summary().to_string(),
            sections: vec![options_section(&parser)],
            epilog: Vec::new(),
        }
        .render()
    }

    fn build_general(&self) -> String {
        let mut commands = vec![(
            valid_choices::<ProfileCommand>(),
            "Available commands".to_string(),
        )];
        commands.extend(
            ProfileCommand::iter().map(|c| (format!("  {c}"), c.summary().to_string())),
        );

        HelpPage {
            usage: self.usage_line(),
            description: "Command-line interface for the kgrv profile".to_string(),
            sections: vec![
                HelpSection {
                    title: "positional arguments".to_string(),
                    rows: commands,
                },
                options_section(&ArgParser::global()),
            ],
            epilog: vec![
                "examples:".to_string(),
                format!("  {PROG} info                    # Show developer information"),
                format!("  {PROG} --name \"John\" info      # Show information for John"),
                format!("  {PROG} info --add-skill Rust   # Add a skill before showing"),
                format!("  {PROG} skills                  # Show skills only"),
                format!("  {PROG} projects                # Show projects only"),
                format!("  {PROG} json                    # Print as JSON"),
                format!("  {PROG} --version               # Show the package version"),
            ],
        }
        .render()
    }
}
