use serde::Serialize;

use crate::core::types::OutputFormat;
use crate::errors::Result;
use crate::extensions::string::Bulleted;
use crate::profile::Profile;

#[derive(Serialize)]
struct SkillsView<'a> {
    skills: &'a [String],
}

#[derive(Serialize)]
struct ProjectsView<'a> {
    projects: &'a [String],
}

/// Renders profile views in one output format.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProfileRenderer {
    format: OutputFormat,
}

impl ProfileRenderer {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// The full record.
    pub fn record(&self, profile: &Profile) -> Result<String> {
        match self.format {
            OutputFormat::Text => Ok(profile.render()),
            OutputFormat::Json => to_pretty_json(&profile.info()),
        }
    }

    pub fn skills(&self, profile: &Profile) -> Result<String> {
        let skills = profile.skills();
        match self.format {
            OutputFormat::Text => Ok(format!(
                "🛠️ Skills of {}:\n{}",
                profile.name(),
                skills.bulleted()
            )),
            OutputFormat::Json => to_pretty_json(&SkillsView { skills: &skills }),
        }
    }

    pub fn projects(&self, profile: &Profile) -> Result<String> {
        let projects = profile.projects();
        match self.format {
            OutputFormat::Text => Ok(format!(
                "📂 Projects of {}:\n{}",
                profile.name(),
                projects.bulleted()
            )),
            OutputFormat::Json => to_pretty_json(&ProjectsView {
                projects: &projects,
            }),
        }
    }
}

/// Two-space indented JSON with non-ASCII text left as is.
pub fn to_pretty_json<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}
