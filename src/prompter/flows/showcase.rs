use std::io::Write;

use crate::errors::Result;
use crate::profile::Profile;
use crate::ui::ansi::{FG_BOLD_GREEN, STYLE_RESET};
use crate::ui::chrome::UiChrome;
use crate::ui::render::to_pretty_json;

pub const DEMO_SKILL: &str = "Machine Learning";
pub const DEMO_PROJECT: &str = "ML model for data analysis";

/// The scripted, non-interactive part of the demo.
#[derive(Debug, Default, Clone)]
pub struct Showcase {
    chrome: UiChrome,
}

impl Showcase {
    pub fn new() -> Self {
        Self {
            chrome: UiChrome::new(),
        }
    }

    /// Walks a default profile through every operation and returns it.
    pub fn run<W: Write>(&self, out: &mut W) -> Result<Profile> {
        writeln!(out, "{}", self.chrome.banner())?;
        writeln!(out, "🚀 kgrv package demo")?;
        writeln!(out, "{}", self.chrome.rule('=', 50))?;

        let mut profile = Profile::default();

        writeln!(out, "\n📋 Basic information:")?;
        writeln!(out, "{}", profile.render())?;

        writeln!(out, "\n🔍 Summary: {profile}")?;
        writeln!(out, "🐛 Debug: {profile:?}")?;

        writeln!(out, "\n➕ Adding a new skill...")?;
        profile.add_skill(DEMO_SKILL);
        writeln!(out, "Updated skills: {}", profile.skills().join(", "))?;

        writeln!(out, "\n➕ Adding a new project...")?;
        profile.add_project(DEMO_PROJECT);

        writeln!(out, "\n📊 Full information (JSON):")?;
        writeln!(out, "{}", to_pretty_json(&profile.info())?)?;

        writeln!(out, "\n{FG_BOLD_GREEN}✅ Demo complete!{STYLE_RESET}")?;
        out.flush()?;
        Ok(profile)
    }
}
