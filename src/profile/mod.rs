
use std::fmt;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::extensions::chrono::RecordStampExt;
use crate::extensions::string::Bulleted;

pub const DEFAULT_NAME: &str = "kogriv";
pub const GITHUB_BASE: &str = "https://github.com/";

pub const DEFAULT_SKILLS: [&str; 6] = ["Python", "JavaScript", "Git", "Docker", "SQL", "MQL5"];

pub const DEFAULT_PROJECTS: [&str; 3] = [
    "kgrv - Python package for experiments",
    "Various automation scripts",
    "Trading robots in MQL5",
];

/// Full record of a profile. Field order is the serialized key order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileInfo {
    pub name: String,
    pub github: String,
    pub skills: Vec<String>,
    pub projects: Vec<String>,
    pub created_at: String,
}

/// A developer's self-description.
///
/// `name` and the derived `github` link are fixed at construction. Skills and
/// projects only grow, and never hold the same entry twice.
#[derive(Clone)]
pub struct Profile {
    name: String,
    github: String,
    skills: Vec<String>,
    projects: Vec<String>,
    created_at: DateTime<Local>,
}

impl Profile {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let github = format!("{GITHUB_BASE}{name}");
        Self {
            name,
            github,
            skills: DEFAULT_SKILLS.iter().map(|s| s.to_string()).collect(),
            projects: DEFAULT_PROJECTS.iter().map(|s| s.to_string()).collect(),
            created_at: Local::now(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn github(&self) -> &str {
        &self.github
    }

    pub fn info(&self) -> ProfileInfo {
        ProfileInfo {
            name: self.name.clone(),
            github: self.github.clone(),
            skills: self.skills(),
            projects: self.projects(),
            created_at: self.created_at.to_record_stamp(),
        }
    }

    /// Owned copy; changing it leaves the profile untouched.
    pub fn skills(&self) -> Vec<String> {
        self.skills.clone()
    }

    /// Owned copy; changing it leaves the profile untouched.
    pub fn projects(&self) -> Vec<String> {
        self.projects.clone()
    }

    pub fn skill_count(&self) -> usize {
        self.skills.len()
    }

    pub fn project_count(&self) -> usize {
        self.projects.len()
    }

    /// Returns `false` when an identical skill was already present.
    pub fn add_skill(&mut self, skill: impl Into<String>) -> bool {
        push_unique(&mut self.skills, skill.into())
    }

    /// Returns `false` when an identical project was already present.
    pub fn add_project(&mut self, project: impl Into<String>) -> bool {
        push_unique(&mut self.projects, project.into())
    }

    pub fn render(&self) -> String {
        format!(
            "👨‍💻 Developer: {}\n🔗 GitHub: {}\n📅 Created: {}\n\n🛠️ Skills:\n{}\n\n📂 Projects:\n{}",
            self.name,
            self.github,
            self.created_at.to_record_stamp(),
            self.skills.bulleted(),
            self.projects.bulleted(),
        )
    }
}

impl Default for Profile {
    fn default() -> Self {
        Self::new(DEFAULT_NAME)
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "About({}): {} skills, {} projects",
            self.name,
            self.skills.len(),
            self.projects.len()
        )
    }
}

impl fmt::Debug for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "About(name='{}', skills={}, projects={})",
            self.name,
            self.skills.len(),
            self.projects.len()
        )
    }
}

// Exact equality only: no trimming, no case folding.
fn push_unique(list: &mut Vec<String>, value: String) -> bool {
    if list.contains(&value) {
        return false;
    }
    list.push(value);
    true
}
