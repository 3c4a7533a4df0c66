use std::io::Write;

use crate::errors::Result;
use crate::profile::{DEFAULT_NAME, Profile};
use crate::prompter::models::{DemoState, Flow, FlowCtrl};
use crate::ui::chrome::UiChrome;

const YES: [&str; 4] = ["y", "yes", "д", "да"];
const NO: [&str; 4] = ["n", "no", "н", "нет"];

/// `stop` in any case, or nothing at all.
pub fn is_sentinel(input: &str) -> bool {
    input.is_empty() || input.eq_ignore_ascii_case("stop")
}

/// Interactive part of the demo: confirm, pick a name, collect skills.
pub struct DemoFlow<W: Write> {
    out: W,
    chrome: UiChrome,
    state: DemoState,
    profile: Option<Profile>,
}

impl<W: Write> DemoFlow<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            chrome: UiChrome::new(),
            state: DemoState::Confirm,
            profile: None,
        }
    }

    pub fn state(&self) -> DemoState {
        self.state
    }

    pub fn profile(&self) -> Option<&Profile> {
        self.profile.as_ref()
    }

    fn prompt(&mut self, text: &str) -> Result<()> {
        write!(self.out, "{text}")?;
        self.out.flush()?;
        Ok(())
    }

    fn handle_confirm(&mut self, input: &str) -> Result<FlowCtrl> {
        let choice = input.to_lowercase();
        if YES.contains(&choice.as_str()) {
            writeln!(self.out, "\n🎮 Interactive demo")?;
            writeln!(self.out, "{}", self.chrome.rule('-', 30))?;
            self.state = DemoState::AskName;
            Ok(FlowCtrl::Continue)
        } else if NO.contains(&choice.as_str()) {
            writeln!(self.out, "👋 Goodbye!")?;
            Ok(FlowCtrl::Finish)
        } else {
            writeln!(self.out, "Please enter 'y' or 'n'")?;
            Ok(FlowCtrl::Continue)
        }
    }

    fn handle_name(&mut self, input: &str) -> Result<FlowCtrl> {
        let name = if input.is_empty() { DEFAULT_NAME } else { input };
        writeln!(self.out, "\n👋 Hello, {name}!")?;
        writeln!(self.out, "\nLet's add your skills (enter 'stop' to finish):")?;
        self.profile = Some(Profile::new(name));
        self.state = DemoState::AskSkill;
        Ok(FlowCtrl::Continue)
    }

    fn handle_skill(&mut self, input: &str) -> Result<FlowCtrl> {
        let Some(profile) = self.profile.as_mut() else {
            self.state = DemoState::AskName;
            return Ok(FlowCtrl::Continue);
        };
        if is_sentinel(input) {
            writeln!(self.out, "\n🎯 Final information:")?;
            writeln!(self.out, "{}", profile.render())?;
            self.state = DemoState::Done;
            return Ok(FlowCtrl::Finish);
        }
        profile.add_skill(input);
        writeln!(self.out, "✅ Added skill: {input}")?;
        Ok(FlowCtrl::Continue)
    }
}

impl<W: Write> Flow for DemoFlow<W> {
    fn render(&mut self) -> Result<()> {
        match self.state {
            DemoState::Confirm => {
                self.prompt("\nWould you like to run the interactive demo? (y/n): ")
            }
            DemoState::AskName => {
                self.prompt(&format!("Enter your name (or press Enter for '{DEFAULT_NAME}'): "))
            }
            DemoState::AskSkill => self.prompt("Enter a skill: "),
            DemoState::Done => Ok(()),
        }
    }

    fn handle_input(&mut self, input: &str) -> Result<FlowCtrl> {
        match self.state {
            DemoState::Confirm => self.handle_confirm(input),
            DemoState::AskName => self.handle_name(input),
            DemoState::AskSkill => self.handle_skill(input),
            DemoState::Done => Ok(FlowCtrl::Finish),
        }
    }
}
