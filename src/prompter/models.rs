use crate::errors::Result;

pub enum FlowCtrl {
    Continue,
    Finish,
}

pub trait Flow {
    fn render(&mut self) -> Result<()>;
    fn handle_input(&mut self, input: &str) -> Result<FlowCtrl>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemoState {
    Confirm,  // ask whether to run the interactive part
    AskName,  // prompt for a name, blank means the default
    AskSkill, // prompt for skills until the sentinel
    Done,     // final record printed
}
