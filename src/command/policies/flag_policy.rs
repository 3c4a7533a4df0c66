use crate::arg::args::Arg;
use crate::core::types::Flag;

#[derive(Debug)]
pub enum FlagDecision {
    /// Stop execution and just print usage()
    ShortCircuitUsage,
    /// Continue command execution
    Continue,
}

pub trait FlagRule {
    fn check(&self, args: &[Arg]) -> FlagDecision;
}

/// `-h`/`--help` anywhere in the command's arguments.
pub struct HelpFlag;
impl FlagRule for HelpFlag {
    fn check(&self, args: &[Arg]) -> FlagDecision {
        if args.iter().any(|a| matches!(a, Arg::Flag(Flag::Help))) {
            FlagDecision::ShortCircuitUsage
        } else {
            FlagDecision::Continue
        }
    }
}

pub struct FlagPolicy {
    rules: Vec<Box<dyn FlagRule>>,
}
impl FlagPolicy {
    pub fn new(rules: Vec<Box<dyn FlagRule>>) -> Self {
        Self { rules }
    }
    pub fn help_only() -> Self {
        Self::new(vec![Box::new(HelpFlag)])
    }

    pub fn evaluate(&self, args: &[Arg]) -> FlagDecision {
        // First matching short-circuit wins; otherwise Continue.
        for r in &self.rules {
            match r.check(args) {
                FlagDecision::Continue => continue,
                other => return other,
            }
        }
        FlagDecision::Continue
    }
}
