use crate::checks::CheckFailure;
use std::fmt;

/// The result of one pass over all checks.
#[derive(Debug)]
pub enum RunOutcome {
    AllPassed,
    /// The run stopped at this failure. No later URL or check was evaluated.
    Halted(CheckFailure),
}

impl RunOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, RunOutcome::AllPassed)
    }
}

impl fmt::Display for RunOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunOutcome::AllPassed => write!(f, "All checks passed"),
            RunOutcome::Halted(failure) => write!(f, "Halted: {}", failure),
        }
    }
}
