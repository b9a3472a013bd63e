//! Display formatting for review-loop and scaffold outcomes.

use std::fmt;

use super::collections::Issues;
use crate::{
    error::ScaffoldFailure,
    planner::LoopOutcome,
    scaffold::{ScaffoldAction, ScaffoldMode, ScaffoldReport},
};

impl fmt::Display for LoopOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let refinements = self.passes().saturating_sub(1);
        match self {
            LoopOutcome::Approved { .. } => {
                writeln!(f, "Plan approved after {} review pass(es).", self.passes())
            }
            LoopOutcome::Rejected { verdict, .. } => {
                writeln!(f, "## Plan review failed after {refinements} refinement(s)")?;
                writeln!(f)?;
                write!(f, "{}", Issues(&verdict.issues))
            }
        }
    }
}

impl fmt::Display for ScaffoldAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            ScaffoldAction::WouldCreate(_) => "would create",
            ScaffoldAction::CreatedDir(_) => "create dir",
            ScaffoldAction::CreatedFile(_) => "create file",
            ScaffoldAction::Skipped(_) => "skip",
        };
        write!(f, "[{tag}] {}", self.artifact())?;
        if matches!(self, ScaffoldAction::Skipped(_)) {
            write!(f, " (already exists)")?;
        }
        Ok(())
    }
}

impl fmt::Display for ScaffoldReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.mode {
            ScaffoldMode::Preview => writeln!(f, "## Scaffold preview (dry run)")?,
            ScaffoldMode::Execute => writeln!(f, "## Scaffold executed")?,
        }
        writeln!(f)?;

        if self.actions.is_empty() {
            writeln!(f, "Nothing to scaffold.")?;
        }
        for action in &self.actions {
            writeln!(f, "- {action}")?;
        }
        Ok(())
    }
}

/// Wrapper listing what a failed scaffold run rolled back.
pub struct FailureDetails<'a>(pub &'a ScaffoldFailure);

impl fmt::Display for FailureDetails<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let failure = self.0;
        writeln!(f, "## Scaffold rolled back")?;
        writeln!(f)?;
        writeln!(f, "Failed at `{}`: {}", failure.path, failure.source)?;

        if !failure.rolled_back.is_empty() {
            writeln!(f)?;
            for path in &failure.rolled_back {
                writeln!(f, "- [rollback] deleted {}", path.display())?;
            }
        }

        if !failure.rollback_failures.is_empty() {
            writeln!(f)?;
            for rollback_failure in &failure.rollback_failures {
                writeln!(f, "- [rollback failed] {rollback_failure}")?;
            }
        }
        Ok(())
    }
}
