//! The bounded review–refine loop.
//!
//! ```text
//!              refined plan
//!        ┌─────────────────────────┐
//!        ▼                         │
//!  ┌───────────┐  issues left  ┌──────────┐
//!  │ Reviewing │ ────────────▶ │ Refining │
//!  └───────────┘               └──────────┘
//!     │     │
//!     │     └── issues left, attempts exhausted ──▶ Rejected
//!     └──────── no issues ────────────────────────▶ Approved
//! ```

use log::debug;

use super::{refine, review};
use crate::models::{Issue, Plan, ReviewVerdict};

/// Number of refinements attempted before a plan is rejected.
pub const MAX_REFINEMENTS: usize = 2;

/// States of the review–refine state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Reviewing,
    Refining,
    Approved,
    Rejected,
}

/// Terminal result of a review–refine run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoopOutcome {
    /// The plan passed review
    Approved {
        plan: Plan,
        verdict: ReviewVerdict,
        /// Number of review evaluations performed
        passes: usize,
    },
    /// Refinement attempts ran out with issues remaining
    Rejected {
        plan: Plan,
        verdict: ReviewVerdict,
        passes: usize,
    },
}

impl LoopOutcome {
    pub fn is_approved(&self) -> bool {
        matches!(self, LoopOutcome::Approved { .. })
    }

    /// The last plan snapshot the loop produced.
    pub fn plan(&self) -> &Plan {
        match self {
            LoopOutcome::Approved { plan, .. } | LoopOutcome::Rejected { plan, .. } => plan,
        }
    }

    /// The verdict from the final review pass.
    pub fn verdict(&self) -> &ReviewVerdict {
        match self {
            LoopOutcome::Approved { verdict, .. } | LoopOutcome::Rejected { verdict, .. } => {
                verdict
            }
        }
    }

    /// Issues left unresolved; empty when approved.
    pub fn issues(&self) -> &[Issue] {
        &self.verdict().issues
    }

    pub fn passes(&self) -> usize {
        match self {
            LoopOutcome::Approved { passes, .. } | LoopOutcome::Rejected { passes, .. } => *passes,
        }
    }

    /// The approved plan, or `None` when the plan was rejected.
    pub fn into_approved(self) -> Option<Plan> {
        match self {
            LoopOutcome::Approved { plan, .. } => Some(plan),
            LoopOutcome::Rejected { .. } => None,
        }
    }
}

/// Orchestrates the reviewer and refiner for a bounded number of attempts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReviewLoop {
    max_refinements: usize,
}

impl ReviewLoop {
    pub fn new(max_refinements: usize) -> Self {
        Self { max_refinements }
    }

    /// Run the loop with the standard reviewer and refiner.
    pub fn run(&self, plan: Plan) -> LoopOutcome {
        self.run_with(plan, review, refine)
    }

    /// Run the loop with caller-supplied review and refine steps.
    pub fn run_with<R, F>(&self, plan: Plan, mut review: R, mut refine: F) -> LoopOutcome
    where
        R: FnMut(&Plan) -> ReviewVerdict,
        F: FnMut(&Plan, &ReviewVerdict) -> Plan,
    {
        let mut plan = plan;
        let mut attempt = 0;
        let mut passes = 0;

        loop {
            debug!("Review loop: {:?} (attempt {attempt})", LoopState::Reviewing);
            let verdict = review(&plan);
            passes += 1;

            let issues = verdict.issues.len();
            if verdict.approved {
                debug!("Review pass {passes}: next state {:?}", LoopState::Approved);
                return LoopOutcome::Approved {
                    plan,
                    verdict,
                    passes,
                };
            }
            if attempt >= self.max_refinements {
                debug!(
                    "Review pass {passes}: {issues} issue(s), next state {:?}",
                    LoopState::Rejected
                );
                return LoopOutcome::Rejected {
                    plan,
                    verdict,
                    passes,
                };
            }

            debug!(
                "Review pass {passes}: {issues} issue(s), next state {:?}",
                LoopState::Refining
            );
            plan = refine(&plan, &verdict);
            attempt += 1;
        }
    }
}

impl Default for ReviewLoop {
    fn default() -> Self {
        Self::new(MAX_REFINEMENTS)
    }
}
