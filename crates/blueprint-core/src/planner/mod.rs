//! High-level API for turning feature requests into approved plans.
//!
//! This module provides the [`Blueprint`] interface, which ties together the
//! stages of a run:
//!
//! ```text
//! ┌───────────┐    ┌───────────┐    ┌─────────────────┐    ┌──────────┐
//! │ Generator │───▶│ Validator │───▶│ Review ⇄ Refine │───▶│ Scaffold │
//! └───────────┘    └───────────┘    └─────────────────┘    └──────────┘
//! ```
//!
//! ## Submodules
//!
//! - [`builder`]: Factory for creating [`Blueprint`] instances with configuration
//! - [`reviewer`]: Quality checks producing a [`ReviewVerdict`]
//! - [`refiner`]: Patch-driven construction of improved plans
//! - [`review_loop`]: The bounded review–refine state machine
//!
//! # Usage Examples
//!
//! ```rust,no_run
//! use blueprint_core::{generator::StaticGenerator, BlueprintBuilder, ScaffoldMode};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let blueprint = BlueprintBuilder::new()
//!     .with_scaffold_root(Some("/tmp/project"))
//!     .build()?;
//!
//! let plan = blueprint.draft(&StaticGenerator, "Add login")?;
//! if let Some(plan) = blueprint.review_loop(plan).into_approved() {
//!     let report = blueprint.scaffold(&plan, ScaffoldMode::Preview)?;
//!     println!("{report}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod refiner;
pub mod review_loop;
pub mod reviewer;


pub use builder::BlueprintBuilder;
pub use refiner::{patches_for, refine};
pub use review_loop::{LoopOutcome, LoopState, ReviewLoop, MAX_REFINEMENTS};
pub use reviewer::{is_vague, review, VAGUE_WORDS};

use crate::{
    config::Config,
    error::Result,
    generator::{self, PlanGenerator},
    models::{Plan, ReviewVerdict},
    scaffold::{ScaffoldMode, ScaffoldReport, Scaffolder},
};

/// Main interface for drafting, reviewing and scaffolding plans.
#[derive(Debug, Clone)]
pub struct Blueprint {
    pub(crate) config: Config,
    pub(crate) review_loop: ReviewLoop,
    pub(crate) scaffolder: Scaffolder,
}

impl Blueprint {
    /// The effective configuration after overrides.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Generate and validate a draft plan for `feature`.
    ///
    /// # Errors
    ///
    /// See [`generator::draft_plan`].
    pub fn draft<G: PlanGenerator + ?Sized>(&self, generator: &G, feature: &str) -> Result<Plan> {
        generator::draft_plan(generator, feature)
    }

    /// Review a plan once.
    pub fn review(&self, plan: &Plan) -> ReviewVerdict {
        review(plan)
    }

    /// Build a refined copy of `plan` addressing `verdict`.
    pub fn refine(&self, plan: &Plan, verdict: &ReviewVerdict) -> Plan {
        refine(plan, verdict)
    }

    /// Review and refine until the plan is approved or attempts run out.
    pub fn review_loop(&self, plan: Plan) -> LoopOutcome {
        self.review_loop.run(plan)
    }

    /// Preview or execute the scaffold for an approved plan.
    ///
    /// # Errors
    ///
    /// Returns `BlueprintError::Scaffold` when execute mode fails; see
    /// [`Scaffolder::run`].
    pub fn scaffold(&self, plan: &Plan, mode: ScaffoldMode) -> Result<ScaffoldReport> {
        self.scaffolder.run(plan, mode)
    }
}
