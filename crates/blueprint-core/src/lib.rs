//! Core library for the Blueprint feature planning tool.
//!
//! Blueprint turns a feature request into a structured implementation plan
//! (milestones, tasks and output artifacts), reviews and refines that plan
//! against quality heuristics, and optionally materializes the approved plan
//! as a file and directory scaffold with rollback on failure.
//!
//! # Pipeline
//!
//! 1. [`generator`]: a [`PlanGenerator`] produces a raw plan document
//! 2. [`validation`]: the document is checked against the plan schema
//! 3. [`planner`]: the review–refine loop improves the plan until approved
//! 4. [`scaffold`]: the approved plan's artifacts are previewed or created
//!
//! # Quick Start
//!
//! ```rust
//! use blueprint_core::{generator::StaticGenerator, BlueprintBuilder, ScaffoldMode};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let blueprint = BlueprintBuilder::new().build()?;
//!
//! let plan = blueprint.draft(&StaticGenerator, "Add login")?;
//! let outcome = blueprint.review_loop(plan);
//! println!("{outcome}");
//!
//! if let Some(plan) = outcome.into_approved() {
//!     // Preview never touches the filesystem
//!     let report = blueprint.scaffold(&plan, ScaffoldMode::Preview)?;
//!     println!("{report}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod display;
pub mod error;
pub mod generator;
pub mod models;
pub mod planner;
pub mod scaffold;
pub mod validation;

// Re-export commonly used types
pub use config::Config;
pub use display::{FailureDetails, Issues, OperationStatus};
pub use error::{BlueprintError, Result, RollbackFailure, ScaffoldFailure};
pub use generator::{FileGenerator, PlanGenerator, StaticGenerator};
pub use models::{Issue, Milestone, Plan, PlanPatch, Priority, RawPlan, ReviewVerdict, Suggestion, Task};
pub use planner::{Blueprint, BlueprintBuilder, LoopOutcome, ReviewLoop};
pub use scaffold::{ScaffoldAction, ScaffoldMode, ScaffoldReport, Scaffolder};
