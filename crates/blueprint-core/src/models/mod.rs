//! Data models for plans, review verdicts and refinement patches.
//!
//! A [`Plan`] is an immutable value: the reviewer reads it, the refiner
//! builds a new one from it plus a list of [`PlanPatch`]es, and the scaffold
//! executor consumes the final approved value read-only. Display
//! implementations live in [`crate::display`].

pub mod artifact;
pub mod patch;
pub mod plan;
pub mod priority;
pub mod verdict;


pub use artifact::ArtifactKind;
pub use patch::PlanPatch;
pub use plan::{Milestone, Plan, RawPlan, Task};
pub use priority::Priority;
pub use verdict::{Issue, ReviewVerdict, Suggestion};
