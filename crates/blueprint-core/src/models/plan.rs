//! Plan model definition and related functionality.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::Priority;

/// A structured implementation plan for a single feature request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct Plan {
    /// The original feature request text
    pub feature: String,

    /// Ordered milestones, each with at least one task
    pub milestones: Vec<Milestone>,

    /// Ordered file and directory paths the plan intends to produce.
    /// A trailing `/` marks a directory.
    pub artifacts: Vec<String>,

    /// Free-form status tag, `draft` when freshly generated
    pub status: String,
}

/// A group of related tasks within a plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct Milestone {
    /// Identifier, unique within the plan
    pub id: i64,

    pub title: String,

    pub tasks: Vec<Task>,
}

/// A single unit of work producing one output path.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct Task {
    /// Position of the task within its milestone
    pub step: i64,

    pub description: String,

    /// Path the task produces; expected to appear in the plan's artifacts
    pub output: String,

    pub priority: Priority,
}

/// The object a plan generator returns before it is wrapped into a [`Plan`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct RawPlan {
    pub milestones: Vec<Milestone>,
    pub artifacts: Vec<String>,
}

impl Plan {
    /// Status assigned to freshly generated plans.
    pub const DRAFT_STATUS: &'static str = "draft";

    /// Wrap generator output into a draft plan for `feature`.
    pub fn draft(feature: impl Into<String>, raw: RawPlan) -> Self {
        Self {
            feature: feature.into(),
            milestones: raw.milestones,
            artifacts: raw.artifacts,
            status: Self::DRAFT_STATUS.to_string(),
        }
    }

    /// All tasks across all milestones, in plan order.
    pub fn tasks(&self) -> impl Iterator<Item = &Task> {
        self.milestones.iter().flat_map(|m| m.tasks.iter())
    }

    /// Whether `path` appears verbatim in the artifact list.
    pub fn has_artifact(&self, path: &str) -> bool {
        self.artifacts.iter().any(|a| a == path)
    }

    /// JSON schema describing a complete plan document.
    ///
    /// # Errors
    ///
    /// Returns `BlueprintError::Serialization` if the schema cannot be
    /// converted to JSON.
    #[cfg(feature = "schema")]
    pub fn json_schema() -> crate::error::Result<serde_json::Value> {
        Ok(serde_json::to_value(schemars::schema_for!(Plan))?)
    }
}
