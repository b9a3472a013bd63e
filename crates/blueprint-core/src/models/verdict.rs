//! Review verdicts: the issues that block approval and the suggestions that
//! do not.

use serde::{Serialize, Serializer};

/// A quality defect that blocks approval of a plan.
///
/// Each variant carries the data the refiner needs, and its
/// [`Display`](std::fmt::Display) rendering (see [`crate::display`]) is the
/// human-readable message shown to users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    /// The plan lists no artifacts at all
    EmptyArtifacts,
    /// A task output does not appear in the artifact list
    MissingArtifact { path: String },
    /// A milestone title contains a vague word
    VagueTitle { milestone_id: i64, title: String },
    /// A task description contains a vague word; `text` is the full
    /// description and identifies every task sharing that wording
    VagueDescription { text: String },
}

/// A non-blocking improvement the reviewer recommends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Suggestion {
    /// No artifact looks like a test file
    AddTests,
    /// No markdown artifact is present
    AddDocumentation,
    /// All tasks live in a single milestone
    SplitMilestones,
}

/// The reviewer's judgment of a plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReviewVerdict {
    /// True exactly when `issues` is empty
    pub approved: bool,
    pub issues: Vec<Issue>,
    pub suggestions: Vec<Suggestion>,
}

impl ReviewVerdict {
    /// Build a verdict, deriving `approved` from the issue list.
    pub fn new(issues: Vec<Issue>, suggestions: Vec<Suggestion>) -> Self {
        Self {
            approved: issues.is_empty(),
            issues,
            suggestions,
        }
    }

    /// Paths named by missing-artifact issues, in issue order.
    pub fn missing_artifacts(&self) -> impl Iterator<Item = &str> {
        self.issues.iter().filter_map(|issue| match issue {
            Issue::MissingArtifact { path } => Some(path.as_str()),
            _ => None,
        })
    }

    /// Description texts named by vague-description issues, in issue order.
    pub fn vague_descriptions(&self) -> impl Iterator<Item = &str> {
        self.issues.iter().filter_map(|issue| match issue {
            Issue::VagueDescription { text } => Some(text.as_str()),
            _ => None,
        })
    }
}

impl Serialize for Issue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl Serialize for Suggestion {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
