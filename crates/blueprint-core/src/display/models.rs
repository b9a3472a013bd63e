//! Display implementations for domain models.
//!
//! Issue and suggestion texts are stable: they are what users see and what
//! the serialized verdict contains.

use std::fmt;

use super::collections::Issues;
use crate::models::{ArtifactKind, Issue, Plan, Priority, ReviewVerdict, Suggestion};

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Issue::EmptyArtifacts => write!(f, "Artifacts list is empty"),
            Issue::MissingArtifact { path } => {
                write!(f, "Task output '{path}' not in artifacts list")
            }
            Issue::VagueTitle { title, .. } => write!(f, "Milestone '{title}' has vague title"),
            Issue::VagueDescription { text } => write!(f, "Task '{text}' has vague description"),
        }
    }
}

impl fmt::Display for Suggestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Suggestion::AddTests => "Consider adding test files to artifacts",
            Suggestion::AddDocumentation => "Consider adding documentation (README.md)",
            Suggestion::SplitMilestones => "Consider breaking work into multiple milestones",
        };
        f.write_str(text)
    }
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Plan: {}", self.feature)?;
        writeln!(f)?;
        writeln!(f, "- Status: {}", self.status)?;
        writeln!(f, "- Milestones: {}", self.milestones.len())?;
        writeln!(f, "- Artifacts: {}", self.artifacts.len())?;

        for milestone in &self.milestones {
            writeln!(f, "\n## {}. {}", milestone.id, milestone.title)?;
            writeln!(f)?;
            for task in &milestone.tasks {
                writeln!(
                    f,
                    "- Step {}: {} → `{}` ({})",
                    task.step, task.description, task.output, task.priority
                )?;
            }
        }

        writeln!(f, "\n## Artifacts")?;
        writeln!(f)?;
        if self.artifacts.is_empty() {
            writeln!(f, "No artifacts in this plan.")?;
        }
        for artifact in &self.artifacts {
            writeln!(f, "- `{artifact}` ({})", ArtifactKind::of(artifact))?;
        }

        Ok(())
    }
}

impl fmt::Display for ReviewVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let heading = if self.approved {
            "Approved"
        } else {
            "Changes requested"
        };
        writeln!(f, "## Review: {heading}")?;

        if !self.issues.is_empty() {
            writeln!(f, "\n### Issues")?;
            writeln!(f)?;
            write!(f, "{}", Issues(&self.issues))?;
        }

        if !self.suggestions.is_empty() {
            writeln!(f, "\n### Suggestions")?;
            writeln!(f)?;
            for suggestion in &self.suggestions {
                writeln!(f, "- {suggestion}")?;
            }
        }

        Ok(())
    }
}
