//! Refinement patches and their application to plans.

use std::collections::HashSet;

use log::debug;

use super::Plan;

/// Suffix appended to a task description the refiner clarified.
pub const CLARIFIED_SUFFIX: &str = " (clarified during refinement)";

/// A single change the refiner wants applied to a plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanPatch {
    /// Append the path to the artifact list unless already present
    AddArtifact(String),
    /// Clarify every task whose description equals this text exactly
    ClarifyDescription(String),
}

impl Plan {
    /// Build a new plan from this one with `patches` applied in order.
    ///
    /// `self` is left untouched. Artifact additions are idempotent, so
    /// applying the same patches twice yields the same artifact list.
    pub fn with_patches(&self, patches: &[PlanPatch]) -> Plan {
        let mut artifacts = self.artifacts.clone();
        let mut known: HashSet<String> = artifacts.iter().cloned().collect();
        let mut vague: HashSet<&str> = HashSet::new();

        for patch in patches {
            match patch {
                PlanPatch::AddArtifact(path) => {
                    if known.insert(path.clone()) {
                        debug!("Adding artifact '{path}'");
                        artifacts.push(path.clone());
                    }
                }
                PlanPatch::ClarifyDescription(text) => {
                    vague.insert(text.as_str());
                }
            }
        }

        let milestones = self
            .milestones
            .iter()
            .map(|milestone| {
                let mut milestone = milestone.clone();
                for task in &mut milestone.tasks {
                    if vague.contains(task.description.as_str()) {
                        debug!("Clarifying task description '{}'", task.description);
                        task.description.push_str(CLARIFIED_SUFFIX);
                    }
                }
                milestone
            })
            .collect();

        Plan {
            feature: self.feature.clone(),
            milestones,
            artifacts,
            status: self.status.clone(),
        }
    }
}
