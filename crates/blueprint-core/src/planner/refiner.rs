//! Plan refinement driven by review verdicts.
//!
//! The refiner never edits a plan. It turns a verdict into an ordered list
//! of [`PlanPatch`]es and builds a new plan from the old one plus that list:
//!
//! 1. missing-artifact issues add their path to the artifact list
//! 2. vague-description issues clarify every task with that exact wording
//! 3. suggestions add a starter test file and a README
//!
//! Vague milestone titles are reported by the reviewer but left for a human
//! to reword.

use log::debug;

use crate::models::{Plan, PlanPatch, ReviewVerdict, Suggestion};

/// Test file added when the reviewer asks for tests.
pub const STARTER_TEST_FILE: &str = "tests/test_basic.py";
/// Directory holding [`STARTER_TEST_FILE`].
pub const STARTER_TEST_DIR: &str = "tests/";
/// Documentation file added when the reviewer asks for documentation.
pub const README_FILE: &str = "README.md";

/// Produce a refined copy of `plan` that addresses `verdict`.
pub fn refine(plan: &Plan, verdict: &ReviewVerdict) -> Plan {
    let patches = patches_for(plan, verdict);
    debug!("Refining plan with {} patch(es)", patches.len());
    plan.with_patches(&patches)
}

/// Derive the patch list for `verdict`, in application order.
pub fn patches_for(plan: &Plan, verdict: &ReviewVerdict) -> Vec<PlanPatch> {
    let mut patches: Vec<PlanPatch> = verdict
        .missing_artifacts()
        .map(|path| PlanPatch::AddArtifact(path.to_string()))
        .collect();

    patches.extend(
        verdict
            .vague_descriptions()
            .map(|text| PlanPatch::ClarifyDescription(text.to_string())),
    );

    for suggestion in &verdict.suggestions {
        let text = suggestion.to_string().to_lowercase();

        if text.contains("test") && !will_contain(plan, &patches, STARTER_TEST_FILE) {
            patches.push(PlanPatch::AddArtifact(STARTER_TEST_FILE.to_string()));
            patches.push(PlanPatch::AddArtifact(STARTER_TEST_DIR.to_string()));
        }

        if (text.contains("readme") || text.contains("documentation"))
            && !will_contain(plan, &patches, README_FILE)
        {
            patches.push(PlanPatch::AddArtifact(README_FILE.to_string()));
        }

        if *suggestion == Suggestion::SplitMilestones {
            debug!("Leaving milestone split to the author");
        }
    }

    patches
}

fn will_contain(plan: &Plan, patches: &[PlanPatch], path: &str) -> bool {
    plan.has_artifact(path)
        || patches
            .iter()
            .any(|p| matches!(p, PlanPatch::AddArtifact(added) if added == path))
}
