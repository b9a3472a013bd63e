//! Plan quality review.
//!
//! [`review`] is a pure function of the plan: every check runs against the
//! same snapshot and issues accumulate in check order.

use std::collections::HashSet;

use crate::models::{Issue, Plan, ReviewVerdict, Suggestion};

/// Words that mark a title or description as too vague to act on.
pub const VAGUE_WORDS: [&str; 6] = ["something", "stuff", "things", "etc", "various", "misc"];

/// Review a plan and produce a verdict.
///
/// # Examples
///
/// ```rust
/// use blueprint_core::{models::Issue, planner::review, Plan};
///
/// let plan = Plan {
///     feature: "Add login".to_string(),
///     milestones: vec![],
///     artifacts: vec![],
///     status: Plan::DRAFT_STATUS.to_string(),
/// };
/// let verdict = review(&plan);
/// assert!(!verdict.approved);
/// assert_eq!(verdict.issues, vec![Issue::EmptyArtifacts]);
/// ```
pub fn review(plan: &Plan) -> ReviewVerdict {
    let mut issues = Vec::new();
    issues.extend(check_artifacts(plan));
    issues.extend(check_outputs_in_artifacts(plan));
    issues.extend(check_vague_content(plan));

    ReviewVerdict::new(issues, suggestions(plan))
}

fn check_artifacts(plan: &Plan) -> Option<Issue> {
    plan.artifacts.is_empty().then_some(Issue::EmptyArtifacts)
}

fn check_outputs_in_artifacts(plan: &Plan) -> Vec<Issue> {
    let artifacts: HashSet<&str> = plan.artifacts.iter().map(String::as_str).collect();

    plan.tasks()
        .filter(|task| !task.output.is_empty() && !artifacts.contains(task.output.as_str()))
        .map(|task| Issue::MissingArtifact {
            path: task.output.clone(),
        })
        .collect()
}

fn check_vague_content(plan: &Plan) -> Vec<Issue> {
    let mut issues = Vec::new();

    for milestone in &plan.milestones {
        if is_vague(&milestone.title) {
            issues.push(Issue::VagueTitle {
                milestone_id: milestone.id,
                title: milestone.title.clone(),
            });
        }

        for task in &milestone.tasks {
            if is_vague(&task.description) {
                issues.push(Issue::VagueDescription {
                    text: task.description.clone(),
                });
            }
        }
    }

    issues
}

/// Whether `text` contains any vague word, ignoring case.
///
/// Matching is by substring, so "etc" also matches "fetch".
pub fn is_vague(text: &str) -> bool {
    let lowered = text.to_lowercase();
    VAGUE_WORDS.iter().any(|word| lowered.contains(word))
}

fn suggestions(plan: &Plan) -> Vec<Suggestion> {
    let mut suggestions = Vec::new();

    if !plan
        .artifacts
        .iter()
        .any(|a| a.to_lowercase().contains("test"))
    {
        suggestions.push(Suggestion::AddTests);
    }

    if !plan.artifacts.iter().any(|a| a.ends_with(".md")) {
        suggestions.push(Suggestion::AddDocumentation);
    }

    if plan.milestones.len() == 1 {
        suggestions.push(Suggestion::SplitMilestones);
    }

    suggestions
}
