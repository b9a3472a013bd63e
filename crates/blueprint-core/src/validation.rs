//! Structural validation of plan documents.
//!
//! Plans arrive from the generator as loosely typed JSON. [`validate`] checks
//! them depth-first in a fixed order (top-level keys, milestones, each
//! milestone's fields, each task's fields, then artifacts) and reports the
//! first violation with the exact field path, e.g.
//! `milestones[0].tasks[1].priority`.

use serde_json::{Map, Value};

use crate::{
    error::{BlueprintError, Result},
    models::{Plan, Priority},
};

/// Top-level keys every plan must carry, in check order.
pub const REQUIRED_KEYS: [&str; 4] = ["feature", "milestones", "artifacts", "status"];

/// Validate a plan document against the plan schema.
///
/// # Errors
///
/// Returns `BlueprintError::Validation` describing the first violation.
///
/// # Examples
///
/// ```rust
/// use blueprint_core::validation::validate;
/// use serde_json::json;
///
/// let err = validate(&json!({ "feature": "x" })).unwrap_err();
/// assert!(err.to_string().contains("'milestones'"));
/// ```
pub fn validate(plan: &Value) -> Result<()> {
    let plan = plan
        .as_object()
        .ok_or_else(|| invalid("plan", "must be an object"))?;

    validate_top_level(plan)?;
    validate_milestones(&plan["milestones"])?;
    validate_artifacts(&plan["artifacts"])
}

impl Plan {
    /// Validate a plan document and convert it into a typed [`Plan`].
    ///
    /// # Errors
    ///
    /// Returns `BlueprintError::Validation` if the document does not match
    /// the schema.
    pub fn from_value(value: Value) -> Result<Plan> {
        validate(&value)?;
        Ok(serde_json::from_value(value)?)
    }
}

fn invalid(path: impl Into<String>, reason: impl Into<String>) -> BlueprintError {
    BlueprintError::validation(path).with_reason(reason)
}

fn validate_top_level(plan: &Map<String, Value>) -> Result<()> {
    for key in REQUIRED_KEYS {
        if !plan.contains_key(key) {
            return Err(invalid(key, "missing required key"));
        }
    }

    for key in ["feature", "status"] {
        if !plan[key].is_string() {
            return Err(invalid(key, "must be a string"));
        }
    }
    Ok(())
}

fn validate_milestones(milestones: &Value) -> Result<()> {
    let milestones = milestones
        .as_array()
        .ok_or_else(|| invalid("milestones", "must be a list"))?;

    if milestones.is_empty() {
        return Err(invalid("milestones", "must not be empty"));
    }

    for (i, milestone) in milestones.iter().enumerate() {
        validate_milestone(milestone, &format!("milestones[{i}]"))?;
    }
    Ok(())
}

fn validate_milestone(milestone: &Value, prefix: &str) -> Result<()> {
    let milestone = milestone
        .as_object()
        .ok_or_else(|| invalid(prefix, "must be an object"))?;

    require(milestone, prefix, "id", FieldType::Int)?;
    require(milestone, prefix, "title", FieldType::Str)?;

    let tasks = milestone
        .get("tasks")
        .ok_or_else(|| invalid(format!("{prefix}.tasks"), "missing required field"))?;
    validate_tasks(tasks, prefix)
}

fn validate_tasks(tasks: &Value, prefix: &str) -> Result<()> {
    let path = format!("{prefix}.tasks");
    let tasks = tasks
        .as_array()
        .ok_or_else(|| invalid(path.as_str(), "must be a list"))?;

    if tasks.is_empty() {
        return Err(invalid(path, "must not be empty"));
    }

    for (i, task) in tasks.iter().enumerate() {
        validate_task(task, &format!("{path}[{i}]"))?;
    }
    Ok(())
}

fn validate_task(task: &Value, prefix: &str) -> Result<()> {
    let task = task
        .as_object()
        .ok_or_else(|| invalid(prefix, "must be an object"))?;

    require(task, prefix, "step", FieldType::Int)?;
    require(task, prefix, "description", FieldType::Str)?;
    require(task, prefix, "output", FieldType::Str)?;
    let priority = require(task, prefix, "priority", FieldType::Str)?;

    let priority = priority.as_str().unwrap_or_default();
    if priority.parse::<Priority>().is_err() {
        let allowed: Vec<&str> = Priority::ALL.iter().map(Priority::as_str).collect();
        return Err(invalid(
            format!("{prefix}.priority"),
            format!("must be one of {allowed:?}, got '{priority}'"),
        ));
    }
    Ok(())
}

fn validate_artifacts(artifacts: &Value) -> Result<()> {
    let artifacts = artifacts
        .as_array()
        .ok_or_else(|| invalid("artifacts", "must be a list"))?;

    if artifacts.is_empty() {
        return Err(invalid("artifacts", "must not be empty"));
    }

    for (i, artifact) in artifacts.iter().enumerate() {
        if !artifact.is_string() {
            return Err(invalid(format!("artifacts[{i}]"), "must be a string"));
        }
    }
    Ok(())
}

#[derive(Clone, Copy)]
enum FieldType {
    Int,
    Str,
}

impl FieldType {
    fn matches(self, value: &Value) -> bool {
        match self {
            FieldType::Int => value.is_i64(),
            FieldType::Str => value.is_string(),
        }
    }

    fn name(self) -> &'static str {
        match self {
            FieldType::Int => "an int",
            FieldType::Str => "a string",
        }
    }
}

/// Look up `field` in `object`, checking presence then type.
fn require<'a>(
    object: &'a Map<String, Value>,
    prefix: &str,
    field: &str,
    expected: FieldType,
) -> Result<&'a Value> {
    let path = format!("{prefix}.{field}");
    let value = object
        .get(field)
        .ok_or_else(|| invalid(path.as_str(), "missing required field"))?;

    if !expected.matches(value) {
        return Err(invalid(path, format!("must be {}", expected.name())));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn valid_plan() -> Value {
        json!({
            "feature": "Add login",
            "status": "draft",
            "milestones": [{
                "id": 1,
                "title": "Core",
                "tasks": [
                    {"step": 1, "description": "Build it", "output": "src/core.py", "priority": "high"},
                    {"step": 2, "description": "Test it", "output": "tests/test_core.py", "priority": "low"}
                ]
            }],
            "artifacts": ["src/core.py", "tests/test_core.py"]
        })
    }

    fn failing_path(value: &Value) -> String {
        match validate(value) {
            Err(BlueprintError::Validation { path, .. }) => path,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_valid_plan_passes() {
        validate(&valid_plan()).expect("plan should be valid");
    }

    #[test]
    fn test_non_object_rejected() {
        assert_eq!(failing_path(&json!([1, 2])), "plan");
    }

    #[test]
    fn test_missing_keys_reported_in_order() {
        let mut plan = valid_plan();
        let object = plan.as_object_mut().unwrap();
        object.remove("status");
        object.remove("milestones");
        assert_eq!(failing_path(&plan), "milestones");
    }

    #[test]
    fn test_missing_key_message_names_path_and_reason() {
        let mut plan = valid_plan();
        plan.as_object_mut().unwrap().remove("feature");
        assert_eq!(
            validate(&plan).unwrap_err().to_string(),
            "Plan validation failed at 'feature': missing required key"
        );
    }

    #[test]
    fn test_empty_milestones_rejected() {
        let mut plan = valid_plan();
        plan["milestones"] = json!([]);
        let err = validate(&plan).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Plan validation failed at 'milestones': must not be empty"
        );
    }

    #[test]
    fn test_milestone_id_must_be_int() {
        let mut plan = valid_plan();
        plan["milestones"][0]["id"] = json!("one");
        assert_eq!(failing_path(&plan), "milestones[0].id");
    }

    #[test]
    fn test_missing_tasks_reported() {
        let mut plan = valid_plan();
        plan["milestones"][0].as_object_mut().unwrap().remove("tasks");
        assert_eq!(failing_path(&plan), "milestones[0].tasks");
    }

    #[test]
    fn test_task_field_types_checked() {
        let mut plan = valid_plan();
        plan["milestones"][0]["tasks"][1]["output"] = json!(42);
        assert_eq!(failing_path(&plan), "milestones[0].tasks[1].output");
    }

    #[test]
    fn test_invalid_priority_lists_allowed_values() {
        let mut plan = valid_plan();
        plan["milestones"][0]["tasks"][0]["priority"] = json!("urgent");
        let err = validate(&plan).unwrap_err().to_string();
        assert!(err.contains("milestones[0].tasks[0].priority"));
        assert!(err.contains(r#"["high", "medium", "low"]"#));
        assert!(err.contains("got 'urgent'"));
    }

    #[test]
    fn test_milestones_checked_before_artifacts() {
        let mut plan = valid_plan();
        plan["artifacts"] = json!([]);
        plan["milestones"][0]["title"] = json!(null);
        assert_eq!(failing_path(&plan), "milestones[0].title");
    }

    #[test]
    fn test_artifact_entries_must_be_strings() {
        let mut plan = valid_plan();
        plan["artifacts"] = json!(["README.md", 7]);
        assert_eq!(failing_path(&plan), "artifacts[1]");
    }

    #[test]
    fn test_from_value_builds_typed_plan() {
        let plan = Plan::from_value(valid_plan()).expect("plan should convert");
        assert_eq!(plan.milestones[0].tasks[0].priority, Priority::High);
        assert_eq!(plan.status, "draft");
    }
}
