//! Plan generation boundary.
//!
//! A [`PlanGenerator`] turns a prompt into a raw plan document with
//! `milestones` and `artifacts`. [`draft_plan`] wraps that document into a
//! draft [`Plan`] and runs it through the schema validator, so nothing
//! downstream ever sees an unvalidated plan.

use std::path::{Path, PathBuf};

use log::debug;
use serde_json::{json, Value};

use crate::{
    error::{BlueprintError, FileSystemResultExt, Result},
    models::Plan,
};

/// Source of raw plan documents.
pub trait PlanGenerator {
    /// Produce a raw plan (`{"milestones": [...], "artifacts": [...]}`) for
    /// the given prompt.
    ///
    /// # Errors
    ///
    /// Implementations return an error when no document can be produced.
    fn generate(&self, prompt: &str) -> Result<Value>;
}

/// Build the request text sent to a generator for `feature`.
///
/// With the `schema` feature enabled the JSON schema of the expected output
/// is appended, so a model-backed generator knows the exact contract.
pub fn build_prompt(feature: &str) -> String {
    let prompt = format!("Create an implementation plan for: {feature}");
    #[cfg(feature = "schema")]
    let prompt = with_output_schema(prompt);
    prompt
}

#[cfg(feature = "schema")]
fn with_output_schema(mut prompt: String) -> String {
    let schema = schemars::schema_for!(crate::models::RawPlan);
    if let Ok(schema) = serde_json::to_string_pretty(&schema) {
        prompt.push_str("\n\nRespond with JSON matching this schema:\n");
        prompt.push_str(&schema);
    }
    prompt
}

/// Generate, wrap and validate a draft plan for `feature`.
///
/// # Errors
///
/// Returns `BlueprintError::InvalidInput` for a blank feature request,
/// whatever error the generator returns, and `BlueprintError::Validation`
/// when the generated document does not match the plan schema.
///
/// # Examples
///
/// ```rust
/// use blueprint_core::generator::{draft_plan, StaticGenerator};
///
/// let plan = draft_plan(&StaticGenerator, "Add login")?;
/// assert_eq!(plan.status, "draft");
/// assert_eq!(plan.milestones.len(), 2);
/// # Ok::<(), blueprint_core::BlueprintError>(())
/// ```
pub fn draft_plan<G: PlanGenerator + ?Sized>(generator: &G, feature: &str) -> Result<Plan> {
    if feature.trim().is_empty() {
        return Err(BlueprintError::invalid_input("feature").with_reason("feature request is empty"));
    }

    let Value::Object(mut raw) = generator.generate(&build_prompt(feature))? else {
        return Err(BlueprintError::validation("plan").with_reason("generator output must be an object"));
    };
    let mut take = |key: &str| {
        raw.remove(key)
            .ok_or_else(|| BlueprintError::validation(key).with_reason("missing required key"))
    };
    let milestones = take("milestones")?;
    let artifacts = take("artifacts")?;

    debug!("Generated plan document for '{feature}'");
    Plan::from_value(json!({
        "feature": feature,
        "milestones": milestones,
        "artifacts": artifacts,
        "status": Plan::DRAFT_STATUS,
    }))
}

/// Stand-in for a model call: always returns the same two-milestone plan.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticGenerator;

impl PlanGenerator for StaticGenerator {
    fn generate(&self, prompt: &str) -> Result<Value> {
        debug!("Static generator ignoring prompt of {} bytes", prompt.len());
        Ok(json!({
            "milestones": [
                {
                    "id": 1,
                    "title": "Core Implementation",
                    "tasks": [
                        {"step": 1, "description": "Set up source layout", "output": "src/", "priority": "high"},
                        {"step": 2, "description": "Implement core logic", "output": "src/core.py", "priority": "high"}
                    ]
                },
                {
                    "id": 2,
                    "title": "Testing and Documentation",
                    "tasks": [
                        {"step": 1, "description": "Write unit tests", "output": "tests/test_core.py", "priority": "medium"},
                        {"step": 2, "description": "Add documentation", "output": "README.md", "priority": "low"}
                    ]
                }
            ],
            "artifacts": [
                "src/",
                "src/core.py",
                "tests/",
                "tests/test_core.py",
                "README.md"
            ]
        }))
    }
}

/// Reads a hand-written raw plan document from a JSON file.
#[derive(Debug, Clone)]
pub struct FileGenerator {
    path: PathBuf,
}

impl FileGenerator {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl PlanGenerator for FileGenerator {
    fn generate(&self, _prompt: &str) -> Result<Value> {
        let contents = std::fs::read_to_string(&self.path).fs_context(&self.path)?;
        Ok(serde_json::from_str(&contents)?)
    }
}
