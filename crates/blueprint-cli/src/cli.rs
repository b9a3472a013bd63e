//! Command handlers for the Blueprint CLI.
//!
//! Each handler drives the core library and hands markdown to the terminal
//! renderer. Failures that need user action (validation errors, rejected
//! plans, rolled-back scaffolds) are rendered first and then returned as
//! errors so the process exits non-zero.

use std::{
    io::{self, BufRead, Write},
    path::Path,
};

use anyhow::{bail, Context, Result};
use blueprint_core::{
    Blueprint, BlueprintError, FailureDetails, FileGenerator, LoopOutcome, OperationStatus, Plan,
    ScaffoldMode, StaticGenerator,
};
use log::info;
use serde_json::json;

use crate::{args::PlanArgs, renderer::TerminalRenderer};

pub struct Cli {
    blueprint: Blueprint,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(blueprint: Blueprint, renderer: TerminalRenderer) -> Self {
        Self {
            blueprint,
            renderer,
        }
    }

    /// Draft, review and scaffold a plan.
    pub fn plan(&self, args: PlanArgs) -> Result<()> {
        let feature = match args.feature {
            Some(feature) => feature,
            None => prompt_feature_request()?,
        };
        if feature.trim().is_empty() {
            self.renderer
                .render_error(&OperationStatus::failure("Empty feature request.").to_string());
            bail!("No feature request given");
        }

        let plan = match &args.plan_file {
            Some(path) => self.blueprint.draft(&FileGenerator::new(path), &feature),
            None => self.blueprint.draft(&StaticGenerator, &feature),
        }
        .context("Plan validation failed")?;

        let outcome = self.blueprint.review_loop(plan);
        info!("Review finished after {} pass(es)", outcome.passes());
        let plan = match outcome {
            LoopOutcome::Approved { plan, .. } => plan,
            rejected @ LoopOutcome::Rejected { .. } => {
                self.renderer.render(&rejected.to_string())?;
                bail!(
                    "Plan was not approved after {} refinement(s); fix the issues above and retry",
                    self.blueprint.config().max_refinements
                );
            }
        };

        let mode = ScaffoldMode::from_flag(args.execute);
        let report = match self.blueprint.scaffold(&plan, mode) {
            Ok(report) => report,
            Err(BlueprintError::Scaffold(failure)) => {
                self.renderer.render(&FailureDetails(&failure).to_string())?;
                return Err(BlueprintError::Scaffold(failure)).context("Scaffold execution failed");
            }
            Err(e) => return Err(e.into()),
        };

        if args.json {
            let output = json!({
                "plan": plan,
                "mode": match mode {
                    ScaffoldMode::Preview => "preview",
                    ScaffoldMode::Execute => "execute",
                },
                "manifest": report.manifest,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
            return Ok(());
        }

        self.renderer.render(&plan.to_string())?;
        println!();
        self.renderer.render(&report.to_string())
    }

    /// Validate and review a complete plan document.
    pub fn review(&self, path: &Path) -> Result<()> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let value = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        let plan = Plan::from_value(value).context("Plan validation failed")?;

        let verdict = self.blueprint.review(&plan);
        self.renderer.render(&verdict.to_string())?;

        if !verdict.approved {
            bail!("Plan has {} unresolved issue(s)", verdict.issues.len());
        }
        Ok(())
    }

    /// Print the plan JSON schema.
    pub fn schema(&self) -> Result<()> {
        let schema = Plan::json_schema()?;
        println!("{}", serde_json::to_string_pretty(&schema)?);
        Ok(())
    }
}

/// Ask for a feature request on stdin. The prompt goes to stderr so stdout
/// only carries command output.
fn prompt_feature_request() -> Result<String> {
    eprint!("Enter your feature request: ");
    io::stderr().flush().context("Failed to flush stderr")?;

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("Failed to read feature request")?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
