use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Command-line interface for Blueprint
///
/// Blueprint turns a feature request into an implementation plan, reviews
/// and refines it until it passes its quality checks, and then previews or
/// creates the files and directories the plan calls for.
#[derive(Parser)]
#[command(version, about, name = "bp")]
pub struct Args {
    /// Path to a JSON configuration file. Defaults to
    /// $XDG_CONFIG_HOME/blueprint/config.json
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory scaffold artifacts are created under. Defaults to the
    /// current directory
    #[arg(long, global = true)]
    pub root: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Blueprint CLI
///
/// Running `bp` without a command is the same as `bp plan`.
#[derive(Subcommand)]
pub enum Commands {
    /// Draft, review and scaffold a plan for a feature request
    #[command(alias = "p")]
    Plan(PlanArgs),
    /// Validate and review a plan stored as JSON
    #[command(alias = "r")]
    Review {
        /// Path to the plan JSON file
        file: PathBuf,
    },
    /// Print the JSON schema of a plan document
    Schema,
}

/// Arguments for `bp plan`
#[derive(clap::Args, Default)]
pub struct PlanArgs {
    /// Feature request text; prompted for when omitted
    pub feature: Option<String>,

    /// Read the raw plan (milestones and artifacts) from a JSON file instead
    /// of generating one
    #[arg(long)]
    pub plan_file: Option<PathBuf>,

    /// Preview the scaffold without creating files (default behavior)
    #[arg(long, conflicts_with = "execute")]
    pub dry_run: bool,

    /// Create the scaffold on disk, rolling back on failure
    #[arg(long)]
    pub execute: bool,

    /// Print the approved plan and scaffold manifest as JSON
    #[arg(long)]
    pub json: bool,

    /// Refinement attempts before the plan is rejected
    #[arg(long)]
    pub max_refinements: Option<usize>,
}
