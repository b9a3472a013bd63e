//! Blueprint CLI Application
//!
//! Command-line interface for turning feature requests into reviewed plans
//! and project scaffolds.

mod args;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands, PlanArgs};
use blueprint_core::BlueprintBuilder;
use clap::Parser;
use cli::Cli;
use log::info;
use renderer::TerminalRenderer;
use Commands::*;

fn main() -> Result<()> {
    env_logger::init();

    let Args {
        config,
        root,
        no_color,
        command,
    } = Args::parse();
    let command = command.unwrap_or_else(|| Plan(PlanArgs::default()));

    let max_refinements = match &command {
        Plan(args) => args.max_refinements,
        _ => None,
    };

    let blueprint = BlueprintBuilder::new()
        .with_config_path(config)
        .with_scaffold_root(root)
        .with_max_refinements(max_refinements)
        .build()
        .context("Failed to initialize blueprint")?;

    let renderer = TerminalRenderer::new(!no_color);

    info!("Blueprint started");

    let cli = Cli::new(blueprint, renderer);
    match command {
        Plan(args) => cli.plan(args),
        Review { file } => cli.review(&file),
        Schema => cli.schema(),
    }
}
