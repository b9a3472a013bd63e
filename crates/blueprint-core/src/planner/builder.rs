//! Builder for creating and configuring Blueprint instances.

use std::path::{Path, PathBuf};

use super::{Blueprint, ReviewLoop};
use crate::{config::Config, error::Result, scaffold::Scaffolder};

/// Builder for creating and configuring Blueprint instances.
///
/// Explicit settings on the builder override the configuration file.
#[derive(Debug, Clone, Default)]
pub struct BlueprintBuilder {
    config_path: Option<PathBuf>,
    max_refinements: Option<usize>,
    scaffold_root: Option<PathBuf>,
}

impl BlueprintBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a configuration file to read instead of the XDG default
    /// `$XDG_CONFIG_HOME/blueprint/config.json`.
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.config_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Overrides the number of refinement attempts.
    pub fn with_max_refinements(mut self, max_refinements: Option<usize>) -> Self {
        if max_refinements.is_some() {
            self.max_refinements = max_refinements;
        }
        self
    }

    /// Overrides the directory artifacts are created under.
    pub fn with_scaffold_root<P: AsRef<Path>>(mut self, root: Option<P>) -> Self {
        if let Some(root) = root {
            self.scaffold_root = Some(root.as_ref().to_path_buf());
        }
        self
    }

    /// Builds the configured blueprint instance.
    ///
    /// # Errors
    ///
    /// Returns `BlueprintError::Configuration` if a configuration file
    /// exists but cannot be read or parsed.
    pub fn build(self) -> Result<Blueprint> {
        let mut config = match &self.config_path {
            Some(path) => Config::load(path)?,
            None => Config::load_default()?,
        };

        if let Some(max_refinements) = self.max_refinements {
            config.max_refinements = max_refinements;
        }
        if let Some(root) = self.scaffold_root {
            config.scaffold_root = Some(root);
        }

        let root = config
            .scaffold_root
            .clone()
            .unwrap_or_else(|| PathBuf::from("."));

        Ok(Blueprint {
            review_loop: ReviewLoop::new(config.max_refinements),
            scaffolder: Scaffolder::new(root),
            config,
        })
    }
}
