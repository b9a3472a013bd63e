//! User configuration.
//!
//! Settings are read from a JSON file, by default
//! `$XDG_CONFIG_HOME/blueprint/config.json`. Every field is optional; a
//! missing default file simply yields [`Config::default`].
//!
//! ```json
//! {
//!   "max_refinements": 3,
//!   "scaffold_root": "/home/user/project"
//! }
//! ```

use std::path::{Path, PathBuf};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::{
    error::{BlueprintError, Result},
    planner::MAX_REFINEMENTS,
};

/// Tunable settings for a blueprint run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Refinement attempts before a plan is rejected
    pub max_refinements: usize,

    /// Directory artifacts are created under (defaults to the working
    /// directory)
    pub scaffold_root: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_refinements: MAX_REFINEMENTS,
            scaffold_root: None,
        }
    }
}

impl Config {
    /// Name of the configuration file inside the XDG config directory.
    pub const FILE_NAME: &'static str = "config.json";

    /// Load configuration from an explicit file.
    ///
    /// # Errors
    ///
    /// Returns `BlueprintError::Configuration` if the file cannot be read or
    /// parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| BlueprintError::Configuration {
                message: format!("Failed to read {}: {e}", path.display()),
            })?;

        let config = serde_json::from_str(&contents).map_err(|e| BlueprintError::Configuration {
            message: format!("Failed to parse {}: {e}", path.display()),
        })?;
        debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Load configuration from the XDG config directory, falling back to
    /// defaults when no file exists there.
    ///
    /// # Errors
    ///
    /// Same as [`Config::load`] when a file exists but is invalid.
    pub fn load_default() -> Result<Self> {
        match Self::default_path() {
            Some(path) => Self::load(&path),
            None => Ok(Self::default()),
        }
    }

    /// The existing default configuration file, if any.
    pub fn default_path() -> Option<PathBuf> {
        xdg::BaseDirectories::with_prefix("blueprint").find_config_file(Self::FILE_NAME)
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.max_refinements, 2);
        assert_eq!(config.scaffold_root, None);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("config.json");
        std::fs::write(&path, r#"{"scaffold_root": "out"}"#).expect("Failed to write config");

        let config = Config::load(&path).expect("Failed to load config");
        assert_eq!(config.max_refinements, 2);
        assert_eq!(config.scaffold_root, Some(PathBuf::from("out")));
    }

    #[test]
    fn test_unknown_field_rejected() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("config.json");
        std::fs::write(&path, r#"{"max_refinement": 5}"#).expect("Failed to write config");

        let err = Config::load(&path).unwrap_err();
        assert!(matches!(err, BlueprintError::Configuration { .. }));
        assert!(err.to_string().contains("Failed to parse"));
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let err = Config::load(&temp_dir.path().join("absent.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to read"));
    }
}
