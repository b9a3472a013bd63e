use blueprint_core::{Blueprint, BlueprintBuilder};
use tempfile::TempDir;

/// Helper function to create a blueprint scaffolding into a temp directory.
///
/// An empty config file is passed explicitly so the user's own XDG config
/// never leaks into tests.
pub fn create_test_blueprint() -> (TempDir, Blueprint) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.json");
    std::fs::write(&config_path, "{}").expect("Failed to write config");

    let blueprint = BlueprintBuilder::new()
        .with_config_path(Some(&config_path))
        .with_scaffold_root(Some(temp_dir.path().join("project")))
        .build()
        .expect("Failed to create blueprint");
    (temp_dir, blueprint)
}
