//! Materializes a plan's artifacts as files and directories.
//!
//! Preview mode only reports what would be created and never touches the
//! filesystem. Execute mode walks the manifest in order and is all-or-nothing
//! with respect to the paths it creates: the first failure stops the walk,
//! every path created during the run is removed again, and the original
//! error is returned as a [`ScaffoldFailure`]. Paths that already existed are
//! skipped on the way in and never removed on the way out.

mod rollback;


use std::{
    fs::{self, OpenOptions},
    io::{self, Write},
    path::{Component, Path, PathBuf},
};

use log::{info, warn};

use self::rollback::CreationJournal;
use crate::{
    error::{Result, ScaffoldFailure},
    models::{ArtifactKind, Plan},
};

/// Whether a scaffold run only previews or actually creates paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScaffoldMode {
    #[default]
    Preview,
    Execute,
}

impl ScaffoldMode {
    /// Execute when `execute` is set, preview otherwise.
    pub fn from_flag(execute: bool) -> Self {
        if execute {
            ScaffoldMode::Execute
        } else {
            ScaffoldMode::Preview
        }
    }
}

/// What happened to a single artifact during a scaffold run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScaffoldAction {
    /// Preview only: the artifact would be created
    WouldCreate(String),
    CreatedDir(String),
    CreatedFile(String),
    /// The path already existed and was left alone
    Skipped(String),
}

impl ScaffoldAction {
    pub fn artifact(&self) -> &str {
        match self {
            ScaffoldAction::WouldCreate(path)
            | ScaffoldAction::CreatedDir(path)
            | ScaffoldAction::CreatedFile(path)
            | ScaffoldAction::Skipped(path) => path,
        }
    }
}

/// Result of a successful scaffold run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldReport {
    pub mode: ScaffoldMode,
    /// The plan's artifact list, unmodified
    pub manifest: Vec<String>,
    /// One action per manifest entry, in manifest order
    pub actions: Vec<ScaffoldAction>,
}

/// Creates plan artifacts relative to a root directory.
#[derive(Debug, Clone)]
pub struct Scaffolder {
    root: PathBuf,
}

impl Scaffolder {
    /// Create a scaffolder that resolves artifacts against `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Scaffold `plan` and return its manifest.
    ///
    /// # Errors
    ///
    /// Returns `BlueprintError::Scaffold` if execute mode fails; the paths
    /// created before the failure have been rolled back by then.
    pub fn generate(&self, plan: &Plan, mode: ScaffoldMode) -> Result<Vec<String>> {
        self.run(plan, mode).map(|report| report.manifest)
    }

    /// Scaffold `plan` and report the action taken for every artifact.
    ///
    /// # Errors
    ///
    /// Same as [`Scaffolder::generate`].
    pub fn run(&self, plan: &Plan, mode: ScaffoldMode) -> Result<ScaffoldReport> {
        let manifest = plan.artifacts.clone();
        let actions = match mode {
            ScaffoldMode::Preview => manifest
                .iter()
                .map(|artifact| ScaffoldAction::WouldCreate(artifact.clone()))
                .collect(),
            ScaffoldMode::Execute => self.execute(&manifest)?,
        };

        Ok(ScaffoldReport {
            mode,
            manifest,
            actions,
        })
    }

    fn execute(&self, manifest: &[String]) -> Result<Vec<ScaffoldAction>> {
        info!("Executing scaffold of {} artifact(s) under {}", manifest.len(), self.root.display());
        let mut journal = CreationJournal::default();
        let mut actions = Vec::with_capacity(manifest.len());

        for artifact in manifest {
            match self.create_artifact(artifact, &mut journal) {
                Ok(action) => actions.push(action),
                Err(source) => {
                    warn!("Scaffold failed at '{artifact}': {source}; rolling back");
                    let outcome = journal.rollback();
                    return Err(ScaffoldFailure {
                        path: artifact.clone(),
                        source,
                        rolled_back: outcome.removed,
                        rollback_failures: outcome.failures,
                    }
                    .into());
                }
            }
        }

        Ok(actions)
    }

    fn create_artifact(
        &self,
        artifact: &str,
        journal: &mut CreationJournal,
    ) -> io::Result<ScaffoldAction> {
        let path = self.root.join(relative_artifact_path(artifact)?);

        if path.exists() {
            info!("[skip] {artifact} (already exists)");
            return Ok(ScaffoldAction::Skipped(artifact.to_string()));
        }

        match ArtifactKind::of(artifact) {
            ArtifactKind::Directory => {
                create_dirs(&path, journal)?;
                info!("[create dir] {artifact}");
                Ok(ScaffoldAction::CreatedDir(artifact.to_string()))
            }
            ArtifactKind::File => {
                if let Some(parent) = path.parent() {
                    create_dirs(parent, journal)?;
                }
                let mut file = OpenOptions::new().write(true).create_new(true).open(&path)?;
                journal.record_file(path.clone());
                file.write_all(placeholder_body(&path).as_bytes())?;
                info!("[create file] {artifact}");
                Ok(ScaffoldAction::CreatedFile(artifact.to_string()))
            }
        }
    }
}

impl Default for Scaffolder {
    fn default() -> Self {
        Self::new(".")
    }
}

/// Convert an artifact into a path that stays inside the scaffold root.
fn relative_artifact_path(artifact: &str) -> io::Result<PathBuf> {
    let mut relative = PathBuf::new();
    for component in Path::new(artifact).components() {
        match component {
            Component::Normal(part) => relative.push(part),
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => {
                return Err(io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("artifact path '{artifact}' escapes the scaffold root"),
                ));
            }
        }
    }

    if relative.as_os_str().is_empty() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "artifact path is empty",
        ));
    }
    Ok(relative)
}

/// Create `dir` and any missing ancestors, recording each one created.
fn create_dirs(dir: &Path, journal: &mut CreationJournal) -> io::Result<()> {
    let missing: Vec<&Path> = dir
        .ancestors()
        .take_while(|ancestor| !ancestor.as_os_str().is_empty() && !ancestor.exists())
        .collect();

    for ancestor in missing.into_iter().rev() {
        fs::create_dir(ancestor)?;
        journal.record_dir(ancestor.to_path_buf());
    }
    Ok(())
}

/// Placeholder content for a new file, written as a comment in the file's
/// own syntax.
pub fn placeholder_body(path: &Path) -> String {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let extension = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "rs" | "c" | "h" | "cc" | "cpp" | "hpp" | "go" | "java" | "js" | "jsx" | "ts" | "tsx"
        | "kt" | "swift" | "scala" => format!("// TODO: Implement {name}\n"),
        "md" | "html" | "xml" => format!("<!-- TODO: Implement {name} -->\n"),
        "css" => format!("/* TODO: Implement {name} */\n"),
        "sql" | "lua" => format!("-- TODO: Implement {name}\n"),
        _ => format!("# TODO: Implement {name}\n"),
    }
}
