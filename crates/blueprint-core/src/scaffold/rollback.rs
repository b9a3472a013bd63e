//! Journal of paths created during one execute-mode run.

use std::{fs, path::PathBuf};

use log::{info, warn};

use crate::error::RollbackFailure;

/// Paths created so far in the current run.
#[derive(Debug, Default)]
pub(crate) struct CreationJournal {
    files: Vec<PathBuf>,
    dirs: Vec<PathBuf>,
}

/// What the rollback managed to undo.
#[derive(Debug, Default)]
pub(crate) struct RollbackOutcome {
    pub removed: Vec<PathBuf>,
    pub failures: Vec<RollbackFailure>,
}

impl CreationJournal {
    pub fn record_file(&mut self, path: PathBuf) {
        self.files.push(path);
    }

    pub fn record_dir(&mut self, path: PathBuf) {
        self.dirs.push(path);
    }

    /// Delete every recorded path: files first, then directories deepest
    /// first so children go before their parents.
    ///
    /// A failed deletion is recorded and the remaining paths are still
    /// attempted.
    pub fn rollback(self) -> RollbackOutcome {
        let mut outcome = RollbackOutcome::default();
        if self.files.is_empty() && self.dirs.is_empty() {
            return outcome;
        }

        info!("Rolling back {} path(s)", self.files.len() + self.dirs.len());

        for file in self.files {
            match fs::remove_file(&file) {
                Ok(()) => {
                    info!("[rollback] deleted file: {}", file.display());
                    outcome.removed.push(file);
                }
                Err(e) => outcome.fail(file, &e),
            }
        }

        let mut dirs = self.dirs;
        dirs.sort_by_key(|dir| std::cmp::Reverse(dir.components().count()));
        for dir in dirs {
            match fs::remove_dir(&dir) {
                Ok(()) => {
                    info!("[rollback] deleted dir: {}", dir.display());
                    outcome.removed.push(dir);
                }
                Err(e) => outcome.fail(dir, &e),
            }
        }

        outcome
    }
}

impl RollbackOutcome {
    fn fail(&mut self, path: PathBuf, error: &std::io::Error) {
        warn!("[rollback failed] {}: {error}", path.display());
        self.failures.push(RollbackFailure {
            path,
            reason: error.to_string(),
        });
    }
}
