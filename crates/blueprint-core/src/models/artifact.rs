//! Artifact path classification.

/// Whether an artifact path names a directory or a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    Directory,
    File,
}

impl ArtifactKind {
    /// Classify an artifact path: a trailing separator denotes a directory.
    ///
    /// ```rust
    /// use blueprint_core::models::ArtifactKind;
    ///
    /// assert_eq!(ArtifactKind::of("src/"), ArtifactKind::Directory);
    /// assert_eq!(ArtifactKind::of("src/core.py"), ArtifactKind::File);
    /// ```
    pub fn of(path: &str) -> Self {
        if path.ends_with('/') || path.ends_with(std::path::MAIN_SEPARATOR) {
            ArtifactKind::Directory
        } else {
            ArtifactKind::File
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ArtifactKind::Directory => "dir",
            ArtifactKind::File => "file",
        }
    }
}
