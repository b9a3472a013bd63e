//! Display formatting for plans, verdicts and run results.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]);
//! wrapper types in [`collections`], [`results`] and [`status`] format
//! groups of values and operation outcomes. All output is markdown, which the
//! CLI renders through its terminal renderer or prints verbatim.
//!
//! ## Module Organization
//!
//! - [`collections`]: Collection wrapper types (Issues)
//! - [`results`]: Loop outcome, scaffold report and scaffold failure output
//! - [`status`]: Status and confirmation messages (OperationStatus)
//! - [`models`]: Display implementations for domain models
//!
//! ```rust
//! use blueprint_core::{models::Issue, display::Issues};
//!
//! let issues = vec![Issue::MissingArtifact { path: "src/lib.rs".to_string() }];
//! let output = Issues(&issues).to_string();
//! assert!(output.contains("- Task output 'src/lib.rs' not in artifacts list"));
//! ```

pub mod collections;
pub mod models;
pub mod results;
pub mod status;

pub use collections::Issues;
pub use results::FailureDetails;
pub use status::OperationStatus;
