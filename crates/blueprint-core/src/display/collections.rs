//! Collection wrapper types for displaying groups of domain objects.

use std::fmt;

use crate::models::Issue;

/// Newtype wrapper for displaying a list of review issues, one per line.
pub struct Issues<'a>(pub &'a [Issue]);

impl fmt::Display for Issues<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No issues found.");
        }

        for issue in self.0 {
            writeln!(f, "- {issue}")?;
        }
        Ok(())
    }
}
