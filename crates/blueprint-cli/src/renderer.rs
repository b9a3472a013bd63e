//! Terminal rendering module for rich markdown output
//!
//! This module provides terminal rendering capabilities using termimad
//! for rich markdown display with optional fallback to plain text.

use anyhow::Result;
use termimad::{crossterm::style::Color, MadSkin};

/// Terminal renderer that can switch between rich and plain text output
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    /// Create a new terminal renderer
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();

        skin.set_headers_fg(Color::Blue);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::Magenta);
        skin.inline_code.set_bg(Color::AnsiValue(238));

        Self { rich_enabled, skin }
    }

    /// Render markdown text to stdout
    pub fn render(&self, markdown: &str) -> Result<()> {
        if !self.rich_enabled {
            print!("{markdown}");
            return Ok(());
        }

        for line in markdown.lines() {
            if line.starts_with('#') {
                println!("\x1b[34m{line}\x1b[0m");
            } else if let Some((tag, rest)) = split_action_tag(line) {
                println!("- \x1b[{}m{tag}\x1b[0m{rest}", tag_color(tag));
            } else {
                self.skin.print_inline(line);
                println!();
            }
        }
        Ok(())
    }

    /// Render markdown text to stderr without styling
    pub fn render_error(&self, markdown: &str) {
        eprint!("{markdown}");
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}

/// Split a scaffold line like `- [create dir] src/` into its tag and rest.
fn split_action_tag(line: &str) -> Option<(&str, &str)> {
    let body = line.strip_prefix("- [")?;
    let end = body.find(']')?;
    Some((&line[2..end + 4], &body[end + 1..]))
}

/// ANSI color code for a scaffold action tag.
fn tag_color(tag: &str) -> &'static str {
    match tag {
        "[would create]" => "36",
        "[create dir]" | "[create file]" => "32",
        "[skip]" => "33",
        _ => "31",
    }
}
