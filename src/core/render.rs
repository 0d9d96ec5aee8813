//! Two-line diff rendering for a replaced line.
//!
//! ```text
//! src/main.rs:3 --- let foo_bar = FooBar();
//! src/main.rs:3 +++ let spam_eggs = SpamEggs();
//! ```
//!
//! With colour, fragments are underlined red/green. Without colour they are
//! wrapped as `{-old-}` / `{+new+}` so they stay distinguishable.

use colored::{ColoredString, Colorize};
use serde::{Deserialize, Serialize};
use std::io::IsTerminal;

use crate::error::{Error, Result};
use crate::replace::{Fragment, Replacement};

/// When to emit ANSI colour codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorChoice {
    /// Colour when stdout is a terminal and `NO_COLOR` is unset.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    pub fn from_str(s: &str) -> Result<Self> {
        match s {
            "auto" => Ok(ColorChoice::Auto),
            "always" => Ok(ColorChoice::Always),
            "never" => Ok(ColorChoice::Never),
            _ => Err(Error::validation_invalid_argument(
                "color",
                format!("Unknown color choice '{}'. Use: auto, always, never", s),
                None,
                Some(vec![
                    "auto".to_string(),
                    "always".to_string(),
                    "never".to_string(),
                ]),
            )),
        }
    }

    /// Resolve the choice and make `colored` follow it for this process.
    pub fn apply(&self) -> bool {
        let enabled = self.enabled();
        colored::control::set_override(enabled);
        enabled
    }

    pub fn enabled(&self) -> bool {
        match self {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => {
                std::env::var_os("NO_COLOR").is_none() && std::io::stdout().is_terminal()
            }
        }
    }
}

#[derive(Clone, Copy)]
enum Side {
    Removed,
    Added,
}

impl Side {
    fn marker(&self) -> &'static str {
        match self {
            Side::Removed => "--- ",
            Side::Added => "+++ ",
        }
    }

    fn paint(&self, text: &str) -> ColoredString {
        match self {
            Side::Removed => text.red(),
            Side::Added => text.green(),
        }
    }

    fn plain_delimiters(&self) -> (&'static str, &'static str) {
        match self {
            Side::Removed => ("{-", "-}"),
            Side::Added => ("{+", "+}"),
        }
    }
}

/// Render the removed line: `<prefix> --- <line with input fragments marked>`.
pub fn render_removed(prefix: &str, line: &str, fragments: &[Fragment], color: bool) -> String {
    render_side(Side::Removed, prefix, line, fragments, color)
}

/// Render the added line: `<prefix> +++ <line with output fragments marked>`.
pub fn render_added(prefix: &str, line: &str, fragments: &[Fragment], color: bool) -> String {
    render_side(Side::Added, prefix, line, fragments, color)
}

/// Both diff lines for one replacement, each terminated by a newline.
pub fn render_diff(path: &str, lineno: usize, replacement: &Replacement<'_>, color: bool) -> String {
    render_line_diff(
        path,
        lineno,
        replacement.input(),
        replacement.input_fragments(),
        replacement.output(),
        replacement.output_fragments(),
        color,
    )
}

/// Same as [`render_diff`] for callers holding owned lines and fragments.
pub fn render_line_diff(
    path: &str,
    lineno: usize,
    input: &str,
    input_fragments: &[Fragment],
    output: &str,
    output_fragments: &[Fragment],
    color: bool,
) -> String {
    let prefix = if color {
        format!("{}:{}", path.bold(), lineno)
    } else {
        format!("{}:{}", path, lineno)
    };

    let mut out = render_removed(&prefix, input, input_fragments, color);
    out.push('\n');
    out.push_str(&render_added(&prefix, output, output_fragments, color));
    out.push('\n');
    out
}

fn render_side(side: Side, prefix: &str, line: &str, fragments: &[Fragment], color: bool) -> String {
    let mut out = String::with_capacity(prefix.len() + line.len() + 16);
    out.push_str(prefix);
    out.push(' ');
    if color {
        out.push_str(&side.paint(side.marker()).to_string());
    } else {
        out.push_str(side.marker());
    }

    let mut current_index = 0;
    for fragment in fragments {
        out.push_str(&line[current_index..fragment.index]);
        if color {
            out.push_str(&side.paint(&fragment.text).underline().to_string());
        } else {
            let (open, close) = side.plain_delimiters();
            out.push_str(open);
            out.push_str(&fragment.text);
            out.push_str(close);
        }
        current_index = fragment.end();
    }
    out.push_str(&line[current_index..]);
    out
}
