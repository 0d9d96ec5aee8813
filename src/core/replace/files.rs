use serde::Serialize;
use std::path::Path;

use crate::error::{ErrorCode, Result};
use crate::utils::io;
use crate::walk::{self, WalkOptions};

use super::{replace, Fragment, Query, ScanMode};

/// A changed line, detached from the text it was read from.
#[derive(Debug, Clone, Serialize)]
pub struct LineReplacement {
    /// Line number (1-indexed).
    pub line: usize,
    pub input: String,
    pub output: String,
    pub input_fragments: Vec<Fragment>,
    pub output_fragments: Vec<Fragment>,
}

/// All changed lines of one file.
#[derive(Debug, Clone, Serialize)]
pub struct FileReplacement {
    pub file: String,
    pub lines: Vec<LineReplacement>,
    /// Total fragments across all lines.
    pub replacements: usize,
}

/// A file that could not be scanned.
#[derive(Debug, Clone, Serialize)]
pub struct SkippedFile {
    pub file: String,
    pub reason: String,
}

/// The outcome of running a query over a path.
#[derive(Debug, Clone, Serialize)]
pub struct ReplaceResult {
    pub mode: ScanMode,
    /// Files with at least one changed line.
    pub files: Vec<FileReplacement>,
    pub skipped: Vec<SkippedFile>,
    pub total_replacements: usize,
    pub total_lines: usize,
    pub total_files: usize,
}

/// Run `query` on every line of `contents`.
pub fn replace_in_text(contents: &str, query: &Query) -> Vec<LineReplacement> {
    contents
        .lines()
        .enumerate()
        .filter_map(|(i, line)| {
            let replacement = replace(line, query)?;
            let (output, fragments) = replacement.into_parts();
            Some(LineReplacement {
                line: i + 1,
                input: line.to_string(),
                output,
                input_fragments: fragments.inputs,
                output_fragments: fragments.outputs,
            })
        })
        .collect()
}

/// Run `query` on a file, or on every file under a directory.
///
/// Unreadable or non-UTF-8 files under a directory are skipped and reported;
/// an unreadable file given directly is an error.
pub fn replace_in_path(root: &Path, query: &Query, options: &WalkOptions) -> Result<ReplaceResult> {
    let paths = walk::collect_files(root, options)?;
    let single_file = root.is_file();

    let mut files = Vec::new();
    let mut skipped = Vec::new();

    for path in &paths {
        let display = if single_file {
            path.display().to_string()
        } else {
            path.strip_prefix(root)
                .unwrap_or(path)
                .to_string_lossy()
                .to_string()
        };

        let contents = match io::read_file(path, &format!("read {}", path.display())) {
            Ok(contents) => contents,
            Err(err) if !single_file && err.code == ErrorCode::InternalIoError => {
                log_status!("replace", "Skipping {}: {}", display, io_reason(&err));
                skipped.push(SkippedFile {
                    file: display,
                    reason: io_reason(&err),
                });
                continue;
            }
            Err(err) => return Err(err),
        };

        let lines = replace_in_text(&contents, query);
        if lines.is_empty() {
            continue;
        }

        let replacements = lines.iter().map(|l| l.input_fragments.len()).sum();
        files.push(FileReplacement {
            file: display,
            lines,
            replacements,
        });
    }

    let total_replacements = files.iter().map(|f| f.replacements).sum();
    let total_lines = files.iter().map(|f| f.lines.len()).sum();
    let total_files = files.len();

    Ok(ReplaceResult {
        mode: query.mode(),
        files,
        skipped,
        total_replacements,
        total_lines,
        total_files,
    })
}

fn io_reason(err: &crate::Error) -> String {
    err.details
        .get("error")
        .and_then(|e| e.as_str())
        .unwrap_or(&err.message)
        .to_string()
}
