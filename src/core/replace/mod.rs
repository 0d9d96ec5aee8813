//! Line-oriented find and replace.
//!
//! Each line is scanned into matched/replacement fragment pairs, then the
//! output line is rebuilt from them:
//! 1. A [`Query`] validates and compiles the pattern once per run
//! 2. The scanner for its mode collects every non-overlapping match
//! 3. [`reconstruct`] interleaves unmatched text with the replacements

mod files;
mod fragments;
mod query;
mod scanner;

use serde::Serialize;

use crate::error::Result;

pub use files::{
    replace_in_path, replace_in_text, FileReplacement, LineReplacement, ReplaceResult, SkippedFile,
};
pub use fragments::{reconstruct, Fragment, Fragments};
pub use query::{CaseVariant, Query, ScanMode};
pub use scanner::get_fragments;

/// A line with at least one match: the input, the rebuilt output, and the
/// fragments linking the two.
#[derive(Debug, Clone, Serialize)]
pub struct Replacement<'a> {
    input: &'a str,
    output: String,
    fragments: Fragments,
}

impl<'a> Replacement<'a> {
    pub fn input(&self) -> &'a str {
        self.input
    }

    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn input_fragments(&self) -> &[Fragment] {
        &self.fragments.inputs
    }

    pub fn output_fragments(&self) -> &[Fragment] {
        &self.fragments.outputs
    }

    pub fn into_parts(self) -> (String, Fragments) {
        (self.output, self.fragments)
    }
}

/// Run `query` on one line. `None` means the pattern does not occur.
pub fn replace<'a>(input: &'a str, query: &Query) -> Option<Replacement<'a>> {
    let fragments = get_fragments(input, query);
    if fragments.is_empty() {
        return None;
    }
    let output = reconstruct(input, &fragments.inputs, &fragments.outputs);
    Some(Replacement {
        input,
        output,
        fragments,
    })
}

/// One-shot form of [`replace`] that builds the query from raw strings.
///
/// Fails only when the query itself is invalid (empty pattern, malformed
/// regex). Callers processing many lines should build the [`Query`] once.
pub fn scan_and_reconstruct<'a>(
    mode: ScanMode,
    line: &'a str,
    pattern: &str,
    replacement: &str,
) -> Result<Option<Replacement<'a>>> {
    let query = Query::new(mode, pattern, replacement)?;
    Ok(replace(line, &query))
}
