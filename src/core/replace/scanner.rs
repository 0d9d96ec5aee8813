//! Per-mode match finders and the shared scan loop.
//!
//! A scanner only answers "where is the next match at or after `start`, and
//! what replaces it". The loop in [`get_fragments`] owns the two cursors: one
//! in input-line offsets and one in output-line offsets, which drift apart
//! whenever matched and replacement text differ in length.

use regex::Regex;

use super::fragments::{Fragment, Fragments};
use super::query::{CaseVariant, Query};

/// The next match found by a scanner.
#[derive(Debug, PartialEq, Eq)]
struct Hit {
    /// Absolute byte offset in the line.
    index: usize,
    input_text: String,
    output_text: String,
}

trait Scanner {
    /// Find the leftmost non-empty match starting at or after `start`.
    fn find_at(&self, line: &str, start: usize) -> Option<Hit>;
}

struct SubstringScanner<'a> {
    pattern: &'a str,
    replacement: &'a str,
}

impl Scanner for SubstringScanner<'_> {
    fn find_at(&self, line: &str, start: usize) -> Option<Hit> {
        let pos = line[start..].find(self.pattern)?;
        Some(Hit {
            index: start + pos,
            input_text: self.pattern.to_string(),
            output_text: self.replacement.to_string(),
        })
    }
}

struct SubvertScanner<'a> {
    variants: &'a [CaseVariant],
}

impl Scanner for SubvertScanner<'_> {
    fn find_at(&self, line: &str, start: usize) -> Option<Hit> {
        let rest = &line[start..];

        // Leftmost match wins, otherwise `FooBar` could be rewritten before an
        // earlier `foo-bar`. Strict `<` keeps the first variant on ties.
        let mut best: Option<(usize, &CaseVariant)> = None;
        for variant in self.variants {
            match rest.find(&variant.from) {
                Some(pos) if best.map_or(true, |(best_pos, _)| pos < best_pos) => {
                    best = Some((pos, variant));
                }
                _ => {}
            }
        }

        let (pos, variant) = best?;
        Some(Hit {
            index: start + pos,
            input_text: variant.from.clone(),
            output_text: variant.to.clone(),
        })
    }
}

struct RegexScanner<'a> {
    regex: &'a Regex,
    template: &'a str,
}

impl Scanner for RegexScanner<'_> {
    fn find_at(&self, line: &str, start: usize) -> Option<Hit> {
        let mut at = start;
        loop {
            // Search only the unscanned remainder, so `^` matches at the cursor.
            let rest = &line[at..];
            let captures = self.regex.captures(rest)?;
            let whole = captures.get(0)?;

            if whole.is_empty() {
                // Empty matches never consume input; retry one character on.
                let next = rest[whole.end()..].chars().next()?;
                at += whole.end() + next.len_utf8();
                continue;
            }

            // Expand against this match's own groups only.
            let mut output_text = String::new();
            captures.expand(self.template, &mut output_text);

            return Some(Hit {
                index: at + whole.start(),
                input_text: whole.as_str().to_string(),
                output_text,
            });
        }
    }
}

/// Collect every non-overlapping match in `line`, left to right.
pub fn get_fragments(line: &str, query: &Query) -> Fragments {
    match query {
        Query::Substring {
            pattern,
            replacement,
        } => get_fragments_with_scanner(
            line,
            SubstringScanner {
                pattern,
                replacement,
            },
        ),
        Query::Regex { regex, template } => {
            get_fragments_with_scanner(line, RegexScanner { regex, template })
        }
        Query::Subvert(variants) => get_fragments_with_scanner(line, SubvertScanner { variants }),
    }
}

fn get_fragments_with_scanner(line: &str, scanner: impl Scanner) -> Fragments {
    let mut fragments = Fragments::new();
    let mut input_index = 0;
    let mut output_index = 0;

    while let Some(hit) = scanner.find_at(line, input_index) {
        debug_assert!(!hit.input_text.is_empty());

        // Unmatched text between matches has the same length in both lines.
        output_index += hit.index - input_index;
        input_index = hit.index;

        let input_len = hit.input_text.len();
        let output_len = hit.output_text.len();
        fragments.add(
            Fragment::new(input_index, hit.input_text),
            Fragment::new(output_index, hit.output_text),
        );

        input_index += input_len;
        output_index += output_len;
    }

    fragments
}
