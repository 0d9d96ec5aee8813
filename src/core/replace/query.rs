use regex::Regex;
use serde::Serialize;

use crate::case::CaseStyle;
use crate::error::{Error, Result};

/// How a pattern is matched against each line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScanMode {
    /// Literal substring.
    Substring,
    /// Literal substring in every naming convention at once.
    Subvert,
    /// Regular expression with capture-group templates.
    Regex,
}

/// One naming-convention spelling of a subvert pattern and its replacement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CaseVariant {
    pub style: CaseStyle,
    pub from: String,
    pub to: String,
}

/// A validated pattern/replacement pair, built once per run.
#[derive(Debug, Clone)]
pub enum Query {
    Substring { pattern: String, replacement: String },
    Regex { regex: Regex, template: String },
    /// Variants in [`CaseStyle::ALL`] order, without repeated spellings.
    Subvert(Vec<CaseVariant>),
}

impl Query {
    pub fn new(mode: ScanMode, pattern: &str, replacement: &str) -> Result<Self> {
        match mode {
            ScanMode::Substring => Self::substring(pattern, replacement),
            ScanMode::Subvert => Self::subvert(pattern, replacement),
            ScanMode::Regex => Self::regex(pattern, replacement),
        }
    }

    pub fn substring(pattern: &str, replacement: &str) -> Result<Self> {
        require_pattern(pattern)?;
        Ok(Query::Substring {
            pattern: pattern.to_string(),
            replacement: replacement.to_string(),
        })
    }

    /// Compile `pattern` up front so a malformed expression fails before any
    /// line is scanned.
    pub fn regex(pattern: &str, replacement: &str) -> Result<Self> {
        require_pattern(pattern)?;
        let regex = Regex::new(pattern).map_err(|e| Error::validation_invalid_regex(pattern, &e))?;
        Ok(Query::Regex {
            regex,
            template: normalize_template(replacement),
        })
    }

    pub fn subvert(pattern: &str, replacement: &str) -> Result<Self> {
        require_pattern(pattern)?;
        require_identifier("pattern", pattern)?;
        require_identifier("replacement", replacement)?;

        let mut variants: Vec<CaseVariant> = Vec::with_capacity(CaseStyle::ALL.len());
        for style in CaseStyle::ALL {
            let from = style.apply(pattern);
            if from.is_empty() {
                return Err(Error::validation_invalid_argument(
                    "pattern",
                    format!(
                        "Pattern '{}' has no {} case spelling; subvert needs identifier-like text",
                        pattern,
                        style.label()
                    ),
                    None,
                    None,
                ));
            }
            // A spelling already claimed by an earlier style would always lose the tie.
            if variants.iter().any(|v| v.from == from) {
                continue;
            }
            variants.push(CaseVariant {
                style,
                from,
                to: style.apply(replacement),
            });
        }

        Ok(Query::Subvert(variants))
    }

    pub fn mode(&self) -> ScanMode {
        match self {
            Query::Substring { .. } => ScanMode::Substring,
            Query::Regex { .. } => ScanMode::Regex,
            Query::Subvert(_) => ScanMode::Subvert,
        }
    }
}

fn require_pattern(pattern: &str) -> Result<()> {
    if pattern.is_empty() {
        return Err(Error::validation_invalid_argument(
            "pattern",
            "Pattern cannot be empty",
            None,
            None,
        ));
    }
    Ok(())
}

/// Case conversion treats anything but letters, digits, `_`, `-` and spaces
/// as a word break, so such text would never be searched for as written.
fn require_identifier(field: &str, value: &str) -> Result<()> {
    if let Some(c) = value
        .chars()
        .find(|c| !(c.is_alphanumeric() || matches!(c, '_' | '-' | ' ')))
    {
        return Err(Error::validation_invalid_argument(
            field,
            format!(
                "'{}' contains '{}'; subvert only accepts letters, digits, '_', '-' and spaces",
                value, c
            ),
            None,
            None,
        ));
    }
    Ok(())
}

/// Rewrite `\N` back-references to the regex crate's `${N}` syntax.
///
/// `\\` becomes a literal backslash; any other escape is kept as written.
fn normalize_template(template: &str) -> String {
    let mut out = String::with_capacity(template.len());
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.peek() {
            Some(d) if d.is_ascii_digit() => {
                out.push_str("${");
                while let Some(d) = chars.peek().copied().filter(|d| d.is_ascii_digit()) {
                    out.push(d);
                    chars.next();
                }
                out.push('}');
            }
            Some('\\') => {
                out.push('\\');
                chars.next();
            }
            _ => out.push('\\'),
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    #[test]
    fn empty_pattern_is_rejected_in_every_mode() {
        for mode in [ScanMode::Substring, ScanMode::Subvert, ScanMode::Regex] {
            let err = Query::new(mode, "", "x").unwrap_err();
            assert_eq!(err.code, ErrorCode::ValidationInvalidArgument, "{:?}", mode);
        }
    }

    #[test]
    fn malformed_regex_fails_at_construction() {
        let err = Query::regex("(\\w+", "x").unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationInvalidRegex);
        assert_eq!(err.details["pattern"], "(\\w+");
    }

    #[test]
    fn subvert_derives_variants_in_declared_order() {
        let Query::Subvert(variants) = Query::subvert("foo_bar", "spam_eggs").unwrap() else {
            panic!("expected subvert query");
        };

        let pairs: Vec<(&str, &str)> = variants
            .iter()
            .map(|v| (v.from.as_str(), v.to.as_str()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("FooBar", "SpamEggs"),
                ("foo_bar", "spam_eggs"),
                ("foo-bar", "spam-eggs"),
                ("FOOBAR", "SPAMEGGS"),
                ("fooBar", "spamEggs"),
                ("FOO_BAR", "SPAM_EGGS"),
                ("Foo-Bar", "Spam-Eggs"),
                ("Foo_Bar", "Spam_Eggs"),
            ]
        );
        let styles: Vec<CaseStyle> = variants.iter().map(|v| v.style).collect();
        assert_eq!(styles, CaseStyle::ALL.to_vec());
    }

    #[test]
    fn subvert_single_word_keeps_first_style_per_spelling() {
        let Query::Subvert(variants) = Query::subvert("id", "user_id").unwrap() else {
            panic!("expected subvert query");
        };

        let styles: Vec<CaseStyle> = variants.iter().map(|v| v.style).collect();
        assert_eq!(
            styles,
            vec![CaseStyle::Camel, CaseStyle::Snake, CaseStyle::Scream]
        );
    }

    #[test]
    fn subvert_rejects_punctuation() {
        let err = Query::subvert("a.b", "c").unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationInvalidArgument);
        assert_eq!(err.details["field"], "pattern");

        let err = Query::subvert("a_b", "c::d").unwrap_err();
        assert_eq!(err.details["field"], "replacement");

        assert!(Query::subvert("foo bar-baz_qux", "x").is_ok());
    }

    #[test]
    fn subvert_rejects_pattern_without_words() {
        let err = Query::subvert("__", "x").unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationInvalidArgument);
    }

    #[test]
    fn mode_reports_query_kind() {
        assert_eq!(Query::substring("a", "b").unwrap().mode(), ScanMode::Substring);
        assert_eq!(Query::regex("a", "b").unwrap().mode(), ScanMode::Regex);
        assert_eq!(Query::subvert("a", "b").unwrap().mode(), ScanMode::Subvert);
    }

    #[test]
    fn backslash_references_become_braced_groups() {
        assert_eq!(normalize_template(r"\2 \1"), "${2} ${1}");
        assert_eq!(normalize_template(r"\12x"), "${12}x");
        assert_eq!(normalize_template("$2 $1"), "$2 $1");
    }

    #[test]
    fn other_escapes_are_kept() {
        assert_eq!(normalize_template(r"a\\1"), r"a\1");
        assert_eq!(normalize_template(r"\n"), r"\n");
        assert_eq!(normalize_template("trailing\\"), "trailing\\");
    }
}
