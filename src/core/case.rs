//! Naming-convention transforms for identifier-like text.
//!
//! Every transform shares heck's word segmentation (separators `_`, `-`,
//! spaces, and lower→upper transitions), so converting between any two of
//! them keeps the same word sequence.

use heck::{
    ToKebabCase, ToLowerCamelCase, ToShoutySnakeCase, ToSnakeCase, ToTrainCase,
    ToUpperCamelCase,
};
use serde::Serialize;

/// A naming convention used by subvert mode.
///
/// Declaration order is significant: when two variants match at the same
/// offset, the one listed first in [`CaseStyle::ALL`] wins. The four core
/// conventions come first so single-word patterns resolve among them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CaseStyle {
    /// `FooBar`
    Camel,
    /// `foo_bar`
    Snake,
    /// `foo-bar`
    Kebab,
    /// `FOOBAR`
    Scream,
    /// `fooBar`
    LowerCamel,
    /// `FOO_BAR`
    ScreamingSnake,
    /// `Foo-Bar`
    Train,
    /// `Foo_Bar`
    Ugly,
}

impl CaseStyle {
    pub const ALL: [CaseStyle; 8] = [
        CaseStyle::Camel,
        CaseStyle::Snake,
        CaseStyle::Kebab,
        CaseStyle::Scream,
        CaseStyle::LowerCamel,
        CaseStyle::ScreamingSnake,
        CaseStyle::Train,
        CaseStyle::Ugly,
    ];

    pub fn apply(&self, s: &str) -> String {
        match self {
            CaseStyle::Camel => to_camel(s),
            CaseStyle::Snake => to_snake(s),
            CaseStyle::Kebab => to_kebab(s),
            CaseStyle::Scream => to_scream(s),
            CaseStyle::LowerCamel => to_lower_camel(s),
            CaseStyle::ScreamingSnake => to_screaming_snake(s),
            CaseStyle::Train => to_train(s),
            CaseStyle::Ugly => to_ugly(s),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CaseStyle::Camel => "camel",
            CaseStyle::Snake => "snake",
            CaseStyle::Kebab => "kebab",
            CaseStyle::Scream => "scream",
            CaseStyle::LowerCamel => "lower_camel",
            CaseStyle::ScreamingSnake => "screaming_snake",
            CaseStyle::Train => "train",
            CaseStyle::Ugly => "ugly",
        }
    }
}

/// `foo_bar` → `FooBar`
pub fn to_camel(s: &str) -> String {
    s.to_upper_camel_case()
}

/// `FooBar` → `foo_bar`
pub fn to_snake(s: &str) -> String {
    s.to_snake_case()
}

/// `FooBar` → `foo-bar`
pub fn to_kebab(s: &str) -> String {
    s.to_kebab_case()
}

/// `foo_bar` → `FOOBAR`
///
/// Camel-casing upper-cased, not snake-casing upper-cased: separators are
/// removed entirely.
pub fn to_scream(s: &str) -> String {
    to_camel(s).to_uppercase()
}

pub fn to_lower_camel(s: &str) -> String {
    s.to_lower_camel_case()
}

pub fn to_screaming_snake(s: &str) -> String {
    s.to_shouty_snake_case()
}

pub fn to_train(s: &str) -> String {
    s.to_train_case()
}

/// `foo_bar` → `Foo_Bar`
pub fn to_ugly(s: &str) -> String {
    to_train(s).replace('-', "_")
}
