use ruplace::{reconstruct, replace, scan_and_reconstruct, Fragment, Query, ScanMode};

const LINES: &[&str] = &[
    "",
    "no match anywhere",
    "old",
    "old old old",
    "oldold",
    "prefix old suffix old",
    "le thé = thé !",
    "let foo_bar = FooBar(foo-bar, FOOBAR);",
    "fooBarfoo_barFOOBAR",
    "The record says 'LastName, FirstName'",
    "a=1, bb=22, ccc=333",
];

fn queries() -> Vec<Query> {
    vec![
        Query::substring("old", "new").unwrap(),
        Query::substring("old", "").unwrap(),
        Query::substring("thé", "café").unwrap(),
        Query::subvert("foo_bar", "spam_eggs").unwrap(),
        Query::subvert("old", "brand_new").unwrap(),
        Query::regex(r"(\w+), (\w+)", r"\2 \1").unwrap(),
        Query::regex(r"(\w+)=(\d+)", "$2=$1").unwrap(),
        Query::regex(r"o*", "0").unwrap(),
    ]
}

fn assert_non_overlapping(fragments: &[Fragment]) {
    for pair in fragments.windows(2) {
        assert!(
            pair[0].end() <= pair[1].index,
            "fragments overlap: {:?} then {:?}",
            pair[0],
            pair[1]
        );
    }
}

#[test]
fn fragments_never_overlap_in_any_mode() {
    for query in queries() {
        for line in LINES {
            let Some(replacement) = replace(line, &query) else {
                continue;
            };
            assert_eq!(
                replacement.input_fragments().len(),
                replacement.output_fragments().len()
            );
            assert_non_overlapping(replacement.input_fragments());
            assert_non_overlapping(replacement.output_fragments());
            // Input fragments are never empty, so their offsets strictly increase.
            for pair in replacement.input_fragments().windows(2) {
                assert!(pair[0].index < pair[1].index);
            }
        }
    }
}

#[test]
fn fragments_describe_both_lines_exactly() {
    for query in queries() {
        for line in LINES {
            let Some(replacement) = replace(line, &query) else {
                continue;
            };
            for fragment in replacement.input_fragments() {
                assert_eq!(&line[fragment.index..fragment.end()], fragment.text);
            }
            let output = replacement.output();
            for fragment in replacement.output_fragments() {
                assert_eq!(&output[fragment.index..fragment.end()], fragment.text);
            }
        }
    }
}

#[test]
fn unmatched_text_survives_verbatim() {
    for query in queries() {
        for line in LINES {
            let Some(replacement) = replace(line, &query) else {
                continue;
            };

            // Gaps between input fragments must equal gaps between output fragments.
            let mut input_cursor = 0;
            let mut output_cursor = 0;
            let output = replacement.output();
            for (input, out) in replacement
                .input_fragments()
                .iter()
                .zip(replacement.output_fragments())
            {
                assert_eq!(
                    &line[input_cursor..input.index],
                    &output[output_cursor..out.index]
                );
                input_cursor = input.end();
                output_cursor = out.end();
            }
            assert_eq!(&line[input_cursor..], &output[output_cursor..]);
        }
    }
}

#[test]
fn no_match_leaves_line_alone() {
    let line = "nothing relevant here";
    for query in [
        Query::substring("zzz", "y").unwrap(),
        Query::subvert("foo_bar", "spam_eggs").unwrap(),
        Query::regex(r"\d+", "#").unwrap(),
    ] {
        assert!(replace(line, &query).is_none(), "{:?}", query.mode());
    }
    assert_eq!(reconstruct(line, &[], &[]), line);
}

#[test]
fn substring_example() {
    let replacement = scan_and_reconstruct(ScanMode::Substring, "le thé = thé !", "thé", "café")
        .unwrap()
        .unwrap();
    assert_eq!(replacement.output(), "le café = café !");
    assert_eq!(replacement.input_fragments().len(), 2);
    assert_eq!(replacement.output_fragments().len(), 2);
}

#[test]
fn regex_backreference_example() {
    let replacement = scan_and_reconstruct(
        ScanMode::Regex,
        "The record says 'LastName, FirstName'",
        r"(\w+), (\w+)",
        r"\2 \1",
    )
    .unwrap()
    .unwrap();
    assert_eq!(replacement.output(), "The record says 'FirstName LastName'");
}

#[test]
fn subvert_cross_convention_example() {
    let replacement = scan_and_reconstruct(
        ScanMode::Subvert,
        "let foo_bar = FooBar()",
        "foo_bar",
        "spam_eggs",
    )
    .unwrap()
    .unwrap();
    assert_eq!(replacement.output(), "let spam_eggs = SpamEggs()");
}

#[test]
fn subvert_tie_break_prefers_snake_over_kebab() {
    // "id" is spelled identically in snake and kebab case; both start at 4.
    let replacement = scan_and_reconstruct(ScanMode::Subvert, "let id = 1;", "id", "user_id")
        .unwrap()
        .unwrap();
    assert_eq!(replacement.output(), "let user_id = 1;");
    assert_eq!(replacement.output_fragments()[0].text, "user_id");
}

#[test]
fn subvert_tie_break_prefers_camel_over_scream() {
    // A one-letter word is spelled "Q" in both camel and scream case.
    let replacement = scan_and_reconstruct(ScanMode::Subvert, "Q", "q", "new_q")
        .unwrap()
        .unwrap();
    assert_eq!(replacement.output(), "NewQ");
}

#[test]
fn substring_is_stable_once_applied() {
    let query = Query::substring("colour", "color").unwrap();
    let first = replace("colour, colour and more colour", &query).unwrap();
    assert_eq!(first.output(), "color, color and more color");

    let output = first.output().to_string();
    assert!(replace(&output, &query).is_none());
}

#[test]
fn malformed_regex_is_fatal_before_scanning() {
    let err = Query::regex("(a|b", "x").unwrap_err();
    assert_eq!(err.code.as_str(), "validation.invalid_regex");
}

#[test]
fn subvert_rewrites_lower_camel_and_screaming_snake() {
    let camel = scan_and_reconstruct(ScanMode::Subvert, "let x = fooBar;", "foo_bar", "spam_eggs")
        .unwrap()
        .unwrap();
    assert_eq!(camel.output(), "let x = spamEggs;");

    let scream = scan_and_reconstruct(
        ScanMode::Subvert,
        "const FOO_BAR: u8 = 1;",
        "foo_bar",
        "spam_eggs",
    )
    .unwrap()
    .unwrap();
    assert_eq!(scream.output(), "const SPAM_EGGS: u8 = 1;");
}

#[test]
fn regex_anchor_matches_at_each_unscanned_remainder() {
    let replacement = scan_and_reconstruct(ScanMode::Regex, "aaa", "^a", "b")
        .unwrap()
        .unwrap();
    assert_eq!(replacement.output(), "bbb");
}
