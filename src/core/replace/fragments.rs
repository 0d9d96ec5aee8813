use serde::Serialize;

/// A span of text inside a line, similar to what `str::match_indices` yields.
///
/// `index` is a byte offset into the input line for input fragments, and into
/// the reconstructed line for output fragments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Fragment {
    pub index: usize,
    pub text: String,
}

impl Fragment {
    pub fn new(index: usize, text: impl Into<String>) -> Self {
        Self {
            index,
            text: text.into(),
        }
    }

    /// Byte offset just past this fragment.
    pub fn end(&self) -> usize {
        self.index + self.text.len()
    }
}

/// Matched spans and their replacements, one pair per match.
///
/// `inputs[i]` and `outputs[i]` always describe the same match.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Fragments {
    pub inputs: Vec<Fragment>,
    pub outputs: Vec<Fragment>,
}

impl Fragments {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.inputs.len()
    }

    pub fn add(&mut self, input: Fragment, output: Fragment) {
        debug_assert!(!input.text.is_empty(), "input fragment must be non-empty");
        debug_assert!(
            self.inputs.last().map_or(true, |prev| prev.end() <= input.index),
            "input fragments overlap or are out of order"
        );
        debug_assert!(
            self.outputs.last().map_or(true, |prev| prev.end() <= output.index),
            "output fragments overlap or are out of order"
        );
        self.inputs.push(input);
        self.outputs.push(output);
    }
}

/// Rebuild the output line from the input line and its fragments.
///
/// Text outside input fragments is copied verbatim; each input fragment is
/// swapped for its output fragment. Callers must pass ordered,
/// non-overlapping fragments of equal count.
pub fn reconstruct(input: &str, inputs: &[Fragment], outputs: &[Fragment]) -> String {
    debug_assert_eq!(inputs.len(), outputs.len());

    let mut current_index = 0;
    let mut output = String::with_capacity(input.len());
    for (input_fragment, output_fragment) in inputs.iter().zip(outputs) {
        output.push_str(&input[current_index..input_fragment.index]);
        output.push_str(&output_fragment.text);
        current_index = input_fragment.end();
    }
    output.push_str(&input[current_index..]);
    output
}
