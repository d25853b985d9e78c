//! Field extraction utilities for fixed-width renewal lines
//!
//! Offsets in the feed layout count characters, not bytes. [`FixedWidthLine`]
//! maps character offsets onto byte boundaries once per line so every field
//! slice stays on a valid UTF-8 boundary.

use crate::constants::FieldSpan;

/// A data line indexed by character offset
#[derive(Debug, Clone)]
pub struct FixedWidthLine<'a> {
    line: &'a str,
    boundaries: Vec<usize>,
}

impl<'a> FixedWidthLine<'a> {
    /// Index a line for character-offset slicing
    pub fn new(line: &'a str) -> Self {
        let boundaries = line
            .char_indices()
            .map(|(index, _)| index)
            .chain(std::iter::once(line.len()))
            .collect();

        Self { line, boundaries }
    }

    /// Number of characters in the line
    pub fn char_len(&self) -> usize {
        self.boundaries.len() - 1
    }

    /// Raw (untrimmed) text covered by `span`
    ///
    /// Offsets past the end of the line are clamped, so a short line yields a
    /// shorter or empty slice rather than failing.
    pub fn slice(&self, span: FieldSpan) -> &'a str {
        let last = self.char_len();
        let start = span.start.min(last);
        let end = span.end.clamp(start, last);
        &self.line[self.boundaries[start]..self.boundaries[end]]
    }

    /// Text covered by `span` with surrounding whitespace removed
    pub fn field(&self, span: FieldSpan) -> &'a str {
        self.slice(span).trim()
    }

    /// Field text as an owned string
    pub fn field_string(&self, span: FieldSpan) -> String {
        self.field(span).to_string()
    }
}

/// Parse an integer column, `None` when the text is not an integer
pub fn parse_optional_i32(value: &str) -> Option<i32> {
    value.trim().parse::<i32>().ok()
}

/// Parse a decimal column, `None` when the text is not a finite number
pub fn parse_optional_f64(value: &str) -> Option<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|number| number.is_finite())
}
