use super::TextMeasurer;
use crate::units::Px;
use log::trace;
use std::ops::Deref;

/// Clean up raw input before it is fitted or wrapped: leading and trailing
/// whitespace is trimmed and every run of whitespace, newlines included, is
/// collapsed into a single space. Whitespace-only input becomes empty.
pub fn normalize_text(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// An ordered list of wrapped lines. Never empty: wrapping empty text yields
/// a single empty line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineSet(Vec<String>);

impl LineSet {
    pub fn lines(&self) -> &[String] {
        &self.0
    }

    pub fn into_lines(self) -> Vec<String> {
        self.0
    }

    /// The words of every line, in order
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.0
            .iter()
            .flat_map(|line| line.split(' '))
            .filter(|word| !word.is_empty())
    }
}

impl Deref for LineSet {
    type Target = [String];

    fn deref(&self) -> &[String] {
        &self.0
    }
}

impl<'a> IntoIterator for &'a LineSet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Greedily wraps normalized `text` into lines no wider than `max_width`.
///
/// Words (separated by single spaces) are added to the current line until
/// adding the next one would make the line measure wider than `max_width`, at
/// which point a new line is started with that word. A word that is wider
/// than `max_width` all on its own is never broken; it gets a line to itself
/// and is allowed to overflow.
pub fn wrap_lines<M: TextMeasurer + ?Sized>(
    measurer: &M,
    text: &str,
    font_size: Px,
    max_width: Px,
) -> LineSet {
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();

    for word in text.split(' ').filter(|w| !w.is_empty()) {
        if current.is_empty() {
            current.push_str(word);
            continue;
        }

        let candidate = format!("{current} {word}");
        if measurer.width(&candidate, font_size) > max_width {
            lines.push(std::mem::replace(&mut current, word.to_string()));
        } else {
            current = candidate;
        }
    }

    // the trailing line always goes in, even if it's empty
    lines.push(current);

    trace!(
        "wrapped {} chars into {} lines at {font_size} within {max_width}",
        text.len(),
        lines.len()
    );

    LineSet(lines)
}
