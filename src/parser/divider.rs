//! Divider locator.
//!
//! A divider is a line that, once trimmed, is nothing but a run of at least
//! [`MIN_RUN`] copies of the marker character.

/// Conventional marker character.
pub const DEFAULT_MARKER: char = '=';

/// Shortest run that counts as a divider.
pub const MIN_RUN: usize = 10;

/// Dividers a document needs: header, cover art and TOC regions.
pub const REQUIRED: usize = 3;

/// Whether a single line is a divider.
pub fn is_divider(line: &str, marker: char) -> bool {
    let trimmed = line.trim();
    let mut count = 0;
    for c in trimmed.chars() {
        if c != marker {
            return false;
        }
        count += 1;
    }
    count >= MIN_RUN
}

/// Zero-based indices of every divider line, ascending.
pub fn find(lines: &[&str], marker: char) -> Vec<usize> {
    lines
        .iter()
        .enumerate()
        .filter(|(_, line)| is_divider(line, marker))
        .map(|(i, _)| i)
        .collect()
}
