//! Table-of-contents parser: single-cursor state machine.
//!
//! States:
//!
//! - **Scanning**: looking for a numbered entry (`3. ...`) or the
//!   `Features:` marker.
//! - **Absorbing**: an entry has started; following lines are appended to
//!   its text until a stop rule fires (see [`next_step`]).
//! - **Features**: entered on `Features:` and never left. Only indented
//!   `title .... p. N` lines are collected.
//!
//! An entry whose text matches neither story pattern is dropped without
//! affecting the rest of the region.

use crate::model::{FeatureEntry, StoryEntry, TableOfContents};
use regex::Regex;
use std::sync::LazyLock;

const FEATURES_MARKER: &str = "Features:";

// -- Line patterns ------------------------------------------------------------

static RE_ENTRY_START: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.").unwrap());

static RE_NUMBERED_ENTRY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)\.\s+(.+)").unwrap());

static RE_FIRST_ENTRY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*1\.").unwrap());

static RE_FEATURE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s+(.+?)\s*\.{2,}\s*p\.\s*(\d+)").unwrap());

// -- Entry text patterns ------------------------------------------------------

static RE_STORY_STRICT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^"(.+?)"\s*by\s+(.+?)\s*\.{2,}\s*p\.\s*(\d+)"#).unwrap()
});

static RE_STORY_LENIENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^"(.+?)"\s*by\s+(.+)"#).unwrap());

static RE_PAGE_TRAILER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*\.{2,}\s*p\.\s*\d+").unwrap());

// -- Parser state -------------------------------------------------------------

/// A story entry whose text is still being collected.
#[derive(Debug)]
struct PendingEntry {
    number: u32,
    text: String,
}

#[derive(Debug)]
enum State {
    Scanning,
    Absorbing(PendingEntry),
    Features,
}

/// What to do with the line under the cursor while absorbing.
#[derive(Debug, PartialEq, Eq)]
pub enum Step<'a> {
    /// Append this trimmed text to the entry.
    Absorb(&'a str),
    /// The next line opens a new entry or the features block.
    StopAtSection,
    /// A blank line followed by a new entry or the features block.
    StopAtBlankBeforeSection,
    /// A lone blank line.
    StopAtBlank,
}

// -- Public API ---------------------------------------------------------------

/// Drop everything before the first line that looks like entry `1.`.
/// Without such a line the region is returned unchanged.
pub fn content_start<'a, 'b>(region: &'a [&'b str]) -> &'a [&'b str] {
    match region.iter().position(|line| RE_FIRST_ENTRY.is_match(line)) {
        Some(start) => &region[start..],
        None => region,
    }
}

/// Parse a TOC region into stories and features, in document order.
pub fn parse(lines: &[&str]) -> TableOfContents {
    let mut toc = TableOfContents::default();
    let mut state = State::Scanning;
    let mut cursor = 0;

    while cursor < lines.len() {
        state = match state {
            State::Features => {
                let line = lines[cursor];
                if !is_features_marker(line.trim()) {
                    if let Some(feature) = parse_feature(line) {
                        toc.features.push(feature);
                    }
                }
                cursor += 1;
                State::Features
            }
            State::Scanning => {
                let trimmed = lines[cursor].trim();
                cursor += 1;
                if is_features_marker(trimmed) {
                    State::Features
                } else if let Some((number, rest)) = numbered_entry(trimmed) {
                    State::Absorbing(PendingEntry {
                        number,
                        text: rest.to_string(),
                    })
                } else {
                    State::Scanning
                }
            }
            State::Absorbing(mut pending) => match next_step(lines, cursor) {
                Step::Absorb(text) => {
                    pending.text.push(' ');
                    pending.text.push_str(text);
                    cursor += 1;
                    State::Absorbing(pending)
                }
                _ => {
                    finish_entry(&mut toc, pending);
                    State::Scanning
                }
            },
        };
    }

    if let State::Absorbing(pending) = state {
        finish_entry(&mut toc, pending);
    }

    toc
}

/// Decide whether `lines[cursor]` continues the entry being absorbed.
/// Rules are checked in order; the first that applies decides.
pub fn next_step<'a>(lines: &[&'a str], cursor: usize) -> Step<'a> {
    let next = lines[cursor].trim();
    if opens_section(next) {
        return Step::StopAtSection;
    }
    if next.is_empty() {
        let after_opens_section = lines
            .get(cursor + 1)
            .is_some_and(|line| opens_section(line.trim()));
        if after_opens_section {
            return Step::StopAtBlankBeforeSection;
        }
        return Step::StopAtBlank;
    }
    Step::Absorb(next)
}

/// Extract title, author and page from an entry's accumulated text.
pub fn parse_story(number: u32, text: &str) -> Option<StoryEntry> {
    if let Some(caps) = RE_STORY_STRICT.captures(text) {
        if let Ok(page) = caps[3].parse() {
            return Some(StoryEntry {
                number,
                title: caps[1].trim().to_string(),
                author: caps[2].trim().to_string(),
                page,
            });
        }
    }

    let caps = RE_STORY_LENIENT.captures(text)?;
    let author = RE_PAGE_TRAILER.replace_all(caps[2].trim(), "");
    Some(StoryEntry {
        number,
        title: caps[1].trim().to_string(),
        author: author.trim().to_string(),
        page: 0,
    })
}

/// Parse an indented `title .... p. N` line from the features block.
pub fn parse_feature(line: &str) -> Option<FeatureEntry> {
    let caps = RE_FEATURE.captures(line)?;
    Some(FeatureEntry {
        title: caps[1].trim().to_string(),
        page: caps[2].parse().ok()?,
    })
}

// -- Helpers ------------------------------------------------------------------

fn is_features_marker(trimmed: &str) -> bool {
    trimmed.starts_with(FEATURES_MARKER)
}

/// Loose test used by the stop rules: any `<digits>.` prefix.
fn opens_section(trimmed: &str) -> bool {
    RE_ENTRY_START.is_match(trimmed) || is_features_marker(trimmed)
}

/// Strict test for an entry start: `<digits>. <rest>`.
fn numbered_entry(trimmed: &str) -> Option<(u32, &str)> {
    let caps = RE_NUMBERED_ENTRY.captures(trimmed)?;
    let number = caps[1].parse().ok()?;
    let rest = caps.get(2)?.as_str();
    Some((number, rest))
}

fn finish_entry(toc: &mut TableOfContents, pending: PendingEntry) {
    match parse_story(pending.number, &pending.text) {
        Some(story) => toc.stories.push(story),
        None => tracing::trace!(
            number = pending.number,
            text = %pending.text,
            "dropping unparseable entry"
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn story(number: u32, title: &str, author: &str, page: u32) -> StoryEntry {
        StoryEntry {
            number,
            title: title.to_string(),
            author: author.to_string(),
            page,
        }
    }

    #[test]
    fn single_line_entry() {
        let toc = parse(&[r#"1. "Signal Dawn" by Mara Voss ..... p. 7"#]);
        assert_eq!(toc.stories, vec![story(1, "Signal Dawn", "Mara Voss", 7)]);
        assert!(toc.features.is_empty());
    }

    #[test]
    fn wrapped_title_is_joined() {
        let toc = parse(&[
            r#"2. "The Long Silence,"#,
            r#"    Part II" by R. Okafor ..... p. 22"#,
        ]);
        assert_eq!(
            toc.stories,
            vec![story(2, "The Long Silence, Part II", "R. Okafor", 22)]
        );
    }

    #[test]
    fn wrapped_byline_is_joined() {
        let toc = parse(&[
            r#"4. "A Very Long Title Indeed""#,
            r#"       by Someone Else .......... p. 31"#,
            r#"5. "Next" by N. Body ... p. 40"#,
        ]);
        assert_eq!(
            toc.stories,
            vec![
                story(4, "A Very Long Title Indeed", "Someone Else", 31),
                story(5, "Next", "N. Body", 40),
            ]
        );
    }

    #[test]
    fn lenient_without_page() {
        let toc = parse(&[r#"3. "Untitled Fragment" by Unknown"#]);
        assert_eq!(toc.stories, vec![story(3, "Untitled Fragment", "Unknown", 0)]);
    }

    #[test]
    fn strict_is_not_end_anchored() {
        let entry = parse_story(6, r#""Echo" by Ann Lee .... p. 12 (reprint)"#).unwrap();
        assert_eq!(entry, story(6, "Echo", "Ann Lee", 12));

        let entry = parse_story(7, r#""Echo" by Ann Lee p. 12 .... p. 9"#).unwrap();
        assert_eq!(entry, story(7, "Echo", "Ann Lee p. 12", 9));
    }

    #[test]
    fn unreadable_page_falls_back_and_strips_trailer() {
        // Page too large for the field: the strict match is discarded and the
        // lenient pattern removes the leader from the author text.
        let entry = parse_story(9, r#""Echo" by Ann Lee .... p. 99999999999"#).unwrap();
        assert_eq!(entry, story(9, "Echo", "Ann Lee", 0));
    }

    #[test]
    fn lenient_fallback_zero_page() {
        let entry = parse_story(8, r#""Echo" by Ann Lee, with notes"#).unwrap();
        assert_eq!(entry, story(8, "Echo", "Ann Lee, with notes", 0));
    }

    #[test]
    fn unquoted_entry_is_dropped() {
        let toc = parse(&[
            "1. Editorial Remarks ..... p. 2",
            r#"2. "Kept" by K. Eep ..... p. 5"#,
        ]);
        assert_eq!(toc.stories, vec![story(2, "Kept", "K. Eep", 5)]);
    }

    #[test]
    fn numbers_are_verbatim() {
        let toc = parse(&[
            r#"3. "C" by X ... p. 1"#,
            r#"3. "C again" by Y ... p. 2"#,
            r#"1. "A" by Z ... p. 3"#,
        ]);
        let numbers: Vec<u32> = toc.stories.iter().map(|s| s.number).collect();
        assert_eq!(numbers, vec![3, 3, 1]);
    }

    #[test]
    fn features_block() {
        let toc = parse(&[
            r#"1. "Signal Dawn" by Mara Voss ..... p. 7"#,
            "",
            "Features:",
            "   Letters from Readers .......... p. 4",
            "   The Science Desk ..... p. 88",
            "Unindented Line ..... p. 90",
            r#"   2. "Not a story" by Nobody ..... p. 99"#,
        ]);
        assert_eq!(toc.stories, vec![story(1, "Signal Dawn", "Mara Voss", 7)]);
        assert_eq!(
            toc.features,
            vec![
                FeatureEntry {
                    title: "Letters from Readers".to_string(),
                    page: 4,
                },
                FeatureEntry {
                    title: "The Science Desk".to_string(),
                    page: 88,
                },
                FeatureEntry {
                    title: r#"2. "Not a story" by Nobody"#.to_string(),
                    page: 99,
                },
            ]
        );
    }

    #[test]
    fn features_marker_ends_absorption() {
        let toc = parse(&[
            r#"1. "Last" by L. Ast"#,
            "Features:",
            "   Puzzle Page ... p. 60",
        ]);
        assert_eq!(toc.stories, vec![story(1, "Last", "L. Ast", 0)]);
        assert_eq!(toc.features.len(), 1);
    }

    #[test]
    fn repeated_marker_is_not_a_feature() {
        let toc = parse(&["Features:", "   Features: ..... p. 3", "   Quiz ... p. 8"]);
        assert_eq!(
            toc.features,
            vec![FeatureEntry {
                title: "Quiz".to_string(),
                page: 8,
            }]
        );
    }

    #[test]
    fn blank_line_ends_entry() {
        let toc = parse(&[
            r#"1. "Alpha" by A. One"#,
            "",
            "   ..... p. 9",
        ]);
        assert_eq!(toc.stories, vec![story(1, "Alpha", "A. One", 0)]);
    }

    #[test]
    fn stop_rules_in_order() {
        let lines = [
            r#"1. "A" by B"#,
            "   continued",
            "2. next",
            "",
            "3. after blank",
            "",
            "Features:",
            "",
            "",
            "12.5 percent",
        ];
        assert_eq!(next_step(&lines, 1), Step::Absorb("continued"));
        assert_eq!(next_step(&lines, 2), Step::StopAtSection);
        assert_eq!(next_step(&lines, 3), Step::StopAtBlankBeforeSection);
        assert_eq!(next_step(&lines, 5), Step::StopAtBlankBeforeSection);
        assert_eq!(next_step(&lines, 6), Step::StopAtSection);
        assert_eq!(next_step(&lines, 7), Step::StopAtBlank);
        assert_eq!(next_step(&lines, 9), Step::StopAtSection);
    }

    #[test]
    fn blank_at_end_of_region() {
        let lines = [r#"1. "A" by B"#, ""];
        assert_eq!(next_step(&lines, 1), Step::StopAtBlank);
    }

    #[test]
    fn loose_entry_start_stops_but_does_not_open() {
        // "12." has no text after it: it halts absorption but is not an entry.
        let toc = parse(&[r#"1. "A" by B ... p. 3"#, "12.", r#"2. "C" by D ... p. 4"#]);
        assert_eq!(
            toc.stories,
            vec![story(1, "A", "B", 3), story(2, "C", "D", 4)]
        );
    }

    #[test]
    fn content_start_skips_heading() {
        let region = [
            "",
            "TABLE OF CONTENTS",
            "",
            r#"  1. "A" by B ... p. 3"#,
            "  2. ...",
        ];
        assert_eq!(content_start(&region).len(), 2);
        let no_entries = ["TABLE OF CONTENTS", ""];
        assert_eq!(content_start(&no_entries).len(), 2);
    }

    #[test]
    fn empty_region() {
        assert_eq!(parse(&[]), TableOfContents::default());
    }
}
