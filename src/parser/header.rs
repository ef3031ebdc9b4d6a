//! Header block parser (between divider 0 and divider 1).
//!
//! Each line goes through a fixed-priority classifier; the first pattern
//! that matches wins for that line. Across lines the last match wins.

use crate::model::HeaderInfo;
use regex::Regex;
use std::sync::LazyLock;

static RE_DATE_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^Issue\s+#(\d+)\s*—\s*(.+)").unwrap());

static RE_PUBLISHER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^Published by\s+(.+)").unwrap());

static RE_EDITORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^Editors?:\s*(.+)").unwrap());

static RE_COVER_PRICE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^Cover Price:\s*(.+)").unwrap());

/// Outcome of classifying one header line.
#[derive(Debug, PartialEq, Eq)]
pub enum HeaderLine {
    DateLine(String),
    Publisher(String),
    Editors(String),
    CoverPrice(String),
}

/// Classify a trimmed header line. `None` means no pattern matched.
pub fn classify(line: &str) -> Option<HeaderLine> {
    if let Some(caps) = RE_DATE_LINE.captures(line) {
        return Some(HeaderLine::DateLine(caps[2].trim().to_string()));
    }
    if let Some(caps) = RE_PUBLISHER.captures(line) {
        return Some(HeaderLine::Publisher(caps[1].trim().to_string()));
    }
    if let Some(caps) = RE_EDITORS.captures(line) {
        return Some(HeaderLine::Editors(caps[1].trim().to_string()));
    }
    if let Some(caps) = RE_COVER_PRICE.captures(line) {
        return Some(HeaderLine::CoverPrice(caps[1].trim().to_string()));
    }
    None
}

/// Parse the header region.
pub fn parse(lines: &[&str]) -> HeaderInfo {
    let mut info = HeaderInfo::default();
    for line in lines {
        match classify(line.trim()) {
            Some(HeaderLine::DateLine(v)) => info.date_line = v,
            Some(HeaderLine::Publisher(v)) => info.publisher = v,
            Some(HeaderLine::Editors(v)) => info.editors = v,
            Some(HeaderLine::CoverPrice(v)) => info.cover_price = v,
            None => {}
        }
    }
    info
}
