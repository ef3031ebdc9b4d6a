//! Filename decoder for `issue_<NNN>_<mon>_<YYYY>.<ext>`.

use crate::error::SkipReason;
use crate::model::IssueFileRef;
use regex::Regex;
use std::sync::LazyLock;

static RE_ISSUE_FILENAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^issue_([0-9]{3})_([a-z]{3})_([0-9]{4})\.[A-Za-z0-9]+$").unwrap()
});

/// Fixed month table, abbreviation → full name.
const MONTHS: [(&str, &str); 12] = [
    ("jan", "January"),
    ("feb", "February"),
    ("mar", "March"),
    ("apr", "April"),
    ("may", "May"),
    ("jun", "June"),
    ("jul", "July"),
    ("aug", "August"),
    ("sep", "September"),
    ("oct", "October"),
    ("nov", "November"),
    ("dec", "December"),
];

/// Look up the full month name for a lowercase three-letter code.
pub fn month_name(abbr: &str) -> Option<&'static str> {
    MONTHS
        .iter()
        .find(|(code, _)| *code == abbr)
        .map(|(_, name)| *name)
}

/// Decode a bare file name (no directory part).
pub fn decode(filename: &str) -> Result<IssueFileRef, SkipReason> {
    let caps = RE_ISSUE_FILENAME
        .captures(filename)
        .ok_or_else(|| SkipReason::UnrecognizedFilename(filename.to_string()))?;

    // Both fields are fixed-width digit runs, so they always fit.
    let number: u32 = caps[1]
        .parse()
        .map_err(|_| SkipReason::UnrecognizedFilename(filename.to_string()))?;
    let year: u32 = caps[3]
        .parse()
        .map_err(|_| SkipReason::UnrecognizedFilename(filename.to_string()))?;

    let abbr = &caps[2];
    let month = month_name(abbr).ok_or_else(|| SkipReason::UnknownMonth {
        filename: filename.to_string(),
        abbr: abbr.to_string(),
    })?;

    Ok(IssueFileRef {
        number,
        month_abbr: abbr.to_string(),
        month,
        year,
    })
}

/// Zero-padded display form of an issue number ("007").
pub fn pad_number(number: u32) -> String {
    format!("{:03}", number)
}
