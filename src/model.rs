//! Data model for parsed issues and the aggregate catalog: format-agnostic.
//!
//! Field names and ordering are what downstream consumers of the manifest
//! read, so they must not change.

use serde::{Deserialize, Serialize};

/// Identity decoded from a conforming file name (`issue_001_jan_1953.txt`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueFileRef {
    pub number: u32,
    /// Lowercase three-letter code, e.g. "jan"
    pub month_abbr: String,
    /// Full month name, e.g. "January"
    pub month: &'static str,
    pub year: u32,
}

/// Header fields found between the first two dividers.
/// Missing fields stay empty.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    /// Date text from the `Issue #N — ...` line; not emitted
    pub date_line: String,
    pub publisher: String,
    pub editors: String,
    pub cover_price: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverArt {
    pub title: String,
    pub artist: String,
}

/// A numbered story from the table of contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoryEntry {
    /// As written in the source, never re-sequenced
    pub number: u32,
    pub title: String,
    pub author: String,
    /// 0 when no page number could be recovered
    pub page: u32,
}

/// An entry from the `Features:` block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureEntry {
    pub title: String,
    pub page: u32,
}

/// Parsed table of contents, in document order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TableOfContents {
    pub stories: Vec<StoryEntry>,
    pub features: Vec<FeatureEntry>,
}

/// Coarse two-valued classification by issue number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Era {
    #[serde(rename = "I")]
    First,
    #[serde(rename = "II")]
    Second,
}

/// Last issue number belonging to the first era.
pub const ERA_I_LAST_ISSUE: u32 = 48;

impl Era {
    pub fn of(number: u32) -> Self {
        if number <= ERA_I_LAST_ISSUE {
            Era::First
        } else {
            Era::Second
        }
    }
}

/// One fully assembled issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    pub number: u32,
    pub number_padded: String,
    pub month: String,
    pub month_abbr: String,
    pub year: u32,
    /// "Month Year"
    pub date: String,
    pub era: Era,
    pub filename: String,
    pub publisher: String,
    pub editors: String,
    pub cover_price: String,
    pub cover_art: Option<CoverArt>,
    pub stories: Vec<StoryEntry>,
    pub features: Vec<FeatureEntry>,
    pub story_count: usize,
}

/// The aggregate manifest written once per run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub title: String,
    pub total_issues: usize,
    pub era_i_count: usize,
    pub era_ii_count: usize,
    /// Distinct, ascending
    pub years: Vec<u32>,
    pub issues: Vec<Issue>,
}
