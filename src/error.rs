//! Recoverable per-document failures.
//!
//! A `SkipReason` excludes one document from the catalog; the run goes on.
//! Fatal conditions use `anyhow` instead.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SkipReason {
    #[error("could not parse filename: {0}")]
    UnrecognizedFilename(String),

    #[error("unknown month abbreviation '{abbr}' in {filename}")]
    UnknownMonth { filename: String, abbr: String },

    #[error("not enough dividers in {filename} (found {found}, need {needed})")]
    TooFewDividers {
        filename: String,
        found: usize,
        needed: usize,
    },
}
