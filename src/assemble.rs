//! Issue assembler: runs the region parsers over one document and merges
//! their output into an [`Issue`].

use crate::error::SkipReason;
use crate::model::{Era, Issue, IssueFileRef};
use crate::parser::{cover, divider, filename, header, toc};

/// Parse one document. `filename` is the bare file name, `content` the
/// whole text. No I/O happens here.
pub fn parse_issue(filename: &str, content: &str, marker: char) -> Result<Issue, SkipReason> {
    let file_ref = filename::decode(filename)?;
    let lines: Vec<&str> = content.lines().collect();
    assemble(filename, &file_ref, &lines, marker)
}

/// Build an issue from a decoded file reference and the document lines.
pub fn assemble(
    filename: &str,
    file_ref: &IssueFileRef,
    lines: &[&str],
    marker: char,
) -> Result<Issue, SkipReason> {
    let dividers = divider::find(lines, marker);
    if dividers.len() < divider::REQUIRED {
        return Err(SkipReason::TooFewDividers {
            filename: filename.to_string(),
            found: dividers.len(),
            needed: divider::REQUIRED,
        });
    }

    let header = header::parse(&lines[dividers[0] + 1..dividers[1]]);
    let cover_art = cover::parse(&lines[dividers[1] + 1..dividers[2]]);

    let toc_end = dividers.get(3).copied().unwrap_or(lines.len());
    let toc_region = &lines[dividers[2] + 1..toc_end];
    let contents = toc::parse(toc::content_start(toc_region));

    tracing::debug!(
        filename,
        date_line = %header.date_line,
        dividers = dividers.len(),
        stories = contents.stories.len(),
        features = contents.features.len(),
        "parsed issue"
    );

    let story_count = contents.stories.len();
    Ok(Issue {
        number: file_ref.number,
        number_padded: filename::pad_number(file_ref.number),
        month: file_ref.month.to_string(),
        month_abbr: file_ref.month_abbr.clone(),
        year: file_ref.year,
        date: format!("{} {}", file_ref.month, file_ref.year),
        era: Era::of(file_ref.number),
        filename: filename.to_string(),
        publisher: header.publisher,
        editors: header.editors,
        cover_price: header.cover_price,
        cover_art,
        stories: contents.stories,
        features: contents.features,
        story_count,
    })
}
