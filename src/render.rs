//! Output rendering: the JSON manifest and the human-readable run summary.

use crate::model::{Catalog, Issue};
use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Serialize any record as JSON, pretty (2-space indent) unless `compact`.
pub fn to_json<T: Serialize>(value: &T, compact: bool) -> Result<String> {
    let json = if compact {
        serde_json::to_string(value)
    } else {
        serde_json::to_string_pretty(value)
    };
    json.context("failed to serialize catalog")
}

/// Write `contents` to `path` through a sibling temporary file, so the
/// destination is either the old file or the complete new one.
pub fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create output directory: {}", parent.display()))?;
    }

    let mut tmp_name = path.as_os_str().to_owned();
    tmp_name.push(".tmp");
    let tmp = Path::new(&tmp_name);

    fs::write(tmp, contents).with_context(|| format!("failed to write {}", tmp.display()))?;
    fs::rename(tmp, path).with_context(|| format!("failed to replace {}", path.display()))?;
    Ok(())
}

/// One summary line per issue: `  #001 - January 1953 - 5 stories`.
pub fn issue_line(issue: &Issue) -> String {
    format!(
        "  #{} - {} - {} stories",
        issue.number_padded, issue.date, issue.story_count
    )
}

/// The full run summary, one line each, ending with a newline.
pub fn summary(catalog: &Catalog, destination: &str) -> String {
    let mut out = format!(
        "Generated {} with {} issues\n",
        destination, catalog.total_issues
    );
    for issue in &catalog.issues {
        out.push_str(&issue_line(issue));
        out.push('\n');
    }
    out
}
