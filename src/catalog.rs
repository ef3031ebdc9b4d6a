//! Catalog builder: assembles every document and aggregates the results.

use crate::assemble;
use crate::model::{Catalog, Era, Issue};
use anyhow::{bail, Context, Result};
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Title used when none is given on the command line.
pub const DEFAULT_TITLE: &str = "Tales from the Future and Beyond";

impl Catalog {
    /// Aggregate already-assembled issues, keeping their order.
    pub fn from_issues(title: &str, issues: Vec<Issue>) -> Self {
        let era_i_count = issues.iter().filter(|i| i.era == Era::First).count();
        let era_ii_count = issues.iter().filter(|i| i.era == Era::Second).count();
        let years: BTreeSet<u32> = issues.iter().map(|i| i.year).collect();

        Catalog {
            title: title.to_string(),
            total_issues: issues.len(),
            era_i_count,
            era_ii_count,
            years: years.into_iter().collect(),
            issues,
        }
    }
}

/// Assemble `(filename, content)` pairs in the order given.
/// Documents that cannot be parsed are logged and left out.
pub fn collect<I, N, C>(documents: I, marker: char) -> Vec<Issue>
where
    I: IntoIterator<Item = (N, C)>,
    N: AsRef<str>,
    C: AsRef<str>,
{
    let mut issues = Vec::new();
    for (name, content) in documents {
        match assemble::parse_issue(name.as_ref(), content.as_ref(), marker) {
            Ok(issue) => issues.push(issue),
            Err(reason) => tracing::warn!(filename = name.as_ref(), "{}", reason),
        }
    }
    issues
}

/// Read and assemble every file, in the order given.
///
/// Fails only when `paths` is empty or a file cannot be read; per-document
/// parse problems are skipped with a warning.
pub fn build(title: &str, paths: &[PathBuf], marker: char) -> Result<Catalog> {
    if paths.is_empty() {
        bail!("no issue files found");
    }

    let mut documents = Vec::with_capacity(paths.len());
    for path in paths {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        documents.push((file_name(path), content));
    }

    Ok(Catalog::from_issues(title, collect(documents, marker)))
}

/// Bare file name of a path, lossily converted.
pub fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.to_string_lossy().to_string())
}
