//! Cover-art credit parser (between divider 1 and divider 2).

use crate::model::CoverArt;
use regex::Regex;
use std::sync::LazyLock;

static RE_COVER_ART: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^Cover Art:\s*"(.+?)"\s*by\s+(.+)"#).unwrap());

/// First `Cover Art: "<title>" by <artist>` line in the region, if any.
pub fn parse(lines: &[&str]) -> Option<CoverArt> {
    lines.iter().find_map(|line| {
        let caps = RE_COVER_ART.captures(line.trim())?;
        Some(CoverArt {
            title: caps[1].to_string(),
            artist: caps[2].trim().to_string(),
        })
    })
}
