use crate::models::JobPosting;
use std::collections::HashSet;

/// Identity of a logical job used to collapse repeated listings
///
/// Platform-scoped external ids are authoritative when the scraper
/// provides them; otherwise a normalized title+company+location
/// composite stands in.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DedupKey {
    External { platform: String, id: String },
    Composite(String),
}

/// Compute the dedup key for a posting
pub fn dedup_key(posting: &JobPosting) -> DedupKey {
    match posting.external_id.as_deref() {
        Some(id) if !id.trim().is_empty() => DedupKey::External {
            platform: normalize(&posting.source_platform),
            id: id.trim().to_string(),
        },
        _ => DedupKey::Composite(format!(
            "{}|{}|{}",
            normalize(&posting.title),
            normalize(&posting.company),
            normalize(&posting.location),
        )),
    }
}

/// Keep the first-seen posting per dedup key, preserving input order
///
/// Returns the surviving postings and the number of duplicates dropped.
pub fn dedup(postings: Vec<JobPosting>) -> (Vec<JobPosting>, usize) {
    let mut seen = HashSet::with_capacity(postings.len());
    let mut unique = Vec::with_capacity(postings.len());
    let mut dropped = 0;

    for posting in postings {
        if seen.insert(dedup_key(&posting)) {
            unique.push(posting);
        } else {
            dropped += 1;
        }
    }

    (unique, dropped)
}

/// Lowercase and collapse runs of whitespace to a single space
fn normalize(text: &str) -> String {
    text.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}
