use crate::core::filters::location_matches;
use crate::models::{JobPosting, ScoringWeights, TargetProfile};

/// Calculate the relevance score for a single posting
///
/// Each profile keyword is matched case-insensitively as a substring of
/// the title + description haystack and contributes its weight exactly
/// once, no matter how often it occurs. A location bonus is added when
/// the posting's location matches a preferred one. Returns the score
/// and the matched keywords in profile order.
pub fn score_posting(
    posting: &JobPosting,
    profile: &TargetProfile,
    weights: &ScoringWeights,
) -> (f64, Vec<String>) {
    let haystack = posting.search_text();

    let mut score = 0.0;
    let mut matched = Vec::new();

    for entry in &profile.keywords {
        let needle = entry.keyword.to_lowercase();
        if !needle.is_empty() && haystack.contains(&needle) {
            score += entry.weight;
            matched.push(entry.keyword.clone());
        }
    }

    if location_matches(&posting.location, &profile.preferred_locations) {
        score += weights.location_bonus;
    }

    (score, matched)
}
