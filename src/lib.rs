//! Jobsift - relevance scoring and deduplication for scraped job postings
//!
//! This library provides the filtering core of a job-search pipeline.
//! External collaborators scrape postings and submit applications; this
//! crate deduplicates the scraped batch, applies hard filters, scores
//! each posting against a target profile, and returns a ranked result.

pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod outreach;

// Re-export commonly used types
pub use crate::core::{RankOutcome, Ranker};
pub use crate::error::{AppError, FilterError};
pub use crate::models::{
    ExperienceLevel, FilterSummary, JobPosting, RejectionReason, ScoredPosting, ScoringWeights,
    TargetProfile, WeightedKeyword,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        // Verify that the library exports work correctly
        let ranker = Ranker::with_defaults();
        let profile = TargetProfile {
            keywords: vec![WeightedKeyword {
                keyword: "rust".to_string(),
                weight: 1.0,
            }],
            min_salary: None,
            preferred_locations: vec![],
            experience_levels: vec![],
        };
        let outcome = ranker.filter_and_rank(vec![], &profile).unwrap();
        assert!(outcome.ranked.is_empty());
    }
}
