use crate::core::{
    dedup::dedup,
    experience::ExperienceLexicon,
    filters::{passes_experience, passes_salary_floor},
    scoring::score_posting,
};
use crate::error::FilterError;
use crate::models::{
    FilterSummary, JobPosting, RejectionReason, ScoredPosting, ScoringWeights, TargetProfile,
};

/// Result of a filter-and-rank run
#[derive(Debug)]
pub struct RankOutcome {
    pub ranked: Vec<ScoredPosting>,
    pub summary: FilterSummary,
}

/// Main filtering orchestrator - implements the relevance pipeline
///
/// # Pipeline Stages
/// 1. Deduplication (first-seen wins, stable order)
/// 2. Hard filters (salary floor, experience band)
/// 3. Keyword scoring with location bonus
/// 4. Ranking (score desc, recency desc, input order)
#[derive(Debug, Clone, Default)]
pub struct Ranker {
    weights: ScoringWeights,
    lexicon: ExperienceLexicon,
}

impl Ranker {
    pub fn new(weights: ScoringWeights, lexicon: ExperienceLexicon) -> Self {
        Self { weights, lexicon }
    }

    pub fn with_defaults() -> Self {
        Self::default()
    }

    /// Filter, score, and rank a batch of scraped postings
    ///
    /// Pure with respect to its inputs: no I/O, and identical inputs
    /// produce identical ordered output. Postings failing a hard filter
    /// are excluded outright, never emitted with a zero score.
    ///
    /// # Errors
    /// Returns `FilterError::Configuration` when the profile has no
    /// keywords, since every posting would otherwise score zero.
    pub fn filter_and_rank(
        &self,
        postings: Vec<JobPosting>,
        profile: &TargetProfile,
    ) -> Result<RankOutcome, FilterError> {
        if profile.keywords.is_empty() {
            return Err(FilterError::Configuration(
                "target profile has no keywords".to_string(),
            ));
        }

        let mut summary = FilterSummary {
            total_input: postings.len(),
            ..FilterSummary::default()
        };

        // Stage 1: collapse duplicate listings
        let (unique, duplicates) = dedup(postings);
        summary.deduplicated = unique.len();
        if duplicates > 0 {
            summary.excluded += duplicates;
            summary
                .rejections
                .insert(RejectionReason::DuplicateListing, duplicates);
        }

        // Stages 2 & 3: hard filters, then scoring
        let mut scored: Vec<(usize, ScoredPosting)> = Vec::with_capacity(unique.len());

        for (index, posting) in unique.into_iter().enumerate() {
            if !passes_salary_floor(&posting, profile) {
                summary.record_rejection(RejectionReason::SalaryBelowFloor);
                continue;
            }

            if !passes_experience(&posting, profile, &self.lexicon) {
                summary.record_rejection(RejectionReason::ExperienceMismatch);
                continue;
            }

            let (relevance_score, matched_keywords) =
                score_posting(&posting, profile, &self.weights);

            scored.push((
                index,
                ScoredPosting {
                    posting,
                    relevance_score,
                    matched_keywords,
                },
            ));
        }

        // Stage 4: score desc, then recency desc, then input order
        scored.sort_by(|(a_idx, a), (b_idx, b)| {
            b.relevance_score
                .partial_cmp(&a.relevance_score)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| b.posting.posted_at.cmp(&a.posting.posted_at))
                .then_with(|| a_idx.cmp(b_idx))
        });

        let ranked: Vec<ScoredPosting> = scored.into_iter().map(|(_, entry)| entry).collect();
        summary.ranked = ranked.len();

        Ok(RankOutcome { ranked, summary })
    }
}
