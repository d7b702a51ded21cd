use serde::Serialize;
use std::collections::BTreeMap;

/// Why a posting was excluded from the ranked output
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectionReason {
    DuplicateListing,
    SalaryBelowFloor,
    ExperienceMismatch,
}

/// Run statistics handed to the reporting collaborator
#[derive(Debug, Clone, Default, Serialize)]
pub struct FilterSummary {
    pub total_input: usize,
    pub deduplicated: usize,
    pub excluded: usize,
    pub ranked: usize,
    pub rejections: BTreeMap<RejectionReason, usize>,
}

impl FilterSummary {
    pub fn record_rejection(&mut self, reason: RejectionReason) {
        self.excluded += 1;
        *self.rejections.entry(reason).or_insert(0) += 1;
    }

    /// Share of input postings that made it into the ranked output
    pub fn relevance_rate(&self) -> f64 {
        if self.total_input == 0 {
            return 0.0;
        }
        (self.ranked as f64 / self.total_input as f64) * 100.0
    }
}
