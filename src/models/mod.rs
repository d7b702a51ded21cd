// Model exports
pub mod domain;
pub mod summary;

pub use domain::{
    ExperienceLevel, JobPosting, ScoredPosting, ScoringWeights, TargetProfile, WeightedKeyword,
};
pub use summary::{FilterSummary, RejectionReason};
