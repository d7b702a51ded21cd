// Core algorithm exports
pub mod dedup;
pub mod experience;
pub mod filters;
pub mod ranker;
pub mod scoring;

pub use dedup::{dedup, dedup_key, DedupKey};
pub use experience::{infer_level, ExperienceLexicon};
pub use filters::{location_matches, passes_experience, passes_salary_floor};
pub use ranker::{RankOutcome, Ranker};
pub use scoring::score_posting;
