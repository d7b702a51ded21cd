use serde::{Deserialize, Serialize};

/// Raw job posting as produced by a scraping collaborator
///
/// Scrapers emit loosely-shaped records, so every field that can be
/// missing defaults instead of failing deserialization. A single bad
/// record must never abort a batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobPosting {
    pub source_platform: String,
    pub title: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub salary_amount: Option<f64>,
    pub posted_at: chrono::DateTime<chrono::Utc>,
    #[serde(default)]
    pub external_id: Option<String>,
}

impl JobPosting {
    /// Description text, treating a missing description as empty
    pub fn description_text(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }

    /// Lowercased title + description haystack used for keyword matching
    pub fn search_text(&self) -> String {
        format!("{} {}", self.title, self.description_text()).to_lowercase()
    }
}

/// A keyword with the weight it contributes to the relevance score
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeightedKeyword {
    pub keyword: String,
    pub weight: f64,
}

/// Accepted experience bands for a target profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceLevel {
    Entry,
    Mid,
    Senior,
}

/// The user's description of what they are looking for
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetProfile {
    pub keywords: Vec<WeightedKeyword>,
    #[serde(default)]
    pub min_salary: Option<f64>,
    #[serde(default)]
    pub preferred_locations: Vec<String>,
    #[serde(default)]
    pub experience_levels: Vec<ExperienceLevel>,
}

/// A posting that survived filtering, with its score attached
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredPosting {
    #[serde(flatten)]
    pub posting: JobPosting,
    pub relevance_score: f64,
    pub matched_keywords: Vec<String>,
}

/// Tunable scoring knobs
#[derive(Debug, Clone, Copy)]
pub struct ScoringWeights {
    pub location_bonus: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            location_bonus: 10.0,
        }
    }
}
