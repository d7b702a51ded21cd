use crate::models::ExperienceLevel;

/// Indicator phrases used to infer the experience band of a posting
///
/// The defaults mirror the keyword lists a recruiter-facing posting
/// actually uses; they are configuration, not a fixed taxonomy.
#[derive(Debug, Clone)]
pub struct ExperienceLexicon {
    pub entry: Vec<String>,
    pub mid: Vec<String>,
    pub senior: Vec<String>,
}

impl Default for ExperienceLexicon {
    fn default() -> Self {
        Self {
            entry: to_strings(&[
                "fresher",
                "entry level",
                "entry-level",
                "junior",
                "trainee",
                "graduate",
                "new grad",
                "0-1 year",
                "0-2 year",
                "associate",
                "intern",
            ]),
            mid: to_strings(&[
                "mid level",
                "mid-level",
                "2-4 years",
                "3+ years",
                "intermediate",
            ]),
            senior: to_strings(&[
                "senior",
                "lead",
                "principal",
                "staff engineer",
                "architect",
                "5+ years",
                "6+ years",
                "7+ years",
                "8+ years",
                "10+ years",
                "manager",
            ]),
        }
    }
}

/// Infer the experience band of a posting from its text
///
/// Counts case-insensitive indicator hits per level; the level with the
/// most hits wins, and ties resolve toward the more senior level since
/// a posting mentioning both "junior" and "senior" usually wants the
/// latter. Returns None when no indicator matches, which callers treat
/// as acceptable for any profile.
pub fn infer_level(lexicon: &ExperienceLexicon, text: &str) -> Option<ExperienceLevel> {
    let haystack = text.to_lowercase();

    let counts = [
        (ExperienceLevel::Entry, count_hits(&lexicon.entry, &haystack)),
        (ExperienceLevel::Mid, count_hits(&lexicon.mid, &haystack)),
        (
            ExperienceLevel::Senior,
            count_hits(&lexicon.senior, &haystack),
        ),
    ];

    counts
        .into_iter()
        .filter(|(_, hits)| *hits > 0)
        // Level is the tie-breaker in the key, so seniority wins equal hit counts
        .max_by_key(|&(level, hits)| (hits, level))
        .map(|(level, _)| level)
}

fn count_hits(indicators: &[String], haystack: &str) -> usize {
    indicators
        .iter()
        .filter(|indicator| haystack.contains(&indicator.to_lowercase()))
        .count()
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
