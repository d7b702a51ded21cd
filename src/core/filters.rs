use crate::core::experience::{infer_level, ExperienceLexicon};
use crate::models::{JobPosting, TargetProfile};

/// Location strings that indicate a posting can be worked remotely
const REMOTE_INDICATORS: &[&str] = &[
    "remote",
    "work from home",
    "wfh",
    "anywhere",
    "virtual",
    "distributed",
    "home based",
    "telecommute",
];

/// Check the salary floor
///
/// A posting with no salary information is never excluded here; only a
/// stated amount below the floor disqualifies.
#[inline]
pub fn passes_salary_floor(posting: &JobPosting, profile: &TargetProfile) -> bool {
    match (posting.salary_amount, profile.min_salary) {
        (Some(amount), Some(floor)) => amount >= floor,
        _ => true,
    }
}

/// Check the inferred experience band against the accepted set
///
/// An empty accepted set means no constraint, and a posting with no
/// inferable level passes.
#[inline]
pub fn passes_experience(
    posting: &JobPosting,
    profile: &TargetProfile,
    lexicon: &ExperienceLexicon,
) -> bool {
    if profile.experience_levels.is_empty() {
        return true;
    }

    match infer_level(lexicon, posting.description_text()) {
        Some(level) => profile.experience_levels.contains(&level),
        None => true,
    }
}

/// Check whether a posting's location matches the preferred list
///
/// Matches are exact (case-insensitive) against any preferred location,
/// or a remote-work indicator in the posting when "remote" is among
/// the preferences.
#[inline]
pub fn location_matches(location: &str, preferred: &[String]) -> bool {
    let location_lower = location.trim().to_lowercase();

    for target in preferred {
        let target_lower = target.trim().to_lowercase();
        if location_lower == target_lower {
            return true;
        }
        if target_lower == "remote"
            && REMOTE_INDICATORS
                .iter()
                .any(|indicator| location_lower.contains(indicator))
        {
            return true;
        }
    }

    false
}
