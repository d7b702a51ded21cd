// Integration tests for the jobsift filtering pipeline

use chrono::{TimeZone, Utc};
use jobsift::core::dedup_key;
use jobsift::{
    ExperienceLevel, FilterError, JobPosting, Ranker, RejectionReason, TargetProfile,
    WeightedKeyword,
};

fn posting(
    platform: &str,
    external_id: Option<&str>,
    title: &str,
    description: &str,
    location: &str,
    salary: Option<f64>,
    day: u32,
) -> JobPosting {
    JobPosting {
        source_platform: platform.to_string(),
        title: title.to_string(),
        company: "Acme".to_string(),
        description: if description.is_empty() {
            None
        } else {
            Some(description.to_string())
        },
        location: location.to_string(),
        salary_amount: salary,
        posted_at: Utc.with_ymd_and_hms(2024, 3, day, 9, 0, 0).unwrap(),
        external_id: external_id.map(str::to_string),
    }
}

fn qa_profile() -> TargetProfile {
    TargetProfile {
        keywords: vec![
            WeightedKeyword {
                keyword: "selenium".to_string(),
                weight: 30.0,
            },
            WeightedKeyword {
                keyword: "python".to_string(),
                weight: 25.0,
            },
        ],
        min_salary: Some(500_000.0),
        preferred_locations: vec!["Remote".to_string()],
        experience_levels: vec![],
    }
}

fn sample_batch() -> Vec<JobPosting> {
    vec![
        posting(
            "linkedin",
            Some("a1"),
            "QA Automation Engineer",
            "Selenium and Python automation for web apps",
            "Remote",
            Some(600_000.0),
            10,
        ),
        posting(
            "indeed",
            None,
            "SDET",
            "Python, API testing, Selenium",
            "Hyderabad",
            None,
            12,
        ),
        posting(
            "naukri",
            Some("n7"),
            "Manual Tester",
            "Manual testing role",
            "Chennai",
            Some(400_000.0),
            11,
        ),
    ]
}

#[test]
fn test_dedup_idempotence() {
    let ranker = Ranker::with_defaults();
    let profile = qa_profile();

    let once = ranker.filter_and_rank(sample_batch(), &profile).unwrap();

    let mut doubled = sample_batch();
    doubled.extend(sample_batch());
    let twice = ranker.filter_and_rank(doubled, &profile).unwrap();

    let keys_once: Vec<_> = once.ranked.iter().map(|s| dedup_key(&s.posting)).collect();
    let keys_twice: Vec<_> = twice.ranked.iter().map(|s| dedup_key(&s.posting)).collect();

    assert_eq!(keys_once, keys_twice);
    assert_eq!(
        twice.summary.rejections[&RejectionReason::DuplicateListing],
        3
    );
}

#[test]
fn test_determinism_byte_identical() {
    let ranker = Ranker::with_defaults();
    let profile = qa_profile();

    let first = ranker.filter_and_rank(sample_batch(), &profile).unwrap();
    let second = ranker.filter_and_rank(sample_batch(), &profile).unwrap();

    let a = serde_json::to_string(&first.ranked).unwrap();
    let b = serde_json::to_string(&second.ranked).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_monotonic_exclusion_of_keywords() {
    let ranker = Ranker::with_defaults();
    let full = qa_profile();
    let mut reduced = qa_profile();
    reduced.keywords.retain(|k| k.keyword != "python");

    let with_all = ranker.filter_and_rank(sample_batch(), &full).unwrap();
    let with_fewer = ranker.filter_and_rank(sample_batch(), &reduced).unwrap();

    for scored in &with_fewer.ranked {
        let key = dedup_key(&scored.posting);
        let original = with_all
            .ranked
            .iter()
            .find(|s| dedup_key(&s.posting) == key)
            .expect("hard filters are unchanged, so the posting must still rank");
        assert!(
            scored.relevance_score <= original.relevance_score,
            "removing a keyword must never raise a score"
        );
    }
}

#[test]
fn test_salary_floor_excludes() {
    let ranker = Ranker::with_defaults();
    let profile = qa_profile();

    let outcome = ranker.filter_and_rank(sample_batch(), &profile).unwrap();

    assert!(outcome
        .ranked
        .iter()
        .all(|s| s.posting.salary_amount.unwrap_or(f64::MAX) >= 500_000.0));
    assert_eq!(
        outcome.summary.rejections[&RejectionReason::SalaryBelowFloor],
        1
    );
}

#[test]
fn test_empty_keywords_is_an_error() {
    let ranker = Ranker::with_defaults();
    let mut profile = qa_profile();
    profile.keywords.clear();

    let result = ranker.filter_and_rank(sample_batch(), &profile);

    assert!(matches!(result, Err(FilterError::Configuration(_))));
}

#[test]
fn test_duplicate_and_low_salary_batch() {
    let ranker = Ranker::with_defaults();
    let profile = qa_profile();

    let a = posting(
        "linkedin",
        Some("a1"),
        "QA Automation Engineer",
        "Hands-on Selenium and Python work",
        "Remote",
        Some(600_000.0),
        10,
    );
    let b = posting(
        "linkedin",
        Some("a1"),
        "QA Automation Engineer",
        "Hands-on Selenium and Python work",
        "Remote",
        Some(600_000.0),
        10,
    );
    let c = posting(
        "indeed",
        Some("c1"),
        "QA Tester",
        "Selenium testing",
        "Remote",
        Some(300_000.0),
        10,
    );

    let outcome = ranker.filter_and_rank(vec![a, b, c], &profile).unwrap();

    assert_eq!(outcome.ranked.len(), 1);
    // 30 + 25 keyword weight plus the default 10.0 location bonus
    assert_eq!(outcome.ranked[0].relevance_score, 65.0);
    assert_eq!(
        outcome.ranked[0].matched_keywords,
        vec!["selenium", "python"]
    );
}

#[test]
fn test_empty_description_scores_title_matches_only() {
    let ranker = Ranker::with_defaults();
    let mut profile = qa_profile();
    profile.min_salary = None;
    profile.preferred_locations.clear();

    let job = posting(
        "linkedin",
        Some("t1"),
        "Selenium QA Engineer",
        "",
        "Hyderabad",
        None,
        10,
    );

    let outcome = ranker.filter_and_rank(vec![job], &profile).unwrap();

    assert_eq!(outcome.ranked.len(), 1);
    assert_eq!(outcome.ranked[0].relevance_score, 30.0);
    assert_eq!(outcome.ranked[0].matched_keywords, vec!["selenium"]);
}

#[test]
fn test_experience_hard_filter() {
    let ranker = Ranker::with_defaults();
    let mut profile = qa_profile();
    profile.min_salary = None;
    profile.experience_levels = vec![ExperienceLevel::Entry];

    let entry = posting(
        "linkedin",
        Some("e1"),
        "QA Engineer",
        "Fresher friendly, entry level Selenium role",
        "Remote",
        None,
        10,
    );
    let senior = posting(
        "linkedin",
        Some("s1"),
        "QA Lead",
        "Senior lead with 7+ years in Selenium",
        "Remote",
        None,
        10,
    );

    let outcome = ranker.filter_and_rank(vec![entry, senior], &profile).unwrap();

    assert_eq!(outcome.ranked.len(), 1);
    assert_eq!(outcome.ranked[0].posting.external_id.as_deref(), Some("e1"));
    assert_eq!(
        outcome.summary.rejections[&RejectionReason::ExperienceMismatch],
        1
    );
}

#[test]
fn test_ranking_order_is_score_then_recency() {
    let ranker = Ranker::with_defaults();
    let mut profile = qa_profile();
    profile.min_salary = None;

    let strong_old = posting(
        "linkedin",
        Some("s1"),
        "QA Automation",
        "Selenium and Python",
        "Remote",
        None,
        5,
    );
    let weak_new = posting(
        "linkedin",
        Some("w1"),
        "QA Engineer",
        "Selenium only",
        "Remote",
        None,
        20,
    );
    let strong_new = posting(
        "linkedin",
        Some("s2"),
        "SDET",
        "Selenium plus Python scripting",
        "Remote",
        None,
        18,
    );

    let outcome = ranker
        .filter_and_rank(vec![strong_old, weak_new, strong_new], &profile)
        .unwrap();

    let order: Vec<_> = outcome
        .ranked
        .iter()
        .map(|s| s.posting.external_id.as_deref().unwrap())
        .collect();
    assert_eq!(order, vec!["s2", "s1", "w1"]);
}

#[test]
fn test_output_never_exceeds_input() {
    let ranker = Ranker::with_defaults();
    let profile = qa_profile();

    let batch = sample_batch();
    let input_len = batch.len();
    let outcome = ranker.filter_and_rank(batch, &profile).unwrap();

    assert!(outcome.ranked.len() <= input_len);
    assert_eq!(
        outcome.summary.ranked + outcome.summary.excluded,
        outcome.summary.total_input
    );
}
