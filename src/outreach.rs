use crate::models::{JobPosting, ScoredPosting};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Sender identity used to personalize outreach text
#[derive(Debug, Clone, Deserialize)]
pub struct SenderProfile {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub skills: Vec<String>,
}

impl SenderProfile {
    /// One-line skills summary for the message body
    pub fn skills_summary(&self) -> String {
        self.skills.join(", ")
    }
}

/// Rendered outreach message; transport is someone else's problem
#[derive(Debug, Clone, Serialize)]
pub struct OutreachMessage {
    pub subject: String,
    pub body: String,
}

const SUBJECT_TEMPLATES: &[&str] = &[
    "Application for {title} at {company}",
    "{title} opening - {name}",
    "Interested in the {title} role at {company}",
];

const BODY_TEMPLATES: &[&str] = &[
    "Dear Hiring Team at {company},\n\n\
     I am writing to apply for the {title} position. My background covers \
     {skills}, and I would welcome the chance to contribute to your team.\n\n\
     Best regards,\n{name}\n{email}\n{phone}",
    "Hello {company} team,\n\n\
     I came across your {title} opening and believe my experience with \
     {skills} is a strong fit. I would appreciate the opportunity to \
     discuss the role further.\n\n\
     Kind regards,\n{name}\n{email}\n{phone}",
    "Hi,\n\n\
     I noticed {company} is hiring for {title}. I have hands-on experience \
     with {skills} and would love to connect about the position.\n\n\
     Thanks,\n{name}\n{email}\n{phone}",
];

/// Render an outreach message for a posting
///
/// Template choice is driven entirely by the caller-supplied seed, so
/// the same (sender, posting, seed) triple always renders the same
/// text. Callers wanting per-posting variety mix the posting index or
/// dedup key into the seed themselves.
pub fn render_outreach(sender: &SenderProfile, posting: &JobPosting, seed: u64) -> OutreachMessage {
    let mut rng = StdRng::seed_from_u64(seed);
    let subject_template = SUBJECT_TEMPLATES[rng.gen_range(0..SUBJECT_TEMPLATES.len())];
    let body_template = BODY_TEMPLATES[rng.gen_range(0..BODY_TEMPLATES.len())];

    OutreachMessage {
        subject: fill(subject_template, sender, posting),
        body: fill(body_template, sender, posting),
    }
}

/// Render outreach for a ranked posting, mixing its rank into the seed
pub fn render_for_ranked(
    sender: &SenderProfile,
    scored: &ScoredPosting,
    base_seed: u64,
    rank: usize,
) -> OutreachMessage {
    render_outreach(sender, &scored.posting, base_seed.wrapping_add(rank as u64))
}

fn fill(template: &str, sender: &SenderProfile, posting: &JobPosting) -> String {
    let company = if posting.company.is_empty() {
        "your organization"
    } else {
        &posting.company
    };

    template
        .replace("{title}", &posting.title)
        .replace("{company}", company)
        .replace("{name}", &sender.name)
        .replace("{email}", &sender.email)
        .replace("{phone}", &sender.phone)
        .replace("{skills}", &sender.skills_summary())
}
