use crate::core::ExperienceLexicon;
use crate::models::{ExperienceLevel, ScoringWeights, TargetProfile, WeightedKeyword};
use crate::outreach::SenderProfile;
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;
use validator::Validate;

/// Application configuration
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct Settings {
    #[validate(nested)]
    pub profile: ProfileSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub outreach: Option<OutreachSettings>,
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// The target profile as it appears in the settings file
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ProfileSettings {
    #[validate(length(min = 1, message = "at least one keyword is required"))]
    pub keywords: Vec<WeightedKeyword>,
    #[serde(default)]
    pub min_salary: Option<f64>,
    #[serde(default)]
    pub preferred_locations: Vec<String>,
    #[serde(default)]
    pub experience_levels: Vec<ExperienceLevel>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScoringSettings {
    #[serde(default = "default_location_bonus")]
    pub location_bonus: f64,
    #[serde(default)]
    pub lexicon: LexiconSettings,
}

impl Default for ScoringSettings {
    fn default() -> Self {
        Self {
            location_bonus: default_location_bonus(),
            lexicon: LexiconSettings::default(),
        }
    }
}

fn default_location_bonus() -> f64 {
    10.0
}

/// Experience-level indicator overrides; empty lists fall back to the
/// built-in lexicon
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LexiconSettings {
    #[serde(default)]
    pub entry: Vec<String>,
    #[serde(default)]
    pub mid: Vec<String>,
    #[serde(default)]
    pub senior: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutreachSettings {
    pub sender: SenderProfile,
    #[serde(default)]
    pub seed: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "json".to_string()
}

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Environment variables (prefixed with JOBSIFT_)
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., JOBSIFT_PROFILE__MIN_SALARY -> profile.min_salary
            .add_source(
                Environment::with_prefix("JOBSIFT")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let settings: Settings = settings.try_deserialize()?;
        settings.check()?;
        Ok(settings)
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("JOBSIFT")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let settings: Settings = settings.try_deserialize()?;
        settings.check()?;
        Ok(settings)
    }

    fn check(&self) -> Result<(), ConfigError> {
        self.validate()
            .map_err(|e| ConfigError::Message(e.to_string()))
    }

    /// Build the target profile the filter core consumes
    pub fn target_profile(&self) -> TargetProfile {
        TargetProfile {
            keywords: self.profile.keywords.clone(),
            min_salary: self.profile.min_salary,
            preferred_locations: self.profile.preferred_locations.clone(),
            experience_levels: self.profile.experience_levels.clone(),
        }
    }

    pub fn scoring_weights(&self) -> ScoringWeights {
        ScoringWeights {
            location_bonus: self.scoring.location_bonus,
        }
    }

    /// Experience lexicon with per-level config overrides applied
    pub fn experience_lexicon(&self) -> ExperienceLexicon {
        let defaults = ExperienceLexicon::default();
        let pick = |configured: &[String], fallback: Vec<String>| {
            if configured.is_empty() {
                fallback
            } else {
                configured.to_vec()
            }
        };

        ExperienceLexicon {
            entry: pick(&self.scoring.lexicon.entry, defaults.entry),
            mid: pick(&self.scoring.lexicon.mid, defaults.mid),
            senior: pick(&self.scoring.lexicon.senior, defaults.senior),
        }
    }
}
