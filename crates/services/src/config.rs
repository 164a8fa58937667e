use std::time::Duration;

use crate::error::ConfigError;

/// How long the correct/incorrect mark stays visible after a submission.
pub const DEFAULT_FEEDBACK_DELAY: Duration = Duration::from_millis(500);

pub const SEED_ENV: &str = "QUIZ_SEED";
pub const FEEDBACK_MS_ENV: &str = "QUIZ_FEEDBACK_MS";

/// Runtime knobs for a quiz session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizConfig {
    /// RNG seed for reproducible question sequences. `None` seeds from the OS.
    pub seed: Option<u64>,
    pub feedback_delay: Duration,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            seed: None,
            feedback_delay: DEFAULT_FEEDBACK_DELAY,
        }
    }
}

impl QuizConfig {
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    #[must_use]
    pub fn with_feedback_delay(mut self, delay: Duration) -> Self {
        self.feedback_delay = delay;
        self
    }

    /// Read `QUIZ_SEED` and `QUIZ_FEEDBACK_MS` from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as `from_env`, with an injectable variable lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but does not parse.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(raw) = lookup(SEED_ENV) {
            let seed = parse_seed(&raw)?;
            config = config.with_seed(seed);
        }
        if let Some(raw) = lookup(FEEDBACK_MS_ENV) {
            let delay = parse_feedback_delay(&raw)?;
            config = config.with_feedback_delay(delay);
        }

        Ok(config)
    }
}

/// # Errors
///
/// Returns `ConfigError::InvalidSeed` for anything but an unsigned integer.
pub fn parse_seed(raw: &str) -> Result<u64, ConfigError> {
    raw.trim()
        .parse()
        .map_err(|_| ConfigError::InvalidSeed {
            raw: raw.to_string(),
        })
}

/// # Errors
///
/// Returns `ConfigError::InvalidFeedbackDelay` for anything but a millisecond count.
pub fn parse_feedback_delay(raw: &str) -> Result<Duration, ConfigError> {
    raw.trim()
        .parse::<u64>()
        .map(Duration::from_millis)
        .map_err(|_| ConfigError::InvalidFeedbackDelay {
            raw: raw.to_string(),
        })
}
