//! Shared error types for the services crate.

use thiserror::Error;

/// Errors emitted by `QuizSession`.
///
/// A wrong answer is not an error; these only cover calls made in the wrong
/// round state.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("no round is in progress")]
    NoActiveRound,
    #[error("round already completed")]
    Completed,
    #[error("settings cannot change while a round is in progress")]
    SettingsLocked,
}

/// Errors emitted while reading `QuizConfig` from the environment.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("invalid seed value: {raw}")]
    InvalidSeed { raw: String },
    #[error("invalid feedback delay (milliseconds): {raw}")]
    InvalidFeedbackDelay { raw: String },
}
