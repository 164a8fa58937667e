#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod quiz;

pub use config::{DEFAULT_FEEDBACK_DELAY, QuizConfig};
pub use error::{ConfigError, SessionError};
pub use quiz::{AnswerOutcome, FeedbackTicket, QuestionGenerator, QuizProgress, QuizSession};
