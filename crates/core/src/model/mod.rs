mod feedback;
mod question;
mod settings;
mod summary;

pub use feedback::AnswerFeedback;
pub use question::Question;
pub use settings::{
    DEFAULT_TABLES, MAX_TABLES, MIN_TABLES, QuestionCount, QuizSettings, SettingsError,
};
pub use summary::RoundSummary;
