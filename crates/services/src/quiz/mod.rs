mod feedback;
mod generator;
mod progress;
mod service;

// Public API of the quiz subsystem.
pub use crate::error::SessionError;
pub use feedback::FeedbackTicket;
pub use generator::QuestionGenerator;
pub use progress::QuizProgress;
pub use service::{AnswerOutcome, QuizSession};
