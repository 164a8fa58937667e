use crate::model::QuestionCount;

/// Tally for a finished round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundSummary {
    correct: usize,
    question_count: QuestionCount,
}

impl RoundSummary {
    pub const TITLE: &'static str = "Congratulations!";

    /// `correct` is capped at the question count.
    #[must_use]
    pub fn new(correct: usize, question_count: QuestionCount) -> Self {
        Self {
            correct: correct.min(question_count.get()),
            question_count,
        }
    }

    #[must_use]
    pub fn correct(&self) -> usize {
        self.correct
    }

    #[must_use]
    pub fn question_count(&self) -> QuestionCount {
        self.question_count
    }

    #[must_use]
    pub fn is_perfect(&self) -> bool {
        self.correct == self.question_count.get()
    }

    #[must_use]
    pub fn message(&self) -> String {
        format!(
            "Your score is {} out of {}. Do you want to start again or change settings?",
            self.correct, self.question_count
        )
    }
}
