/// Transient correctness mark shown next to the answer field.
///
/// Set by each submission and cleared back to `Unknown` shortly afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnswerFeedback {
    #[default]
    Unknown,
    Correct,
    Incorrect,
}

impl AnswerFeedback {
    #[must_use]
    pub fn from_correct(correct: bool) -> Self {
        if correct {
            Self::Correct
        } else {
            Self::Incorrect
        }
    }

    #[must_use]
    pub fn is_known(self) -> bool {
        !matches!(self, Self::Unknown)
    }
}
