/// Aggregated view of round progress, useful for UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct QuizProgress {
    pub total: usize,
    pub answered: usize,
    pub remaining: usize,
    pub correct: usize,
    pub is_complete: bool,
}

impl QuizProgress {
    /// Running score, e.g. `3/5`.
    #[must_use]
    pub fn score_label(&self) -> String {
        format!("{}/{}", self.correct, self.total)
    }
}
