/// Identifies the submission that produced the current answer feedback.
///
/// Handed out by `QuizSession::submit_answer` and redeemed with
/// `QuizSession::clear_feedback` once the display delay has elapsed. A ticket
/// from an older submission, or from before a reset, no longer matches and
/// clears nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FeedbackTicket(u64);

impl FeedbackTicket {
    pub(crate) const fn new(generation: u64) -> Self {
        Self(generation)
    }

    #[must_use]
    pub const fn generation(self) -> u64 {
        self.0
    }
}
