use std::fmt;

use quiz_core::model::{AnswerFeedback, Question, QuestionCount, QuizSettings, RoundSummary};
use tracing::{debug, info};

use super::feedback::FeedbackTicket;
use super::generator::QuestionGenerator;
use super::progress::QuizProgress;
use crate::config::QuizConfig;
use crate::error::SessionError;

//
// ─── ANSWER OUTCOME ───────────────────────────────────────────────────────────
//

/// Result of submitting an answer for the current question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerOutcome {
    pub correct: bool,
    /// Redeem with `QuizSession::clear_feedback` after the feedback delay.
    pub feedback: FeedbackTicket,
    /// Present when this answer finished the round.
    pub summary: Option<RoundSummary>,
}

//
// ─── SESSION ──────────────────────────────────────────────────────────────────
//

/// Single owner of all quiz state.
///
/// Idle until `start_session`, then steps through the generated questions one
/// submission at a time. After the last answer the round is complete and stays
/// so until `start_new_round` or `reset_to_settings`.
pub struct QuizSession {
    settings: QuizSettings,
    generator: QuestionGenerator,
    questions: Vec<Question>,
    current: Option<usize>,
    correct: usize,
    pending_answer: String,
    feedback: AnswerFeedback,
    feedback_generation: u64,
    summary: Option<RoundSummary>,
}

impl QuizSession {
    #[must_use]
    pub fn new(config: &QuizConfig) -> Self {
        Self::with_generator(QuestionGenerator::from_config(config))
    }

    #[must_use]
    pub fn with_generator(generator: QuestionGenerator) -> Self {
        Self {
            settings: QuizSettings::default(),
            generator,
            questions: Vec::new(),
            current: None,
            correct: 0,
            pending_answer: String::new(),
            feedback: AnswerFeedback::Unknown,
            feedback_generation: 0,
            summary: None,
        }
    }

    #[must_use]
    pub fn settings(&self) -> QuizSettings {
        self.settings
    }

    #[must_use]
    pub fn tables(&self) -> u8 {
        self.settings.tables()
    }

    #[must_use]
    pub fn question_count(&self) -> QuestionCount {
        self.settings.question_count()
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// `None` while idle.
    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        self.current.and_then(|index| self.questions.get(index))
    }

    #[must_use]
    pub fn correct_count(&self) -> usize {
        self.correct
    }

    #[must_use]
    pub fn pending_answer(&self) -> &str {
        &self.pending_answer
    }

    #[must_use]
    pub fn feedback(&self) -> AnswerFeedback {
        self.feedback
    }

    #[must_use]
    pub fn summary(&self) -> Option<&RoundSummary> {
        self.summary.as_ref()
    }

    #[must_use]
    pub fn is_round_complete(&self) -> bool {
        self.summary.is_some()
    }

    /// True while questions are being asked (started and not yet complete).
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.current.is_some() && self.summary.is_none()
    }

    #[must_use]
    pub fn progress(&self) -> QuizProgress {
        let total = self.questions.len();
        let is_complete = self.is_round_complete();
        let answered = match self.current {
            None => 0,
            Some(_) if is_complete => total,
            Some(index) => index,
        };
        QuizProgress {
            total,
            answered,
            remaining: total.saturating_sub(answered),
            correct: self.correct,
            is_complete,
        }
    }

    /// Set the table bound, clamped into 2..=12. Returns the stored value.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::SettingsLocked` while a round is in progress.
    pub fn set_tables(&mut self, tables: u32) -> Result<u8, SessionError> {
        self.ensure_unlocked()?;
        self.settings = self.settings.with_tables(tables);
        Ok(self.settings.tables())
    }

    /// Set the question count, snapped to the nearest of 5, 10 or 20.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::SettingsLocked` while a round is in progress.
    pub fn set_questions_count(&mut self, count: u32) -> Result<QuestionCount, SessionError> {
        self.ensure_unlocked()?;
        self.settings = self
            .settings
            .with_question_count(QuestionCount::nearest(count));
        Ok(self.settings.question_count())
    }

    pub fn set_pending_answer(&mut self, text: impl Into<String>) {
        self.pending_answer = text.into();
    }

    /// Generate a fresh batch of questions and move to the first one.
    ///
    /// Any previous questions, score and pending feedback are discarded.
    pub fn start_session(&mut self) {
        self.clear_round();
        self.questions = self.generator.generate(self.settings);
        self.current = Some(0);
        info!(
            tables = self.settings.tables(),
            questions = self.questions.len(),
            "quiz round started"
        );
    }

    /// Grade `input` against the current question and advance.
    ///
    /// Only the exact decimal form of the product counts as correct.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NoActiveRound` before the first `start_session`
    /// and `SessionError::Completed` once the last question was answered.
    pub fn submit_answer(&mut self, input: &str) -> Result<AnswerOutcome, SessionError> {
        let index = self.current.ok_or(SessionError::NoActiveRound)?;
        if self.is_round_complete() {
            return Err(SessionError::Completed);
        }
        let correct = self
            .questions
            .get(index)
            .ok_or(SessionError::NoActiveRound)?
            .is_answered_by(input);

        if correct {
            self.correct += 1;
        }
        self.feedback = AnswerFeedback::from_correct(correct);
        self.feedback_generation = self.feedback_generation.wrapping_add(1);
        self.pending_answer.clear();
        debug!(question = index, correct, "answer submitted");

        let summary = if index + 1 == self.questions.len() {
            let summary = RoundSummary::new(self.correct, self.settings.question_count());
            self.summary = Some(summary);
            info!(
                correct = summary.correct(),
                total = summary.question_count().get(),
                "quiz round completed"
            );
            Some(summary)
        } else {
            self.current = Some(index + 1);
            None
        };

        Ok(AnswerOutcome {
            correct,
            feedback: FeedbackTicket::new(self.feedback_generation),
            summary,
        })
    }

    /// Submit whatever is currently typed in the answer field.
    ///
    /// # Errors
    ///
    /// Same as `submit_answer`. On error the pending text is kept.
    pub fn submit_pending(&mut self) -> Result<AnswerOutcome, SessionError> {
        let input = std::mem::take(&mut self.pending_answer);
        let result = self.submit_answer(&input);
        if result.is_err() {
            self.pending_answer = input;
        }
        result
    }

    /// Reset the feedback mark if `ticket` still belongs to the latest submission.
    ///
    /// Returns true when the feedback was cleared.
    pub fn clear_feedback(&mut self, ticket: FeedbackTicket) -> bool {
        if ticket.generation() != self.feedback_generation {
            debug!(
                ticket = ticket.generation(),
                current = self.feedback_generation,
                "stale feedback reset ignored"
            );
            return false;
        }
        self.feedback = AnswerFeedback::Unknown;
        true
    }

    /// Drop the round and restore the default settings (2 tables, 5 questions).
    pub fn reset_to_settings(&mut self) {
        self.clear_round();
        self.settings = QuizSettings::default();
        info!("quiz reset to settings");
    }

    /// Drop the round and immediately start another with the same settings.
    pub fn start_new_round(&mut self) {
        self.clear_round();
        self.start_session();
    }

    fn clear_round(&mut self) {
        self.questions.clear();
        self.current = None;
        self.correct = 0;
        self.summary = None;
        self.pending_answer.clear();
        self.cancel_feedback();
    }

    fn cancel_feedback(&mut self) {
        self.feedback = AnswerFeedback::Unknown;
        self.feedback_generation = self.feedback_generation.wrapping_add(1);
    }

    fn ensure_unlocked(&self) -> Result<(), SessionError> {
        if self.is_active() {
            return Err(SessionError::SettingsLocked);
        }
        Ok(())
    }
}

impl fmt::Debug for QuizSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizSession")
            .field("settings", &self.settings)
            .field("questions_len", &self.questions.len())
            .field("current", &self.current)
            .field("correct", &self.correct)
            .field("feedback", &self.feedback)
            .field("summary", &self.summary)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
