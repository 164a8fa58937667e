use quiz_core::model::{AnswerFeedback, MAX_TABLES, MIN_TABLES, QuestionCount, RoundSummary};
use services::{FeedbackTicket, QuizSession, SessionError};

use crate::views::ViewError;

/// User actions forwarded by the quiz screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuizIntent {
    SetTables(u32),
    IncrementTables,
    DecrementTables,
    SetQuestionCount(QuestionCount),
    Start,
    EditAnswer(String),
    Submit,
    StartNewRound,
    ChangeSettings,
    FeedbackExpired(FeedbackTicket),
}

/// Deferred work the view must perform after an intent was applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizEffect {
    None,
    ScheduleFeedbackReset(FeedbackTicket),
    CancelFeedbackReset,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SummaryDialogVm {
    pub title: &'static str,
    pub message: String,
}

/// Everything the quiz screen renders, detached from the session borrow.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizScreenVm {
    pub tables: u8,
    pub tables_label: String,
    pub can_decrement_tables: bool,
    pub can_increment_tables: bool,
    pub question_count: QuestionCount,
    pub settings_locked: bool,
    pub question: Option<String>,
    pub pending_answer: String,
    pub feedback: AnswerFeedback,
    pub remaining_label: String,
    pub score_label: String,
    pub summary: Option<SummaryDialogVm>,
}

pub struct QuizVm {
    session: QuizSession,
}

impl QuizVm {
    #[must_use]
    pub fn new(session: QuizSession) -> Self {
        Self { session }
    }

    #[must_use]
    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    /// Apply a user intent to the session.
    ///
    /// # Errors
    ///
    /// Returns `ViewError::SettingsLocked` when settings are changed mid-round
    /// and `ViewError::Unknown` for other out-of-state actions.
    pub fn apply(&mut self, intent: QuizIntent) -> Result<QuizEffect, ViewError> {
        let session = &mut self.session;
        let effect = match intent {
            QuizIntent::SetTables(tables) => {
                session.set_tables(tables).map_err(map_session_error)?;
                QuizEffect::None
            }
            QuizIntent::IncrementTables => {
                let next = u32::from(session.tables()) + 1;
                session.set_tables(next).map_err(map_session_error)?;
                QuizEffect::None
            }
            QuizIntent::DecrementTables => {
                let next = u32::from(session.tables()).saturating_sub(1);
                session.set_tables(next).map_err(map_session_error)?;
                QuizEffect::None
            }
            QuizIntent::SetQuestionCount(count) => {
                let raw = u32::try_from(count.get()).unwrap_or(u32::MAX);
                session.set_questions_count(raw).map_err(map_session_error)?;
                QuizEffect::None
            }
            QuizIntent::Start => {
                session.start_session();
                QuizEffect::CancelFeedbackReset
            }
            QuizIntent::EditAnswer(text) => {
                session.set_pending_answer(text);
                QuizEffect::None
            }
            QuizIntent::Submit => {
                let outcome = session.submit_pending().map_err(map_session_error)?;
                QuizEffect::ScheduleFeedbackReset(outcome.feedback)
            }
            QuizIntent::StartNewRound => {
                session.start_new_round();
                QuizEffect::CancelFeedbackReset
            }
            QuizIntent::ChangeSettings => {
                session.reset_to_settings();
                QuizEffect::CancelFeedbackReset
            }
            QuizIntent::FeedbackExpired(ticket) => {
                session.clear_feedback(ticket);
                QuizEffect::None
            }
        };
        Ok(effect)
    }

    #[must_use]
    pub fn screen(&self) -> QuizScreenVm {
        let session = &self.session;
        let tables = session.tables();
        let settings_locked = session.is_active();
        let progress = session.progress();

        QuizScreenVm {
            tables,
            tables_label: format!("Up to {tables} multiplication tables"),
            can_decrement_tables: !settings_locked && tables > MIN_TABLES,
            can_increment_tables: !settings_locked && tables < MAX_TABLES,
            question_count: session.question_count(),
            settings_locked,
            question: session.current_question().map(|q| q.text().to_string()),
            pending_answer: session.pending_answer().to_string(),
            feedback: session.feedback(),
            remaining_label: format!("Score ({} questions left)", progress.remaining),
            score_label: progress.score_label(),
            summary: session.summary().map(|summary| SummaryDialogVm {
                title: RoundSummary::TITLE,
                message: summary.message(),
            }),
        }
    }
}

fn map_session_error(err: SessionError) -> ViewError {
    match err {
        SessionError::SettingsLocked => ViewError::SettingsLocked,
        _ => ViewError::Unknown,
    }
}
