use std::fmt;

use thiserror::Error;

/// Smallest selectable multiplication table.
pub const MIN_TABLES: u8 = 2;
/// Largest selectable multiplication table.
pub const MAX_TABLES: u8 = 12;
/// Table bound restored when settings are reset.
pub const DEFAULT_TABLES: u8 = MIN_TABLES;

//
// ─── ERRORS ───────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SettingsError {
    #[error("tables must be between 2 and 12, got {0}")]
    TablesOutOfRange(u32),

    #[error("question count must be one of 5, 10 or 20, got {0}")]
    InvalidQuestionCount(u32),
}

//
// ─── QUESTION COUNT ───────────────────────────────────────────────────────────
//

/// Number of questions in a round. Only these three sizes are offered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum QuestionCount {
    #[default]
    Five,
    Ten,
    Twenty,
}

impl QuestionCount {
    pub const ALL: [QuestionCount; 3] = [Self::Five, Self::Ten, Self::Twenty];

    #[must_use]
    pub const fn get(self) -> usize {
        match self {
            Self::Five => 5,
            Self::Ten => 10,
            Self::Twenty => 20,
        }
    }

    /// Snap an arbitrary count to the closest allowed value.
    ///
    /// Ties round down, so 7 maps to five and 15 to ten.
    #[must_use]
    pub fn nearest(count: u32) -> Self {
        match count {
            0..=7 => Self::Five,
            8..=15 => Self::Ten,
            _ => Self::Twenty,
        }
    }
}

impl TryFrom<u32> for QuestionCount {
    type Error = SettingsError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            5 => Ok(Self::Five),
            10 => Ok(Self::Ten),
            20 => Ok(Self::Twenty),
            other => Err(SettingsError::InvalidQuestionCount(other)),
        }
    }
}

impl fmt::Display for QuestionCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

//
// ─── QUIZ SETTINGS ────────────────────────────────────────────────────────────
//

/// Round configuration chosen before pressing start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizSettings {
    tables: u8,
    question_count: QuestionCount,
}

impl Default for QuizSettings {
    fn default() -> Self {
        Self {
            tables: DEFAULT_TABLES,
            question_count: QuestionCount::default(),
        }
    }
}

impl QuizSettings {
    /// Build settings from raw values, rejecting anything outside the allowed ranges.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError` if `tables` is outside 2..=12 or `question_count`
    /// is not 5, 10 or 20.
    pub fn new(tables: u32, question_count: u32) -> Result<Self, SettingsError> {
        let tables = u8::try_from(tables)
            .ok()
            .filter(|value| (MIN_TABLES..=MAX_TABLES).contains(value))
            .ok_or(SettingsError::TablesOutOfRange(tables))?;
        Ok(Self {
            tables,
            question_count: QuestionCount::try_from(question_count)?,
        })
    }

    #[must_use]
    pub fn tables(&self) -> u8 {
        self.tables
    }

    #[must_use]
    pub fn question_count(&self) -> QuestionCount {
        self.question_count
    }

    /// Set the table bound, clamped into 2..=12.
    #[must_use]
    pub fn with_tables(mut self, tables: u32) -> Self {
        let clamped = tables.clamp(u32::from(MIN_TABLES), u32::from(MAX_TABLES));
        self.tables = u8::try_from(clamped).unwrap_or(MAX_TABLES);
        self
    }

    #[must_use]
    pub fn with_question_count(mut self, question_count: QuestionCount) -> Self {
        self.question_count = question_count;
        self
    }
}
