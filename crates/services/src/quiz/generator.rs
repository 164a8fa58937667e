use std::fmt;

use quiz_core::model::{Question, QuizSettings};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::QuizConfig;

/// Draws question batches with both operands uniform over `1..=tables`.
pub struct QuestionGenerator {
    rng: StdRng,
}

impl QuestionGenerator {
    /// Deterministic generator, used for reproducible rounds and tests.
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    #[must_use]
    pub fn from_os_rng() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    #[must_use]
    pub fn from_config(config: &QuizConfig) -> Self {
        config
            .seed
            .map_or_else(Self::from_os_rng, Self::from_seed)
    }

    /// Generate `settings.question_count()` fresh questions.
    pub fn generate(&mut self, settings: QuizSettings) -> Vec<Question> {
        let tables = settings.tables();
        (0..settings.question_count().get())
            .map(|_| {
                let left = self.rng.random_range(1..=tables);
                let right = self.rng.random_range(1..=tables);
                Question::new(left, right)
            })
            .collect()
    }
}

impl fmt::Debug for QuestionGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuestionGenerator").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::model::{MAX_TABLES, MIN_TABLES, QuestionCount};

    #[test]
    fn operands_stay_within_tables() {
        let mut generator = QuestionGenerator::from_seed(7);
        for tables in u32::from(MIN_TABLES)..=u32::from(MAX_TABLES) {
            for count in QuestionCount::ALL {
                let settings = QuizSettings::default()
                    .with_tables(tables)
                    .with_question_count(count);
                let questions = generator.generate(settings);
                assert_eq!(questions.len(), count.get());
                for question in &questions {
                    let (left, right) = question.operands();
                    assert!((1..=settings.tables()).contains(&left));
                    assert!((1..=settings.tables()).contains(&right));
                    assert_eq!(question.answer(), u32::from(left) * u32::from(right));
                }
            }
        }
    }

    #[test]
    fn same_seed_same_questions() {
        let settings = QuizSettings::default()
            .with_tables(12)
            .with_question_count(QuestionCount::Twenty);
        let first = QuestionGenerator::from_seed(99).generate(settings);
        let second = QuestionGenerator::from_seed(99).generate(settings);
        assert_eq!(first, second);
    }

    #[test]
    fn covers_the_whole_range_eventually() {
        let mut generator = QuestionGenerator::from_seed(3);
        let settings = QuizSettings::default()
            .with_tables(4)
            .with_question_count(QuestionCount::Twenty);
        let mut seen = [false; 5];
        for _ in 0..20 {
            for question in generator.generate(settings) {
                let (left, right) = question.operands();
                seen[usize::from(left)] = true;
                seen[usize::from(right)] = true;
            }
        }
        assert!(seen[1..=4].iter().all(|hit| *hit), "operands seen: {seen:?}");
    }
}
