use std::fmt;

//
// ─── QUESTION ─────────────────────────────────────────────────────────────────
//

/// A single multiplication prompt with its expected product.
///
/// Questions are produced in batches when a round starts and are never mutated
/// afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    left: u8,
    right: u8,
    text: String,
    answer: u32,
}

impl Question {
    #[must_use]
    pub fn new(left: u8, right: u8) -> Self {
        Self {
            left,
            right,
            text: format!("What is {left} x {right}?"),
            answer: u32::from(left) * u32::from(right),
        }
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn answer(&self) -> u32 {
        self.answer
    }

    #[must_use]
    pub fn operands(&self) -> (u8, u8) {
        (self.left, self.right)
    }

    /// Returns true when `input` is exactly the decimal form of the answer.
    ///
    /// No trimming or numeric parsing: `" 12"`, `"012"` and `"12.0"` are all wrong.
    #[must_use]
    pub fn is_answered_by(&self, input: &str) -> bool {
        input == self.answer.to_string()
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
