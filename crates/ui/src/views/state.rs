#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    SettingsLocked,
    Unknown,
}

impl ViewError {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            ViewError::SettingsLocked => "Finish the current round before changing settings.",
            ViewError::Unknown => "Something went wrong. Please try again.",
        }
    }
}
