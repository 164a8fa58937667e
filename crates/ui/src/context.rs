use std::time::Duration;

use services::{QuizConfig, QuizSession};

pub trait UiApp: Send + Sync {
    fn quiz_config(&self) -> QuizConfig;
}

#[derive(Clone)]
pub struct AppContext {
    config: QuizConfig,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &dyn UiApp) -> Self {
        Self {
            config: app.quiz_config(),
        }
    }

    #[must_use]
    pub fn config(&self) -> &QuizConfig {
        &self.config
    }

    #[must_use]
    pub fn feedback_delay(&self) -> Duration {
        self.config.feedback_delay
    }

    /// Fresh idle session using the configured seed.
    #[must_use]
    pub fn new_session(&self) -> QuizSession {
        QuizSession::new(&self.config)
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &dyn UiApp) -> AppContext {
    AppContext::new(app)
}
