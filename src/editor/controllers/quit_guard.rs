//! Two-step quit confirmation for buffers with unsaved changes.

/// Confirmation state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuitState {
    /// Initial state, and the state after any non-quit key
    #[default]
    Armed,
    /// A quit was refused because of unsaved changes; the next quit goes through
    ConfirmPending,
}

/// Outcome of a quit keypress
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuitDecision {
    Quit,
    /// Refused; the caller should warn and keep running
    Confirm,
}

#[derive(Debug, Clone, Default)]
pub struct QuitGuard {
    state: QuitState,
}

impl QuitGuard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> QuitState {
        self.state
    }

    pub fn on_quit(&mut self, dirty: bool) -> QuitDecision {
        if dirty && self.state == QuitState::Armed {
            self.state = QuitState::ConfirmPending;
            QuitDecision::Confirm
        } else {
            QuitDecision::Quit
        }
    }

    /// Any other keypress cancels a pending confirmation
    pub fn reset(&mut self) {
        self.state = QuitState::Armed;
    }
}
