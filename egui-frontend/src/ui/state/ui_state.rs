//! # UI State Module
//!
//! General UI state that affects the overall user experience but is not
//! specific to any particular component.
//!
//! ## Responsibilities:
//! - Short status messages ("Rex joined your pet family")

/// General UI state for user feedback
#[derive(Debug, Default)]
pub struct UIState {
    /// Status message shown under the header until dismissed
    pub status_message: Option<String>,
}

impl UIState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    pub fn clear_messages(&mut self) {
        self.status_message = None;
    }
}
