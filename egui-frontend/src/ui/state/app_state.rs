//! # Core Application State
//!
//! This module contains the essential application state that forms the backbone
//! of the PawsomeCare app.
//!
//! ## Responsibilities:
//! - Backend service handles
//! - The async runtime advice requests run on
//! - Main tab navigation state
//!
//! ## Purpose:
//! This represents the core "business state" of the application, separate from
//! UI-specific state like modals and chat input.

use shared::AppTab;
use tokio::runtime::Runtime;

use crate::backend::Backend;

/// Core application state containing essential app data
pub struct CoreAppState {
    /// Services for pets, reminders, records and advice
    pub backend: Backend,

    /// Runtime that advice requests are spawned on
    pub runtime: Runtime,

    /// Currently visible tab
    pub current_tab: AppTab,
}

impl CoreAppState {
    pub fn new(backend: Backend, runtime: Runtime) -> Self {
        Self {
            backend,
            runtime,
            current_tab: AppTab::default(), // Home
        }
    }
}
