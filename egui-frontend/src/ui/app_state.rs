//! # App State Module
//!
//! This module defines the central application struct and the named
//! operations views use to change it.
//!
//! ## Key Types:
//! - `PawsomeCareApp` - Main application state struct
//!
//! ## Key Functions:
//! - `new()` - Initialize the app with a Gemini-backed backend
//! - `from_backend()` - Initialize with any backend (used by tests)
//! - `navigate_to()`, `open_add_pet()`, `submit_add_pet()`, `toggle_reminder()`,
//!   `send_chat_message()`, `poll_advice_reply()` - state transitions
//!
//! ## State Management:
//! Views never mutate domain data directly. They call one of the transitions
//! below, which goes through a backend service.

use anyhow::{Context, Result};
use eframe::egui;
use log::{info, warn};
use shared::AppTab;
use tokio::runtime::Runtime;

use crate::backend::config::AdviceConfig;
use crate::backend::Backend;
use crate::ui::state::{ChatUiState, CoreAppState, ModalState, UIState};

/// Main application struct for the PawsomeCare app
pub struct PawsomeCareApp {
    pub core: CoreAppState,
    pub ui: UIState,
    pub modal: ModalState,
    pub chat: ChatUiState,
}

impl PawsomeCareApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: &AdviceConfig) -> Result<Self> {
        info!("🚀 Initializing PawsomeCareApp");

        // Pet avatars are remote images
        egui_extras::install_image_loaders(&cc.egui_ctx);
        crate::ui::components::setup_pawsome_style(&cc.egui_ctx);

        let backend = Backend::new(config)?;
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .thread_name("pawsome-advice")
            .enable_all()
            .build()
            .context("Failed to start async runtime")?;

        Ok(Self::from_backend(backend, runtime))
    }

    pub fn from_backend(backend: Backend, runtime: Runtime) -> Self {
        Self {
            core: CoreAppState::new(backend, runtime),
            ui: UIState::new(),
            modal: ModalState::new(),
            chat: ChatUiState::new(),
        }
    }

    pub fn navigate_to(&mut self, tab: AppTab) {
        if self.core.current_tab != tab {
            info!("📑 Switching tab: {:?} -> {:?}", self.core.current_tab, tab);
        }
        self.core.current_tab = tab;
    }

    /// Show the add-pet overlay; the active tab stays as it is
    pub fn open_add_pet(&mut self) {
        self.modal.show_add_pet_modal = true;
    }

    /// Hide the overlay and discard whatever was typed
    pub fn close_add_pet(&mut self) {
        self.modal.hide_all_modals();
        self.modal.add_pet_form.clear();
    }

    /// Create a pet from the form. Returns None (overlay stays open) while the
    /// form is incomplete.
    pub fn submit_add_pet(&mut self) -> Option<shared::Pet> {
        if !self.modal.add_pet_form.can_submit() {
            warn!("Add pet submitted with missing name or breed");
            return None;
        }

        let request = self.modal.add_pet_form.to_request();
        let pet = self.core.backend.pet_service.add_pet(request);
        self.ui.set_status(format!("{} joined your pet family", pet.name));
        self.close_add_pet();
        Some(pet)
    }

    /// Flip a task's completion. Unknown ids change nothing and show nothing.
    pub fn toggle_reminder(&mut self, reminder_id: &str) {
        self.core.backend.reminder_service.toggle_reminder(reminder_id);
    }

    /// Send the chat input box contents to the advice gateway
    pub fn send_chat_message(&mut self, ctx: &egui::Context) -> bool {
        self.chat.start_request(
            &self.core.runtime,
            &self.core.backend.advice_service,
            ctx,
        )
    }

    /// Apply a finished advice reply regardless of which tab is visible
    pub fn poll_advice_reply(&mut self) -> bool {
        self.chat.poll_reply()
    }
}
