//! # Backend Module
//!
//! Contains all non-UI logic for the PawsomeCare application.
//!
//! ## Architecture
//!
//! ```text
//! UI Layer (egui)
//!     ↓
//! Domain Layer (pet, reminder, records and advice services; chat session)
//!     ↓                         ↓
//! Storage Layer (in-memory)   IO Layer (Gemini advice provider)
//! ```
//!
//! The backend is UI-agnostic and owns no egui types.

pub mod config;
pub mod domain;
pub mod io;
pub mod storage;

use anyhow::Result;
use log::info;
use std::sync::Arc;

use crate::backend::config::AdviceConfig;
use crate::backend::domain::{AdviceProvider, AdviceService, PetService, RecordsService, ReminderService};
use crate::backend::io::GeminiProvider;
use crate::backend::storage::{seed, InMemoryPetRepository, InMemoryReminderRepository};

/// All services the UI talks to
#[derive(Clone)]
pub struct Backend {
    pub pet_service: PetService,
    pub reminder_service: ReminderService,
    pub records_service: RecordsService,
    pub advice_service: AdviceService,
}

impl Backend {
    /// Seeded backend talking to Gemini with the given settings
    pub fn new(config: &AdviceConfig) -> Result<Self> {
        info!("Setting up advice provider");
        let provider = GeminiProvider::new(config)?;
        Ok(Self::with_provider(Arc::new(provider)))
    }

    /// Seeded backend with an arbitrary advice provider
    pub fn with_provider(provider: Arc<dyn AdviceProvider>) -> Self {
        info!("Setting up seeded in-memory store");
        let pets = Arc::new(InMemoryPetRepository::with_pets(seed::seed_pets()));
        let reminders = Arc::new(InMemoryReminderRepository::with_reminders(seed::seed_reminders()));

        Self {
            pet_service: PetService::new(pets),
            reminder_service: ReminderService::new(reminders),
            records_service: RecordsService::new(),
            advice_service: AdviceService::new(provider),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_backend_is_seeded() {
        let backend = Backend::new(&AdviceConfig::default()).expect("backend should build");

        let pets = backend.pet_service.list_pets().pets;
        let names: Vec<&str> = pets.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Luna", "Milo"]);

        let reminders = backend.reminder_service.list_reminders();
        assert_eq!(reminders.reminders.len(), 3);
        assert_eq!(reminders.pending_count, 2);
    }

    #[tokio::test]
    async fn test_missing_api_key_falls_back() {
        let backend = Backend::new(&AdviceConfig::default()).expect("backend should build");
        let reply = backend.advice_service.get_advice(&[], "hello").await;
        assert_eq!(reply, domain::CONNECTION_FALLBACK);
    }
}
