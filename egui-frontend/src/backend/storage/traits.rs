//! # Storage Traits
//!
//! This module defines the storage abstraction traits that the domain services
//! work against. The only implementation today keeps everything in memory, so
//! the operations are infallible.

use crate::backend::domain::models::{Pet, Reminder};

/// Trait defining the interface for pet storage operations
pub trait PetStorage: Send + Sync {
    /// Append a new pet, keeping insertion order
    fn store_pet(&self, pet: Pet);

    /// Retrieve a specific pet by ID
    fn get_pet(&self, pet_id: &str) -> Option<Pet>;

    /// List all pets in insertion order
    fn list_pets(&self) -> Vec<Pet>;
}

/// Trait defining the interface for reminder storage operations
pub trait ReminderStorage: Send + Sync {
    /// Retrieve a specific reminder by ID
    fn get_reminder(&self, reminder_id: &str) -> Option<Reminder>;

    /// List all reminders in insertion order
    fn list_reminders(&self) -> Vec<Reminder>;

    /// Replace the reminder with the same ID.
    /// Returns false if no such reminder exists.
    fn update_reminder(&self, reminder: &Reminder) -> bool;
}
