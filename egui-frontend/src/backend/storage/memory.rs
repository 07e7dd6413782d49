//! # In-Memory Repositories
//!
//! Volatile pet and reminder collections. State lives for the lifetime of the
//! process and starts over from the seed data on every launch.

use log::debug;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::traits::{PetStorage, ReminderStorage};
use crate::backend::domain::models::{Pet, Reminder};

// A panicked writer cannot leave a Vec half-updated, so poisoned locks are recovered.
fn read<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn write<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// In-memory pet repository
#[derive(Debug, Default)]
pub struct InMemoryPetRepository {
    pets: RwLock<Vec<Pet>>,
}

impl InMemoryPetRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository pre-populated with the given pets
    pub fn with_pets(pets: Vec<Pet>) -> Self {
        Self {
            pets: RwLock::new(pets),
        }
    }
}

impl PetStorage for InMemoryPetRepository {
    fn store_pet(&self, pet: Pet) {
        debug!("Storing pet {} ({})", pet.name, pet.id);
        write(&self.pets).push(pet);
    }

    fn get_pet(&self, pet_id: &str) -> Option<Pet> {
        read(&self.pets).iter().find(|p| p.id == pet_id).cloned()
    }

    fn list_pets(&self) -> Vec<Pet> {
        read(&self.pets).clone()
    }
}

/// In-memory reminder repository
#[derive(Debug, Default)]
pub struct InMemoryReminderRepository {
    reminders: RwLock<Vec<Reminder>>,
}

impl InMemoryReminderRepository {
    pub fn with_reminders(reminders: Vec<Reminder>) -> Self {
        Self {
            reminders: RwLock::new(reminders),
        }
    }
}

impl ReminderStorage for InMemoryReminderRepository {
    fn get_reminder(&self, reminder_id: &str) -> Option<Reminder> {
        read(&self.reminders)
            .iter()
            .find(|r| r.id == reminder_id)
            .cloned()
    }

    fn list_reminders(&self) -> Vec<Reminder> {
        read(&self.reminders).clone()
    }

    fn update_reminder(&self, reminder: &Reminder) -> bool {
        let mut reminders = write(&self.reminders);
        match reminders.iter_mut().find(|r| r.id == reminder.id) {
            Some(slot) => {
                *slot = reminder.clone();
                true
            }
            None => false,
        }
    }
}
