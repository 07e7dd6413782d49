//! # Storage Module
//!
//! Volatile storage for the pet care domain. Nothing is written to disk; every
//! launch starts from the seed data.

pub mod memory;
pub mod seed;
pub mod traits;

pub use memory::{InMemoryPetRepository, InMemoryReminderRepository};
pub use traits::{PetStorage, ReminderStorage};
