//! # Domain Module
//!
//! Contains the pet care business logic: pet profiles, daily reminders, the
//! advice gateway and the chat session it feeds. It is independent of egui and
//! of how data is stored.
//!
//! ## Module Organization
//!
//! - **pet_service**: adding and listing pets
//! - **reminder_service**: toggling and listing reminders
//! - **records_service**: static health records content
//! - **advice_service**: provider-neutral advice gateway with fixed fallbacks
//! - **chat_session**: two-phase transcript state (pending → resolved)
//! - **models**: domain entities

pub mod advice_service;
pub mod chat_session;
pub mod models;
pub mod pet_service;
pub mod records_service;
pub mod reminder_service;

pub use advice_service::*;
pub use chat_session::*;
pub use pet_service::*;
pub use records_service::*;
pub use reminder_service::*;
