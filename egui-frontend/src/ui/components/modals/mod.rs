//! # Modals Module
//!
//! Overlay dialogs for the PawsomeCare app.
//!
//! ## Module Organization:
//! - `add_pet` - "New Companion" form
//! - `shared` - Backdrop and label helpers common to all overlays

pub mod add_pet;
pub mod shared;
