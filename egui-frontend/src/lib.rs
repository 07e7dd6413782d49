//! PawsomeCare: a pet care companion built on egui.
//!
//! - `backend` holds the pet, reminder, records and advice services
//! - `ui` holds the egui application

pub mod backend;
pub mod ui;
