//! # UI Components Module
//!
//! This module organizes all UI components for the PawsomeCare app.
//! Each submodule handles a specific aspect of the user interface.
//!
//! ## Module Organization:
//! - `theme` - Color palette
//! - `styling` - Global style setup and per-category display descriptors
//! - `ui_components` - Reusable helpers (cards, badges, avatars)
//! - `header` - Title bar
//! - `tab_manager` - Bottom navigation and content routing
//! - `dashboard` - Home screen
//! - `pet_list` - Companion cards
//! - `ai_expert` - Advice chat
//! - `records` - Weight chart and medical timeline
//! - `modals` - Overlay dialogs
//!
//! ## Architecture:
//! Screen components add `render_*` methods to `PawsomeCareApp`; helpers that
//! need no app state are free functions.

pub mod ai_expert;
pub mod dashboard;
pub mod header;
pub mod modals;
pub mod pet_list;
pub mod records;
pub mod styling;
pub mod tab_manager;
pub mod theme;
pub mod ui_components;

pub use styling::setup_pawsome_style;
pub use theme::*;
