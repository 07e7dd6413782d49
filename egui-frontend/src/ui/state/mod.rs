//! # UI State
//!
//! State is split by concern so the coordinator can hand each piece to the
//! component that owns it:
//!
//! - **app_state**: backend handles, runtime, active tab
//! - **ui_state**: status messages
//! - **modal_state**: add-pet overlay and its form
//! - **chat_state**: advice chat session and reply channel

pub mod app_state;
pub mod chat_state;
pub mod modal_state;
pub mod ui_state;

pub use app_state::CoreAppState;
pub use chat_state::ChatUiState;
pub use modal_state::{AddPetFormState, ModalState};
pub use ui_state::UIState;
