pub mod pet;
pub mod reminder;

pub use pet::{Pet, DEFAULT_PET_IMAGE};
pub use reminder::Reminder;
