//! # Modal State Module
//!
//! This module contains all state related to modal dialogs and their visibility.
//!
//! ## Responsibilities:
//! - Add-pet overlay visibility
//! - Add-pet form fields and submit gating
//!
//! ## Purpose:
//! Opening or closing an overlay never touches the active tab, so modal state
//! lives apart from `CoreAppState`.

use shared::{CreatePetRequest, PetType};

use crate::backend::domain::models::DEFAULT_PET_IMAGE;

/// Add-pet form state
#[derive(Debug, Clone, PartialEq)]
pub struct AddPetFormState {
    pub name: String,
    pub pet_type: PetType,
    pub breed: String,
    /// Years; stored as entered
    pub age: f64,
    /// Kilograms; stored as entered
    pub weight: f64,
    pub image: String,
}

impl Default for AddPetFormState {
    fn default() -> Self {
        Self {
            name: String::new(),
            pet_type: PetType::Dog,
            breed: String::new(),
            age: 0.0,
            weight: 0.0,
            image: DEFAULT_PET_IMAGE.to_string(),
        }
    }
}

impl AddPetFormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Name and breed must hold something other than whitespace
    pub fn can_submit(&self) -> bool {
        !self.name.trim().is_empty() && !self.breed.trim().is_empty()
    }

    pub fn to_request(&self) -> CreatePetRequest {
        CreatePetRequest {
            name: self.name.trim().to_string(),
            pet_type: self.pet_type,
            breed: self.breed.trim().to_string(),
            age: self.age,
            weight: self.weight,
            image: self.image.clone(),
            last_checkup: None,
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Modal visibility and modal-specific state
#[derive(Debug, Default)]
pub struct ModalState {
    /// Whether the add-pet overlay is visible
    pub show_add_pet_modal: bool,

    pub add_pet_form: AddPetFormState,
}

impl ModalState {
    /// Create new modal state with all modals hidden
    pub fn new() -> Self {
        Self::default()
    }

    /// Hide all modals
    pub fn hide_all_modals(&mut self) {
        self.show_add_pet_modal = false;
    }

    pub fn any_modal_open(&self) -> bool {
        self.show_add_pet_modal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_form_defaults() {
        let form = AddPetFormState::new();
        assert_eq!(form.pet_type, PetType::Dog);
        assert_eq!(form.age, 0.0);
        assert_eq!(form.image, DEFAULT_PET_IMAGE);
        assert!(!form.can_submit());
    }

    #[test]
    fn test_can_submit_requires_name_and_breed() {
        let mut form = AddPetFormState::new();
        form.name = "Rex".to_string();
        assert!(!form.can_submit());

        form.breed = "   ".to_string();
        assert!(!form.can_submit());

        form.breed = "Beagle".to_string();
        assert!(form.can_submit());
    }

    #[test]
    fn test_to_request_trims_and_keeps_numbers() {
        let mut form = AddPetFormState::new();
        form.name = "  Kiwi ".to_string();
        form.breed = "Budgie ".to_string();
        form.pet_type = PetType::Bird;
        form.age = -1.0;
        form.weight = 0.1;

        let request = form.to_request();
        assert_eq!(request.name, "Kiwi");
        assert_eq!(request.breed, "Budgie");
        assert_eq!(request.pet_type, PetType::Bird);
        assert_eq!(request.age, -1.0);
        assert_eq!(request.weight, 0.1);
        assert!(request.last_checkup.is_none());
    }

    #[test]
    fn test_hide_all_modals() {
        let mut modal = ModalState::new();
        assert!(!modal.any_modal_open());

        modal.show_add_pet_modal = true;
        assert!(modal.any_modal_open());

        modal.hide_all_modals();
        assert!(!modal.any_modal_open());
    }

    #[test]
    fn test_clear_resets_form() {
        let mut form = AddPetFormState::new();
        form.name = "Rex".to_string();
        form.pet_type = PetType::Cat;
        form.clear();
        assert_eq!(form, AddPetFormState::default());
    }
}
