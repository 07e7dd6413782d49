use log::info;
use std::sync::Arc;

use crate::backend::domain::models::Pet;
use crate::backend::storage::PetStorage;
use shared::{CreatePetRequest, PetListResponse};

/// Service for managing pet profiles
#[derive(Clone)]
pub struct PetService {
    storage: Arc<dyn PetStorage>,
}

impl PetService {
    /// Create a new PetService
    pub fn new(storage: Arc<dyn PetStorage>) -> Self {
        Self { storage }
    }

    /// Add a new pet under a freshly generated id.
    ///
    /// Fields are stored as given: name/breed presence is checked by the form,
    /// and age/weight are not range-checked.
    pub fn add_pet(&self, request: CreatePetRequest) -> shared::Pet {
        let pet = Pet::from_request(Pet::generate_id(), request);
        info!("Adding pet: {} ({}) with ID: {}", pet.name, pet.pet_type, pet.id);

        let dto = pet.to_dto();
        self.storage.store_pet(pet);
        dto
    }

    /// Get a pet by ID
    pub fn get_pet(&self, pet_id: &str) -> Option<shared::Pet> {
        self.storage.get_pet(pet_id).map(|p| p.to_dto())
    }

    /// Display name of a pet, None for dangling references
    pub fn pet_name(&self, pet_id: &str) -> Option<String> {
        self.storage.get_pet(pet_id).map(|p| p.name)
    }

    /// List all pets in insertion order
    pub fn list_pets(&self) -> PetListResponse {
        let pets = self.storage.list_pets().iter().map(Pet::to_dto).collect();
        PetListResponse { pets }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::domain::models::DEFAULT_PET_IMAGE;
    use crate::backend::storage::{seed, InMemoryPetRepository};
    use shared::PetType;
    use std::collections::HashSet;

    fn setup_test() -> PetService {
        PetService::new(Arc::new(InMemoryPetRepository::with_pets(seed::seed_pets())))
    }

    fn rex() -> CreatePetRequest {
        CreatePetRequest {
            name: "Rex".to_string(),
            pet_type: PetType::Dog,
            breed: "Beagle".to_string(),
            age: 1.0,
            weight: 10.0,
            image: DEFAULT_PET_IMAGE.to_string(),
            last_checkup: None,
        }
    }

    #[test]
    fn test_add_pet_appends_after_seed_pets() {
        let service = setup_test();

        let rex = service.add_pet(rex());

        let pets = service.list_pets().pets;
        assert_eq!(pets.len(), 3);
        assert_eq!(pets[1].name, "Milo");
        assert_eq!(pets[2], rex);
        assert_ne!(rex.id, "1");
        assert_ne!(rex.id, "2");
        assert_eq!(rex.breed, "Beagle");
        assert_eq!(rex.age, 1.0);
        assert_eq!(rex.weight, 10.0);
    }

    #[test]
    fn test_add_pet_ids_are_unique() {
        let service = setup_test();
        let mut ids: HashSet<String> = service.list_pets().pets.into_iter().map(|p| p.id).collect();

        for i in 0..50 {
            let before = service.list_pets().pets.len();
            let pet = service.add_pet(rex());
            assert!(ids.insert(pet.id), "duplicate id on insert {}", i);
            assert_eq!(service.list_pets().pets.len(), before + 1);
        }
    }

    #[test]
    fn test_add_pet_stores_unguarded_numbers() {
        let service = setup_test();
        let request = CreatePetRequest {
            age: -2.0,
            weight: 0.0,
            ..rex()
        };

        let pet = service.add_pet(request);
        let stored = service.get_pet(&pet.id).expect("pet should be stored");
        assert_eq!(stored.age, -2.0);
        assert_eq!(stored.weight, 0.0);
    }

    #[test]
    fn test_pet_name_for_dangling_reference() {
        let service = setup_test();
        assert_eq!(service.pet_name("1").as_deref(), Some("Luna"));
        assert_eq!(service.pet_name("ghost"), None);
    }
}
