//! egui-frontend/src/backend/domain/models/pet.rs

use chrono::NaiveDate;
use log::warn;
use serde::{Deserialize, Serialize};
use shared::{CreatePetRequest, PetType};
use uuid::Uuid;

/// Avatar used when the add-pet form is submitted without a custom photo
pub const DEFAULT_PET_IMAGE: &str =
    "https://images.unsplash.com/photo-1543466835-00a7907e9de1?q=80&w=300&h=300&auto=format&fit=crop";

/// Domain model representing a pet profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pet {
    pub id: String,
    pub name: String,
    pub pet_type: PetType,
    pub breed: String,
    pub age: f64,
    pub weight: f64,
    pub image: String,
    pub last_checkup: Option<NaiveDate>,
}

impl Pet {
    /// Generate a fresh, never reused pet id
    pub fn generate_id() -> String {
        format!("pet::{}", Uuid::new_v4().simple())
    }

    /// Build a pet from a creation request under the given id.
    ///
    /// Fields are stored as given; an unparseable checkup date is dropped.
    pub fn from_request(id: String, request: CreatePetRequest) -> Self {
        let last_checkup = request.last_checkup.as_deref().and_then(|raw| {
            match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
                Ok(date) => Some(date),
                Err(e) => {
                    warn!("Ignoring invalid checkup date '{}': {}", raw, e);
                    None
                }
            }
        });

        Self {
            id,
            name: request.name,
            pet_type: request.pet_type,
            breed: request.breed,
            age: request.age,
            weight: request.weight,
            image: request.image,
            last_checkup,
        }
    }

    pub fn to_dto(&self) -> shared::Pet {
        shared::Pet {
            id: self.id.clone(),
            name: self.name.clone(),
            pet_type: self.pet_type,
            breed: self.breed.clone(),
            age: self.age,
            weight: self.weight,
            image: self.image.clone(),
            last_checkup: self.last_checkup.map(|d| d.format("%Y-%m-%d").to_string()),
        }
    }
}
