use serde::{Deserialize, Serialize};
use std::fmt;

/// Species tag for a pet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PetType {
    Dog,
    Cat,
    Bird,
    Rabbit,
    Other,
}

impl PetType {
    /// All species in the order the add-pet form offers them
    pub const ALL: [PetType; 5] = [
        PetType::Dog,
        PetType::Cat,
        PetType::Bird,
        PetType::Rabbit,
        PetType::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            PetType::Dog => "Dog",
            PetType::Cat => "Cat",
            PetType::Bird => "Bird",
            PetType::Rabbit => "Rabbit",
            PetType::Other => "Other",
        }
    }
}

impl fmt::Display for PetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Pet profile as exposed to the UI
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pet {
    /// Opaque unique identifier ("1", "2" for seed pets, "pet::<uuid>" otherwise)
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub pet_type: PetType,
    pub breed: String,
    /// Age in years
    pub age: f64,
    /// Weight in kilograms
    pub weight: f64,
    /// Avatar image URI
    pub image: String,
    /// Last checkup date (YYYY-MM-DD)
    pub last_checkup: Option<String>,
}

/// Everything needed to create a pet except its id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatePetRequest {
    pub name: String,
    #[serde(rename = "type")]
    pub pet_type: PetType,
    pub breed: String,
    pub age: f64,
    pub weight: f64,
    pub image: String,
    pub last_checkup: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PetListResponse {
    pub pets: Vec<Pet>,
}

/// Care category of a reminder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReminderType {
    Feeding,
    Medication,
    Grooming,
    Walk,
    Vet,
}

impl ReminderType {
    pub fn label(&self) -> &'static str {
        match self {
            ReminderType::Feeding => "Feeding",
            ReminderType::Medication => "Medication",
            ReminderType::Grooming => "Grooming",
            ReminderType::Walk => "Walk",
            ReminderType::Vet => "Vet",
        }
    }
}

/// Daily care reminder
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reminder {
    pub id: String,
    /// Id of the pet this reminder belongs to (not guaranteed to exist)
    pub pet_id: String,
    pub title: String,
    /// Free-text display time, e.g. "08:00 AM"
    pub time: String,
    #[serde(rename = "type")]
    pub reminder_type: ReminderType,
    pub completed: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReminderListResponse {
    pub reminders: Vec<Reminder>,
    pub pending_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToggleReminderResponse {
    /// Whether a reminder with the requested id existed
    pub found: bool,
    /// The reminder after the toggle
    pub reminder: Option<Reminder>,
}

/// Author of a chat turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Model,
}

impl ChatRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChatRole::User => "user",
            ChatRole::Model => "model",
        }
    }
}

/// One turn of the advice conversation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }

    pub fn model(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Model,
            content: content.into(),
        }
    }
}

/// One point of the illustrative weight chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightRecord {
    pub month: String,
    pub weight: f64,
}

/// Status of a medical timeline entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimelineStatus {
    Completed,
    DueSoon,
    Scheduled,
}

impl TimelineStatus {
    pub fn label(&self) -> &'static str {
        match self {
            TimelineStatus::Completed => "Completed",
            TimelineStatus::DueSoon => "Due Soon",
            TimelineStatus::Scheduled => "Scheduled",
        }
    }
}

/// Entry of the medical timeline on the records screen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineEntry {
    pub title: String,
    /// Display date, free text
    pub date: String,
    pub status: TimelineStatus,
    pub pet_name: String,
    /// Highlighted as the current item
    pub active: bool,
}

/// Static content of the records screen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthRecordsResponse {
    /// Pet the weight series is shown for
    pub weight_pet_name: String,
    pub weight_history: Vec<WeightRecord>,
    pub timeline: Vec<TimelineEntry>,
    pub health_notice: String,
}

impl HealthRecordsResponse {
    /// Weight change between the first and last point of the series
    pub fn weight_change(&self) -> Option<f64> {
        let first = self.weight_history.first()?;
        let last = self.weight_history.last()?;
        Some(last.weight - first.weight)
    }
}

/// Screens reachable from the bottom navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppTab {
    #[default]
    Dashboard,
    Pets,
    AiExpert,
    Records,
}

impl AppTab {
    pub fn label(&self) -> &'static str {
        match self {
            AppTab::Dashboard => "Home",
            AppTab::Pets => "My Pets",
            AppTab::AiExpert => "AI Chat",
            AppTab::Records => "Stats",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pet_serializes_type_field() {
        let pet = Pet {
            id: "1".to_string(),
            name: "Luna".to_string(),
            pet_type: PetType::Dog,
            breed: "Golden Retriever".to_string(),
            age: 3.0,
            weight: 28.0,
            image: "https://example.com/luna.jpg".to_string(),
            last_checkup: Some("2023-11-15".to_string()),
        };

        let json = serde_json::to_value(&pet).unwrap();
        assert_eq!(json["type"], "dog");
        assert_eq!(json["last_checkup"], "2023-11-15");
    }

    #[test]
    fn test_reminder_type_round_trips_lowercase() {
        let parsed: ReminderType = serde_json::from_str("\"medication\"").unwrap();
        assert_eq!(parsed, ReminderType::Medication);
    }

    #[test]
    fn test_default_tab_is_dashboard() {
        assert_eq!(AppTab::default(), AppTab::Dashboard);
    }

    #[test]
    fn test_weight_change() {
        let records = HealthRecordsResponse {
            weight_pet_name: "Luna".to_string(),
            weight_history: vec![
                WeightRecord { month: "Jan".to_string(), weight: 26.0 },
                WeightRecord { month: "Feb".to_string(), weight: 27.5 },
            ],
            timeline: Vec::new(),
            health_notice: String::new(),
        };
        assert_eq!(records.weight_change(), Some(1.5));

        let empty = HealthRecordsResponse {
            weight_history: Vec::new(),
            ..records
        };
        assert_eq!(empty.weight_change(), None);
    }
}
