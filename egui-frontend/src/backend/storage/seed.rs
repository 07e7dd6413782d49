//! Fixed start-up data used in lieu of persistence.

use chrono::NaiveDate;
use shared::{HealthRecordsResponse, PetType, ReminderType, TimelineEntry, TimelineStatus, WeightRecord};

use crate::backend::domain::models::{Pet, Reminder};

pub fn seed_pets() -> Vec<Pet> {
    vec![
        Pet {
            id: "1".to_string(),
            name: "Luna".to_string(),
            pet_type: PetType::Dog,
            breed: "Golden Retriever".to_string(),
            age: 3.0,
            weight: 28.0,
            image: "https://images.unsplash.com/photo-1552053831-71594a27632d?q=80&w=300&h=300&auto=format&fit=crop".to_string(),
            last_checkup: NaiveDate::from_ymd_opt(2023, 11, 15),
        },
        Pet {
            id: "2".to_string(),
            name: "Milo".to_string(),
            pet_type: PetType::Cat,
            breed: "Siamese".to_string(),
            age: 2.0,
            weight: 4.5,
            image: "https://images.unsplash.com/photo-1514888286974-6c03e2ca1dba?q=80&w=300&h=300&auto=format&fit=crop".to_string(),
            last_checkup: NaiveDate::from_ymd_opt(2024, 1, 10),
        },
    ]
}

pub fn seed_reminders() -> Vec<Reminder> {
    let reminder = |id: &str, pet_id: &str, title: &str, time: &str, reminder_type, completed| Reminder {
        id: id.to_string(),
        pet_id: pet_id.to_string(),
        title: title.to_string(),
        time: time.to_string(),
        reminder_type,
        completed,
    };

    vec![
        reminder("r1", "1", "Morning Walk", "08:00 AM", ReminderType::Walk, false),
        reminder("r2", "1", "Heartworm Pill", "09:00 AM", ReminderType::Medication, false),
        reminder("r3", "2", "Afternoon Treat", "02:00 PM", ReminderType::Feeding, true),
    ]
}

/// Illustrative records content. Not derived from any pet's stored weight.
pub fn seed_health_records() -> HealthRecordsResponse {
    let weight_history = [
        ("Jan", 26.0),
        ("Feb", 26.5),
        ("Mar", 27.2),
        ("Apr", 27.8),
        ("May", 28.0),
        ("Jun", 28.2),
    ]
    .into_iter()
    .map(|(month, weight)| WeightRecord {
        month: month.to_string(),
        weight,
    })
    .collect();

    let entry = |title: &str, date: &str, status, pet_name: &str, active| TimelineEntry {
        title: title.to_string(),
        date: date.to_string(),
        status,
        pet_name: pet_name.to_string(),
        active,
    };

    HealthRecordsResponse {
        weight_pet_name: "Luna".to_string(),
        weight_history,
        timeline: vec![
            entry("Rabies Vaccination", "Feb 20, 2024", TimelineStatus::Completed, "Luna", false),
            entry("Flea & Tick Prevention", "Today, Mar 15", TimelineStatus::DueSoon, "Milo", true),
            entry("Annual Health Checkup", "Apr 12, 2024", TimelineStatus::Scheduled, "Luna", false),
        ],
        health_notice: "Milo is slightly behind on his weight gain target for his breed. \
            Consider a higher calorie diet or consult our AI chat."
            .to_string(),
    }
}
