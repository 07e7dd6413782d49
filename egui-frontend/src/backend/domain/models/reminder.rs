//! egui-frontend/src/backend/domain/models/reminder.rs

use serde::{Deserialize, Serialize};
use shared::ReminderType;

/// Domain model representing a daily care reminder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reminder {
    pub id: String,
    pub pet_id: String,
    pub title: String,
    pub time: String,
    pub reminder_type: ReminderType,
    pub completed: bool,
}

impl Reminder {
    /// Copy of this reminder with the completed flag flipped and every other field preserved
    pub fn toggled(&self) -> Self {
        Self {
            completed: !self.completed,
            ..self.clone()
        }
    }

    pub fn to_dto(&self) -> shared::Reminder {
        shared::Reminder {
            id: self.id.clone(),
            pet_id: self.pet_id.clone(),
            title: self.title.clone(),
            time: self.time.clone(),
            reminder_type: self.reminder_type,
            completed: self.completed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggled_preserves_other_fields() {
        let reminder = Reminder {
            id: "r1".to_string(),
            pet_id: "1".to_string(),
            title: "Morning Walk".to_string(),
            time: "08:00 AM".to_string(),
            reminder_type: ReminderType::Walk,
            completed: false,
        };

        let toggled = reminder.toggled();
        assert!(toggled.completed);
        assert_eq!(toggled.toggled(), reminder);
    }
}
