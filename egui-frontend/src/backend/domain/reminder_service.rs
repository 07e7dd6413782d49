use log::{info, warn};
use std::sync::Arc;

use crate::backend::domain::models::Reminder;
use crate::backend::storage::ReminderStorage;
use shared::{ReminderListResponse, ToggleReminderResponse};

/// Service for daily care reminders
#[derive(Clone)]
pub struct ReminderService {
    storage: Arc<dyn ReminderStorage>,
}

impl ReminderService {
    pub fn new(storage: Arc<dyn ReminderStorage>) -> Self {
        Self { storage }
    }

    /// Flip the completed flag of a reminder.
    ///
    /// Unknown ids are ignored and reported back with `found = false`.
    pub fn toggle_reminder(&self, reminder_id: &str) -> ToggleReminderResponse {
        let Some(reminder) = self.storage.get_reminder(reminder_id) else {
            warn!("Ignoring toggle for unknown reminder: {}", reminder_id);
            return ToggleReminderResponse {
                found: false,
                reminder: None,
            };
        };

        let toggled = reminder.toggled();
        if !self.storage.update_reminder(&toggled) {
            warn!("Reminder {} disappeared during toggle", reminder_id);
            return ToggleReminderResponse {
                found: false,
                reminder: None,
            };
        }

        info!(
            "Toggled reminder '{}' ({}): completed={}",
            toggled.title, toggled.id, toggled.completed
        );

        ToggleReminderResponse {
            found: true,
            reminder: Some(toggled.to_dto()),
        }
    }

    /// List all reminders with the number still pending
    pub fn list_reminders(&self) -> ReminderListResponse {
        let reminders: Vec<shared::Reminder> =
            self.storage.list_reminders().iter().map(Reminder::to_dto).collect();
        let pending_count = reminders.iter().filter(|r| !r.completed).count();

        ReminderListResponse {
            reminders,
            pending_count,
        }
    }

    pub fn pending_count(&self) -> usize {
        self.storage
            .list_reminders()
            .iter()
            .filter(|r| !r.completed)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::storage::{seed, InMemoryReminderRepository};

    fn setup_test() -> ReminderService {
        ReminderService::new(Arc::new(InMemoryReminderRepository::with_reminders(
            seed::seed_reminders(),
        )))
    }

    fn completed(service: &ReminderService, id: &str) -> bool {
        service
            .list_reminders()
            .reminders
            .into_iter()
            .find(|r| r.id == id)
            .map(|r| r.completed)
            .expect("reminder should exist")
    }

    #[test]
    fn test_toggle_first_reminder() {
        let service = setup_test();
        assert_eq!(service.pending_count(), 2);

        let response = service.toggle_reminder("r1");

        assert!(response.found);
        assert!(response.reminder.as_ref().map(|r| r.completed).unwrap_or(false));
        assert!(completed(&service, "r1"));
        assert!(!completed(&service, "r2"));
        assert!(completed(&service, "r3"));
        assert_eq!(service.pending_count(), 1);
        assert_eq!(service.list_reminders().pending_count, 1);
    }

    #[test]
    fn test_toggle_twice_restores_flag() {
        let service = setup_test();
        let before = service.list_reminders();

        service.toggle_reminder("r3");
        service.toggle_reminder("r3");

        assert_eq!(service.list_reminders(), before);
    }

    #[test]
    fn test_toggle_preserves_other_fields() {
        let service = setup_test();
        let toggled = service.toggle_reminder("r2").reminder.unwrap();

        assert_eq!(toggled.title, "Heartworm Pill");
        assert_eq!(toggled.time, "09:00 AM");
        assert_eq!(toggled.pet_id, "1");
        assert_eq!(toggled.reminder_type, shared::ReminderType::Medication);
    }

    #[test]
    fn test_toggle_unknown_reminder_is_noop() {
        let service = setup_test();
        let before = service.list_reminders();

        let response = service.toggle_reminder("r404");

        assert!(!response.found);
        assert!(response.reminder.is_none());
        assert_eq!(service.list_reminders(), before);
    }
}
