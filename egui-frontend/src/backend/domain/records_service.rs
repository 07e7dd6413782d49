use crate::backend::storage::seed;
use shared::HealthRecordsResponse;

/// Serves the static content of the health records screen
#[derive(Clone, Default)]
pub struct RecordsService;

impl RecordsService {
    pub fn new() -> Self {
        Self
    }

    pub fn health_records(&self) -> HealthRecordsResponse {
        seed::seed_health_records()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_records_series() {
        let records = RecordsService::new().health_records();

        let months: Vec<&str> = records.weight_history.iter().map(|r| r.month.as_str()).collect();
        assert_eq!(months, vec!["Jan", "Feb", "Mar", "Apr", "May", "Jun"]);
        assert_eq!(records.timeline.len(), 3);
        assert_eq!(records.timeline.iter().filter(|e| e.active).count(), 1);

        let change = records.weight_change().unwrap();
        assert!((change - 2.2).abs() < 1e-9);
    }
}
