use serde::{Deserialize, Serialize};
use std::fmt;

use crate::model::mood::Mood;
use crate::model::pet_record::PetRecord;

/// Read-only view of a pet, as reported by `status`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PetStatus {
    pub name: String,
    pub age: u32,
    pub hunger: f64,
    pub happiness: f64,
    pub health: f64,
    pub mood: Mood,
}

impl From<&PetRecord> for PetStatus {
    fn from(record: &PetRecord) -> Self {
        PetStatus {
            name: record.name.clone(),
            age: record.age,
            hunger: record.hunger,
            happiness: record.happiness,
            health: record.health,
            mood: record.mood(),
        }
    }
}

impl fmt::Display for PetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- {}'s Status ---", self.name)?;
        writeln!(f, "Age: {} days", self.age)?;
        writeln!(f, "Hunger Level: {}", self.hunger)?;
        writeln!(f, "Happiness Level: {}", self.happiness)?;
        writeln!(f, "Health: {}", self.health)?;
        write!(f, "Mood: {}", self.mood)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn renders_status_block() {
        let now = NaiveDate::from_ymd_opt(2024, 5, 1)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap();
        let mut record = PetRecord::new("Rex", now);
        record.health = 9.5;
        record.age = 3;

        let text = PetStatus::from(&record).to_string();
        assert_eq!(
            text,
            "--- Rex's Status ---\n\
             Age: 3 days\n\
             Hunger Level: 0\n\
             Happiness Level: 10\n\
             Health: 9.5\n\
             Mood: Happy"
        );
    }
}
