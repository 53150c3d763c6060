// crates/promotions/src/domain/value_objects/active_days.rs

use chrono::Weekday;
use serde::{Deserialize, Serialize};

/// Jours de semaine où une promotion est active.
/// L'indexation historique du produit est Sunday=0, on manipule donc des
/// `chrono::Weekday` plutôt que des entiers pour éviter toute confusion
/// avec la convention Monday=0 du backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveDays(Vec<Weekday>);

impl ActiveDays {
    pub fn new(days: impl Into<Vec<Weekday>>) -> Self {
        Self(days.into())
    }

    /// Lundi à vendredi
    pub fn weekdays() -> Self {
        Self(vec![
            Weekday::Mon,
            Weekday::Tue,
            Weekday::Wed,
            Weekday::Thu,
            Weekday::Fri,
        ])
    }

    /// Dimanche et samedi
    pub fn weekend() -> Self {
        Self(vec![Weekday::Sun, Weekday::Sat])
    }

    pub fn contains(&self, day: Weekday) -> bool {
        self.0.contains(&day)
    }

    pub fn as_slice(&self) -> &[Weekday] {
        &self.0
    }
}
