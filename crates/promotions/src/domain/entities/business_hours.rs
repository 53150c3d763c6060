// crates/promotions/src/domain/entities/business_hours.rs

use serde::{Deserialize, Serialize};
use shared_kernel::domain::value_objects::Timezone;

use crate::domain::value_objects::ActiveWindow;

/// Horaires d'ouverture d'une région commerciale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionalBusinessHours {
    pub timezone: Timezone,
    pub region: String,
    /// Horaires en semaine
    pub weekday_hours: ActiveWindow,
    /// Horaires du week-end ; absents = fermé le week-end
    pub weekend_hours: Option<ActiveWindow>,
}
