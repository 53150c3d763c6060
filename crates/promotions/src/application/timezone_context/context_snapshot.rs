// crates/promotions/src/application/timezone_context/context_snapshot.rs

use serde::Serialize;
use shared_kernel::domain::value_objects::Timezone;

use crate::domain::entities::{PromotionDefinition, RegionalVoucher, TimezoneDescriptor};

/// Vue immuable du contexte, destinée à la présentation.
/// Les composants consommateurs ne touchent jamais l'état interne :
/// toute mutation passe par les transitions du contexte.
#[derive(Debug, Clone, Serialize)]
pub struct ContextSnapshot {
    pub selected_timezone: Timezone,
    pub descriptor: TimezoneDescriptor,
    pub active_promotions: Vec<PromotionDefinition>,
    pub business_hours_active: bool,
    pub next_promotion: Option<PromotionDefinition>,
    pub time_until_next: Option<String>,
    /// Bons disponibles dans le fuseau sélectionné à l'instant du snapshot
    pub available_vouchers: Vec<RegionalVoucher>,
}
