// crates/promotions/src/domain/entities/regional_voucher.rs

use serde::{Deserialize, Serialize};
use shared_kernel::domain::value_objects::Timezone;

use crate::domain::value_objects::ActiveWindow;

/// Bon d'achat restreint à certains fuseaux et, optionnellement, à une
/// plage horaire locale de disponibilité.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionalVoucher {
    pub voucher_id: String,
    pub title: String,
    pub timezones: Vec<Timezone>,
    /// Plage de disponibilité locale ; absente = disponible toute la journée
    pub availability: Option<ActiveWindow>,
    /// Les bons non régionaux sont disponibles partout, tout le temps
    pub is_regional: bool,
}
