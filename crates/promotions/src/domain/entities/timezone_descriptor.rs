// crates/promotions/src/domain/entities/timezone_descriptor.rs

use serde::Serialize;
use shared_kernel::domain::value_objects::Timezone;

/// Vue dérivée d'un fuseau à un instant donné.
/// Jamais persistée ni mise en cache au-delà d'une évaluation : l'offset
/// UTC change au passage à l'heure d'été pour un même identifiant IANA.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimezoneDescriptor {
    pub timezone: Timezone,
    /// Offset UTC formaté "±HH:MM", dérivé de l'instant de référence
    pub utc_offset: String,
    /// Segment ville de l'identifiant ("America/New_York" -> "New York")
    pub city_label: String,
    /// Premier segment de l'identifiant ("America/New_York" -> "America")
    pub region_label: String,
    /// Heure locale au format 12h ("6:00:00 PM")
    pub local_time_formatted: String,
    /// Date locale longue ("Tuesday, January 16, 2024")
    pub local_date_formatted: String,
}
