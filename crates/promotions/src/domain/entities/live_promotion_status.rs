// crates/promotions/src/domain/entities/live_promotion_status.rs

use serde::{Deserialize, Serialize};

/// Statut de promotion rapporté par le backend, qui fait foi sur
/// l'évaluation locale du catalogue. Éphémère : chaque poll remplace
/// intégralement le précédent, aucun merge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LivePromotionStatus {
    pub active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount_percentage: Option<u8>,
    /// Durée restante au moment du poll, en secondes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ends_in_seconds: Option<u64>,
}

impl LivePromotionStatus {
    /// Statut par défaut d'un fuseau jamais rafraîchi avec succès
    pub fn inactive() -> Self {
        Self {
            active: false,
            name: None,
            description: None,
            discount_percentage: None,
            ends_in_seconds: None,
        }
    }
}
