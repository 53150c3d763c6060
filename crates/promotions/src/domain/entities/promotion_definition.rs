// crates/promotions/src/domain/entities/promotion_definition.rs

use serde::{Deserialize, Serialize};
use shared_kernel::domain::value_objects::{DiscountPercent, Timezone};

use crate::domain::value_objects::{ActiveDays, ActiveWindow};

/// Entrée du catalogue statique de promotions.
/// À ne pas confondre avec [`LivePromotionStatus`](super::LivePromotionStatus) :
/// le catalogue est évalué localement, le statut live vient du backend et
/// fait foi. Les deux formes ne sont réunies qu'à la frontière de
/// présentation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromotionDefinition {
    pub id: String,
    pub name: String,
    pub description: String,
    pub discount: DiscountPercent,
    /// Fenêtre horaire locale, bornes inclusives
    pub window: ActiveWindow,
    pub active_days: ActiveDays,
    /// Fuseaux IANA où la promotion s'applique
    pub timezones: Vec<Timezone>,
    /// Catégories de bons concernées par la remise
    pub voucher_categories: Vec<String>,
}

impl PromotionDefinition {
    pub fn applies_to(&self, timezone: &Timezone) -> bool {
        self.timezones.contains(timezone)
    }
}
