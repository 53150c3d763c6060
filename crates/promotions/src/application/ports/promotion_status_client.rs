// crates/promotions/src/application/ports/promotion_status_client.rs

use async_trait::async_trait;
use shared_kernel::domain::value_objects::Timezone;
use shared_kernel::errors::AppResult;

use crate::domain::entities::LivePromotionStatus;

#[async_trait]
pub trait PromotionStatusClient: Send + Sync {
    /// Interroge le backend sur la promotion active dans un fuseau.
    /// Le résultat fait foi sur l'évaluation locale du catalogue.
    async fn fetch_active(&self, timezone: &Timezone) -> AppResult<LivePromotionStatus>;
}
