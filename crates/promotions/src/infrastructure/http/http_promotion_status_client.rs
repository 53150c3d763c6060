// crates/promotions/src/infrastructure/http/http_promotion_status_client.rs

use async_trait::async_trait;
use shared_kernel::domain::value_objects::Timezone;
use shared_kernel::errors::{AppError, AppResult, ErrorCode};

use crate::application::ports::PromotionStatusClient;
use crate::domain::entities::LivePromotionStatus;

/// Adaptateur HTTP du port `PromotionStatusClient`.
/// Interroge l'endpoint de statut du backend promotions ; les erreurs
/// réseau sont promues en `AppError` par le `From<reqwest::Error>` du
/// shared-kernel et restent isolées au fuseau interrogé par le poller.
pub struct HttpPromotionStatusClient {
    http: reqwest::Client,
    base_url: String,
}

impl HttpPromotionStatusClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl PromotionStatusClient for HttpPromotionStatusClient {
    async fn fetch_active(&self, timezone: &Timezone) -> AppResult<LivePromotionStatus> {
        let response = self
            .http
            .get(format!("{}/promotions/active", self.base_url))
            .query(&[("timezone", timezone.as_str())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::new(
                ErrorCode::ServiceUnavailable,
                format!(
                    "Promotion status endpoint answered {} for {}",
                    status,
                    timezone.as_str()
                ),
            ));
        }

        let body: LivePromotionStatus = response.json().await?;
        Ok(body)
    }
}
