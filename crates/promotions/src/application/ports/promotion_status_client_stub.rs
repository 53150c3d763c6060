// crates/promotions/src/application/ports/promotion_status_client_stub.rs

use async_trait::async_trait;
use shared_kernel::domain::value_objects::Timezone;
use shared_kernel::errors::{AppError, AppResult, ErrorCode};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::application::ports::PromotionStatusClient;
use crate::domain::entities::LivePromotionStatus;

/// Client scriptable : chaque fuseau reçoit soit un statut, soit un échec
/// forcé. Les fuseaux non scriptés répondent inactifs.
#[derive(Default)]
pub struct PromotionStatusClientStub {
    responses: Mutex<HashMap<String, AppResult<LivePromotionStatus>>>,
    /// Nombre d'appels par fuseau, pour vérifier la cadence de polling
    pub call_counts: Arc<Mutex<HashMap<String, u32>>>,
}

impl PromotionStatusClientStub {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_status(&self, timezone_id: &str, status: LivePromotionStatus) {
        self.responses
            .lock()
            .unwrap()
            .insert(timezone_id.to_string(), Ok(status));
    }

    pub fn set_failure(&self, timezone_id: &str) {
        self.responses.lock().unwrap().insert(
            timezone_id.to_string(),
            Err(AppError::new(
                ErrorCode::ServiceUnavailable,
                "Backend unreachable",
            )),
        );
    }

    pub fn calls_for(&self, timezone_id: &str) -> u32 {
        self.call_counts
            .lock()
            .unwrap()
            .get(timezone_id)
            .copied()
            .unwrap_or(0)
    }
}

#[async_trait]
impl PromotionStatusClient for PromotionStatusClientStub {
    async fn fetch_active(&self, timezone: &Timezone) -> AppResult<LivePromotionStatus> {
        *self
            .call_counts
            .lock()
            .unwrap()
            .entry(timezone.as_str().to_string())
            .or_insert(0) += 1;

        match self.responses.lock().unwrap().get(timezone.as_str()) {
            Some(Ok(status)) => Ok(status.clone()),
            Some(Err(err)) => Err(err.clone()),
            None => Ok(LivePromotionStatus::inactive()),
        }
    }
}
