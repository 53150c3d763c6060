// crates/promotions/src/domain/repositories/timezone_preference_repository_stub.rs

use async_trait::async_trait;
use shared_kernel::domain::value_objects::Timezone;
use shared_kernel::errors::{DomainError, Result};
use std::sync::{Arc, Mutex};

use crate::domain::repositories::TimezonePreferenceRepository;

#[derive(Default)]
pub struct TimezonePreferenceRepositoryStub {
    /// Stockage en mémoire de la préférence
    pub stored: Arc<Mutex<Option<String>>>,
    /// Simulation d'erreur forcée
    pub error_to_return: Arc<Mutex<Option<DomainError>>>,
}

impl TimezonePreferenceRepositoryStub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Helper pour injecter une préférence avant un test
    pub fn with_stored(timezone_id: impl Into<String>) -> Self {
        let stub = Self::default();
        *stub.stored.lock().unwrap() = Some(timezone_id.into());
        stub
    }

    fn check_error(&self) -> Result<()> {
        if let Some(err) = self.error_to_return.lock().unwrap().clone() {
            return Err(err);
        }
        Ok(())
    }
}

#[async_trait]
impl TimezonePreferenceRepository for TimezonePreferenceRepositoryStub {
    async fn load(&self) -> Result<Option<String>> {
        self.check_error()?;
        Ok(self.stored.lock().unwrap().clone())
    }

    async fn save(&self, timezone: &Timezone) -> Result<()> {
        self.check_error()?;
        *self.stored.lock().unwrap() = Some(timezone.as_str().to_string());
        Ok(())
    }
}
