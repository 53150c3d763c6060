// crates/promotions/src/infrastructure/storage/file_preference_repository.rs

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use shared_kernel::domain::value_objects::Timezone;
use shared_kernel::errors::{DomainError, Result};
use std::path::PathBuf;

use crate::domain::repositories::TimezonePreferenceRepository;

#[derive(Serialize, Deserialize)]
struct StoredPreference {
    selected_timezone: String,
}

/// Persistance de la préférence de fuseau dans un fichier JSON local.
///
/// Un fichier absent signifie simplement "aucune préférence" ; un
/// contenu illisible est signalé puis ignoré, et sera écrasé à la
/// prochaine sélection. Seules les erreurs d'E/S réelles remontent.
pub struct FilePreferenceRepository {
    path: PathBuf,
}

impl FilePreferenceRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl TimezonePreferenceRepository for FilePreferenceRepository {
    async fn load(&self) -> Result<Option<String>> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(err) => {
                return Err(DomainError::Infrastructure(format!(
                    "Failed to read timezone preference {}: {}",
                    self.path.display(),
                    err
                )))
            }
        };

        match serde_json::from_str::<StoredPreference>(&raw) {
            Ok(stored) => Ok(Some(stored.selected_timezone)),
            Err(err) => {
                tracing::warn!(
                    path = %self.path.display(),
                    "Timezone preference file unreadable, ignoring it: {}",
                    err
                );
                Ok(None)
            }
        }
    }

    async fn save(&self, timezone: &Timezone) -> Result<()> {
        let stored = StoredPreference {
            selected_timezone: timezone.as_str().to_string(),
        };
        let payload = serde_json::to_string_pretty(&stored)
            .map_err(|err| DomainError::Internal(err.to_string()))?;

        tokio::fs::write(&self.path, payload).await.map_err(|err| {
            DomainError::Infrastructure(format!(
                "Failed to write timezone preference {}: {}",
                self.path.display(),
                err
            ))
        })
    }
}
