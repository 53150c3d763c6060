// crates/shared-kernel/src/domain/value_objects/timezone.rs

use crate::domain::value_objects::ValueObject;
use crate::errors::{DomainError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Timezone(String);

impl Timezone {
    /// Constructeur sécurisé avec validation IANA
    pub fn try_new(tz: impl Into<String>) -> Result<Self> {
        let tz_str = tz.into().trim().to_string(); // On nettoie les espaces
        let timezone = Self(tz_str);
        timezone.validate()?;
        Ok(timezone)
    }

    /// Reconstruction rapide (catalogue statique, données déjà validées)
    pub fn new_unchecked(tz: impl Into<String>) -> Self {
        Self(tz.into())
    }

    /// Fuseau du poste hôte, équivalent du fuseau détecté côté navigateur.
    /// Si la détection échoue on retombe sur UTC.
    pub fn detect_host() -> Self {
        iana_time_zone::get_timezone()
            .ok()
            .and_then(|id| Self::try_new(id).ok())
            .unwrap_or_default()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convertit vers l'énumération forte de chrono_tz pour les calculs de dates
    pub fn to_tz(&self) -> chrono_tz::Tz {
        self.0
            .parse::<chrono_tz::Tz>()
            .expect("Corrupted Timezone: Must be validated at construction")
    }
}

impl ValueObject for Timezone {
    fn validate(&self) -> Result<()> {
        // La validation IANA est coûteuse (parsing de table),
        // on ne l'appelle qu'à la création ou via validate().
        if self.0.parse::<chrono_tz::Tz>().is_err() {
            return Err(DomainError::InvalidTimezone {
                id: self.0.clone(),
            });
        }
        Ok(())
    }
}

impl Default for Timezone {
    fn default() -> Self {
        Self("UTC".to_string())
    }
}

impl fmt::Display for Timezone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for Timezone {
    type Error = DomainError;
    fn try_from(value: String) -> Result<Self> {
        Self::try_new(value)
    }
}
