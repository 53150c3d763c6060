// crates/shared-kernel/src/errors/app_error.rs

use crate::errors::{DomainError, ErrorCode};
use serde::Serialize;
use serde_json::Value;
use std::fmt;

#[derive(Debug, Serialize, Clone)]
pub struct AppError {
    pub code: ErrorCode,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl AppError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }
}

impl From<DomainError> for AppError {
    fn from(error: DomainError) -> Self {
        match error {
            // 1. Cas : Validation (400)
            DomainError::Validation { field, reason } => Self {
                code: ErrorCode::ValidationFailed,
                message: format!("Validation failed for {field}"),
                details: Some(serde_json::json!({ "field": field, "reason": reason })),
            },

            // 2. Cas : Fuseau inconnu - l'appelant retombe sur le fuseau détecté
            DomainError::InvalidTimezone { id } => Self::new(
                ErrorCode::InvalidTimezone,
                format!("'{id}' is not a valid IANA timezone"),
            ),

            // 3. Cas : Défaillance d'infrastructure (fichier, réseau)
            // On masque le détail au client, le réel est déjà tracé en amont
            DomainError::Infrastructure(_) => Self::new(
                ErrorCode::InfrastructureFailure,
                "An unexpected error occurred. Please try again later.",
            ),

            // 4. Cas : Erreur interne du domaine (500)
            DomainError::Internal(_) => Self::new(
                ErrorCode::InternalError,
                "An unexpected error occurred. Please try again later.",
            ),
        }
    }
}

// Pour transformer les erreurs réseau (reqwest) en AppError
#[cfg(feature = "http")]
impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        // En interne, on log l'erreur réelle pour le debugging
        tracing::warn!("HTTP infrastructure error: {:?}", err);

        Self::new(ErrorCode::ServiceUnavailable, "A network error occurred")
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for AppError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_infrastructure_errors_map_to_their_own_code() {
        let err: AppError =
            DomainError::Infrastructure("disk on fire".to_string()).into();
        assert_eq!(err.code, ErrorCode::InfrastructureFailure);
        // Le détail technique ne fuit pas vers le client
        assert!(!err.message.contains("disk on fire"));
    }

    #[test]
    fn test_internal_errors_stay_internal() {
        let err: AppError = DomainError::Internal("oops".to_string()).into();
        assert_eq!(err.code, ErrorCode::InternalError);
    }

    #[test]
    fn test_invalid_timezone_keeps_the_offending_id() {
        let err: AppError = DomainError::InvalidTimezone {
            id: "Mars/Olympus".to_string(),
        }
        .into();
        assert_eq!(err.code, ErrorCode::InvalidTimezone);
        assert!(err.message.contains("Mars/Olympus"));
    }
}
