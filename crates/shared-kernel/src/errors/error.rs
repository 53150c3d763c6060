// crates/shared-kernel/src/errors/error.rs

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Validation failed for field '{field}': {reason}")]
    Validation {
        field: &'static str,
        reason: String,
    },

    /// Identifiant IANA non reconnu par la table des fuseaux.
    /// Les appelants retombent sur le fuseau détecté du poste plutôt
    /// que de faire échouer tout le contexte.
    #[error("'{id}' is not a valid IANA timezone (ex: 'Europe/Paris')")]
    InvalidTimezone { id: String },

    /// Erreur liée à l'infrastructure (fichier de préférence, réseau)
    #[error("Infrastructure failure: {0}")]
    Infrastructure(String),

    /// Erreur générique du domaine
    #[error("Internal domain error: {0}")]
    Internal(String),
}

impl DomainError {
    /// Utilisé par le contexte pour décider du repli sur le fuseau détecté
    pub fn is_invalid_timezone(&self) -> bool {
        matches!(self, Self::InvalidTimezone { .. })
    }
}
