// crates/shared-kernel/src/errors/result.rs

use crate::errors::{AppError, DomainError};

/// RESULT DU DOMAINE (Interne)
/// Utilisé par : Services de domaine, Contexte, Repositories (Ports).
pub type Result<T> = std::result::Result<T, DomainError>;

/// RESULT D'APPLICATION (Exécutable)
/// Utilisé par : Workers (Poller), Clients HTTP, Binaires.
pub type AppResult<T> = std::result::Result<T, AppError>;
