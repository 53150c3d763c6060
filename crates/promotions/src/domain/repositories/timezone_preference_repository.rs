// crates/promotions/src/domain/repositories/timezone_preference_repository.rs

use async_trait::async_trait;
use shared_kernel::domain::value_objects::Timezone;
use shared_kernel::errors::Result;

/// Persistance du fuseau choisi par l'utilisateur (l'équivalent du
/// local storage côté client). La valeur stockée est l'identifiant IANA
/// brut : elle est revalidée à la lecture et un contenu corrompu déclenche
/// le repli sur le fuseau détecté, jamais une erreur fatale.
#[async_trait]
pub trait TimezonePreferenceRepository: Send + Sync {
    /// Dernier fuseau choisi, tel que persisté (non validé)
    async fn load(&self) -> Result<Option<String>>;

    /// Persiste le choix ; appelé à chaque `set_timezone`
    async fn save(&self, timezone: &Timezone) -> Result<()>;
}
