// crates/shared-kernel/src/clock/mod.rs

mod fixed;
mod system;

pub use fixed::FixedClock;
pub use system::SystemClock;

use chrono::{DateTime, Utc};

/// Horloge injectable.
/// Tous les calculs dépendant de "maintenant" (fenêtres de promotions,
/// décomptes, offsets DST) passent par ce trait plutôt que d'appeler
/// `Utc::now()` directement, ce qui rend chaque évaluation testable.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
