// crates/promotions/src/application/workers/status_poller.rs

use chrono::{DateTime, Utc};
use futures::future::join_all;
use shared_kernel::clock::Clock;
use shared_kernel::domain::value_objects::Timezone;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::time::sleep;

use crate::application::ports::PromotionStatusClient;
use crate::domain::entities::LivePromotionStatus;

/// Statut backend mis en cache, horodaté à sa réception.
/// Le décompte affiché n'est jamais décrémenté littéralement : il est
/// recalculé depuis la base autoritaire `ends_in_seconds` et l'horodatage,
/// ce qui élimine toute dérive entre le tick local et le cycle de poll.
#[derive(Debug, Clone, PartialEq)]
pub struct CachedStatus {
    pub status: LivePromotionStatus,
    pub received_at: DateTime<Utc>,
}

impl CachedStatus {
    pub fn inactive(at: DateTime<Utc>) -> Self {
        Self {
            status: LivePromotionStatus::inactive(),
            received_at: at,
        }
    }

    /// Secondes restantes à `now`, plancher à zéro.
    /// `None` quand la promotion est inactive ou sans durée annoncée.
    pub fn remaining_seconds(&self, now: DateTime<Utc>) -> Option<u64> {
        if !self.status.active {
            return None;
        }
        let ends_in = self.status.ends_in_seconds?;
        let elapsed = (now - self.received_at).num_seconds().max(0) as u64;
        Some(ends_in.saturating_sub(elapsed))
    }
}

/// Worker de réconciliation avec le statut autoritaire du backend.
///
/// Un cycle interroge tous les fuseaux surveillés en parallèle, chaque
/// échec restant isolé à son fuseau : on conserve alors le dernier statut
/// connu jusqu'au prochain succès, sans jamais remonter l'erreur à
/// l'utilisateur. Un résultat frais remplace intégralement l'entrée en
/// cache (last-write-wins, pas de merge).
pub struct StatusPoller {
    client: Arc<dyn PromotionStatusClient>,
    clock: Arc<dyn Clock>,
    poll_interval: Duration,
    watched: Mutex<Vec<Timezone>>,
    cache: Mutex<HashMap<String, CachedStatus>>,
}

impl StatusPoller {
    pub fn new(
        client: Arc<dyn PromotionStatusClient>,
        clock: Arc<dyn Clock>,
        watched: Vec<Timezone>,
        poll_interval: Duration,
    ) -> Self {
        Self {
            client,
            clock,
            poll_interval,
            watched: Mutex::new(watched),
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// Ajoute un fuseau au cycle de surveillance
    pub fn watch(&self, timezone: Timezone) {
        let mut watched = self.watched.lock().unwrap();
        if !watched.contains(&timezone) {
            watched.push(timezone);
        }
    }

    /// Retire un fuseau ; son entrée en cache est purgée et toute réponse
    /// encore en vol pour ce fuseau sera ignorée à l'arrivée
    pub fn unwatch(&self, timezone: &Timezone) {
        self.watched.lock().unwrap().retain(|tz| tz != timezone);
        self.cache.lock().unwrap().remove(timezone.as_str());
    }

    /// Un cycle complet : tous les fuseaux surveillés, échecs isolés
    /// par fuseau (sémantique settle-all)
    pub async fn poll_cycle(&self) {
        let watched: Vec<Timezone> = self.watched.lock().unwrap().clone();
        if watched.is_empty() {
            return;
        }

        let fetches = watched.iter().map(|tz| {
            let client = Arc::clone(&self.client);
            async move { (tz.clone(), client.fetch_active(tz).await) }
        });

        for (timezone, outcome) in join_all(fetches).await {
            match outcome {
                Ok(status) => self.apply(timezone, status),
                Err(err) => {
                    // Échec avalé : on garde le dernier statut connu
                    tracing::warn!(
                        timezone = timezone.as_str(),
                        "Promotion status poll failed, keeping last known status: {}",
                        err
                    );
                }
            }
        }
    }

    /// Remplacement intégral de l'entrée (last-write-wins). Une réponse
    /// arrivée après un `unwatch` est jetée au lieu d'être appliquée.
    fn apply(&self, timezone: Timezone, status: LivePromotionStatus) {
        if !self.watched.lock().unwrap().contains(&timezone) {
            tracing::debug!(
                timezone = timezone.as_str(),
                "Discarding stale poll result for unwatched timezone"
            );
            return;
        }

        self.cache.lock().unwrap().insert(
            timezone.as_str().to_string(),
            CachedStatus {
                status,
                received_at: self.clock.now(),
            },
        );
    }

    /// Dernier statut connu d'un fuseau, s'il a déjà été rafraîchi
    pub fn status_for(&self, timezone: &Timezone) -> Option<CachedStatus> {
        self.cache.lock().unwrap().get(timezone.as_str()).cloned()
    }

    /// Secondes restantes de la promotion active d'un fuseau
    pub fn remaining_for(&self, timezone: &Timezone) -> Option<u64> {
        self.status_for(timezone)?
            .remaining_seconds(self.clock.now())
    }

    /// Vue de tous les fuseaux surveillés. Un fuseau jamais rafraîchi
    /// avec succès est rapporté inactif plutôt qu'absent : l'échec d'un
    /// fuseau ne doit jamais masquer les résultats des autres.
    pub fn snapshot_all(&self) -> HashMap<String, CachedStatus> {
        let now = self.clock.now();
        let watched = self.watched.lock().unwrap().clone();
        let cache = self.cache.lock().unwrap();

        watched
            .iter()
            .map(|tz| {
                let entry = cache
                    .get(tz.as_str())
                    .cloned()
                    .unwrap_or_else(|| CachedStatus::inactive(now));
                (tz.as_str().to_string(), entry)
            })
            .collect()
    }

    /// Boucle de polling : un cycle immédiat puis un par intervalle,
    /// jusqu'au signal d'arrêt (aucun timer ne survit au teardown)
    pub async fn run(&self, mut shutdown_signal: tokio::sync::watch::Receiver<bool>) {
        tracing::info!("Status poller started");

        loop {
            if *shutdown_signal.borrow() {
                break;
            }

            self.poll_cycle().await;

            tokio::select! {
                _ = sleep(self.poll_interval) => {},
                _ = shutdown_signal.changed() => break,
            }
        }

        tracing::info!("Status poller stopped gracefully");
    }
}
