// crates/promotions/src/application/timezone_context/timezone_context.rs

use shared_kernel::clock::Clock;
use shared_kernel::domain::value_objects::Timezone;
use shared_kernel::errors::Result;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::time::sleep;

use crate::application::timezone_context::ContextSnapshot;
use crate::domain::catalog::PromotionCatalog;
use crate::domain::entities::{
    PromotionDefinition, RegionalBusinessHours, RegionalVoucher, TimezoneDescriptor,
};
use crate::domain::repositories::TimezonePreferenceRepository;
use crate::domain::services::{promotion_evaluator, timezone_resolver};

/// État dérivé du fuseau sélectionné, recalculé à chaque transition
struct ContextState {
    selected: Timezone,
    descriptor: TimezoneDescriptor,
    active_promotions: Vec<PromotionDefinition>,
}

/// Source de vérité unique du fuseau choisi par l'utilisateur et des
/// promotions dérivées. Injecté explicitement dans les consommateurs :
/// pas d'état ambiant global, et le teardown (arrêt de la boucle de
/// rafraîchissement) est lui aussi explicite.
pub struct TimezoneContext {
    prefs: Arc<dyn TimezonePreferenceRepository>,
    clock: Arc<dyn Clock>,
    catalog: PromotionCatalog,
    business_hours: Vec<RegionalBusinessHours>,
    vouchers: Vec<RegionalVoucher>,
    state: Mutex<ContextState>,
}

impl TimezoneContext {
    /// Transition Uninitialized -> Ready.
    ///
    /// Le fuseau initial vient de la préférence persistée quand elle est
    /// présente et valide ; une valeur corrompue ou absente fait retomber
    /// sur `detected` (le fuseau du poste) sans échec.
    pub async fn initialize(
        prefs: Arc<dyn TimezonePreferenceRepository>,
        clock: Arc<dyn Clock>,
        catalog: PromotionCatalog,
        business_hours: Vec<RegionalBusinessHours>,
        vouchers: Vec<RegionalVoucher>,
        detected: Timezone,
    ) -> Result<Self> {
        let selected = match prefs.load().await? {
            Some(stored) => match Timezone::try_new(&stored) {
                Ok(tz) => tz,
                Err(err) => {
                    tracing::warn!(
                        stored = stored.as_str(),
                        "Stored timezone preference invalid, falling back to detected: {}",
                        err
                    );
                    detected
                }
            },
            None => detected,
        };

        let now = clock.now();
        let state = ContextState {
            descriptor: timezone_resolver::resolve(&selected, now),
            active_promotions: Self::evaluate(&catalog, &selected, now),
            selected,
        };

        Ok(Self {
            prefs,
            clock,
            catalog,
            business_hours,
            vouchers,
            state: Mutex::new(state),
        })
    }

    /// Change le fuseau sélectionné : validation, persistance, puis
    /// recalcul synchrone des promotions actives pour le nouveau fuseau.
    /// Un identifiant invalide échoue sans toucher l'état courant.
    pub async fn set_timezone(&self, timezone_id: &str) -> Result<ContextSnapshot> {
        let timezone = Timezone::try_new(timezone_id)?;
        self.prefs.save(&timezone).await?;

        let now = self.clock.now();
        {
            let mut state = self.state.lock().unwrap();
            state.descriptor = timezone_resolver::resolve(&timezone, now);
            state.active_promotions = Self::evaluate(&self.catalog, &timezone, now);
            state.selected = timezone;
        }

        tracing::info!(timezone = timezone_id, "Timezone selection changed");
        Ok(self.snapshot())
    }

    /// Recalcule les promotions actives pour l'instant courant.
    /// Appelé par la boucle de fond : rattrape les promotions qui
    /// démarrent ou expirent pendant que la sélection ne bouge pas.
    pub fn refresh(&self) {
        let now = self.clock.now();
        let mut state = self.state.lock().unwrap();
        state.descriptor = timezone_resolver::resolve(&state.selected, now);
        state.active_promotions = Self::evaluate(&self.catalog, &state.selected, now);
    }

    pub fn selected_timezone(&self) -> Timezone {
        self.state.lock().unwrap().selected.clone()
    }

    /// Vue immuable pour la présentation
    pub fn snapshot(&self) -> ContextSnapshot {
        let now = self.clock.now();
        let state = self.state.lock().unwrap();

        ContextSnapshot {
            selected_timezone: state.selected.clone(),
            descriptor: state.descriptor.clone(),
            active_promotions: state.active_promotions.clone(),
            business_hours_active: promotion_evaluator::is_business_hours(
                &self.business_hours,
                &state.selected,
                now,
            ),
            next_promotion: promotion_evaluator::next_promotion(
                &self.catalog,
                &state.selected,
                now,
            )
            .cloned(),
            time_until_next: promotion_evaluator::time_until_next(
                &self.catalog,
                &state.selected,
                now,
            ),
            available_vouchers: promotion_evaluator::available_regional_vouchers(
                &self.vouchers,
                &state.selected,
                now,
            )
            .into_iter()
            .cloned()
            .collect(),
        }
    }

    /// Boucle de recalcul périodique, arrêtée par le signal de teardown
    pub async fn run_refresh_loop(
        &self,
        interval: Duration,
        mut shutdown_signal: tokio::sync::watch::Receiver<bool>,
    ) {
        tracing::info!("Timezone context refresh loop started");

        loop {
            if *shutdown_signal.borrow() {
                break;
            }

            tokio::select! {
                _ = sleep(interval) => self.refresh(),
                _ = shutdown_signal.changed() => break,
            }
        }

        tracing::info!("Timezone context refresh loop stopped");
    }

    fn evaluate(
        catalog: &PromotionCatalog,
        timezone: &Timezone,
        now: chrono::DateTime<chrono::Utc>,
    ) -> Vec<PromotionDefinition> {
        promotion_evaluator::active_promotions(catalog, timezone, now)
            .into_iter()
            .cloned()
            .collect()
    }
}

