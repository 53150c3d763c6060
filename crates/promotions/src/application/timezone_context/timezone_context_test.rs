// crates/promotions/src/application/timezone_context/timezone_context_test.rs

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone, Utc};
    use shared_kernel::clock::FixedClock;
    use shared_kernel::domain::value_objects::Timezone;
    use std::sync::Arc;

    use crate::application::timezone_context::TimezoneContext;
    use crate::domain::catalog::{
        default_business_hours, default_regional_vouchers, PromotionCatalog,
    };
    use crate::domain::repositories::TimezonePreferenceRepositoryStub;

    fn new_york() -> Timezone {
        Timezone::new_unchecked("America/New_York")
    }

    /// Mardi 16 janvier 2024, 13:00 UTC : 08:00 à New York
    /// (morning-coffee-global actif), 13:00 à Londres (lunch-rush-europe
    /// actif)
    fn tuesday_noon_utc() -> chrono::DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 16, 13, 0, 0).unwrap()
    }

    async fn context_with(
        prefs: Arc<TimezonePreferenceRepositoryStub>,
        clock: Arc<FixedClock>,
    ) -> TimezoneContext {
        TimezoneContext::initialize(
            prefs,
            clock,
            PromotionCatalog::default(),
            default_business_hours(),
            default_regional_vouchers(),
            new_york(),
        )
        .await
        .unwrap()
    }

    #[tokio::test]
    async fn test_initialize_restores_stored_preference() {
        let prefs = Arc::new(TimezonePreferenceRepositoryStub::with_stored("Asia/Tokyo"));
        let clock = Arc::new(FixedClock::at(tuesday_noon_utc()));

        let context = context_with(prefs, clock).await;

        assert_eq!(context.selected_timezone().as_str(), "Asia/Tokyo");
    }

    #[tokio::test]
    async fn test_initialize_without_preference_uses_detected_timezone() {
        let prefs = Arc::new(TimezonePreferenceRepositoryStub::new());
        let clock = Arc::new(FixedClock::at(tuesday_noon_utc()));

        let context = context_with(prefs, clock).await;

        assert_eq!(context.selected_timezone().as_str(), "America/New_York");
    }

    #[tokio::test]
    async fn test_corrupted_preference_falls_back_to_detected() {
        let prefs = Arc::new(TimezonePreferenceRepositoryStub::with_stored("Mars/Olympus"));
        let clock = Arc::new(FixedClock::at(tuesday_noon_utc()));

        let context = context_with(prefs, clock).await;

        // Pas d'échec d'initialisation : repli silencieux sur le détecté
        assert_eq!(context.selected_timezone().as_str(), "America/New_York");
    }

    #[tokio::test]
    async fn test_set_timezone_recomputes_promotions_synchronously() {
        let prefs = Arc::new(TimezonePreferenceRepositoryStub::new());
        let clock = Arc::new(FixedClock::at(tuesday_noon_utc()));
        let context = context_with(prefs, clock).await;

        // 08:00 à New York : seul morning-coffee-global est actif
        let before = context.snapshot();
        let ids: Vec<&str> = before
            .active_promotions
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(ids, vec!["morning-coffee-global"]);

        // Le retour de set_timezone reflète déjà le nouveau fuseau,
        // sans attendre la boucle de rafraîchissement
        let after = context.set_timezone("Europe/London").await.unwrap();
        assert_eq!(after.selected_timezone.as_str(), "Europe/London");
        let ids: Vec<&str> = after
            .active_promotions
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(ids, vec!["lunch-rush-europe"]);
    }

    #[tokio::test]
    async fn test_selection_survives_reinitialization() {
        let prefs = Arc::new(TimezonePreferenceRepositoryStub::new());
        let clock = Arc::new(FixedClock::at(tuesday_noon_utc()));

        let context = context_with(Arc::clone(&prefs), Arc::clone(&clock)).await;
        context.set_timezone("Europe/London").await.unwrap();
        drop(context);

        // Rechargement simulé : un nouveau contexte sur la même persistance
        let reloaded = context_with(prefs, clock).await;
        assert_eq!(reloaded.selected_timezone().as_str(), "Europe/London");
    }

    #[tokio::test]
    async fn test_invalid_timezone_id_leaves_state_untouched() {
        let prefs = Arc::new(TimezonePreferenceRepositoryStub::new());
        let clock = Arc::new(FixedClock::at(tuesday_noon_utc()));
        let context = context_with(Arc::clone(&prefs), clock).await;

        let err = context.set_timezone("Not/A_Zone").await.unwrap_err();

        assert!(err.is_invalid_timezone());
        assert_eq!(context.selected_timezone().as_str(), "America/New_York");
        assert_eq!(prefs.stored.lock().unwrap().clone(), None);
    }

    #[tokio::test]
    async fn test_refresh_catches_window_transitions() {
        let prefs = Arc::new(TimezonePreferenceRepositoryStub::new());
        // Mardi 16:30 à New York : aucune promotion active
        let clock = Arc::new(FixedClock::at(
            Utc.with_ymd_and_hms(2024, 1, 16, 21, 30, 0).unwrap(),
        ));
        let context = context_with(prefs, Arc::clone(&clock)).await;
        assert!(context.snapshot().active_promotions.is_empty());

        // Une heure plus tard, 17:30 : le happy hour a démarré entre
        // deux sélections, seul refresh() peut le rattraper
        clock.advance(Duration::hours(1));
        context.refresh();

        let snapshot = context.snapshot();
        let ids: Vec<&str> = snapshot
            .active_promotions
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(ids, vec!["happy-hour-us"]);
        assert!(snapshot.business_hours_active);
    }

    #[tokio::test]
    async fn test_snapshot_exposes_next_promotion_and_delay() {
        let prefs = Arc::new(TimezonePreferenceRepositoryStub::new());
        let clock = Arc::new(FixedClock::at(tuesday_noon_utc()));
        let context = context_with(prefs, clock).await;

        // 08:00 à New York : la prochaine fenêtre à ouvrir est le
        // happy hour de 17:00
        let snapshot = context.snapshot();
        assert_eq!(
            snapshot.next_promotion.map(|p| p.id),
            Some("happy-hour-us".to_string())
        );
        assert_eq!(snapshot.time_until_next.as_deref(), Some("9h 0m"));
    }

    #[tokio::test]
    async fn test_snapshot_lists_available_regional_vouchers() {
        let prefs = Arc::new(TimezonePreferenceRepositoryStub::new());
        // Mardi 12:00 à New York : NYC Local Eateries (11:00-22:00) ouvert
        let clock = Arc::new(FixedClock::at(
            Utc.with_ymd_and_hms(2024, 1, 16, 17, 0, 0).unwrap(),
        ));
        let context = context_with(prefs, Arc::clone(&clock)).await;

        let ids: Vec<String> = context
            .snapshot()
            .available_vouchers
            .iter()
            .map(|v| v.voucher_id.clone())
            .collect();
        assert_eq!(ids, vec!["local-restaurant-ny"]);

        // À Londres au même instant (17:00), les pubs viennent d'ouvrir
        let snapshot = context.set_timezone("Europe/London").await.unwrap();
        let ids: Vec<String> = snapshot
            .available_vouchers
            .iter()
            .map(|v| v.voucher_id.clone())
            .collect();
        assert_eq!(ids, vec!["london-pubs"]);
    }

    #[tokio::test]
    async fn test_refresh_loop_stops_on_shutdown_signal() {
        let prefs = Arc::new(TimezonePreferenceRepositoryStub::new());
        let clock = Arc::new(FixedClock::at(tuesday_noon_utc()));
        let context = Arc::new(context_with(prefs, clock).await);

        let (shutdown_tx, shutdown_rx) = tokio::sync::watch::channel(false);
        let handle = {
            let context = Arc::clone(&context);
            tokio::spawn(async move {
                context
                    .run_refresh_loop(std::time::Duration::from_secs(60), shutdown_rx)
                    .await
            })
        };

        shutdown_tx.send(true).unwrap();
        handle.await.unwrap();
    }
}
