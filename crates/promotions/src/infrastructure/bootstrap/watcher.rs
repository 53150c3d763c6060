// crates/promotions/src/infrastructure/bootstrap/watcher.rs

use shared_kernel::clock::SystemClock;
use shared_kernel::domain::value_objects::Timezone;
use shared_kernel::errors::AppResult;
use std::env;
use std::sync::Arc;
use std::time::Duration;

use crate::application::timezone_context::TimezoneContext;
use crate::application::workers::StatusPoller;
use crate::domain::catalog::{
    common_timezones, default_business_hours, default_regional_vouchers, PromotionCatalog,
};
use crate::infrastructure::http::HttpPromotionStatusClient;
use crate::infrastructure::storage::FilePreferenceRepository;

pub async fn run_promotion_watcher() -> AppResult<()> {
    // 1. Initialisation des logs
    tracing_subscriber::fmt::init();
    tracing::info!("📡 Starting promotion watcher");

    // 2. Configuration via Environnement (avec valeurs par défaut)
    let api_url =
        env::var("PROMOTIONS_API_URL").unwrap_or_else(|_| "http://localhost:8080".to_string());
    let preference_path = env::var("TIMEZONE_PREFERENCE_PATH")
        .unwrap_or_else(|_| "timezone_preference.json".to_string());

    let poll_secs: u64 = env::var("PROMOTIONS_POLL_SECS")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(30);

    let refresh_secs: u64 = env::var("PROMOTIONS_REFRESH_SECS")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(60);

    // 3. Montage de l'infrastructure
    let prefs = Arc::new(FilePreferenceRepository::new(&preference_path));
    let client = Arc::new(HttpPromotionStatusClient::new(&api_url));
    let clock = Arc::new(SystemClock);

    // 4. Initialisation du contexte : préférence persistée si valide,
    // sinon le fuseau détecté sur le poste
    let detected = Timezone::detect_host();
    tracing::info!(timezone = detected.as_str(), "Detected host timezone");

    let context = Arc::new(
        TimezoneContext::initialize(
            prefs,
            Arc::clone(&clock) as Arc<dyn shared_kernel::clock::Clock>,
            PromotionCatalog::default(),
            default_business_hours(),
            default_regional_vouchers(),
            detected,
        )
        .await?,
    );

    let poller = Arc::new(StatusPoller::new(
        client,
        clock,
        common_timezones(),
        Duration::from_secs(poll_secs),
    ));

    // 5. Préparation du signal d'arrêt (Graceful Shutdown)
    // On crée un canal "watch" pour notifier les deux boucles
    let (shutdown_tx, shutdown_rx) = tokio::sync::watch::channel(false);

    // 6. Gestionnaire de signaux système (Ctrl+C, SIGTERM)
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                tracing::info!("🛑 Shutdown signal received, stopping watcher...");
                let _ = shutdown_tx.send(true);
            }
            Err(err) => {
                tracing::error!("❌ Unable to listen for shutdown signal: {}", err);
            }
        }
    });

    tracing::info!(
        "✅ Watcher configured: api={}, poll={}s, refresh={}s",
        api_url,
        poll_secs,
        refresh_secs
    );

    // 7. Exécution des deux boucles jusqu'au teardown
    let poll_handle = {
        let poller = Arc::clone(&poller);
        let shutdown_rx = shutdown_rx.clone();
        tokio::spawn(async move { poller.run(shutdown_rx).await })
    };
    let refresh_handle = {
        let context = Arc::clone(&context);
        tokio::spawn(async move {
            context
                .run_refresh_loop(Duration::from_secs(refresh_secs), shutdown_rx)
                .await
        })
    };

    let _ = tokio::join!(poll_handle, refresh_handle);

    tracing::info!("👋 Promotion watcher exited clean");
    Ok(())
}
