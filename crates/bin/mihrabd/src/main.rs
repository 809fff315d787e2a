//! # mihrabd — mihrab daemon
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Parse configuration (TOML file, env var overrides)
//! - Initialize the `SQLite` connection pool and run migrations
//! - Construct adapter implementations of the port traits
//! - Construct application services, injecting adapters via port traits
//! - Build the axum router, injecting application services
//! - Bind to a TCP port and serve, shutting down gracefully on ctrl-c
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use mihrab_adapter_aladhan::AladhanClient;
use mihrab_adapter_http_axum::state::AppState;
use mihrab_adapter_quran_com::QuranComClient;
use mihrab_adapter_storage_sqlite_sqlx::{
    SqlitePrayerLogRepository, SqliteSettingsRepository, pool,
};
use mihrab_adapter_virtual::{FixedLocationProvider, VirtualHeadingSensor};
use mihrab_app::ports::{HeadingSensor, LocationProvider};
use mihrab_app::services::calendar_service::CalendarService;
use mihrab_app::services::prayer_schedule_service::PrayerScheduleService;
use mihrab_app::services::qibla_service::QiblaService;
use mihrab_app::services::quran_service::QuranService;
use mihrab_app::services::settings_service::SettingsService;
use mihrab_app::services::tracker_service::PrayerTrackerService;
use mihrab_domain::geo::{self, Place};

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .init();

    // Database
    let db = pool::Config {
        database_url: config.database.url.clone(),
    }
    .build()
    .await?;
    let db_pool = db.pool().clone();
    let settings_repo = SqliteSettingsRepository::new(db_pool.clone());
    let log_repo = SqlitePrayerLogRepository::new(db_pool);

    // Collaborators
    let place = Place {
        city: config.location.city.clone(),
        country: config.location.country.clone(),
    };
    let place = (place.city.is_some() || place.country.is_some()).then_some(place);
    let location = Arc::new(FixedLocationProvider::new(
        config.location.latitude,
        config.location.longitude,
        place,
    )?);
    let aladhan = Arc::new(AladhanClient::new(mihrab_adapter_aladhan::Config {
        base_url: config.upstream.aladhan_base_url.clone(),
        method: config.upstream.calculation_method,
    }));
    let quran = QuranComClient::new(mihrab_adapter_quran_com::Config {
        base_url: config.upstream.quran_base_url.clone(),
        language: config.upstream.quran_language.clone(),
        per_page: 10,
    });

    // Demo compass: sweep the heading and trace the needle rotation.
    let bearing = geo::qibla_bearing(location.current_position().await?);
    let mut subscription = VirtualHeadingSensor::default().subscribe()?;
    tokio::spawn(async move {
        while let Some(reading) = subscription.next_reading().await {
            if let Some(heading) = reading {
                let rotation = geo::normalize_degrees(bearing - heading);
                tracing::trace!(heading, rotation, "compass tick");
            }
        }
    });

    // Services
    let state = AppState::new(
        QiblaService::new(Arc::clone(&location)),
        PrayerScheduleService::new(Arc::clone(&aladhan), Arc::clone(&location)),
        QuranService::new(quran),
        CalendarService::new(aladhan, location),
        SettingsService::new(settings_repo),
        PrayerTrackerService::new(log_repo),
    );

    // HTTP
    let app = mihrab_adapter_http_axum::router::build(state);
    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(%bind_addr, "mihrabd listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
    }
    tracing::info!("shutting down");
}
