//! End-to-end smoke tests for the full mihrabd stack.
//!
//! Each test spins up the complete application (in-memory `SQLite`, real
//! repos, real services, real axum router) and exercises the HTTP layer via
//! `tower::ServiceExt::oneshot` — no TCP port is bound. The remote prayer
//! and Quran collaborators are replaced with in-process stubs.

use std::collections::HashMap;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use chrono::NaiveDate;
use http_body_util::BodyExt;
use tower::ServiceExt;

use mihrab_adapter_http_axum::router;
use mihrab_adapter_http_axum::state::AppState;
use mihrab_adapter_storage_sqlite_sqlx::{
    SqlitePrayerLogRepository, SqliteSettingsRepository, pool,
};
use mihrab_adapter_virtual::FixedLocationProvider;
use mihrab_app::ports::{FetchedTimings, PrayerTimesProvider, QuranProvider};
use mihrab_app::services::calendar_service::CalendarService;
use mihrab_app::services::prayer_schedule_service::PrayerScheduleService;
use mihrab_app::services::qibla_service::QiblaService;
use mihrab_app::services::quran_service::QuranService;
use mihrab_app::services::settings_service::SettingsService;
use mihrab_app::services::tracker_service::PrayerTrackerService;
use mihrab_domain::calendar::{FastingTimes, HijriDate, RamadanDay};
use mihrab_domain::error::MihrabError;
use mihrab_domain::geo::{GeoCoordinate, Place};
use mihrab_domain::quran::{Chapter, Verse, VersePage};

struct StubTimings;

impl PrayerTimesProvider for StubTimings {
    async fn timings(
        &self,
        date: NaiveDate,
        _position: GeoCoordinate,
    ) -> Result<FetchedTimings, MihrabError> {
        let timings: HashMap<String, String> = [
            ("Fajr", "05:12"),
            ("Dhuhr", "12:30"),
            ("Asr", "15:47 (+03)"),
            ("Maghrib", "18:45"),
            ("Isha", "20:01"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
        Ok(FetchedTimings {
            date,
            hijri: Some(HijriDate {
                day: 14,
                month: 9,
                month_name: "Ramaḍān".to_string(),
                year: 1446,
            }),
            timings,
        })
    }

    async fn hijri_month(
        &self,
        _month: u32,
        year: u32,
        _position: GeoCoordinate,
    ) -> Result<Vec<RamadanDay>, MihrabError> {
        Ok(vec![RamadanDay {
            hijri_day: 1,
            hijri_year: year,
            readable: "01 Mar 2025".to_string(),
            timings: FastingTimes {
                fajr: "05:43".to_string(),
                sunrise: "07:08".to_string(),
                dhuhr: "13:21".to_string(),
                asr: "16:29".to_string(),
                maghrib: "19:24".to_string(),
                isha: "20:43".to_string(),
            },
        }])
    }

    async fn to_hijri(&self, _date: NaiveDate) -> Result<HijriDate, MihrabError> {
        Ok(HijriDate {
            day: 1,
            month: 9,
            month_name: "Ramaḍān".to_string(),
            year: 1446,
        })
    }
}

struct StubQuran;

impl QuranProvider for StubQuran {
    async fn chapters(&self) -> Result<Vec<Chapter>, MihrabError> {
        Ok(vec![Chapter {
            id: 1,
            name_simple: "Al-Fatihah".to_string(),
            name_arabic: "الفاتحة".to_string(),
            translated_name: Some("The Opener".to_string()),
            verses_count: 7,
        }])
    }

    async fn verses(&self, chapter_id: u16, page: u32) -> Result<VersePage, MihrabError> {
        Ok(VersePage {
            chapter_id,
            verses: vec![Verse {
                verse_key: format!("{chapter_id}:1"),
                text_uthmani: "بِسْمِ ٱللَّهِ".to_string(),
            }],
            page,
            total_pages: 1,
        })
    }
}

/// Build a fully-wired router backed by an in-memory `SQLite` database.
async fn app() -> axum::Router {
    let db = pool::Config {
        database_url: "sqlite::memory:".to_string(),
    }
    .build()
    .await
    .expect("in-memory database should initialise");

    let db_pool = db.pool().clone();
    let settings_repo = SqliteSettingsRepository::new(db_pool.clone());
    let log_repo = SqlitePrayerLogRepository::new(db_pool);

    let location = FixedLocationProvider::new(
        41.0082,
        28.9784,
        Some(Place {
            city: Some("Istanbul".to_string()),
            country: Some("Türkiye".to_string()),
        }),
    )
    .expect("coordinates are in range");
    let location2 = FixedLocationProvider::new(41.0082, 28.9784, None).expect("in range");
    let location3 = FixedLocationProvider::new(41.0082, 28.9784, None).expect("in range");

    let state = AppState::new(
        QiblaService::new(location2),
        PrayerScheduleService::new(StubTimings, location),
        QuranService::new(StubQuran),
        CalendarService::new(StubTimings, location3),
        SettingsService::new(settings_repo),
        PrayerTrackerService::new(log_repo),
    );

    router::build(state)
}

async fn get_json(app: axum::Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

#[tokio::test]
async fn should_return_ok_when_health_check_called() {
    let resp = app()
        .await
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn should_serve_qibla_bearing_for_istanbul() {
    let (status, body) = get_json(app().await, "/api/qibla").await;
    assert_eq!(status, StatusCode::OK);
    // Istanbul's qibla points roughly south-east.
    let bearing = body["bearing"].as_f64().unwrap();
    assert!((140.0..160.0).contains(&bearing), "bearing was {bearing}");
}

#[tokio::test]
async fn should_serve_rotation_with_wraparound() {
    let (status, body) = get_json(app().await, "/api/qibla/rotation?heading=350").await;
    assert_eq!(status, StatusCode::OK);
    let bearing = body["bearing"].as_f64().unwrap();
    let rotation = body["rotation"].as_f64().unwrap();
    assert!((0.0..360.0).contains(&rotation));
    let expected = ((bearing - 350.0) % 360.0 + 360.0) % 360.0;
    assert!((rotation - expected).abs() < 1e-9);
}

#[tokio::test]
async fn should_serve_schedule_with_hijri_and_place() {
    let (status, body) = get_json(app().await, "/api/prayers/schedule").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["hijri"]["year"], 1446);
    assert_eq!(body["place"]["city"], "Istanbul");
    assert_eq!(body["entries"].as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn should_answer_next_prayer_endpoint() {
    let (status, body) = get_json(app().await, "/api/prayers/next").await;
    assert_eq!(status, StatusCode::OK);
    // Whether a prayer remains depends on the wall clock; the key must exist.
    assert!(body.as_object().unwrap().contains_key("next"));
}

#[tokio::test]
async fn should_persist_settings_across_requests() {
    let app = app().await;

    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .method("PUT")
                .uri("/api/settings")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    r#"{"notifications_enabled": false, "ads_enabled": false}"#,
                ))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let (status, body) = get_json(app, "/api/settings").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["notifications_enabled"], false);
    assert_eq!(body["ads_enabled"], false);
    assert_eq!(body["sound_enabled"], true);
}

#[tokio::test]
async fn should_persist_prayer_log_across_requests() {
    let app = app().await;

    for (name, completed) in [("Fajr", true), ("Dhuhr", true), ("Fajr", true)] {
        let resp = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("PUT")
                    .uri("/api/prayers/log")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(format!(
                        r#"{{"date": "2025-03-14", "name": "{name}", "completed": {completed}}}"#
                    )))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
    }

    let (status, body) = get_json(app, "/api/prayers/log?date=2025-03-14").await;
    assert_eq!(status, StatusCode::OK);
    // Duplicate marking is idempotent; order is canonical.
    assert_eq!(body["completed_count"], 2);
    assert_eq!(body["completed"][0], "Fajr");
    assert_eq!(body["completed"][1], "Dhuhr");
}

#[tokio::test]
async fn should_serve_ramadan_imsakiye() {
    let (status, body) = get_json(app().await, "/api/calendar/ramadan").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["hijri_year"], 1446);
    assert_eq!(body["days"][0]["hijri_day"], 1);
}

#[tokio::test]
async fn should_serve_observances_and_reject_unknown_year() {
    let (status, body) = get_json(app().await, "/api/calendar/observances?year=2025").await;
    assert_eq!(status, StatusCode::OK);
    assert!(!body.as_array().unwrap().is_empty());

    let (status, _) = get_json(app().await, "/api/calendar/observances?year=2030").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn should_serve_quran_endpoints_with_validation() {
    let (status, body) = get_json(app().await, "/api/quran/chapters").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["id"], 1);

    let (status, body) = get_json(app().await, "/api/quran/chapters/1/verses").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["verses"][0]["verse_key"], "1:1");

    let (status, _) = get_json(app().await, "/api/quran/chapters/0/verses").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = get_json(app().await, "/api/quran/chapters/1/verses?page=0").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn should_serve_tajweed_reference() {
    let (status, body) = get_json(app().await, "/api/tajweed").await;
    assert_eq!(status, StatusCode::OK);
    let sections = body.as_array().unwrap();
    assert!(sections.len() >= 4);
    assert!(sections.iter().any(|s| !s["rules"].as_array().unwrap().is_empty()));
}
