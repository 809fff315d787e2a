//! # mihrab-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the repository port traits defined in `mihrab-app::ports::storage`
//! - Manage `SQLite` connection pool lifecycle
//! - Run database migrations (using sqlx embedded migrations)
//! - Map between domain types and database rows
//!
//! ## Dependency rule
//! Depends on `mihrab-app` (for port traits) and `mihrab-domain` (for domain
//! types). The `app` and `domain` crates must never reference this adapter.

mod error;
pub mod pool;
mod prayer_log_repo;
mod settings_repo;

pub use error::StorageError;
pub use prayer_log_repo::SqlitePrayerLogRepository;
pub use settings_repo::SqliteSettingsRepository;
