//! # campuscoffee-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the `CrudDataService` port for each entity
//! - Manage the `SQLite` connection pool lifecycle
//! - Run database migrations (sqlx embedded migrations)
//! - Map between domain types and database rows
//! - Translate unique-constraint violations into the system-wide
//!   duplicate error
//!
//! ## Dependency rule
//! Depends on `campuscoffee-app` (for the port trait) and
//! `campuscoffee-domain` (for domain types). The `app` and `domain` crates
//! must never reference this adapter.

pub mod error;
pub mod pool;
pub mod pos_data;
pub mod review_data;

pub use error::StorageError;
pub use pool::{Config, Database};
pub use pos_data::SqlitePosDataService;
pub use review_data::SqliteReviewDataService;
