//! Data models
//!
//! Shared between the server and API consumers.
//! DB row types use `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`.
//! All IDs are `i64` (SQLite INTEGER PRIMARY KEY); all timestamps are
//! Unix millis (`i64`).

pub mod asset;
pub mod business;
pub mod client;
pub mod employee;
pub mod invoice;
pub mod job;
pub mod location;
pub mod timesheet;
pub mod todo;

// Re-exports
pub use asset::*;
pub use business::*;
pub use client::*;
pub use employee::*;
pub use invoice::*;
pub use job::*;
pub use location::*;
pub use timesheet::*;
pub use todo::*;
