//! Shared types for the CrewDesk workforce backend
//!
//! Data models and the unified error system, used by the server and by
//! API consumers. Models are plain serde structs; DB row types gain
//! `sqlx::FromRow` behind the `db` feature so non-server crates don't
//! pull in sqlx.

pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
pub use serde::{Deserialize, Serialize};
