//! CrewDesk Server — workforce and operations backend
//!
//! # Module structure
//!
//! ```text
//! crew-server/src/
//! ├── core/          # Configuration, state, server startup
//! ├── api/           # HTTP routes and handlers (one module per resource)
//! ├── db/            # SQLite pool, migrations, repositories
//! ├── billing/       # Decimal hours/money arithmetic
//! └── utils/         # Logger, time conversion, input validation
//! ```
//!
//! The core subsystem is shift tracking and invoicing: clock-in opens
//! at most one shift per employee (store-enforced), clock-out fixes the
//! billable hours, and invoice generation snapshots a week of shifts
//! into an immutable draft.

pub mod api;
pub mod billing;
pub mod core;
pub mod db;
pub mod utils;

// Re-export public types
pub use crate::core::{Config, Server, ServerState};
pub use crate::core::server::build_router;
pub use utils::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};
