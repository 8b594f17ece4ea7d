//! API routing module
//!
//! # Structure
//!
//! - [`health`] - Health check
//! - [`businesses`] - Business management
//! - [`employees`] - Employee management
//! - [`clients`] - Client management
//! - [`locations`] - Job site management
//! - [`jobs`] - Job management
//! - [`job_assignments`] - Job crew assignment
//! - [`todos`] - Job task lists
//! - [`timesheets`] - Clock-in/clock-out and approval
//! - [`invoices`] - Weekly invoice generation and sending
//! - [`assets`] - Asset register and scan lookup
//! - [`asset_scans`] - Scan events (checkout / check-in / issue)

pub mod asset_scans;
pub mod assets;
pub mod businesses;
pub mod clients;
pub mod employees;
pub mod health;
pub mod invoices;
pub mod job_assignments;
pub mod jobs;
pub mod locations;
pub mod timesheets;
pub mod todos;
