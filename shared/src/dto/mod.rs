//! # Data Transfer Objects (DTOs)
//!
//! Data shapes exchanged between the data provider and the views. They are plain
//! serde types so a live backend can later return them as JSON unchanged.
//!
//! ## Module Organization
//!
//! - [`dashboard`] - user stats, activity feed, achievements, rewards, leaderboard
//! - [`exchange`] - exchange history records
//! - [`kyc`] - verification status badge model
//!
//! ## Serialization Format
//!
//! - **Field naming**: snake_case (default serde behavior)
//! - **Enums**: lowercase strings via `#[serde(rename_all = "lowercase")]`
//! - **Timestamps**: RFC 3339 (`chrono` serde support)

pub mod dashboard;
pub mod exchange;
pub mod kyc;

pub use dashboard::*;
pub use exchange::*;
pub use kyc::*;
