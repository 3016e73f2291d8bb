//! # Shared Data Types
//!
//! Types and display helpers shared by `lib-core` and the `wallet-web` front end.
//!
//! ## Structure
//!
//! - **[`dto`]**: data shapes served by the data provider
//!   - **[`dto::dashboard`]**: stats, activity, achievements, rewards, leaderboard
//!   - **[`dto::exchange`]**: exchange history
//!   - **[`dto::kyc`]**: KYC badge status
//! - **[`utils`]**: address and number formatting
//!
//! ## Usage
//!
//! ```rust
//! use shared::dto::kyc::{BadgeSize, KycStatus};
//! use shared::utils::truncate_address;
//!
//! assert_eq!(KycStatus::Pending.badge_text(BadgeSize::Md), Some("Pendiente"));
//! assert_eq!(truncate_address("abcd1234wxyz"), "abcd...wxyz");
//! ```

pub mod dto;
pub mod utils;

pub use dto::*;
pub use utils::*;
