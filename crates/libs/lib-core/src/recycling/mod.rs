//! # Recycling Rules
//!
//! Deposit rewards, container bookkeeping and token redemption for the smart-container
//! network. Everything here is plain in-memory logic: callers pass the accounts they
//! hold and the current time, and get back the record of what happened.
//!
//! ## Flow
//!
//! ```text
//! RecyclingProgram::register_user ──▶ RecyclerAccount ──redeem──▶ RedemptionRecord
//! RecyclingProgram::register_container ──▶ SmartContainer ──collect──▶ CollectionRecord
//! RecyclingProgram::process_deposit(container, account, grams) ──▶ DepositRecord
//! ```
//!
//! ## Example
//!
//! ```rust
//! use chrono::Utc;
//! use lib_core::recycling::{RecyclingProgram, RewardConfig};
//!
//! let now = Utc::now();
//! let mut program = RecyclingProgram::new(RewardConfig::default());
//! let mut account = program.register_user("Juan", now).unwrap();
//! let mut container = program
//!     .register_container("OXXO-CENTRO", "OXXO Centro", 50, now)
//!     .unwrap();
//!
//! let deposit = program
//!     .process_deposit(&mut container, &mut account, 125, now)
//!     .unwrap();
//! assert_eq!(deposit.eco_reward, 25);
//! assert_eq!(account.balance, 25);
//! ```

mod accounts;
mod program;

pub use accounts::{
    CollectionRecord, DepositRecord, RecyclerAccount, RedemptionRecord, SmartContainer,
};
pub use program::{
    deposit_reward, ProgramTotals, RecyclingProgram, RewardConfig, BOTTLE_WEIGHT_GRAMS,
    DEFAULT_ECO_PER_KG, DEFAULT_MIN_DEPOSIT_GRAMS, MAX_CONTAINER_ID_CHARS, MAX_LOCATION_CHARS,
    MAX_PRODUCT_ID_CHARS, MAX_USERNAME_CHARS,
};
