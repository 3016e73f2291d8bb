//! # Core Library
//!
//! Configuration, errors, the ECO exchange calculator, the recycling reward rules, the wallet
//! session and the data provider behind the Eco-Eeelien screens. Compiles for both the browser and native targets.

pub mod config;
pub mod data;
pub mod error;
pub mod exchange;
#[cfg(not(target_arch = "wasm32"))]
pub mod logging;
pub mod recycling;
pub mod wallet;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, Result};
