//! # Utilities Library
//!
//! Small helpers shared by the core library: environment variables, lenient amount
//! parsing and relative time labels.

pub mod envs;
pub mod time;
pub mod validation;

// Re-export commonly used functions
pub use envs::{get_env, get_env_or, get_env_parse, get_env_parse_or};
pub use time::{format_relative, now_utc};
pub use validation::{parse_amount, validate_not_empty};
