//! # Application Configuration
//!
//! Settings read from environment variables. Every variable is optional. In the browser
//! there is no environment, so [`Config::from_env`] resolves to the defaults there.
//!
//! | Variable | Default |
//! |----------|---------|
//! | `ECO_WALLET_CONNECT_TIMEOUT_MS` | `30000` (1000-300000) |
//! | `ECO_WALLET_INSTALL_URL` | `https://phantom.app/` |
//! | `ECO_DEFAULT_CURRENCY` | `SOL` |
//! | `ECO_TOKENS_PER_KG` | `200` |
//! | `ECO_MIN_DEPOSIT_GRAMS` | `10` |
//! | `LOG_LEVEL` | `info` |
//!
//! ## Global Config Access
//!
//! ```rust
//! use lib_core::config::core_config;
//!
//! let config = core_config();
//! assert!(config.connect_timeout().as_millis() >= 1000);
//! ```

use std::sync::OnceLock;
use std::time::Duration;

use lib_utils::envs::{get_env_or, get_env_parse_or};
use lib_utils::validation::validate_not_empty;

use crate::error::{AppError, Result};
use crate::exchange::RateTable;
use crate::recycling::{RewardConfig, DEFAULT_ECO_PER_KG, DEFAULT_MIN_DEPOSIT_GRAMS};

pub const DEFAULT_CONNECT_TIMEOUT_MS: u64 = 30_000;
pub const DEFAULT_INSTALL_URL: &str = "https://phantom.app/";
pub const DEFAULT_CURRENCY: &str = "SOL";

const TIMEOUT_RANGE_MS: std::ops::RangeInclusive<u64> = 1_000..=300_000;
const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Upper bound for a single wallet connect/disconnect call
    pub wallet_connect_timeout_ms: u64,

    /// Page opened when no wallet extension is installed
    pub wallet_install_url: String,

    /// Currency preselected on the exchange screen
    pub default_currency: String,

    /// ECO minted per kilogram of deposited PET
    pub eco_per_kg: u64,

    pub min_deposit_grams: u64,

    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            wallet_connect_timeout_ms: DEFAULT_CONNECT_TIMEOUT_MS,
            wallet_install_url: DEFAULT_INSTALL_URL.to_string(),
            default_currency: DEFAULT_CURRENCY.to_string(),
            eco_per_kg: DEFAULT_ECO_PER_KG,
            min_deposit_grams: DEFAULT_MIN_DEPOSIT_GRAMS,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        let wallet_connect_timeout_ms =
            get_env_parse_or("ECO_WALLET_CONNECT_TIMEOUT_MS", DEFAULT_CONNECT_TIMEOUT_MS)?;
        let wallet_install_url = get_env_or("ECO_WALLET_INSTALL_URL", DEFAULT_INSTALL_URL);
        let default_currency =
            get_env_or("ECO_DEFAULT_CURRENCY", DEFAULT_CURRENCY).to_uppercase();
        let eco_per_kg = get_env_parse_or("ECO_TOKENS_PER_KG", DEFAULT_ECO_PER_KG)?;
        let min_deposit_grams =
            get_env_parse_or("ECO_MIN_DEPOSIT_GRAMS", DEFAULT_MIN_DEPOSIT_GRAMS)?;
        let log_level = get_env_or("LOG_LEVEL", "info").to_lowercase();

        Ok(Self {
            wallet_connect_timeout_ms,
            wallet_install_url,
            default_currency,
            eco_per_kg,
            min_deposit_grams,
            log_level,
        })
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        if !TIMEOUT_RANGE_MS.contains(&self.wallet_connect_timeout_ms) {
            return Err(AppError::Config(format!(
                "ECO_WALLET_CONNECT_TIMEOUT_MS must be between {} and {}",
                TIMEOUT_RANGE_MS.start(),
                TIMEOUT_RANGE_MS.end()
            )));
        }

        validate_not_empty(&self.wallet_install_url, "ECO_WALLET_INSTALL_URL")
            .map_err(AppError::Config)?;
        if !self.wallet_install_url.starts_with("https://") {
            return Err(AppError::Config(
                "ECO_WALLET_INSTALL_URL must be an https:// URL".to_string(),
            ));
        }

        if RateTable::builtin().get(&self.default_currency).is_err() {
            return Err(AppError::Config(format!(
                "ECO_DEFAULT_CURRENCY {} is not in the rate table",
                self.default_currency
            )));
        }

        if self.eco_per_kg == 0 {
            return Err(AppError::Config(
                "ECO_TOKENS_PER_KG must be greater than 0".to_string(),
            ));
        }

        if !LOG_LEVELS.contains(&self.log_level.as_str()) {
            return Err(AppError::Config(format!(
                "LOG_LEVEL must be one of {}",
                LOG_LEVELS.join(", ")
            )));
        }

        Ok(())
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_millis(self.wallet_connect_timeout_ms)
    }

    pub fn reward_config(&self) -> RewardConfig {
        RewardConfig {
            eco_per_kg: self.eco_per_kg,
            min_deposit_grams: self.min_deposit_grams,
        }
    }
}

/// Load a `.env` file from the working directory if one exists.
///
/// Returns whether a file was loaded.
#[cfg(not(target_arch = "wasm32"))]
pub fn load_dotenv() -> bool {
    dotenvy::dotenv().is_ok()
}

/// Global configuration instance (initialized once at startup).
static CONFIG: OnceLock<Config> = OnceLock::new();

/// Load, validate and install the global configuration.
///
/// # Errors
///
/// Returns an error if a variable is malformed, validation fails, or the config has
/// already been initialized.
pub fn init_config() -> Result<&'static Config> {
    let config = Config::from_env()?;
    config.validate()?;

    CONFIG
        .set(config)
        .map_err(|_| AppError::Config("Config has already been initialized".to_string()))?;
    Ok(core_config())
}

/// Get the global configuration, falling back to [`Config::default`] when
/// [`init_config`] was never called.
pub fn core_config() -> &'static Config {
    CONFIG.get_or_init(Config::default)
}
