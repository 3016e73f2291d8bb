//! # Centralized Error Handling
//!
//! [`AppError`] is the single error type of the core library, built with `thiserror`.
//!
//! ## Error Categories
//!
//! 1. **Wallet errors** - raised by [`WalletSession`](crate::wallet::WalletSession)
//!    - [`WalletUnavailable`](AppError::WalletUnavailable) - no wallet extension injected
//!    - [`ConnectionFailed`](AppError::ConnectionFailed) - the wallet rejected or failed `connect`
//!    - [`ConnectionTimedOut`](AppError::ConnectionTimedOut) - `connect` did not settle in time
//!    - [`ConnectInProgress`](AppError::ConnectInProgress) - a connect attempt is already in flight
//!    - [`DisconnectInProgress`](AppError::DisconnectInProgress) - a disconnect is already in flight
//!    - [`DisconnectionFailed`](AppError::DisconnectionFailed) - `disconnect` failed; session kept
//!
//! 2. **Exchange errors** - raised by the calculator
//!    - [`UnknownCurrency`](AppError::UnknownCurrency)
//!    - [`InsufficientBalance`](AppError::InsufficientBalance)
//!
//! 3. **Recycling errors** - raised by [`recycling`](crate::recycling) when a deposit,
//!    collection or redemption breaks a program rule
//!    - [`WeightTooLow`](AppError::WeightTooLow), [`ContainerFull`](AppError::ContainerFull),
//!      [`ContainerInactive`](AppError::ContainerInactive), [`ContainerEmpty`](AppError::ContainerEmpty)
//!    - [`InsufficientTokens`](AppError::InsufficientTokens), [`FieldTooLong`](AppError::FieldTooLong)
//!
//! 4. **Setup errors**
//!    - [`InvalidInput`](AppError::InvalidInput), [`Config`](AppError::Config)
//!
//! Wallet errors never reach the user as an error screen: the UI logs them and the wallet
//! button falls back to its disconnected label.
//!
//! ## Usage Example
//!
//! ```rust
//! use lib_core::error::{AppError, Result};
//!
//! fn pick_currency(code: &str) -> Result<&str> {
//!     match code {
//!         "SOL" | "USDT" => Ok(code),
//!         other => Err(AppError::UnknownCurrency(other.to_string())),
//!     }
//! }
//!
//! assert!(pick_currency("BTC").is_err());
//! ```

use thiserror::Error;

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum AppError {
    /// No wallet capability is present in the host environment.
    #[error("Wallet unavailable: no wallet extension detected")]
    WalletUnavailable,

    /// The wallet's connect operation failed.
    #[error("Wallet connection failed: {0}")]
    ConnectionFailed(String),

    /// The wallet's connect operation did not settle within the timeout (milliseconds).
    #[error("Wallet connection timed out after {0} ms")]
    ConnectionTimedOut(u64),

    /// A connect attempt is already in flight.
    #[error("Wallet connection already in progress")]
    ConnectInProgress,

    /// A disconnect is already in flight.
    #[error("Wallet disconnection already in progress")]
    DisconnectInProgress,

    /// The wallet's disconnect operation failed; the previous session is kept.
    #[error("Wallet disconnection failed: {0}")]
    DisconnectionFailed(String),

    /// Currency code missing from the rate table.
    #[error("Unknown currency: {0}")]
    UnknownCurrency(String),

    /// Requested ECO amount exceeds the available balance.
    #[error("Insufficient balance: requested {requested} ECO, available {available} ECO")]
    InsufficientBalance { requested: f64, available: u64 },

    /// Deposit lighter than the program minimum.
    #[error("Deposit of {weight_grams} g is below the {min_grams} g minimum")]
    WeightTooLow { weight_grams: u64, min_grams: u64 },

    #[error("Container {0} is full")]
    ContainerFull(String),

    #[error("Container {0} is inactive")]
    ContainerInactive(String),

    #[error("Container {0} is empty, nothing to collect")]
    ContainerEmpty(String),

    /// Redemption cost exceeds the ECO balance.
    #[error("Insufficient tokens: requested {requested} ECO, available {available} ECO")]
    InsufficientTokens { requested: u64, available: u64 },

    /// Text field over its character limit.
    #[error("{field} exceeds {max} characters")]
    FieldTooLong { field: &'static str, max: usize },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Configuration error during startup or environment loading.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// True for the variants produced by the wallet session.
    pub fn is_wallet_error(&self) -> bool {
        matches!(
            self,
            AppError::WalletUnavailable
                | AppError::ConnectionFailed(_)
                | AppError::ConnectionTimedOut(_)
                | AppError::ConnectInProgress
                | AppError::DisconnectInProgress
                | AppError::DisconnectionFailed(_)
        )
    }

    /// Get a user-friendly error message.
    ///
    /// Wallet failures keep the wallet's own wording out of the UI.
    pub fn user_message(&self) -> String {
        match self {
            AppError::WalletUnavailable => "Instala Phantom para conectar tu wallet".to_string(),
            AppError::ConnectionFailed(_) | AppError::ConnectionTimedOut(_) => {
                "No se pudo conectar la wallet".to_string()
            }
            AppError::ConnectInProgress => "Conectando...".to_string(),
            AppError::DisconnectInProgress => "Desconectando...".to_string(),
            AppError::DisconnectionFailed(_) => "No se pudo desconectar la wallet".to_string(),
            AppError::UnknownCurrency(code) => format!("Moneda no soportada: {code}"),
            AppError::InsufficientBalance { .. } => "Balance insuficiente".to_string(),
            AppError::WeightTooLow { .. } => {
                "El peso del depósito es menor al mínimo requerido".to_string()
            }
            AppError::ContainerFull(_) => {
                "El contenedor está lleno, no puede recibir más depósitos".to_string()
            }
            AppError::ContainerInactive(_) => "El contenedor está inactivo".to_string(),
            AppError::ContainerEmpty(_) => "El contenedor está vacío".to_string(),
            AppError::InsufficientTokens { .. } => {
                "No tienes suficientes tokens para este canje".to_string()
            }
            AppError::FieldTooLong { max, .. } => format!("Máximo {max} caracteres"),
            AppError::InvalidInput(msg) => msg.clone(),
            AppError::Config(_) => "Ocurrió un error interno".to_string(),
        }
    }
}

/// Convert env-var read failures into configuration errors.
impl From<lib_utils::envs::Error> for AppError {
    fn from(err: lib_utils::envs::Error) -> Self {
        AppError::Config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wallet_classification() {
        assert!(AppError::WalletUnavailable.is_wallet_error());
        assert!(AppError::ConnectionTimedOut(30_000).is_wallet_error());
        assert!(AppError::DisconnectionFailed("rejected".into()).is_wallet_error());
        assert!(AppError::DisconnectInProgress.is_wallet_error());
        assert!(!AppError::UnknownCurrency("BTC".into()).is_wallet_error());
        assert!(!AppError::ContainerFull("OXXO-01".into()).is_wallet_error());
    }

    #[test]
    fn test_display_and_user_message() {
        let err = AppError::ConnectionFailed("User rejected the request".into());
        assert_eq!(err.to_string(), "Wallet connection failed: User rejected the request");
        assert_eq!(err.user_message(), "No se pudo conectar la wallet");

        let err = AppError::UnknownCurrency("BTC".into());
        assert_eq!(err.user_message(), "Moneda no soportada: BTC");

        let err = AppError::InsufficientTokens {
            requested: 500,
            available: 200,
        };
        assert_eq!(err.to_string(), "Insufficient tokens: requested 500 ECO, available 200 ECO");
        assert_eq!(err.user_message(), "No tienes suficientes tokens para este canje");
    }

    #[test]
    fn test_from_env_error() {
        let err: AppError = lib_utils::envs::Error::WrongFormat("LOG_LEVEL").into();
        assert_eq!(err, AppError::Config("LOG_LEVEL has an invalid format".into()));
    }
}
