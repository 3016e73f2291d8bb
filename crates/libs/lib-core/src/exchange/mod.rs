//! # Token Exchange
//!
//! Converts ECO reward tokens into payout currencies at fixed rates.
//!
//! - [`rates`] - the [`RateTable`] of [`CurrencyQuote`]s (SOL, USDT, USDC, USD, MXN)
//! - [`calculator`] - [`ExchangeCalculator`] producing an [`ExchangeQuote`] net of the 0.5% fee
//!
//! ```text
//! "500" ──parse──▶ 500 ECO ──× rate(SOL)──▶ gross 0.05 ──× 0.995──▶ net 0.04975
//! ```

pub mod calculator;
pub mod rates;

pub use calculator::{fee_label, ExchangeCalculator, ExchangeQuote, DISPLAY_DECIMALS, NETWORK_FEE_RATE};
pub use rates::{CurrencyQuote, RateTable};
