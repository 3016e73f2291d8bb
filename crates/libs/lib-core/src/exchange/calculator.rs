//! ECO -> currency conversion with the flat network fee.

use lib_utils::validation::parse_amount;
use serde::Serialize;

use super::rates::RateTable;
use crate::error::{AppError, Result};

/// Flat network fee taken from every exchange (0.5%).
pub const NETWORK_FEE_RATE: f64 = 0.005;

/// Decimal places used for every displayed amount.
pub const DISPLAY_DECIMALS: usize = 4;

/// Result of converting an ECO amount. Derived on demand, never stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExchangeQuote {
    pub currency: &'static str,
    pub symbol: &'static str,
    /// Parsed ECO amount (0 for empty or invalid input)
    pub amount: f64,
    pub rate: f64,
    pub gross: f64,
    pub net: f64,
}

impl ExchangeQuote {
    pub fn fee(&self) -> f64 {
        self.gross - self.net
    }

    pub fn gross_display(&self) -> String {
        format!("{:.*}", DISPLAY_DECIMALS, self.gross)
    }

    pub fn net_display(&self) -> String {
        format!("{:.*}", DISPLAY_DECIMALS, self.net)
    }

    /// Only a positive amount may be submitted.
    pub fn is_confirmable(&self) -> bool {
        self.amount > 0.0
    }

    /// Reject quotes that spend more ECO than `balance`.
    pub fn ensure_affordable(&self, balance: u64) -> Result<()> {
        if self.amount > balance as f64 {
            return Err(AppError::InsufficientBalance {
                requested: self.amount,
                available: balance,
            });
        }
        Ok(())
    }
}

/// `"0.5%"`
pub fn fee_label() -> String {
    format!("{}%", NETWORK_FEE_RATE * 100.0)
}

/// Pure converter over a [`RateTable`].
///
/// ```rust
/// use lib_core::exchange::ExchangeCalculator;
///
/// let calc = ExchangeCalculator::default();
/// let quote = calc.quote("1000", "USDT").unwrap();
/// assert_eq!(quote.net_display(), "9.9500");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ExchangeCalculator<'a> {
    table: &'a RateTable,
}

impl Default for ExchangeCalculator<'static> {
    fn default() -> Self {
        Self::new(RateTable::builtin())
    }
}

impl<'a> ExchangeCalculator<'a> {
    pub fn new(table: &'a RateTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &'a RateTable {
        self.table
    }

    /// Convert a user-typed ECO amount into `currency`.
    ///
    /// Unparseable input counts as zero; only an unknown currency is an error.
    pub fn quote(&self, amount: &str, currency: &str) -> Result<ExchangeQuote> {
        let quote = self.table.get(currency)?;
        let amount = parse_amount(amount);
        let gross = amount * quote.rate;
        let net = gross * (1.0 - NETWORK_FEE_RATE);

        Ok(ExchangeQuote {
            currency: quote.code,
            symbol: quote.symbol,
            amount,
            rate: quote.rate,
            gross,
            net,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn calc() -> ExchangeCalculator<'static> {
        ExchangeCalculator::default()
    }

    #[test]
    fn test_sol_quote() {
        let quote = calc().quote("500", "SOL").unwrap();
        assert_eq!(quote.gross_display(), "0.0500");
        // 0.04975 is stored as 0.0497500000000000025..., which rounds up.
        assert_eq!(quote.net_display(), "0.0498");
        assert!((quote.net - 0.04975).abs() < 1e-12);
    }

    #[test]
    fn test_usdt_quote() {
        let quote = calc().quote("1000", "USDT").unwrap();
        assert_eq!(quote.gross, 10.0);
        assert_eq!(quote.net_display(), "9.9500");
        assert_eq!(format!("{:.4}", quote.fee()), "0.0500");
    }

    #[test]
    fn test_zero_and_empty_amounts() {
        for quote in RateTable::builtin().iter() {
            for amount in ["0", "", "abc", "-10"] {
                let result = calc().quote(amount, quote.code).unwrap();
                assert_eq!(result.net_display(), "0.0000", "{amount:?} -> {}", quote.code);
                assert!(!result.is_confirmable());
            }
        }
    }

    #[test]
    fn test_matches_rounding_property() {
        for quote in RateTable::builtin().iter() {
            for amount in ["1", "250", "1235", "0.5", "99999"] {
                let expected = format!("{:.4}", amount.parse::<f64>().unwrap() * quote.rate * 0.995);
                assert_eq!(calc().quote(amount, quote.code).unwrap().net_display(), expected);
            }
        }
    }

    #[test]
    fn test_quote_is_deterministic() {
        let first = calc().quote("1235", "MXN").unwrap();
        let second = calc().quote("1235", "MXN").unwrap();
        assert_eq!(first, second);
        assert_eq!(first.net_display(), "245.7650");
    }

    #[test]
    fn test_unknown_currency() {
        assert_eq!(
            calc().quote("100", "BTC"),
            Err(AppError::UnknownCurrency("BTC".to_string()))
        );
    }

    #[test]
    fn test_affordability() {
        let quote = calc().quote("1235", "SOL").unwrap();
        assert!(quote.is_confirmable());
        assert!(quote.ensure_affordable(1235).is_ok());
        assert!(matches!(
            quote.ensure_affordable(1000),
            Err(AppError::InsufficientBalance { available: 1000, .. })
        ));
    }

    #[test]
    fn test_fee_label() {
        assert_eq!(fee_label(), "0.5%");
    }
}
