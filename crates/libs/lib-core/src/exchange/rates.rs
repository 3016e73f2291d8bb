//! Fixed ECO exchange rates.

use std::collections::HashMap;
use std::sync::OnceLock;

use serde::Serialize;

use crate::error::{AppError, Result};

/// Exchange rate of one destination currency.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CurrencyQuote {
    pub code: &'static str,
    /// Units of this currency received per ECO
    pub rate: f64,
    pub symbol: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
}

impl CurrencyQuote {
    /// `"1 ECO = 0.0001 SOL"`
    pub fn rate_label(&self) -> String {
        format!("1 ECO = {} {}", self.rate, self.symbol)
    }
}

const BUILTIN_QUOTES: [CurrencyQuote; 5] = [
    CurrencyQuote { code: "SOL", rate: 0.0001, symbol: "SOL", name: "Solana", icon: "◎" },
    CurrencyQuote { code: "USDT", rate: 0.01, symbol: "USDT", name: "Tether", icon: "₮" },
    CurrencyQuote { code: "USDC", rate: 0.01, symbol: "USDC", name: "USD Coin", icon: "$" },
    CurrencyQuote { code: "USD", rate: 0.01, symbol: "USD", name: "Dólares", icon: "$" },
    CurrencyQuote { code: "MXN", rate: 0.2, symbol: "MXN", name: "Pesos Mexicanos", icon: "$" },
];

/// Immutable currency table: display order plus O(1) lookup by code.
#[derive(Debug, Clone)]
pub struct RateTable {
    quotes: Vec<CurrencyQuote>,
    index: HashMap<&'static str, usize>,
}

impl RateTable {
    /// Build a table, rejecting non-positive or non-finite rates and duplicate codes.
    pub fn new(quotes: Vec<CurrencyQuote>) -> Result<Self> {
        let mut index = HashMap::with_capacity(quotes.len());
        for (position, quote) in quotes.iter().enumerate() {
            if !(quote.rate.is_finite() && quote.rate > 0.0) {
                return Err(AppError::InvalidInput(format!(
                    "rate for {} must be positive, got {}",
                    quote.code, quote.rate
                )));
            }
            if index.insert(quote.code, position).is_some() {
                return Err(AppError::InvalidInput(format!(
                    "duplicate currency code {}",
                    quote.code
                )));
            }
        }
        Ok(Self { quotes, index })
    }

    /// The compiled-in table, built once per process.
    pub fn builtin() -> &'static RateTable {
        static TABLE: OnceLock<RateTable> = OnceLock::new();
        TABLE.get_or_init(|| {
            let quotes = BUILTIN_QUOTES.to_vec();
            let index = quotes
                .iter()
                .enumerate()
                .map(|(position, quote)| (quote.code, position))
                .collect();
            RateTable { quotes, index }
        })
    }

    pub fn get(&self, code: &str) -> Result<&CurrencyQuote> {
        self.index
            .get(code)
            .map(|&position| &self.quotes[position])
            .ok_or_else(|| AppError::UnknownCurrency(code.to_string()))
    }

    /// Quotes in display order.
    pub fn iter(&self) -> impl Iterator<Item = &CurrencyQuote> {
        self.quotes.iter()
    }

    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_table() {
        let table = RateTable::builtin();
        let codes: Vec<_> = table.iter().map(|q| q.code).collect();
        assert_eq!(codes, ["SOL", "USDT", "USDC", "USD", "MXN"]);
        assert_eq!(table.get("SOL").unwrap().rate, 0.0001);
        assert_eq!(table.get("MXN").unwrap().name, "Pesos Mexicanos");
        assert!(BUILTIN_QUOTES.iter().all(|q| q.rate > 0.0));
    }

    #[test]
    fn test_unknown_code() {
        let err = RateTable::builtin().get("sol").unwrap_err();
        assert_eq!(err, AppError::UnknownCurrency("sol".to_string()));
    }

    #[test]
    fn test_rate_label() {
        let quote = RateTable::builtin().get("SOL").unwrap();
        assert_eq!(quote.rate_label(), "1 ECO = 0.0001 SOL");
        let quote = RateTable::builtin().get("MXN").unwrap();
        assert_eq!(quote.rate_label(), "1 ECO = 0.2 MXN");
    }

    #[test]
    fn test_new_rejects_invalid_rates() {
        let zero = CurrencyQuote { rate: 0.0, ..BUILTIN_QUOTES[0].clone() };
        assert!(RateTable::new(vec![zero]).is_err());

        let nan = CurrencyQuote { rate: f64::NAN, ..BUILTIN_QUOTES[0].clone() };
        assert!(RateTable::new(vec![nan]).is_err());

        let dup = vec![BUILTIN_QUOTES[1].clone(), BUILTIN_QUOTES[1].clone()];
        assert!(RateTable::new(dup).is_err());

        assert_eq!(RateTable::new(BUILTIN_QUOTES.to_vec()).unwrap().len(), 5);
    }
}
