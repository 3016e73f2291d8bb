use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ExchangeStatus {
    Pending,
    Completed,
    Failed,
}

impl ExchangeStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ExchangeStatus::Pending => "Pendiente",
            ExchangeStatus::Completed => "Completado",
            ExchangeStatus::Failed => "Fallido",
        }
    }
}

/// A past ECO -> currency exchange, as listed under "recent transactions"
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExchangeRecord {
    pub eco_amount: u64,
    pub received_amount: f64,
    pub currency: String,
    pub executed_at: DateTime<Utc>,
    pub status: ExchangeStatus,
}

impl ExchangeRecord {
    /// `"500 ECO → 0.05 SOL"`
    pub fn summary(&self) -> String {
        format!(
            "{} ECO → {:.2} {}",
            self.eco_amount, self.received_amount, self.currency
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary() {
        let record = ExchangeRecord {
            eco_amount: 1000,
            received_amount: 10.0,
            currency: "USDT".to_string(),
            executed_at: Utc::now(),
            status: ExchangeStatus::Completed,
        };
        assert_eq!(record.summary(), "1000 ECO → 10.00 USDT");
        assert_eq!(record.status.label(), "Completado");
    }

    #[test]
    fn test_record_json_shape() {
        let record = ExchangeRecord {
            eco_amount: 250,
            received_amount: 50.0,
            currency: "MXN".to_string(),
            executed_at: Utc::now(),
            status: ExchangeStatus::Completed,
        };
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["status"], "completed");
        assert_eq!(value["currency"], "MXN");
    }
}
