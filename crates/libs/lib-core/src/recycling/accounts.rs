use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::program::{check_text, MAX_PRODUCT_ID_CHARS};
use crate::error::{AppError, Result};

/// Physical drop-off point
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SmartContainer {
    pub id: String,
    pub location: String,
    pub capacity_kg: u64,
    /// PET held since the last collection
    pub current_weight_grams: u64,
    pub total_deposits: u64,
    pub active: bool,
    pub registered_at: DateTime<Utc>,
    pub last_collection: Option<DateTime<Utc>>,
}

impl SmartContainer {
    pub fn capacity_grams(&self) -> u64 {
        self.capacity_kg.saturating_mul(1000)
    }

    pub fn remaining_grams(&self) -> u64 {
        self.capacity_grams().saturating_sub(self.current_weight_grams)
    }

    /// Flip between active and inactive (maintenance, damage); returns the new status.
    pub fn toggle_status(&mut self) -> bool {
        self.active = !self.active;
        info!(container = %self.id, active = self.active, "container status changed");
        self.active
    }

    /// Empty the container and certify what was picked up.
    ///
    /// # Errors
    ///
    /// [`AppError::ContainerInactive`] or [`AppError::ContainerEmpty`].
    pub fn collect(&mut self, collector: &str, now: DateTime<Utc>) -> Result<CollectionRecord> {
        if !self.active {
            return Err(AppError::ContainerInactive(self.id.clone()));
        }
        if self.current_weight_grams == 0 {
            return Err(AppError::ContainerEmpty(self.id.clone()));
        }

        let record = CollectionRecord {
            container_id: self.id.clone(),
            collector: collector.to_string(),
            weight_collected_grams: self.current_weight_grams,
            collected_at: now,
            verified: true,
        };
        self.current_weight_grams = 0;
        self.last_collection = Some(now);

        info!(
            container = %self.id,
            grams = record.weight_collected_grams,
            collector,
            "container collected"
        );
        Ok(record)
    }
}

/// Per-user totals and spendable ECO balance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecyclerAccount {
    pub username: String,
    pub total_deposits: u64,
    pub total_pet_grams: u64,
    pub total_eco_earned: u64,
    pub total_eco_spent: u64,
    pub balance: u64,
    pub registered_at: DateTime<Utc>,
}

impl RecyclerAccount {
    /// Spend `amount` ECO on `product_id`.
    ///
    /// # Errors
    ///
    /// - [`AppError::FieldTooLong`] / [`AppError::InvalidInput`] for a bad product id
    /// - [`AppError::InsufficientTokens`] when the balance does not cover `amount`
    pub fn redeem(
        &mut self,
        product_id: &str,
        amount: u64,
        now: DateTime<Utc>,
    ) -> Result<RedemptionRecord> {
        check_text("product_id", product_id, MAX_PRODUCT_ID_CHARS)?;
        if self.balance < amount {
            return Err(AppError::InsufficientTokens {
                requested: amount,
                available: self.balance,
            });
        }

        self.balance -= amount;
        self.total_eco_spent = self.total_eco_spent.saturating_add(amount);

        info!(user = %self.username, amount, product = product_id, "tokens redeemed");
        Ok(RedemptionRecord {
            username: self.username.clone(),
            product_id: product_id.to_string(),
            amount,
            redeemed_at: now,
        })
    }
}

/// Proof of one deposit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepositRecord {
    pub username: String,
    pub container_id: String,
    pub weight_grams: u64,
    pub eco_reward: u64,
    pub deposited_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedemptionRecord {
    pub username: String,
    pub product_id: String,
    pub amount: u64,
    pub redeemed_at: DateTime<Utc>,
}

/// Certified pickup of a container's contents
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionRecord {
    pub container_id: String,
    pub collector: String,
    pub weight_collected_grams: u64,
    pub collected_at: DateTime<Utc>,
    pub verified: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn container(current_weight_grams: u64) -> SmartContainer {
        SmartContainer {
            id: "PLAZA-MAYOR".to_string(),
            location: "Plaza Mayor".to_string(),
            capacity_kg: 50,
            current_weight_grams,
            total_deposits: 3,
            active: true,
            registered_at: Utc::now(),
            last_collection: None,
        }
    }

    fn account(balance: u64) -> RecyclerAccount {
        RecyclerAccount {
            username: "Juan".to_string(),
            total_deposits: 0,
            total_pet_grams: 0,
            total_eco_earned: balance,
            total_eco_spent: 0,
            balance,
            registered_at: Utc::now(),
        }
    }

    #[test]
    fn test_collect_empties_container() {
        let now = Utc::now();
        let mut c = container(1_200);

        let record = c.collect("Reciclados del Norte", now).unwrap();
        assert_eq!(record.weight_collected_grams, 1_200);
        assert!(record.verified);
        assert_eq!(c.current_weight_grams, 0);
        assert_eq!(c.last_collection, Some(now));

        assert_eq!(
            c.collect("Reciclados del Norte", now),
            Err(AppError::ContainerEmpty("PLAZA-MAYOR".to_string()))
        );
    }

    #[test]
    fn test_collect_inactive_container() {
        let mut c = container(500);
        assert!(!c.toggle_status());
        assert_eq!(
            c.collect("Reciclados del Norte", Utc::now()),
            Err(AppError::ContainerInactive("PLAZA-MAYOR".to_string()))
        );
        assert_eq!(c.current_weight_grams, 500);
        assert!(c.toggle_status());
    }

    #[test]
    fn test_capacity() {
        let c = container(49_000);
        assert_eq!(c.capacity_grams(), 50_000);
        assert_eq!(c.remaining_grams(), 1_000);
    }

    #[test]
    fn test_redeem_deducts_balance() {
        let mut a = account(1235);
        let record = a.redeem("Descuento en Café", 200, Utc::now()).unwrap();
        assert_eq!(record.amount, 200);
        assert_eq!(record.username, "Juan");
        assert_eq!(a.balance, 1035);
        assert_eq!(a.total_eco_spent, 200);
    }

    #[test]
    fn test_redeem_insufficient_tokens() {
        let mut a = account(150);
        assert_eq!(
            a.redeem("Descuento en Café", 200, Utc::now()),
            Err(AppError::InsufficientTokens {
                requested: 200,
                available: 150
            })
        );
        assert_eq!(a.balance, 150);
        assert_eq!(a.total_eco_spent, 0);

        // Exact balance is enough.
        assert!(a.redeem("Descuento en Café", 150, Utc::now()).is_ok());
        assert_eq!(a.balance, 0);
    }

    #[test]
    fn test_redeem_rejects_long_product_id() {
        let mut a = account(1000);
        let long_id = "x".repeat(33);
        assert_eq!(
            a.redeem(&long_id, 10, Utc::now()),
            Err(AppError::FieldTooLong {
                field: "product_id",
                max: 32
            })
        );
        assert_eq!(a.balance, 1000);
    }
}
