use chrono::{DateTime, Utc};
use lib_utils::validation::validate_not_empty;
use serde::{Deserialize, Serialize};
use tracing::info;

use super::accounts::{DepositRecord, RecyclerAccount, SmartContainer};
use crate::error::{AppError, Result};

/// ECO minted per kilogram of PET
pub const DEFAULT_ECO_PER_KG: u64 = 200;
pub const DEFAULT_MIN_DEPOSIT_GRAMS: u64 = 10;
/// Average weight of one PET bottle, used to turn bottle counts into grams
pub const BOTTLE_WEIGHT_GRAMS: u64 = 25;

pub const MAX_USERNAME_CHARS: usize = 32;
pub const MAX_CONTAINER_ID_CHARS: usize = 32;
pub const MAX_LOCATION_CHARS: usize = 64;
pub const MAX_PRODUCT_ID_CHARS: usize = 32;

/// ECO earned for `weight_grams` of PET at `eco_per_kg`, rounded down.
///
/// ```rust
/// use lib_core::recycling::deposit_reward;
///
/// assert_eq!(deposit_reward(125, 200), 25);
/// assert_eq!(deposit_reward(999, 1), 0);
/// ```
pub fn deposit_reward(weight_grams: u64, eco_per_kg: u64) -> u64 {
    let reward = u128::from(weight_grams) * u128::from(eco_per_kg) / 1000;
    u64::try_from(reward).unwrap_or(u64::MAX)
}

/// Reject blank text and text over `max` characters.
pub(crate) fn check_text(field: &'static str, value: &str, max: usize) -> Result<()> {
    validate_not_empty(value, field).map_err(AppError::InvalidInput)?;
    if value.chars().count() > max {
        return Err(AppError::FieldTooLong { field, max });
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewardConfig {
    pub eco_per_kg: u64,
    pub min_deposit_grams: u64,
}

impl Default for RewardConfig {
    fn default() -> Self {
        Self {
            eco_per_kg: DEFAULT_ECO_PER_KG,
            min_deposit_grams: DEFAULT_MIN_DEPOSIT_GRAMS,
        }
    }
}

impl RewardConfig {
    pub fn reward_for(&self, weight_grams: u64) -> u64 {
        deposit_reward(weight_grams, self.eco_per_kg)
    }

    /// Reward for `bottles` average-weight bottles
    pub fn reward_for_bottles(&self, bottles: u32) -> u64 {
        self.reward_for(u64::from(bottles).saturating_mul(BOTTLE_WEIGHT_GRAMS))
    }
}

/// Network-wide counters
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgramTotals {
    pub pet_collected_grams: u64,
    pub deposits: u64,
    pub users: u64,
    pub containers: u64,
}

/// Reward settings plus the network totals they have produced.
#[derive(Debug, Clone, Default)]
pub struct RecyclingProgram {
    config: RewardConfig,
    totals: ProgramTotals,
}

impl RecyclingProgram {
    pub fn new(config: RewardConfig) -> Self {
        info!(eco_per_kg = config.eco_per_kg, "recycling program initialized");
        Self {
            config,
            totals: ProgramTotals::default(),
        }
    }

    pub fn config(&self) -> RewardConfig {
        self.config
    }

    pub fn totals(&self) -> &ProgramTotals {
        &self.totals
    }

    /// Change the reward rate and/or minimum deposit; `None` keeps the current value.
    pub fn update_config(&mut self, eco_per_kg: Option<u64>, min_deposit_grams: Option<u64>) {
        if let Some(rate) = eco_per_kg {
            self.config.eco_per_kg = rate;
            info!(eco_per_kg = rate, "reward rate updated");
        }
        if let Some(grams) = min_deposit_grams {
            self.config.min_deposit_grams = grams;
            info!(min_deposit_grams = grams, "minimum deposit updated");
        }
    }

    /// # Errors
    ///
    /// [`AppError::FieldTooLong`] past 32 characters, [`AppError::InvalidInput`] when blank.
    pub fn register_user(&mut self, username: &str, now: DateTime<Utc>) -> Result<RecyclerAccount> {
        check_text("username", username, MAX_USERNAME_CHARS)?;

        self.totals.users += 1;
        info!(user = username, "user registered");
        Ok(RecyclerAccount {
            username: username.to_string(),
            total_deposits: 0,
            total_pet_grams: 0,
            total_eco_earned: 0,
            total_eco_spent: 0,
            balance: 0,
            registered_at: now,
        })
    }

    /// Register an active, empty container.
    pub fn register_container(
        &mut self,
        id: &str,
        location: &str,
        capacity_kg: u64,
        now: DateTime<Utc>,
    ) -> Result<SmartContainer> {
        check_text("container_id", id, MAX_CONTAINER_ID_CHARS)?;
        check_text("location", location, MAX_LOCATION_CHARS)?;

        self.totals.containers += 1;
        info!(container = id, location, capacity_kg, "container registered");
        Ok(SmartContainer {
            id: id.to_string(),
            location: location.to_string(),
            capacity_kg,
            current_weight_grams: 0,
            total_deposits: 0,
            active: true,
            registered_at: now,
            last_collection: None,
        })
    }

    /// Validate a deposit, credit its reward and update every counter.
    ///
    /// Checks run in order: container active, minimum weight, remaining capacity. Nothing
    /// is changed when a check fails.
    ///
    /// # Errors
    ///
    /// [`AppError::ContainerInactive`], [`AppError::WeightTooLow`] or
    /// [`AppError::ContainerFull`].
    pub fn process_deposit(
        &mut self,
        container: &mut SmartContainer,
        account: &mut RecyclerAccount,
        weight_grams: u64,
        now: DateTime<Utc>,
    ) -> Result<DepositRecord> {
        if !container.active {
            return Err(AppError::ContainerInactive(container.id.clone()));
        }
        if weight_grams < self.config.min_deposit_grams {
            return Err(AppError::WeightTooLow {
                weight_grams,
                min_grams: self.config.min_deposit_grams,
            });
        }
        if weight_grams > container.remaining_grams() {
            return Err(AppError::ContainerFull(container.id.clone()));
        }

        let eco_reward = self.config.reward_for(weight_grams);

        container.current_weight_grams += weight_grams;
        container.total_deposits += 1;

        account.total_deposits += 1;
        account.total_pet_grams = account.total_pet_grams.saturating_add(weight_grams);
        account.total_eco_earned = account.total_eco_earned.saturating_add(eco_reward);
        account.balance = account.balance.saturating_add(eco_reward);

        self.totals.pet_collected_grams = self.totals.pet_collected_grams.saturating_add(weight_grams);
        self.totals.deposits += 1;

        info!(
            container = %container.id,
            user = %account.username,
            weight_grams,
            eco_reward,
            "deposit processed"
        );
        Ok(DepositRecord {
            username: account.username.clone(),
            container_id: container.id.clone(),
            weight_grams,
            eco_reward,
            deposited_at: now,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (RecyclingProgram, SmartContainer, RecyclerAccount) {
        let now = Utc::now();
        let mut program = RecyclingProgram::new(RewardConfig::default());
        let container = program
            .register_container("OXXO-CENTRO", "OXXO Centro", 1, now)
            .unwrap();
        let account = program.register_user("Juan", now).unwrap();
        (program, container, account)
    }

    #[test]
    fn test_deposit_reward_rounds_down() {
        assert_eq!(deposit_reward(1000, 200), 200);
        assert_eq!(deposit_reward(125, 200), 25);
        assert_eq!(deposit_reward(4, 200), 0);
        assert_eq!(deposit_reward(0, 200), 0);
        assert_eq!(deposit_reward(u64::MAX, u64::MAX), u64::MAX);
    }

    #[test]
    fn test_reward_for_bottles_matches_sample_feed() {
        let config = RewardConfig::default();
        assert_eq!(config.reward_for_bottles(5), 25);
        assert_eq!(config.reward_for_bottles(8), 40);
        assert_eq!(config.reward_for_bottles(12), 60);
    }

    #[test]
    fn test_process_deposit_credits_reward() {
        let (mut program, mut container, mut account) = setup();

        let record = program
            .process_deposit(&mut container, &mut account, 200, Utc::now())
            .unwrap();
        assert_eq!(record.eco_reward, 40);
        assert_eq!(record.container_id, "OXXO-CENTRO");

        assert_eq!(account.balance, 40);
        assert_eq!(account.total_eco_earned, 40);
        assert_eq!(account.total_pet_grams, 200);
        assert_eq!(account.total_deposits, 1);
        assert_eq!(container.current_weight_grams, 200);
        assert_eq!(container.total_deposits, 1);
        assert_eq!(
            program.totals(),
            &ProgramTotals {
                pet_collected_grams: 200,
                deposits: 1,
                users: 1,
                containers: 1,
            }
        );
    }

    #[test]
    fn test_deposit_below_minimum() {
        let (mut program, mut container, mut account) = setup();
        assert_eq!(
            program.process_deposit(&mut container, &mut account, 9, Utc::now()),
            Err(AppError::WeightTooLow {
                weight_grams: 9,
                min_grams: 10
            })
        );
        assert_eq!(account.balance, 0);
        assert_eq!(program.totals().deposits, 0);
    }

    #[test]
    fn test_deposit_into_full_container() {
        let (mut program, mut container, mut account) = setup();
        let now = Utc::now();

        // Filling to exactly the capacity is allowed.
        program
            .process_deposit(&mut container, &mut account, 1000, now)
            .unwrap();
        assert_eq!(
            program.process_deposit(&mut container, &mut account, 10, now),
            Err(AppError::ContainerFull("OXXO-CENTRO".to_string()))
        );

        container.collect("Reciclados del Norte", now).unwrap();
        assert!(program
            .process_deposit(&mut container, &mut account, 10, now)
            .is_ok());
    }

    #[test]
    fn test_deposit_into_inactive_container() {
        let (mut program, mut container, mut account) = setup();
        container.toggle_status();

        // Inactive wins over a too-light deposit.
        assert_eq!(
            program.process_deposit(&mut container, &mut account, 1, Utc::now()),
            Err(AppError::ContainerInactive("OXXO-CENTRO".to_string()))
        );
    }

    #[test]
    fn test_update_config() {
        let (mut program, mut container, mut account) = setup();

        program.update_config(Some(400), None);
        assert_eq!(program.config().eco_per_kg, 400);
        assert_eq!(program.config().min_deposit_grams, DEFAULT_MIN_DEPOSIT_GRAMS);

        program.update_config(None, Some(100));
        assert!(matches!(
            program.process_deposit(&mut container, &mut account, 50, Utc::now()),
            Err(AppError::WeightTooLow { .. })
        ));
        let record = program
            .process_deposit(&mut container, &mut account, 100, Utc::now())
            .unwrap();
        assert_eq!(record.eco_reward, 40);
    }

    #[test]
    fn test_register_limits() {
        let mut program = RecyclingProgram::default();
        let now = Utc::now();

        assert!(program.register_user(&"a".repeat(32), now).is_ok());
        assert_eq!(
            program.register_user(&"a".repeat(33), now),
            Err(AppError::FieldTooLong {
                field: "username",
                max: 32
            })
        );
        // Limit counts characters, not bytes.
        assert!(program.register_user(&"ñ".repeat(32), now).is_ok());
        assert!(matches!(
            program.register_user("   ", now),
            Err(AppError::InvalidInput(_))
        ));

        assert_eq!(
            program.register_container("OXXO", &"l".repeat(65), 10, now),
            Err(AppError::FieldTooLong {
                field: "location",
                max: 64
            })
        );
        assert_eq!(program.totals().users, 2);
        assert_eq!(program.totals().containers, 0);
    }
}
