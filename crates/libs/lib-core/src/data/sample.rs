//! Compiled-in sample data for the prototype screens.
//!
//! Token figures come from the recycling rules, and redemptions go through the sample
//! user's [`RecyclerAccount`], so the balance and feed follow what the user does.

use std::cell::RefCell;

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use lib_utils::time::now_utc;
use tracing::{debug, info};

use shared::dto::{
    Achievement, ActivityEntry, ActivityKind, ExchangeRecord, ExchangeStatus, KycStatus,
    LeaderboardEntry, PlatformStats, Reward, UserProfile, UserStats, WeeklyChallenge,
};

use super::{rank_leaderboard, EcoDataProvider};
use crate::config::core_config;
use crate::error::{AppError, Result};
use crate::recycling::{RecyclerAccount, RedemptionRecord, RewardConfig, BOTTLE_WEIGHT_GRAMS};

const BOTTLES_RECYCLED: u32 = 247;
const BOTTLES_TODAY: u32 = 12;
const STARTING_BALANCE: u64 = 1235;
const COFFEE_REDEMPTION: u64 = 200;

/// Serves fixed figures; timestamps are relative to `anchor` so feeds read "hace 2 horas".
#[derive(Debug, Clone)]
pub struct StaticDataProvider {
    anchor: DateTime<Utc>,
    rewards: RewardConfig,
    account: RefCell<RecyclerAccount>,
    redemptions: RefCell<Vec<RedemptionRecord>>,
}

impl Default for StaticDataProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl StaticDataProvider {
    /// Sample data at the configured reward rate.
    pub fn new() -> Self {
        Self::with_config(Utc::now(), core_config().reward_config())
    }

    pub fn with_anchor(anchor: DateTime<Utc>) -> Self {
        Self::with_config(anchor, RewardConfig::default())
    }

    pub fn with_config(anchor: DateTime<Utc>, rewards: RewardConfig) -> Self {
        let account = RecyclerAccount {
            username: "Juan".to_string(),
            total_deposits: 58,
            total_pet_grams: u64::from(BOTTLES_RECYCLED) * BOTTLE_WEIGHT_GRAMS,
            total_eco_earned: STARTING_BALANCE + COFFEE_REDEMPTION,
            total_eco_spent: COFFEE_REDEMPTION,
            balance: STARTING_BALANCE,
            registered_at: anchor - Duration::days(90),
        };
        Self {
            anchor,
            rewards,
            account: RefCell::new(account),
            redemptions: RefCell::new(Vec::new()),
        }
    }

    fn ago(&self, elapsed: Duration) -> DateTime<Utc> {
        self.anchor - elapsed
    }
}

fn achievement(emoji: &str, name: &str, unlocked: bool) -> Achievement {
    Achievement {
        emoji: emoji.to_string(),
        name: name.to_string(),
        unlocked,
    }
}

fn reward(name: &str, cost: u64, icon: &str) -> Reward {
    Reward {
        name: name.to_string(),
        cost,
        icon: icon.to_string(),
    }
}

fn catalog() -> Vec<Reward> {
    vec![
        reward("Descuento en Café", COFFEE_REDEMPTION, "☕"),
        reward("Insignia NFT Eco", 500, "🎨"),
        reward("Cupón de Tienda", 1000, "🎁"),
    ]
}

fn credit(tokens: u64) -> i64 {
    i64::try_from(tokens).unwrap_or(i64::MAX)
}

#[async_trait(?Send)]
impl EcoDataProvider for StaticDataProvider {
    async fn user_profile(&self) -> Result<UserProfile> {
        Ok(UserProfile {
            display_name: "Juan".to_string(),
            initials: "JD".to_string(),
            kyc: KycStatus::Verified,
            leaderboard_position: 8,
            stats: UserStats {
                bottles_recycled: BOTTLES_RECYCLED,
                bottles_today: BOTTLES_TODAY,
                bottles_this_month: 47,
                eco_balance: self.account.borrow().balance,
                tokens_today: self.rewards.reward_for_bottles(BOTTLES_TODAY),
                co2_saved_kg: 148,
                achievements_unlocked: 12,
            },
        })
    }

    async fn list_activity(&self, limit: usize) -> Result<Vec<ActivityEntry>> {
        let mut feed = vec![
            ActivityEntry {
                kind: ActivityKind::Recycle,
                description: "Reciclaste 5 botellas en OXXO Centro".to_string(),
                token_delta: credit(self.rewards.reward_for_bottles(5)),
                occurred_at: self.ago(Duration::hours(2)),
            },
            ActivityEntry {
                kind: ActivityKind::Achievement,
                description: "Desbloqueaste el logro \"Guerrero Eco\"".to_string(),
                token_delta: 100,
                occurred_at: self.ago(Duration::days(1)),
            },
            ActivityEntry {
                kind: ActivityKind::Redemption,
                description: format!("Canjeaste {} tokens por descuento en café", COFFEE_REDEMPTION),
                token_delta: -credit(COFFEE_REDEMPTION),
                occurred_at: self.ago(Duration::days(2)),
            },
            ActivityEntry {
                kind: ActivityKind::Recycle,
                description: "Reciclaste 8 botellas en Plaza Mayor".to_string(),
                token_delta: credit(self.rewards.reward_for_bottles(8)),
                occurred_at: self.ago(Duration::days(3)),
            },
        ];
        feed.extend(self.redemptions.borrow().iter().map(|record| ActivityEntry {
            kind: ActivityKind::Redemption,
            description: format!("Canjeaste {} tokens por {}", record.amount, record.product_id),
            token_delta: -credit(record.amount),
            occurred_at: record.redeemed_at,
        }));
        feed.sort_by(|a, b| b.occurred_at.cmp(&a.occurred_at));
        feed.truncate(limit);
        debug!(entries = feed.len(), "serving sample activity");
        Ok(feed)
    }

    async fn list_achievements(&self) -> Result<Vec<Achievement>> {
        Ok(vec![
            achievement("🌱", "Primeros Pasos", true),
            achievement("♻️", "Reciclador", true),
            achievement("🏆", "Campeón", true),
            achievement("⚡", "Veloz", true),
            achievement("🌍", "Salvando el Planeta", false),
            achievement("👑", "Rey Eco", false),
        ])
    }

    async fn list_rewards(&self) -> Result<Vec<Reward>> {
        Ok(catalog())
    }

    async fn redeem_reward(&self, reward_name: &str) -> Result<RedemptionRecord> {
        let reward = catalog()
            .into_iter()
            .find(|reward| reward.name == reward_name)
            .ok_or_else(|| AppError::InvalidInput(format!("Recompensa no disponible: {reward_name}")))?;

        let record = self
            .account
            .borrow_mut()
            .redeem(&reward.name, reward.cost, now_utc())?;
        info!(reward = %reward.name, cost = reward.cost, "sample reward redeemed");
        self.redemptions.borrow_mut().push(record.clone());
        Ok(record)
    }

    async fn list_leaderboard(&self, limit: usize) -> Result<Vec<LeaderboardEntry>> {
        let mut ranked = rank_leaderboard([
            ("María G.".to_string(), 342),
            ("Carlos R.".to_string(), 298),
            ("Ana L.".to_string(), 276),
        ]);
        ranked.truncate(limit);
        Ok(ranked)
    }

    async fn weekly_challenge(&self) -> Result<WeeklyChallenge> {
        Ok(WeeklyChallenge {
            title: "Recicla 50 botellas esta semana".to_string(),
            target_bottles: 50,
            progress_bottles: 47,
            days_remaining: 3,
            bonus_reward: "500 tokens bonus + Insignia NFT Exclusiva".to_string(),
        })
    }

    async fn recent_exchanges(&self) -> Result<Vec<ExchangeRecord>> {
        let record = |eco_amount, received_amount, currency: &str, elapsed| ExchangeRecord {
            eco_amount,
            received_amount,
            currency: currency.to_string(),
            executed_at: self.ago(elapsed),
            status: ExchangeStatus::Completed,
        };
        Ok(vec![
            record(500, 0.05, "SOL", Duration::hours(2)),
            record(1000, 10.0, "USDT", Duration::days(1)),
            record(250, 50.0, "MXN", Duration::days(3)),
        ])
    }

    async fn platform_stats(&self) -> Result<PlatformStats> {
        Ok(PlatformStats {
            bottles_recycled: 2_500_000,
            active_users: 50_000,
            smart_containers: 200,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lib_utils::time::format_relative;

    fn provider() -> StaticDataProvider {
        StaticDataProvider::with_anchor(Utc::now())
    }

    #[tokio::test]
    async fn test_profile_figures() {
        let profile = provider().user_profile().await.unwrap();
        assert_eq!(profile.display_name, "Juan");
        assert_eq!(profile.kyc, KycStatus::Verified);
        assert_eq!(profile.stats.eco_balance, 1235);
        assert_eq!(profile.stats.tokens_today, 60);
        assert_eq!(shared::utils::group_thousands(profile.stats.eco_balance), "1,235");
    }

    #[tokio::test]
    async fn test_activity_newest_first_and_limited() {
        let p = provider();
        let feed = p.list_activity(10).await.unwrap();
        assert_eq!(feed.len(), 4);
        assert!(feed.windows(2).all(|w| w[0].occurred_at >= w[1].occurred_at));
        assert_eq!(format_relative(feed[0].occurred_at, p.anchor), "hace 2 horas");
        assert_eq!(feed[2].delta_label(), "-200");

        assert_eq!(p.list_activity(2).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_leaderboard_ranked() {
        let board = provider().list_leaderboard(3).await.unwrap();
        assert_eq!(board[0].name, "María G.");
        assert_eq!(board[0].rank, 1);
        assert_eq!(board[2].bottles, 276);
        assert_eq!(provider().list_leaderboard(1).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_catalog_and_achievements() {
        let p = provider();
        let unlocked = p
            .list_achievements()
            .await
            .unwrap()
            .iter()
            .filter(|a| a.unlocked)
            .count();
        assert_eq!(unlocked, 4);

        let balance = p.user_profile().await.unwrap().stats.eco_balance;
        let affordable: Vec<_> = p
            .list_rewards()
            .await
            .unwrap()
            .into_iter()
            .filter(|r| r.is_affordable(balance))
            .map(|r| r.cost)
            .collect();
        assert_eq!(affordable, [200, 500, 1000]);
    }

    #[tokio::test]
    async fn test_redeem_reward_spends_balance_and_shows_in_feed() {
        let p = provider();

        let record = p.redeem_reward("Insignia NFT Eco").await.unwrap();
        assert_eq!(record.amount, 500);
        assert_eq!(record.username, "Juan");
        assert_eq!(p.user_profile().await.unwrap().stats.eco_balance, 735);

        let feed = p.list_activity(10).await.unwrap();
        assert_eq!(feed.len(), 5);
        assert_eq!(feed[0].kind, ActivityKind::Redemption);
        assert_eq!(feed[0].delta_label(), "-500");
    }

    #[tokio::test]
    async fn test_redeem_reward_rejections() {
        let p = provider();

        assert!(p.redeem_reward("Cupón de Tienda").await.is_ok());
        assert_eq!(
            p.redeem_reward("Cupón de Tienda").await,
            Err(AppError::InsufficientTokens {
                requested: 1000,
                available: 235
            })
        );
        assert!(matches!(
            p.redeem_reward("Viaje a la Luna").await,
            Err(AppError::InvalidInput(_))
        ));
        assert_eq!(p.user_profile().await.unwrap().stats.eco_balance, 235);
    }

    #[tokio::test]
    async fn test_token_figures_follow_reward_rate() {
        let doubled = RewardConfig {
            eco_per_kg: 400,
            ..RewardConfig::default()
        };
        let p = StaticDataProvider::with_config(Utc::now(), doubled);

        assert_eq!(p.user_profile().await.unwrap().stats.tokens_today, 120);
        let feed = p.list_activity(1).await.unwrap();
        assert_eq!(feed[0].delta_label(), "+50");
    }

    #[tokio::test]
    async fn test_challenge_and_exchanges() {
        let p = provider();
        assert_eq!(p.weekly_challenge().await.unwrap().progress_percent(), 94);

        let history = p.recent_exchanges().await.unwrap();
        let summaries: Vec<_> = history.iter().map(|r| r.summary()).collect();
        assert_eq!(
            summaries,
            ["500 ECO → 0.05 SOL", "1000 ECO → 10.00 USDT", "250 ECO → 50.00 MXN"]
        );

        let stats = p.platform_stats().await.unwrap();
        assert_eq!(shared::utils::compact_count(stats.bottles_recycled), "2.5M+");
    }
}
