use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::kyc::KycStatus;

/// Personal recycling statistics shown on the dashboard cards
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserStats {
    pub bottles_recycled: u32,
    pub bottles_today: u32,
    pub bottles_this_month: u32,
    /// Spendable ECO balance
    pub eco_balance: u64,
    pub tokens_today: u64,
    pub co2_saved_kg: u32,
    pub achievements_unlocked: u32,
}

/// Signed-in user as seen by the front end
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserProfile {
    pub display_name: String,
    pub initials: String,
    pub kyc: KycStatus,
    pub leaderboard_position: u32,
    pub stats: UserStats,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    Recycle,
    Achievement,
    Redemption,
}

impl ActivityKind {
    pub fn icon(&self) -> &'static str {
        match self {
            ActivityKind::Recycle => "♻️",
            ActivityKind::Achievement => "🏆",
            ActivityKind::Redemption => "🎁",
        }
    }
}

/// One row of the recent-activity feed
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ActivityEntry {
    pub kind: ActivityKind,
    pub description: String,
    /// ECO earned (positive) or spent (negative)
    pub token_delta: i64,
    pub occurred_at: DateTime<Utc>,
}

impl ActivityEntry {
    pub fn is_credit(&self) -> bool {
        self.token_delta > 0
    }

    /// Signed label, e.g. `+25` or `-200`
    pub fn delta_label(&self) -> String {
        if self.token_delta > 0 {
            format!("+{}", self.token_delta)
        } else {
            self.token_delta.to_string()
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Achievement {
    pub emoji: String,
    pub name: String,
    pub unlocked: bool,
}

/// Catalog item redeemable with ECO tokens
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Reward {
    pub name: String,
    pub cost: u64,
    pub icon: String,
}

impl Reward {
    pub fn is_affordable(&self, balance: u64) -> bool {
        balance >= self.cost
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LeaderboardEntry {
    pub rank: u32,
    pub name: String,
    pub bottles: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WeeklyChallenge {
    pub title: String,
    pub target_bottles: u32,
    pub progress_bottles: u32,
    pub days_remaining: u32,
    pub bonus_reward: String,
}

impl WeeklyChallenge {
    /// Completion in whole percent, clamped to 100
    pub fn progress_percent(&self) -> u32 {
        if self.target_bottles == 0 {
            return 100;
        }
        (self.progress_bottles.saturating_mul(100) / self.target_bottles).min(100)
    }

    pub fn is_complete(&self) -> bool {
        self.progress_bottles >= self.target_bottles
    }
}

/// Platform-wide figures for the landing page hero
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlatformStats {
    pub bottles_recycled: u64,
    pub active_users: u64,
    pub smart_containers: u64,
}
