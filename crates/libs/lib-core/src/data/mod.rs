//! # Data Provider
//!
//! Everything the dashboard and exchange views display comes through
//! [`EcoDataProvider`]. [`StaticDataProvider`] serves the compiled-in sample data; a live
//! backend can implement the same trait without touching the views.

pub mod sample;

use async_trait::async_trait;

use shared::dto::{
    Achievement, ActivityEntry, ExchangeRecord, LeaderboardEntry, PlatformStats, Reward,
    UserProfile, WeeklyChallenge,
};

use crate::error::Result;
use crate::recycling::RedemptionRecord;

pub use sample::StaticDataProvider;

#[async_trait(?Send)]
pub trait EcoDataProvider {
    async fn user_profile(&self) -> Result<UserProfile>;

    /// Most recent activity first, at most `limit` entries
    async fn list_activity(&self, limit: usize) -> Result<Vec<ActivityEntry>>;

    async fn list_achievements(&self) -> Result<Vec<Achievement>>;

    async fn list_rewards(&self) -> Result<Vec<Reward>>;

    /// Spend the user's ECO on the catalog reward named `reward_name`
    async fn redeem_reward(&self, reward_name: &str) -> Result<RedemptionRecord>;

    /// Top `limit` recyclers, ranked
    async fn list_leaderboard(&self, limit: usize) -> Result<Vec<LeaderboardEntry>>;

    async fn weekly_challenge(&self) -> Result<WeeklyChallenge>;

    async fn recent_exchanges(&self) -> Result<Vec<ExchangeRecord>>;

    async fn platform_stats(&self) -> Result<PlatformStats>;
}

/// Rank recyclers by bottle count, highest first.
///
/// Ties share a rank and the next rank skips accordingly (1, 2, 2, 4).
pub fn rank_leaderboard<I>(entries: I) -> Vec<LeaderboardEntry>
where
    I: IntoIterator<Item = (String, u32)>,
{
    let mut entries: Vec<(String, u32)> = entries.into_iter().collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

    let mut ranked: Vec<LeaderboardEntry> = Vec::with_capacity(entries.len());
    for (position, (name, bottles)) in entries.into_iter().enumerate() {
        let rank = match ranked.last() {
            Some(prev) if prev.bottles == bottles => prev.rank,
            _ => position as u32 + 1,
        };
        ranked.push(LeaderboardEntry { rank, name, bottles });
    }
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_leaderboard_orders_by_bottles() {
        let ranked = rank_leaderboard([
            ("Ana L.".to_string(), 276),
            ("María G.".to_string(), 342),
            ("Carlos R.".to_string(), 298),
        ]);
        let names: Vec<_> = ranked.iter().map(|e| (e.rank, e.name.as_str())).collect();
        assert_eq!(names, [(1, "María G."), (2, "Carlos R."), (3, "Ana L.")]);
    }

    #[test]
    fn test_rank_leaderboard_ties_share_rank() {
        let ranked = rank_leaderboard([
            ("B".to_string(), 10),
            ("A".to_string(), 20),
            ("C".to_string(), 10),
            ("D".to_string(), 5),
        ]);
        let ranks: Vec<_> = ranked.iter().map(|e| (e.name.as_str(), e.rank)).collect();
        assert_eq!(ranks, [("A", 1), ("B", 2), ("C", 2), ("D", 4)]);
    }

    #[test]
    fn test_rank_leaderboard_empty() {
        assert!(rank_leaderboard(Vec::new()).is_empty());
    }
}
