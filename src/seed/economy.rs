//! Placeholder economy: wallet balances and weekly leaderboard standings.

use serde::{Deserialize, Serialize};

use crate::config::EconomyConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wallet {
    pub coins: u32,
    pub flames: u32,
    pub gems: u32,
    pub energy: u32,
}

impl Default for Wallet {
    fn default() -> Self {
        Self::from(&EconomyConfig::default())
    }
}

impl From<&EconomyConfig> for Wallet {
    fn from(config: &EconomyConfig) -> Self {
        Self {
            coins: config.coins,
            flames: config.flames,
            gems: config.gems,
            energy: config.energy,
        }
    }
}

impl Wallet {
    /// Chips for the top bar, in display order.
    #[must_use]
    pub fn chips(&self) -> [(&'static str, u32); 4] {
        [
            ("🪙", self.coins),
            ("🔥", self.flames),
            ("💎", self.gems),
            ("⚡", self.energy),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub rank: usize,
    pub name: String,
    pub avatar: String,
    pub xp: u32,
}

const SEED_STANDINGS: [(&str, &str, u32); 5] = [
    ("Ryan", "🧔", 862),
    ("Beatriz", "👩", 480),
    ("Diego", "👨‍🦱", 266),
    ("Larissa Holanda", "👩‍🦰", 239),
    ("Mel", "👩‍🦱", 230),
];

/// The learner's finishing position last week.
#[must_use]
pub const fn last_week_rank() -> usize {
    8
}

/// Weekly standings ranked by XP, highest first.
#[must_use]
pub fn seed_leaderboard() -> Vec<LeaderboardEntry> {
    let mut standings = SEED_STANDINGS.to_vec();
    standings.sort_by(|a, b| b.2.cmp(&a.2));
    standings
        .into_iter()
        .enumerate()
        .map(|(idx, (name, avatar, xp))| LeaderboardEntry {
            rank: idx + 1,
            name: name.to_string(),
            avatar: avatar.to_string(),
            xp,
        })
        .collect()
}
