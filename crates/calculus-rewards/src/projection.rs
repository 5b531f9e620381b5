//! Reward projection summary

use calculus_core::{BigNumber, Result};
use serde::{Deserialize, Serialize};

/// Rewards across every horizon for a single stake
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewardProjection {
    /// Voter stake (arktoshi)
    pub stake: i64,

    /// Reward per forged block
    pub per_block: BigNumber,

    /// Reward per day
    pub per_day: BigNumber,

    /// Reward per week
    pub per_week: BigNumber,

    /// Reward per four-week month
    pub per_month: BigNumber,

    /// Reward per quarter
    pub per_quarter: BigNumber,

    /// Reward per 48-week year
    pub per_year: BigNumber,

    /// Stake as a percentage of the voting pool
    pub vote_weight: BigNumber,
}

impl RewardProjection {
    /// Same projection with every reward expressed in whole ARK
    pub fn in_whole_units(&self) -> Result<Self> {
        Ok(Self {
            stake: self.stake,
            per_block: self.per_block.to_whole_units()?,
            per_day: self.per_day.to_whole_units()?,
            per_week: self.per_week.to_whole_units()?,
            per_month: self.per_month.to_whole_units()?,
            per_quarter: self.per_quarter.to_whole_units()?,
            per_year: self.per_year.to_whole_units()?,
            vote_weight: self.vote_weight.clone(),
        })
    }

    /// Render as pretty JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
