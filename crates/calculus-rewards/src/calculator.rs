//! # Reward Calculator
//!
//! Derives a voter's share of a delegate's forging reward and scales it
//! to longer horizons.
//!
//! The calculator does not validate its parameters. Negative pools,
//! negative stakes and profit shares outside `0..=100` are accepted as
//! given; keeping them sensible is up to the caller.
//!
//! Setters take `&mut self`, so sharing one calculator across threads
//! requires the caller to serialize access.

use crate::config::CalculatorConfig;
use crate::constants::*;
use crate::projection::RewardProjection;
use calculus_core::{BigNumber, Result, DEFAULT_PRECISION};
use tracing::trace;

/// Reward configuration of a single delegate
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Calculator {
    /// Total stake voting for the delegate (arktoshi)
    voting_pool: i64,

    /// Percent of the block reward shared with voters
    profit_share: i64,

    /// Forging reward per block (arktoshi)
    reward: i64,

    /// Fractional digits kept when dividing by the pool
    division_precision: u32,
}

impl Calculator {
    /// Create a calculator with the default block reward
    pub fn new(voting_pool: i64, profit_share: i64) -> Self {
        Self {
            voting_pool,
            profit_share,
            reward: DEFAULT_REWARD,
            division_precision: DEFAULT_PRECISION,
        }
    }

    /// Replace the block reward at construction time
    pub fn with_reward(mut self, reward: i64) -> Self {
        self.reward = reward;
        self
    }

    /// Build a calculator from loaded configuration
    pub fn from_config(config: &CalculatorConfig) -> Self {
        Self {
            voting_pool: config.voting_pool,
            profit_share: config.profit_share,
            reward: config.reward,
            division_precision: config.division_precision,
        }
    }

    /// Reward owed to `value` for one forged block
    ///
    /// A stake at or above the whole pool receives the full block reward,
    /// not a profit-share fraction of it.
    pub fn per_block(&self, value: i64) -> Result<BigNumber> {
        trace!(
            value,
            voting_pool = self.voting_pool,
            profit_share = self.profit_share,
            reward = self.reward,
            "per block reward"
        );

        if value >= self.voting_pool {
            return Ok(BigNumber::from(self.reward));
        }

        // Single division so only the final digit is rounded
        let denominator = i128::from(self.voting_pool) * i128::from(PERCENT);
        BigNumber::from(self.reward)
            .times(self.profit_share)?
            .times(value)?
            .divided_by_with_precision(denominator, self.division_precision)
    }

    /// Reward for one day of forging
    pub fn per_day(&self, value: i64) -> Result<BigNumber> {
        self.per_block(value)?.times(BLOCKS_PER_DAY)
    }

    /// Reward for one week
    pub fn per_week(&self, value: i64) -> Result<BigNumber> {
        self.per_day(value)?.times(DAYS_PER_WEEK)
    }

    /// Reward for one four-week month
    pub fn per_month(&self, value: i64) -> Result<BigNumber> {
        self.per_week(value)?.times(WEEKS_PER_MONTH)
    }

    /// Reward for three months
    pub fn per_quarter(&self, value: i64) -> Result<BigNumber> {
        self.per_month(value)?.times(MONTHS_PER_QUARTER)
    }

    /// Reward for twelve four-week months
    pub fn per_year(&self, value: i64) -> Result<BigNumber> {
        self.per_month(value)?.times(MONTHS_PER_YEAR)
    }

    /// Share of the pool held by `value`, in percent
    ///
    /// The ratio is rounded to 8 fractional digits before scaling by 100.
    /// An empty pool yields zero.
    pub fn vote_weight(&self, value: i64) -> Result<BigNumber> {
        trace!(value, voting_pool = self.voting_pool, "vote weight");

        if self.voting_pool == 0 {
            return Ok(BigNumber::zero());
        }

        BigNumber::from(value)
            .divided_by_with_precision(self.voting_pool, VOTE_WEIGHT_PRECISION)?
            .times(PERCENT)
    }

    /// Every horizon plus the vote weight for one stake
    pub fn projection(&self, value: i64) -> Result<RewardProjection> {
        let per_block = self.per_block(value)?;
        let per_day = per_block.times(BLOCKS_PER_DAY)?;
        let per_week = per_day.times(DAYS_PER_WEEK)?;
        let per_month = per_week.times(WEEKS_PER_MONTH)?;
        let per_quarter = per_month.times(MONTHS_PER_QUARTER)?;
        let per_year = per_month.times(MONTHS_PER_YEAR)?;

        Ok(RewardProjection {
            stake: value,
            per_block,
            per_day,
            per_week,
            per_month,
            per_quarter,
            per_year,
            vote_weight: self.vote_weight(value)?,
        })
    }

    /// Get the voting pool
    pub fn voting_pool(&self) -> i64 {
        self.voting_pool
    }

    /// Set the voting pool
    pub fn set_voting_pool(&mut self, value: i64) -> &mut Self {
        self.voting_pool = value;
        self
    }

    /// Get the profit share percentage
    pub fn profit_share(&self) -> i64 {
        self.profit_share
    }

    /// Set the profit share percentage
    pub fn set_profit_share(&mut self, value: i64) -> &mut Self {
        self.profit_share = value;
        self
    }

    /// Get the reward per block
    pub fn reward(&self) -> i64 {
        self.reward
    }

    /// Set the reward per block
    pub fn set_reward(&mut self, value: i64) -> &mut Self {
        self.reward = value;
        self
    }

    /// Get the division precision
    pub fn division_precision(&self) -> u32 {
        self.division_precision
    }

    /// Set the division precision
    pub fn set_division_precision(&mut self, value: u32) -> &mut Self {
        self.division_precision = value;
        self
    }
}
