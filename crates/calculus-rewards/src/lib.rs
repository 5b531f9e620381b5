//! # Calculus Rewards - Delegate Vote Reward Projections
//!
//! Projects what a voter earns from a delegate that shares part of its
//! forging reward with the wallets voting for it.
//!
//! ## Reward Formula
//!
//! ```text
//!                          profit_share     stake
//!   per_block = reward  ×  ------------  ×  -----------
//!                              100          voting_pool
//! ```
//!
//! A stake that covers the whole pool receives the full block reward.
//!
//! ## Horizons
//!
//! | Horizon | Derived from | Factor |
//! |---------|--------------|--------|
//! | Day | block | 211 |
//! | Week | day | 7 |
//! | Month | week | 4 |
//! | Quarter | month | 3 |
//! | Year | month | 12 |

pub mod calculator;
pub mod config;
pub mod projection;

// Re-exports
pub use calculator::Calculator;
pub use config::CalculatorConfig;
pub use projection::RewardProjection;

pub use calculus_core::{BigNumber, CalculusError, Result, ARKTOSHI};

/// Forging schedule constants
pub mod constants {
    use calculus_core::ARKTOSHI;

    /// Forging reward per block: 2 ARK
    pub const DEFAULT_REWARD: i64 = 2 * ARKTOSHI as i64;

    /// Blocks a single delegate forges per day (51 delegates, 8s blocks)
    pub const BLOCKS_PER_DAY: u32 = 211;

    /// Days per week
    pub const DAYS_PER_WEEK: u32 = 7;

    /// Weeks per month (a month is modelled as exactly four weeks)
    pub const WEEKS_PER_MONTH: u32 = 4;

    /// Months per quarter
    pub const MONTHS_PER_QUARTER: u32 = 3;

    /// Months per year (48 weeks)
    pub const MONTHS_PER_YEAR: u32 = 12;

    /// Fractional digits of the stake/pool ratio behind a vote weight
    pub const VOTE_WEIGHT_PRECISION: u32 = 8;

    /// Percent denominator
    pub const PERCENT: u32 = 100;
}

pub use constants::*;
