//! # Calculus Core
//!
//! Fixed-point money arithmetic for Ark delegate reward calculations.
//!
//! Every amount is an integer count of *arktoshi* (10^-8 ARK). Values are
//! carried as [`BigNumber`], an immutable arbitrary-precision decimal,
//! so no binary floating point ever enters a result.
//!
//! ```text
//! ┌──────────────┐   create    ┌───────────┐  times / divided_by  ┌───────────┐
//! │ i64 / &str / │ ──────────> │ BigNumber │ ───────────────────> │ BigNumber │
//! │ f64 operand  │             └───────────┘    (new instance)    └───────────┘
//! └──────────────┘
//! ```

pub mod error;
pub mod number;
pub mod operand;

// Re-exports
pub use error::{CalculusError, Result};
pub use number::BigNumber;
pub use operand::Operand;

/// ARK unit constants
pub mod constants {
    /// Token symbol
    pub const SYMBOL: &str = "ARK";

    /// Decimal places of the smallest unit
    pub const DECIMALS: u8 = 8;

    /// One ARK in arktoshi (10^8)
    pub const ARKTOSHI: u64 = 100_000_000;

    /// Fractional digits kept by a division when none are requested
    pub const DEFAULT_PRECISION: u32 = 20;
}

pub use constants::*;
