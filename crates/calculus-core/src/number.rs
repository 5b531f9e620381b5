//! # BigNumber
//!
//! Immutable arbitrary-precision decimal used for every reward amount.
//!
//! ## Rounding
//!
//! Multiplication, addition and subtraction are exact. Division is
//! computed on the underlying big integers and rounded **half up** (ties
//! away from zero) to the requested number of fractional digits, so the
//! only precision ever lost is the final rounding step.
//!
//! ```text
//!   a × 10^-sa          a × 10^(p + sb - sa)
//!   ----------  ==>  q = --------------------   (rounded half up)
//!   b × 10^-sb                    b
//!
//!   result = q × 10^-p
//! ```

use crate::constants::{ARKTOSHI, DECIMALS, DEFAULT_PRECISION};
use crate::error::{CalculusError, Result};
use crate::operand::Operand;
use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use num_traits::{Signed, ToPrimitive, Zero};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Arbitrary-precision decimal value
///
/// Equality and ordering are numeric: `10` equals `10.00000000`.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BigNumber {
    value: BigDecimal,
}

impl BigNumber {
    /// Create a number from any accepted operand
    pub fn create(value: impl Into<Operand>) -> Result<Self> {
        Ok(Self {
            value: value.into().into_decimal()?,
        })
    }

    /// The number zero
    pub fn zero() -> Self {
        Self {
            value: BigDecimal::zero(),
        }
    }

    /// Convert a whole-unit amount (ARK) into smallest units
    pub fn from_whole_units(value: impl Into<Operand>) -> Result<Self> {
        Self::create(value)?.times(ARKTOSHI)
    }

    /// `self × multiplier`, keeping full precision
    pub fn times(&self, multiplier: impl Into<Operand>) -> Result<Self> {
        let multiplier = multiplier.into().into_decimal()?;
        Ok(Self {
            value: &self.value * &multiplier,
        })
    }

    /// `self ÷ divisor` at [`DEFAULT_PRECISION`] fractional digits
    pub fn divided_by(&self, divisor: impl Into<Operand>) -> Result<Self> {
        self.divided_by_with_precision(divisor, DEFAULT_PRECISION)
    }

    /// `self ÷ divisor`, rounded half up to `precision` fractional digits
    pub fn divided_by_with_precision(
        &self,
        divisor: impl Into<Operand>,
        precision: u32,
    ) -> Result<Self> {
        let divisor = divisor.into().into_decimal()?;
        if divisor.is_zero() {
            return Err(CalculusError::DivisionByZero);
        }

        let (numerator, numerator_scale) = self.value.as_bigint_and_exponent();
        let (denominator, denominator_scale) = divisor.as_bigint_and_exponent();

        let shift = i64::from(precision) + denominator_scale - numerator_scale;
        let (numerator, denominator) = if shift >= 0 {
            (numerator * pow10(shift)?, denominator)
        } else {
            (numerator, denominator * pow10(-shift)?)
        };

        Ok(Self {
            value: BigDecimal::new(
                div_round_half_up(&numerator, &denominator),
                i64::from(precision),
            ),
        })
    }

    /// `self + addend`, exact
    pub fn plus(&self, addend: impl Into<Operand>) -> Result<Self> {
        let addend = addend.into().into_decimal()?;
        Ok(Self {
            value: &self.value + &addend,
        })
    }

    /// `self - subtrahend`, exact
    pub fn minus(&self, subtrahend: impl Into<Operand>) -> Result<Self> {
        let subtrahend = subtrahend.into().into_decimal()?;
        Ok(Self {
            value: &self.value - &subtrahend,
        })
    }

    /// Round half up to `places` fractional digits
    pub fn round(&self, places: u32) -> Self {
        let (digits, scale) = self.value.as_bigint_and_exponent();
        let excess = scale - i64::from(places);
        if excess <= 0 {
            return self.clone();
        }
        let rounded = match pow10(excess) {
            Ok(factor) => div_round_half_up(&digits, &factor),
            Err(_) => BigInt::zero(),
        };

        Self {
            value: BigDecimal::new(rounded, i64::from(places)),
        }
    }

    /// Convert smallest units into whole units (ARK), 8 fractional digits
    pub fn to_whole_units(&self) -> Result<Self> {
        self.divided_by_with_precision(ARKTOSHI, u32::from(DECIMALS))
    }

    /// Integer part, truncated toward zero
    pub fn to_integer(&self) -> Result<i128> {
        let (digits, scale) = self.value.as_bigint_and_exponent();
        let integer = if scale <= 0 {
            digits * pow10(-scale)?
        } else {
            match pow10(scale) {
                Ok(factor) => digits / factor,
                // More fractional digits than fit in memory means |x| < 1
                Err(_) => BigInt::zero(),
            }
        };

        integer
            .to_i128()
            .ok_or_else(|| CalculusError::Overflow(self.to_string()))
    }

    /// Check for zero
    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }

    /// Check for a value strictly below zero
    pub fn is_negative(&self) -> bool {
        self.value.is_negative()
    }

    pub(crate) fn into_inner(self) -> BigDecimal {
        self.value
    }
}

/// 10^exponent as a big integer
fn pow10(exponent: i64) -> Result<BigInt> {
    let exponent = u32::try_from(exponent)
        .map_err(|_| CalculusError::Overflow(format!("10^{}", exponent)))?;
    Ok(BigInt::from(10u8).pow(exponent))
}

/// Integer quotient rounded half away from zero
fn div_round_half_up(numerator: &BigInt, denominator: &BigInt) -> BigInt {
    let quotient = numerator / denominator;
    let remainder = numerator % denominator;

    if remainder.is_zero() {
        return quotient;
    }

    let twice_remainder: BigInt = remainder.abs() * 2u8;
    if twice_remainder >= denominator.abs() {
        if numerator.is_negative() == denominator.is_negative() {
            quotient + 1u8
        } else {
            quotient - 1u8
        }
    } else {
        quotient
    }
}

impl Default for BigNumber {
    fn default() -> Self {
        Self::zero()
    }
}

macro_rules! exact_from {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for BigNumber {
                fn from(value: $ty) -> Self {
                    Self {
                        value: BigDecimal::new(BigInt::from(value), 0),
                    }
                }
            }
        )*
    };
}

exact_from!(i8, i16, i32, i64, i128, u8, u16, u32, u64, u128);

impl FromStr for BigNumber {
    type Err = CalculusError;

    fn from_str(s: &str) -> Result<Self> {
        Self::create(s)
    }
}

impl fmt::Display for BigNumber {
    /// Plain decimal notation, never exponent form
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (digits, scale) = self.value.as_bigint_and_exponent();
        let sign = if digits.is_negative() { "-" } else { "" };
        let mut magnitude = digits.abs().to_string();

        if scale <= 0 {
            if !digits.is_zero() {
                magnitude.extend(std::iter::repeat('0').take(scale.unsigned_abs() as usize));
            }
            return write!(f, "{}{}", sign, magnitude);
        }

        let scale = scale as usize;
        if magnitude.len() <= scale {
            let padding = "0".repeat(scale + 1 - magnitude.len());
            magnitude.insert_str(0, &padding);
        }
        let (whole, fraction) = magnitude.split_at(magnitude.len() - scale);
        write!(f, "{}{}.{}", sign, whole, fraction)
    }
}

impl Serialize for BigNumber {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for BigNumber {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}
