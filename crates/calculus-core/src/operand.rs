//! Accepted inputs for [`BigNumber`] arithmetic
//!
//! Every value entering the arithmetic layer is one of a closed set of
//! variants. Parsing happens once, at the boundary, in
//! [`Operand::into_decimal`].

use crate::error::{CalculusError, Result};
use crate::number::BigNumber;
use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use std::str::FromStr;

/// A value that can be turned into a [`BigNumber`]
#[derive(Clone, Debug, PartialEq)]
pub enum Operand {
    /// Exact integer
    Integer(i128),
    /// Binary float, taken at its shortest round-trip decimal form
    Float(f64),
    /// Decimal string such as `"12.5"` or `"-3"`
    Text(String),
    /// Already validated number
    Number(BigNumber),
}

impl Operand {
    /// Validate and convert into the underlying decimal
    pub(crate) fn into_decimal(self) -> Result<BigDecimal> {
        match self {
            Self::Integer(value) => Ok(BigDecimal::new(BigInt::from(value), 0)),
            Self::Float(value) => {
                if !value.is_finite() {
                    return Err(CalculusError::InvalidNumber(value.to_string()));
                }
                // f64 Display never uses exponent notation
                parse_decimal(&value.to_string())
            }
            Self::Text(text) => parse_decimal(&text),
            Self::Number(number) => Ok(number.into_inner()),
        }
    }
}

/// Largest decimal exponent accepted from text, in either direction
pub const MAX_EXPONENT: i64 = 1_000_000;

fn parse_decimal(text: &str) -> Result<BigDecimal> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(CalculusError::InvalidNumber(text.to_string()));
    }
    let decimal = BigDecimal::from_str(trimmed)
        .map_err(|_| CalculusError::InvalidNumber(text.to_string()))?;

    let (_, scale) = decimal.as_bigint_and_exponent();
    if scale.unsigned_abs() > MAX_EXPONENT.unsigned_abs() {
        return Err(CalculusError::InvalidNumber(text.to_string()));
    }
    Ok(decimal)
}

macro_rules! integer_operand {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Operand {
                fn from(value: $ty) -> Self {
                    Self::Integer(i128::from(value))
                }
            }
        )*
    };
}

integer_operand!(i8, i16, i32, i64, i128, u8, u16, u32, u64);

impl From<f64> for Operand {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<f32> for Operand {
    /// Formatted at f32 width so `0.1f32` stays `0.1`
    fn from(value: f32) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<&str> for Operand {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Operand {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<BigNumber> for Operand {
    fn from(value: BigNumber) -> Self {
        Self::Number(value)
    }
}

impl From<&BigNumber> for Operand {
    fn from(value: &BigNumber) -> Self {
        Self::Number(value.clone())
    }
}
