// Copyright 2026 Boundless Foundation, Inc.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Conversion between decimal literals and uint256 machine amounts.

use std::fmt;

use alloy_primitives::U256;

use crate::decimals::{Decimals, DecimalsInput};
use crate::literal::{is_digits, DecimalLiteral};
use crate::UnitsError;

/// Largest machine amount, 2^256 - 1
pub const MAX_MACHINE_AMOUNT: U256 = U256::MAX;

/// The shapes a machine amount may arrive in before decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AmountInput {
    Native(u128),
    /// Base-10 digits, leading zeros allowed
    Text(String),
    Big(U256),
}

impl fmt::Display for AmountInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AmountInput::Native(value) => write!(f, "{value}"),
            AmountInput::Text(value) => write!(f, "{value}"),
            AmountInput::Big(value) => write!(f, "{value}"),
        }
    }
}

impl AmountInput {
    /// Validate and resolve into a machine amount.
    pub fn resolve(self) -> Result<U256, UnitsError> {
        match self {
            AmountInput::Native(value) => Ok(U256::from(value)),
            AmountInput::Big(value) => Ok(value),
            AmountInput::Text(value) => {
                if !is_digits(&value) {
                    return Err(UnitsError::InvalidCharacter(value));
                }
                parse_digits(&value)
            }
        }
    }
}

macro_rules! native_amount_input {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for AmountInput {
                fn from(value: $ty) -> Self {
                    AmountInput::Native(value as u128)
                }
            }
        )*
    };
}

native_amount_input!(u8, u16, u32, u64, usize, u128);

impl From<&str> for AmountInput {
    fn from(value: &str) -> Self {
        AmountInput::Text(value.to_string())
    }
}

impl From<String> for AmountInput {
    fn from(value: String) -> Self {
        AmountInput::Text(value)
    }
}

impl From<&String> for AmountInput {
    fn from(value: &String) -> Self {
        AmountInput::Text(value.clone())
    }
}

impl From<U256> for AmountInput {
    fn from(value: U256) -> Self {
        AmountInput::Big(value)
    }
}

/// Convert a human-readable amount into its machine amount.
///
/// `"1.1"` with 3 decimals is `1100`. Fractional digits beyond the token's
/// decimals are rejected rather than truncated.
pub fn to_erc20_units(
    literal: &str,
    decimals: impl Into<DecimalsInput>,
) -> Result<U256, UnitsError> {
    encode(literal, decimals.into())
        .inspect_err(|err| tracing::trace!("Failed to encode {literal:?}: {err}"))
}

fn encode(literal: &str, decimals: DecimalsInput) -> Result<U256, UnitsError> {
    let decimals = Decimals::try_from(decimals)?;
    let parsed = DecimalLiteral::parse(literal)?;
    let (integer, fraction) = (parsed.integer(), parsed.fraction());

    if fraction.len() > decimals.as_usize() {
        return Err(UnitsError::TooManyDecimals { got: fraction.len(), max: decimals.get() });
    }

    let padded = format!("{integer}{fraction:0<width$}", width = decimals.as_usize());
    parse_digits(&padded)
}

/// Convert a machine amount into its human-readable amount.
///
/// Trailing fractional zeros are dropped, and so is the point when nothing
/// remains after it: `100` with 4 decimals is `"0.01"`, `0` is `"0"`.
pub fn from_erc20_units(
    amount: impl Into<AmountInput>,
    decimals: impl Into<DecimalsInput>,
) -> Result<String, UnitsError> {
    let amount = amount.into();
    let shown = amount.to_string();
    decode(amount, decimals.into())
        .inspect_err(|err| tracing::trace!("Failed to decode {shown:?}: {err}"))
}

fn decode(amount: AmountInput, decimals: DecimalsInput) -> Result<String, UnitsError> {
    let decimals = Decimals::try_from(decimals)?;
    let value = amount.resolve()?;
    Ok(format_fixed(value, decimals.as_usize()))
}

/// Format a machine amount rounded half-up to `places` fractional digits.
///
/// Trailing zeros are trimmed. A non-zero value that would round to zero is
/// shown losslessly instead.
pub fn format_units_rounded(value: U256, decimals: Decimals, places: usize) -> String {
    let total = decimals.as_usize();
    if places >= total {
        return format_fixed(value, total);
    }

    // shift is in 1..=255
    let shift = (total - places) as u8;
    let rounded = match pow10(shift) {
        Some(divisor) => {
            let quotient = value / divisor;
            let remainder = value % divisor;
            // remainder * 2 can exceed uint256 once divisor nears 10^77
            if remainder >= divisor - remainder {
                quotient + U256::from(1)
            } else {
                quotient
            }
        }
        // 10^shift / 2 is already above MAX_MACHINE_AMOUNT
        None => U256::ZERO,
    };

    if rounded.is_zero() && !value.is_zero() {
        return format_fixed(value, total);
    }

    format_fixed(rounded, places)
}

/// Re-express a machine amount in another precision.
///
/// Scaling down truncates; scaling up fails if the result leaves the uint256 range.
pub fn scale_decimals(value: U256, from: Decimals, to: Decimals) -> Result<U256, UnitsError> {
    if from == to || value.is_zero() {
        return Ok(value);
    }
    if from > to {
        return Ok(match pow10(from.get() - to.get()) {
            Some(divisor) => value / divisor,
            None => U256::ZERO,
        });
    }
    pow10(to.get() - from.get())
        .and_then(|scale| value.checked_mul(scale))
        .ok_or(UnitsError::TooLargeNumber)
}

/// 10^exp, or `None` when it does not fit in a uint256 (exp > 77).
pub fn pow10(exp: u8) -> Option<U256> {
    U256::from(10u64).checked_pow(U256::from(exp))
}

fn parse_digits(digits: &str) -> Result<U256, UnitsError> {
    U256::from_str_radix(digits, 10).map_err(|_| UnitsError::TooLargeNumber)
}

pub(crate) fn format_fixed(value: U256, decimals: usize) -> String {
    let digits = format!("{:0>width$}", value.to_string(), width = decimals + 1);
    let (integer, fraction) = digits.split_at(digits.len() - decimals);
    let fraction = fraction.trim_end_matches('0');
    if fraction.is_empty() {
        integer.to_string()
    } else {
        format!("{integer}.{fraction}")
    }
}
