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

//! Token precision and the normalization of the shapes a caller may supply it in.

use std::fmt;
use std::str::FromStr;

use alloy_primitives::{I256, U256};
use serde::{Deserialize, Serialize};

use crate::UnitsError;

/// Fractional precision of a token, always in [0, 255].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Decimals(u8);

impl Decimals {
    /// Largest supported precision
    pub const MAX: Decimals = Decimals(u8::MAX);

    /// Precision used by ether and most ERC20 tokens
    pub const ETHER: Decimals = Decimals(18);

    pub const fn new(decimals: u8) -> Self {
        Self(decimals)
    }

    pub const fn get(self) -> u8 {
        self.0
    }

    pub const fn as_usize(self) -> usize {
        self.0 as usize
    }

    /// Resolve any accepted decimals shape into a canonical value.
    pub fn normalize(input: impl Into<DecimalsInput>) -> Result<Self, UnitsError> {
        Self::try_from(input.into())
    }

    fn from_u256(value: U256) -> Option<Self> {
        if value > U256::from(u8::MAX) {
            return None;
        }
        Some(Self(value.as_limbs()[0] as u8))
    }
}

impl From<u8> for Decimals {
    fn from(decimals: u8) -> Self {
        Self(decimals)
    }
}

impl From<Decimals> for u8 {
    fn from(decimals: Decimals) -> Self {
        decimals.0
    }
}

impl fmt::Display for Decimals {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Decimals {
    type Err = UnitsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::normalize(s)
    }
}

/// The shapes a decimals value may arrive in before normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecimalsInput {
    /// A native integer, widened
    Native(i128),
    /// A base-10 integer in text form, optionally signed
    Text(String),
    /// An unsigned big integer
    Big(U256),
    /// A signed big integer
    SignedBig(I256),
}

impl fmt::Display for DecimalsInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecimalsInput::Native(value) => write!(f, "{value}"),
            DecimalsInput::Text(value) => write!(f, "{value}"),
            DecimalsInput::Big(value) => write!(f, "{value}"),
            DecimalsInput::SignedBig(value) => write!(f, "{value}"),
        }
    }
}

impl TryFrom<DecimalsInput> for Decimals {
    type Error = UnitsError;

    fn try_from(input: DecimalsInput) -> Result<Self, Self::Error> {
        let resolved = match &input {
            DecimalsInput::Native(value) => u8::try_from(*value).ok().map(Decimals),
            DecimalsInput::Text(value) => {
                value.parse::<i128>().ok().and_then(|v| u8::try_from(v).ok()).map(Decimals)
            }
            DecimalsInput::Big(value) => Decimals::from_u256(*value),
            DecimalsInput::SignedBig(value) => {
                if value.is_negative() {
                    None
                } else {
                    Decimals::from_u256(value.into_raw())
                }
            }
        };
        resolved.ok_or_else(|| UnitsError::InvalidDecimals(input.to_string()))
    }
}

macro_rules! native_decimals_input {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for DecimalsInput {
                fn from(value: $ty) -> Self {
                    DecimalsInput::Native(value as i128)
                }
            }
        )*
    };
}

native_decimals_input!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize, i128);

impl From<u128> for DecimalsInput {
    fn from(value: u128) -> Self {
        DecimalsInput::Big(U256::from(value))
    }
}

impl From<&str> for DecimalsInput {
    fn from(value: &str) -> Self {
        DecimalsInput::Text(value.to_string())
    }
}

impl From<String> for DecimalsInput {
    fn from(value: String) -> Self {
        DecimalsInput::Text(value)
    }
}

impl From<&String> for DecimalsInput {
    fn from(value: &String) -> Self {
        DecimalsInput::Text(value.clone())
    }
}

impl From<U256> for DecimalsInput {
    fn from(value: U256) -> Self {
        DecimalsInput::Big(value)
    }
}

impl From<I256> for DecimalsInput {
    fn from(value: I256) -> Self {
        DecimalsInput::SignedBig(value)
    }
}

impl From<Decimals> for DecimalsInput {
    fn from(value: Decimals) -> Self {
        DecimalsInput::Native(value.0 as i128)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_every_shape() {
        assert_eq!(Decimals::normalize(18u8).unwrap(), Decimals::ETHER);
        assert_eq!(Decimals::normalize(18i64).unwrap(), Decimals::ETHER);
        assert_eq!(Decimals::normalize("18").unwrap(), Decimals::ETHER);
        assert_eq!(Decimals::normalize(U256::from(18)).unwrap(), Decimals::ETHER);
        assert_eq!(Decimals::normalize(I256::from_dec_str("18").unwrap()).unwrap(), Decimals::ETHER);
        assert_eq!(Decimals::normalize(18u128).unwrap(), Decimals::ETHER);
    }

    #[test]
    fn test_bounds() {
        assert_eq!(Decimals::normalize(0i32).unwrap().get(), 0);
        assert_eq!(Decimals::normalize(255i32).unwrap(), Decimals::MAX);
        assert_eq!(
            Decimals::normalize(256i32).unwrap_err(),
            UnitsError::InvalidDecimals("256".into())
        );
        assert_eq!(
            Decimals::normalize(-1i32).unwrap_err(),
            UnitsError::InvalidDecimals("-1".into())
        );
        assert_eq!(
            Decimals::normalize(1000i32).unwrap_err(),
            UnitsError::InvalidDecimals("1000".into())
        );
    }

    #[test]
    fn test_rejects_out_of_range_big_integers() {
        assert!(Decimals::normalize(U256::from(256)).is_err());
        assert!(Decimals::normalize(U256::MAX).is_err());
        assert!(Decimals::normalize(I256::MINUS_ONE).is_err());
        assert!(Decimals::normalize(I256::MIN).is_err());
        assert!(Decimals::normalize(u128::MAX).is_err());
    }

    #[test]
    fn test_rejects_non_integer_text() {
        for bad in ["", "eighteen", "1.5", " 18", "18 ", "0x12", "1e1"] {
            assert_eq!(
                Decimals::normalize(bad).unwrap_err(),
                UnitsError::InvalidDecimals(bad.to_string()),
                "{bad:?}"
            );
        }
        assert_eq!(Decimals::normalize("-1").unwrap_err(), UnitsError::InvalidDecimals("-1".into()));
        assert_eq!(Decimals::normalize("+6").unwrap().get(), 6);
    }

    #[test]
    fn test_parse_and_display() {
        let decimals: Decimals = "6".parse().unwrap();
        assert_eq!(decimals.to_string(), "6");
        assert!("256".parse::<Decimals>().is_err());
    }

    #[test]
    fn test_serde_is_a_plain_integer() {
        let json = serde_json::to_string(&Decimals::new(6)).unwrap();
        assert_eq!(json, "6");
        let decimals: Decimals = serde_json::from_str("255").unwrap();
        assert_eq!(decimals, Decimals::MAX);
        assert!(serde_json::from_str::<Decimals>("256").is_err());
    }
}
