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

//! A machine amount bound to the precision of its token.

use std::fmt;

use alloy_primitives::U256;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::decimals::Decimals;
use crate::units::{format_fixed, format_units_rounded, scale_decimals, to_erc20_units};
use crate::UnitsError;

/// An amount of some token, stored in its smallest unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TokenAmount {
    /// The value in the token's smallest unit
    pub value: U256,
    /// The token's decimals
    pub decimals: Decimals,
}

impl TokenAmount {
    pub fn new(value: U256, decimals: Decimals) -> Self {
        Self { value, decimals }
    }

    /// Parse a human-readable amount such as `"1.5"` for a token with the given decimals.
    pub fn parse(literal: &str, decimals: Decimals) -> Result<Self, UnitsError> {
        let value = to_erc20_units(literal, decimals)?;
        Ok(Self { value, decimals })
    }

    /// Lossless decimal representation
    pub fn format(&self) -> String {
        format_fixed(self.value, self.decimals.as_usize())
    }

    /// Format rounded half-up to `places` fractional digits.
    pub fn format_display(&self, places: usize) -> String {
        format_units_rounded(self.value, self.decimals, places)
    }

    /// The same amount expressed with different decimals, truncating when precision drops.
    pub fn rescale(&self, decimals: Decimals) -> Result<Self, UnitsError> {
        let value = scale_decimals(self.value, self.decimals, decimals)?;
        Ok(Self { value, decimals })
    }
}

impl fmt::Display for TokenAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(places) => write!(f, "{}", self.format_display(places)),
            None => write!(f, "{}", self.format()),
        }
    }
}

#[derive(Serialize, Deserialize)]
struct TokenAmountRepr {
    amount: String,
    decimals: Decimals,
}

impl Serialize for TokenAmount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        TokenAmountRepr { amount: self.format(), decimals: self.decimals }.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for TokenAmount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let repr = TokenAmountRepr::deserialize(deserializer)?;
        TokenAmount::parse(&repr.amount, repr.decimals).map_err(de::Error::custom)
    }
}
