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

use thiserror::Error;

/// An error with a stable, machine-readable code.
pub trait CodedError: std::error::Error {
    fn code(&self) -> &str;
}

/// Errors returned when converting between decimal literals and machine amounts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnitsError {
    /// Decimals value is not an integer in [0, 255]
    #[error("Invalid number of decimals for ERC20 token: {0}")]
    InvalidDecimals(String),
    /// Decimal literal does not match `digits` or `digits.digits`
    #[error("Failed to parse decimal representation of {0}")]
    InvalidNumber(String),
    /// Machine amount contains something other than ASCII digits
    #[error("Invalid character in machine amount: {0}")]
    InvalidCharacter(String),
    /// Literal has more fractional digits than the token supports
    #[error("Too many decimals for the token in input string: got {got}, max {max}")]
    TooManyDecimals {
        /// Number of fractional digits in the literal
        got: usize,
        /// Decimals of the token
        max: u8,
    },
    /// Value does not fit in a uint256
    #[error("Number larger than ERC20 token maximum amount (uint256)")]
    TooLargeNumber,
}

impl CodedError for UnitsError {
    fn code(&self) -> &str {
        match self {
            UnitsError::InvalidDecimals(_) => "InvalidDecimals",
            UnitsError::InvalidNumber(_) => "InvalidNumber",
            UnitsError::InvalidCharacter(_) => "InvalidCharacter",
            UnitsError::TooManyDecimals { .. } => "TooManyDecimals",
            UnitsError::TooLargeNumber => "TooLargeNumber",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_carry_context() {
        assert_eq!(
            UnitsError::InvalidDecimals("256".into()).to_string(),
            "Invalid number of decimals for ERC20 token: 256"
        );
        assert_eq!(
            UnitsError::InvalidNumber("0x300".into()).to_string(),
            "Failed to parse decimal representation of 0x300"
        );
        assert_eq!(
            UnitsError::TooManyDecimals { got: 3, max: 2 }.to_string(),
            "Too many decimals for the token in input string: got 3, max 2"
        );
        assert_eq!(
            UnitsError::TooLargeNumber.to_string(),
            "Number larger than ERC20 token maximum amount (uint256)"
        );
    }

    #[test]
    fn test_codes_are_stable() {
        assert_eq!(UnitsError::InvalidCharacter("1e1".into()).code(), "InvalidCharacter");
        assert_eq!(UnitsError::TooManyDecimals { got: 1, max: 0 }.code(), "TooManyDecimals");
        assert_eq!(UnitsError::TooLargeNumber.code(), "TooLargeNumber");
    }
}
