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

use crate::UnitsError;

/// A validated human-readable amount, `digits` or `digits.digits`.
///
/// Leading zeros are kept as written. Signs, exponents, separators and
/// whitespace are not part of the grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecimalLiteral<'a> {
    integer: &'a str,
    fraction: &'a str,
}

impl<'a> DecimalLiteral<'a> {
    pub fn parse(s: &'a str) -> Result<Self, UnitsError> {
        let (integer, fraction) = match s.split_once('.') {
            Some((integer, fraction)) if is_digits(fraction) => (integer, fraction),
            Some(_) => return Err(UnitsError::InvalidNumber(s.to_string())),
            None => (s, ""),
        };
        if !is_digits(integer) {
            return Err(UnitsError::InvalidNumber(s.to_string()));
        }
        Ok(Self { integer, fraction })
    }

    /// Digits before the point
    pub fn integer(&self) -> &'a str {
        self.integer
    }

    /// Digits after the point, empty when the literal has no point
    pub fn fraction(&self) -> &'a str {
        self.fraction
    }
}

/// True for a non-empty run of ASCII digits.
pub(crate) fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}
