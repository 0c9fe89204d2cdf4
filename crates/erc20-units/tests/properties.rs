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

use alloy_primitives::{I256, U256};
use erc20_units::{format_units_rounded, from_erc20_units, to_erc20_units, Decimals, UnitsError};
use proptest::prelude::*;

/// Expected decode output for a literal: no leading integer zeros, no trailing
/// fractional zeros, no dangling point.
fn canonical(integer: &str, fraction: &str) -> String {
    let integer = integer.trim_start_matches('0');
    let integer = if integer.is_empty() { "0" } else { integer };
    let fraction = fraction.trim_end_matches('0');
    if fraction.is_empty() {
        integer.to_string()
    } else {
        format!("{integer}.{fraction}")
    }
}

fn any_u256() -> impl Strategy<Value = U256> {
    any::<[u64; 4]>().prop_map(U256::from_limbs)
}

/// Half-up rounding done on the decimal digit string rather than in uint256.
fn rounded_by_digits(value: U256, decimals: u8, places: usize) -> String {
    let total = decimals as usize;
    let lossless = from_erc20_units(value, decimals).unwrap();
    if places >= total {
        return lossless;
    }

    let digits = format!("{:0>width$}", value.to_string(), width = total + 1);
    let (kept, dropped) = digits.split_at(digits.len() - (total - places));
    let mut kept = kept.as_bytes().to_vec();
    if dropped.as_bytes()[0] >= b'5' {
        let mut index = kept.len();
        loop {
            index -= 1;
            if kept[index] != b'9' {
                kept[index] += 1;
                break;
            }
            kept[index] = b'0';
            if index == 0 {
                kept.insert(0, b'1');
                break;
            }
        }
    }

    let kept = String::from_utf8(kept).unwrap();
    if !value.is_zero() && kept.bytes().all(|b| b == b'0') {
        return lossless;
    }
    let (integer, fraction) = kept.split_at(kept.len() - places);
    canonical(integer, fraction)
}

proptest! {
    #[test]
    fn literal_round_trips(
        integer in "[0-9]{1,30}",
        fraction in "[0-9]{0,40}",
        decimals in 0u8..=255,
    ) {
        let fraction = &fraction[..fraction.len().min(decimals as usize)];
        let literal = if fraction.is_empty() {
            integer.clone()
        } else {
            format!("{integer}.{fraction}")
        };

        match to_erc20_units(&literal, decimals) {
            Ok(value) => {
                let decoded = from_erc20_units(value, decimals).unwrap();
                prop_assert_eq!(decoded, canonical(&integer, fraction));
            }
            Err(err) => {
                prop_assert_eq!(err, UnitsError::TooLargeNumber);
            }
        }
    }

    #[test]
    fn machine_amount_round_trips(value in any_u256(), decimals in 0u8..=255) {
        let decoded = from_erc20_units(value, decimals).unwrap();
        prop_assert_eq!(to_erc20_units(&decoded, decimals).unwrap(), value);
    }

    #[test]
    fn decimals_shape_does_not_matter(value in any_u256(), decimals in 0u8..=255) {
        let literal = from_erc20_units(value, decimals).unwrap();
        let signed = I256::from_dec_str(&decimals.to_string()).unwrap();

        let encoded = to_erc20_units(&literal, decimals).unwrap();
        prop_assert_eq!(to_erc20_units(&literal, decimals.to_string()).unwrap(), encoded);
        prop_assert_eq!(to_erc20_units(&literal, U256::from(decimals)).unwrap(), encoded);
        prop_assert_eq!(to_erc20_units(&literal, signed).unwrap(), encoded);

        prop_assert_eq!(from_erc20_units(value, decimals.to_string()).unwrap(), literal.clone());
        prop_assert_eq!(from_erc20_units(value, U256::from(decimals)).unwrap(), literal.clone());
        prop_assert_eq!(from_erc20_units(value.to_string(), signed).unwrap(), literal);
    }

    #[test]
    fn rounding_matches_digit_rounding(
        value in any_u256(),
        decimals in 0u8..=255,
        places in 0usize..=260,
    ) {
        prop_assert_eq!(
            format_units_rounded(value, Decimals::new(decimals), places),
            rounded_by_digits(value, decimals, places)
        );
    }

    #[test]
    fn out_of_range_decimals_always_fail(decimals in prop_oneof![i64::MIN..0i64, 256i64..]) {
        let err = to_erc20_units("0", decimals).unwrap_err();
        prop_assert_eq!(err, UnitsError::InvalidDecimals(decimals.to_string()));
        let err = from_erc20_units("0", decimals).unwrap_err();
        prop_assert_eq!(err, UnitsError::InvalidDecimals(decimals.to_string()));
    }
}
