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

//! Exact conversion between human-readable ERC20 token amounts and the uint256
//! machine amounts stored on-chain.
//!
//! ```
//! use alloy_primitives::U256;
//! use erc20_units::{from_erc20_units, to_erc20_units};
//!
//! assert_eq!(to_erc20_units("1.1", 3).unwrap(), U256::from(1100));
//! assert_eq!(from_erc20_units(U256::from(100), 4).unwrap(), "0.01");
//! ```

pub mod amount;
pub mod decimals;
pub mod errors;
pub mod literal;
pub mod units;

pub use amount::TokenAmount;
pub use decimals::{Decimals, DecimalsInput};
pub use errors::{CodedError, UnitsError};
pub use literal::DecimalLiteral;
pub use units::{
    format_units_rounded, from_erc20_units, pow10, scale_decimals, to_erc20_units, AmountInput,
    MAX_MACHINE_AMOUNT,
};
