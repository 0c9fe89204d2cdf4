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

//! Command-line conversion between decimal token amounts and uint256 machine amounts.

use std::fmt;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use erc20_units::{
    format_units_rounded, from_erc20_units, scale_decimals, to_erc20_units, AmountInput,
    CodedError, Decimals, UnitsError,
};
use serde::Serialize;
use tracing::level_filters::LevelFilter;

pub mod config;

use config::{TokenConfig, TokenRegistry};

/// Options shared by every subcommand
#[derive(Args, Debug, Clone)]
pub struct GlobalConfig {
    /// Path to a TOML token registry, merged over the built-in tokens
    #[clap(long, env = "ERC20_UNITS_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[clap(long, env = "LOG_LEVEL", global = true, default_value = "warn")]
    pub log_level: LevelFilter,

    /// Print results and errors as JSON
    #[clap(long, global = true)]
    pub json: bool,
}

/// Where the token's decimals come from
#[derive(Args, Debug, Clone)]
#[group(required = true, multiple = false)]
pub struct UnitArgs {
    /// Token decimals, 0 to 255
    #[clap(long, allow_hyphen_values = true)]
    pub decimals: Option<String>,

    /// Token symbol looked up in the registry
    #[clap(long)]
    pub token: Option<String>,
}

impl UnitArgs {
    pub fn resolve(&self, registry: &TokenRegistry) -> Result<Decimals> {
        if let Some(decimals) = &self.decimals {
            return Ok(Decimals::normalize(decimals.as_str())?);
        }
        let symbol = self.token.as_deref().context("Either --decimals or --token is required")?;
        let token = registry.get(symbol).with_context(|| format!("Unknown token: {symbol}"))?;
        tracing::debug!("Resolved {symbol} to {} decimals", token.decimals);
        Ok(token.decimals)
    }
}

#[derive(Subcommand, Clone, Debug)]
pub enum Command {
    /// Convert a decimal amount such as 1.5 into its machine amount
    ToUnits {
        /// Decimal amount
        #[clap(allow_hyphen_values = true)]
        amount: String,
        #[command(flatten)]
        unit: UnitArgs,
    },

    /// Convert a machine amount into its decimal amount
    FromUnits {
        /// Machine amount in base-10 digits
        #[clap(allow_hyphen_values = true)]
        amount: String,
        #[command(flatten)]
        unit: UnitArgs,
        /// Round half-up to this many fractional digits
        #[clap(long)]
        precision: Option<usize>,
    },

    /// Re-express a machine amount with different decimals, truncating when precision drops
    Scale {
        /// Machine amount in base-10 digits
        #[clap(allow_hyphen_values = true)]
        amount: String,
        /// Current decimals
        #[clap(long, allow_hyphen_values = true)]
        from: String,
        /// Target decimals
        #[clap(long, allow_hyphen_values = true)]
        to: String,
    },

    /// List the tokens in the registry
    Tokens,
}

#[derive(Parser, Debug)]
#[clap(
    author,
    version,
    about = "Convert between decimal ERC20 token amounts and uint256 machine amounts",
    arg_required_else_help = true
)]
pub struct MainArgs {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,

    #[command(flatten, next_help_heading = "Global Options")]
    pub config: GlobalConfig,
}

/// Result of a subcommand
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "command", rename_all = "kebab-case")]
pub enum Outcome {
    ToUnits { amount: String, decimals: Decimals, machine: String },
    FromUnits { machine: String, decimals: Decimals, amount: String },
    Scale { machine: String, from: Decimals, to: Decimals, scaled: String },
    Tokens { tokens: Vec<TokenEntry> },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenEntry {
    pub symbol: String,
    #[serde(flatten)]
    pub token: TokenConfig,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::ToUnits { machine, .. } => write!(f, "{machine}"),
            Outcome::FromUnits { amount, .. } => write!(f, "{amount}"),
            Outcome::Scale { scaled, .. } => write!(f, "{scaled}"),
            Outcome::Tokens { tokens } => {
                for entry in tokens {
                    write!(f, "{:<8} {:>3}", entry.symbol, entry.token.decimals.get())?;
                    if let Some(address) = entry.token.address {
                        write!(f, " {address}")?;
                    }
                    writeln!(f)?;
                }
                Ok(())
            }
        }
    }
}

/// Execute a subcommand against the given registry.
pub fn run(command: &Command, registry: &TokenRegistry) -> Result<Outcome> {
    match command {
        Command::ToUnits { amount, unit } => {
            let decimals = unit.resolve(registry)?;
            let machine = to_erc20_units(amount, decimals)?;
            Ok(Outcome::ToUnits { amount: amount.clone(), decimals, machine: machine.to_string() })
        }
        Command::FromUnits { amount, unit, precision } => {
            let decimals = unit.resolve(registry)?;
            let formatted = match precision {
                Some(places) => {
                    let value = AmountInput::from(amount).resolve()?;
                    format_units_rounded(value, decimals, *places)
                }
                None => from_erc20_units(amount, decimals)?,
            };
            Ok(Outcome::FromUnits { machine: amount.clone(), decimals, amount: formatted })
        }
        Command::Scale { amount, from, to } => {
            let from = Decimals::normalize(from.as_str()).context("Invalid --from")?;
            let to = Decimals::normalize(to.as_str()).context("Invalid --to")?;
            let value = AmountInput::from(amount).resolve()?;
            let scaled = scale_decimals(value, from, to)?;
            Ok(Outcome::Scale { machine: amount.clone(), from, to, scaled: scaled.to_string() })
        }
        Command::Tokens => {
            let tokens = registry
                .iter()
                .map(|(symbol, token)| TokenEntry { symbol: symbol.to_string(), token: token.clone() })
                .collect();
            Ok(Outcome::Tokens { tokens })
        }
    }
}

/// JSON rendering of a failed command.
///
/// Codec failures carry their error code; anything else is reported as `Other`.
pub fn error_json(err: &anyhow::Error) -> serde_json::Value {
    let code = err.downcast_ref::<UnitsError>().map(|e| e.code()).unwrap_or("Other");
    serde_json::json!({
        "error": {
            "code": code,
            "message": format!("{err:#}"),
        }
    })
}
