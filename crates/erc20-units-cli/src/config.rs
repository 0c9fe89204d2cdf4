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

//! Token registry configuration.
//!
//! ```toml
//! [tokens.USDC]
//! decimals = 6
//! address = "0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48"
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use alloy_primitives::Address;
use anyhow::{Context, Result};
use erc20_units::Decimals;
use serde::{Deserialize, Serialize};

/// Precision and optional contract address of a token
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TokenConfig {
    pub decimals: Decimals,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
}

impl TokenConfig {
    pub const fn new(decimals: u8) -> Self {
        Self { decimals: Decimals::new(decimals), address: None }
    }
}

/// On-disk layout of the config file
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct CliConfig {
    pub tokens: BTreeMap<String, TokenConfig>,
}

const BUILTIN_TOKENS: [(&str, u8); 6] =
    [("DAI", 18), ("ETH", 18), ("USDC", 6), ("USDT", 6), ("WBTC", 8), ("WETH", 18)];

/// Symbol to token lookup, case-insensitive.
#[derive(Debug, Clone)]
pub struct TokenRegistry {
    tokens: BTreeMap<String, TokenConfig>,
}

impl TokenRegistry {
    /// Registry with only the built-in tokens
    pub fn builtin() -> Self {
        let tokens = BUILTIN_TOKENS
            .iter()
            .map(|(symbol, decimals)| (symbol.to_string(), TokenConfig::new(*decimals)))
            .collect();
        Self { tokens }
    }

    /// Built-in tokens, overridden and extended by the file at `path` if given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            tracing::debug!("No config file given, using built-in tokens");
            return Ok(Self::builtin());
        };
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let registry = Self::from_toml(&contents)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        tracing::debug!("Loaded {} tokens using {}", registry.tokens.len(), path.display());
        Ok(registry)
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        let config: CliConfig = toml::from_str(contents)?;
        let mut registry = Self::builtin();
        registry.extend(config);
        Ok(registry)
    }

    fn extend(&mut self, config: CliConfig) {
        for (symbol, token) in config.tokens {
            self.tokens.insert(symbol.to_uppercase(), token);
        }
    }

    pub fn get(&self, symbol: &str) -> Option<&TokenConfig> {
        self.tokens.get(&symbol.to_uppercase())
    }

    /// Tokens ordered by symbol
    pub fn iter(&self) -> impl Iterator<Item = (&str, &TokenConfig)> {
        self.tokens.iter().map(|(symbol, token)| (symbol.as_str(), token))
    }
}
