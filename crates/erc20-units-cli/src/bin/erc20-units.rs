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

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use erc20_units_cli::{config::TokenRegistry, error_json, run, MainArgs, Outcome};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn execute(args: &MainArgs) -> Result<Outcome> {
    let registry = TokenRegistry::load(args.config.config.as_deref())?;
    run(&args.command, &registry)
}

fn main() -> ExitCode {
    let args = MainArgs::parse();

    // stdout carries results only
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(
            EnvFilter::builder()
                .with_default_directive(args.config.log_level.into())
                .from_env_lossy(),
        )
        .init();

    match execute(&args) {
        Ok(outcome) if args.config.json => match serde_json::to_string_pretty(&outcome) {
            Ok(json) => {
                println!("{json}");
                ExitCode::SUCCESS
            }
            Err(err) => {
                eprintln!("Failed to serialize output: {err}");
                ExitCode::FAILURE
            }
        },
        Ok(outcome) => {
            println!("{}", outcome.to_string().trim_end());
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::debug!("Command failed: {err:?}");
            if args.config.json {
                println!("{}", error_json(&err));
            } else {
                eprintln!("Error: {err:#}");
            }
            ExitCode::FAILURE
        }
    }
}
