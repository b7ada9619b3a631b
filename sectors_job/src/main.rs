//! Sectors Job — fetches end-of-day quotes for the SPDR sector ETFs from
//! Financial Modeling Prep and upserts them into the Supabase `sectors` table.
//!
//! Usage example (CLI):
//! ```bash
//! sectors_job                                  # latest quote for every sector
//! sectors_job backfill                         # full history for every sector
//! sectors_job backfill XLK 12/05/2025          # XLK up to and including 2025-12-05
//! sectors_job backfill 2025-01-01 2025-02-01   # every sector within the range
//! ```
//!
//! Credentials come from the environment (optionally via `../.env.local` or
//! `.env`); see `sectors_common::config` for the variable names.
#![warn(missing_docs)]
mod args;
mod fetcher;
mod runner;
mod writer;

#[cfg(test)]
mod test_support;

use std::process;

use crate::args::Args;
use crate::fetcher::FmpFetcher;
use crate::runner::{RunSummary, run_backfill, run_daily};
use crate::writer::SupabaseWriter;
use clap::Parser;
use log::{error, info, warn};
use sectors_common::config::load_env_files;
use sectors_common::net::INSERT_DELAY;
use sectors_common::tickers::{BackfillPlan, default_symbols};
use sectors_common::{Config, Result};

/// Exit code for unusable command-line arguments.
const EXIT_USAGE: i32 = 2;
/// Exit code for missing configuration or clients that cannot be built.
const EXIT_CONFIG: i32 = 1;

fn main() {
    init_logger();
    let args = Args::parse();

    let plan = match args.backfill_tokens() {
        Some(tokens) => match BackfillPlan::from_args(&tokens) {
            Ok(plan) => Some(plan),
            Err(e) => {
                error!("{}", e);
                process::exit(EXIT_USAGE);
            }
        },
        None => None,
    };

    load_env_files();
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("{}. Please check your .env.local file in the parent directory", e);
            process::exit(EXIT_CONFIG);
        }
    };

    if let Err(e) = run(&config, plan) {
        error!("{}", e);
        process::exit(EXIT_CONFIG);
    }
}

fn run(config: &Config, plan: Option<BackfillPlan>) -> Result<()> {
    let fetcher = FmpFetcher::new(&config.fmp_api_key)?;
    let writer = SupabaseWriter::new(&config.supabase_url, &config.supabase_key)?;

    let summary = match plan {
        Some(plan) => {
            info!(
                "Starting historical backfill of sector data for symbols: {:?}",
                plan.symbols
            );
            run_backfill(&fetcher, &writer, &plan.symbols, &plan.bounds, INSERT_DELAY)
        }
        None => {
            let symbols = default_symbols();
            info!("Starting daily update for symbols: {:?}", symbols);
            run_daily(&fetcher, &writer, &symbols)
        }
    };

    report(&summary);
    Ok(())
}

fn report(summary: &RunSummary) {
    info!(
        "Finished: {} symbols, {} quotes inserted",
        summary.symbols, summary.inserted
    );
    if !summary.failed.is_empty() {
        warn!("Symbols with failures: {}", summary.failed.join(", "));
    }
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}
