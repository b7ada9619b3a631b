//! Command-line arguments for the sectors job.
//!
//! This module defines the CLI interface using `clap`. See `main` for end-to-end usage.
use clap::{Parser, Subcommand};
use log::warn;

const EXAMPLES: &str = "\
Examples:
  sectors_job
  sectors_job backfill XLK 12/05/2025
  sectors_job backfill XLF XLE 2025-12-05
  sectors_job backfill 2025-01-01 2025-02-01";

/// Fetch sector ETF end-of-day quotes and upsert them into Supabase.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None, after_help = EXAMPLES)]
pub struct Args {
    /// Mode to run. Without a command, stores today's quote for every sector.
    #[command(subcommand)]
    pub command: Option<Mode>,
}

/// Operating mode.
#[derive(Debug, Subcommand)]
pub enum Mode {
    /// Fetch and store historical quotes.
    Backfill {
        /// Symbols to backfill (default: all sector ETFs) and up to two dates
        /// (MM/DD/YYYY or YYYY-MM-DD). One date is an inclusive upper bound;
        /// two dates form an inclusive range.
        #[arg(value_name = "SYMBOL|DATE")]
        tokens: Vec<String>,
    },
    /// Any other leading word; ignored, and the daily run proceeds.
    #[command(external_subcommand)]
    Unrecognized(Vec<String>),
}

impl Args {
    /// Tokens for a backfill run, or `None` for the daily run.
    pub fn backfill_tokens(self) -> Option<Vec<String>> {
        match self.command {
            Some(Mode::Backfill { tokens }) => Some(tokens),
            Some(Mode::Unrecognized(ignored)) => {
                warn!("Ignoring unrecognized arguments {:?}; running daily update", ignored);
                None
            }
            None => None,
        }
    }
}
