//!
//! Common types and utilities for the sector ETF ingestion job.
//!
//! This crate aggregates:
//! - `error` — unified error type `SectorsError` used across the workspace.
//! - `result` — handy `Result<T, SectorsError>` alias.
//! - `quote` — the end-of-day `Quote` record and its ordering.
//! - `dates` — command-line date parsing and inclusive date filtering.
//! - `tickers` — default sector symbols and `backfill` argument resolution.
//! - `config` — environment/dotenv configuration with fallback names.
//! - `net` — endpoint constants and small URL helpers.
//! - `pipeline` — `QuoteSource`/`QuoteSink` traits implemented by the job.
#![warn(missing_docs)]
pub mod config;
pub mod dates;
pub mod error;
pub mod net;
pub mod pipeline;
pub mod quote;
pub mod result;
pub mod tickers;

pub use config::Config;
pub use error::SectorsError;
pub use quote::Quote;
pub use result::Result;
