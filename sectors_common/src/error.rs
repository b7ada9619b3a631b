//! Error types shared between the job binary and the common crate.
//!
//! The `SectorsError` enum unifies configuration, transport, decoding and
//! destination failures so every stage of the job can propagate a single
//! error type with `?`.
use thiserror::Error;

/// Unified error type for the sectors job.
#[derive(Error, Debug)]
pub enum SectorsError {
    /// One or more required environment variables are absent.
    #[error("Missing environment variables: {0}")]
    MissingConfig(String),

    /// The HTTP request could not be built, sent, or its body could not be read.
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The market-data response body was not the expected JSON array of quotes.
    #[error("Failed to decode quotes for {symbol} (HTTP {status}): {source}")]
    Decode {
        /// Ticker symbol being fetched.
        symbol: String,
        /// HTTP status code of the response.
        status: u16,
        /// Underlying JSON error.
        source: serde_json::Error,
    },

    /// The market-data API returned an empty quote list.
    #[error("no data for {0}")]
    NoData(String),

    /// The destination rejected an upsert with a non-2xx status.
    #[error("supabase returned status {status} for {symbol} {date}")]
    UpsertStatus {
        /// Ticker symbol of the rejected quote.
        symbol: String,
        /// Date of the rejected quote.
        date: String,
        /// HTTP status code returned by the destination.
        status: u16,
    },

    /// More than two date arguments were passed to `backfill`.
    #[error("Expected at most two dates for backfill, got {0}: {1:?}")]
    TooManyDates(usize, Vec<String>),
}
