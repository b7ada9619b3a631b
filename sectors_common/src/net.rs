//! Endpoints, headers and pacing shared by the fetcher and the writer.
use std::time::Duration;

/// Base URL of the Financial Modeling Prep API.
pub const FMP_BASE_URL: &str = "https://financialmodelingprep.com";
/// Path of the full historical end-of-day price endpoint.
pub const FMP_EOD_PATH: &str = "/stable/historical-price-eod/full";
/// PostgREST path of the destination table.
pub const SECTORS_TABLE_PATH: &str = "/rest/v1/sectors";
/// `Prefer` header value asking PostgREST to upsert on conflict.
pub const PREFER_MERGE_DUPLICATES: &str = "resolution=merge-duplicates";
/// Timeout applied to every HTTP request.
pub const HTTP_TIMEOUT: Duration = Duration::from_secs(30);
/// Pause after each insert during a backfill.
pub const INSERT_DELAY: Duration = Duration::from_millis(100);

/// Join a base URL and a path, tolerating a trailing slash on the base.
pub fn endpoint(base: &str, path: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), path)
}
