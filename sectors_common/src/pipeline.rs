//! Seams between the job runner and its HTTP collaborators.
use crate::quote::Quote;
use crate::result::Result;

/// Something that can produce a symbol's end-of-day quotes.
pub trait QuoteSource {
    /// Fetches every available quote for `symbol`, newest first.
    ///
    /// Implementations return `SectorsError::NoData` rather than an empty list.
    fn fetch_quotes(&self, symbol: &str) -> Result<Vec<Quote>>;
}

/// Something that can store a quote with insert-or-update semantics.
pub trait QuoteSink {
    /// Upserts a single quote.
    fn upsert(&self, quote: &Quote) -> Result<()>;
}
