//! Daily and backfill runs over a list of symbols.
//!
//! Both runs are strictly sequential. A failure for one symbol is logged and
//! the run moves on to the next symbol; nothing here returns an error.
use std::thread;
use std::time::Duration;

use log::{error, info};
use sectors_common::dates::DateBounds;
use sectors_common::pipeline::{QuoteSink, QuoteSource};

/// Outcome of a run, logged when the job finishes.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Symbols attempted.
    pub symbols: usize,
    /// Quotes successfully upserted.
    pub inserted: usize,
    /// Symbols that hit a fetch or insert failure.
    pub failed: Vec<String>,
}

/// Store the most recent quote of every symbol.
pub fn run_daily<S, W>(source: &S, sink: &W, symbols: &[String]) -> RunSummary
where
    S: QuoteSource,
    W: QuoteSink,
{
    let mut summary = RunSummary::default();

    for symbol in symbols {
        summary.symbols += 1;
        info!("Fetching {}...", symbol);

        let quotes = match source.fetch_quotes(symbol) {
            Ok(quotes) => quotes,
            Err(e) => {
                error!("{}: fetch failed: {}", symbol, e);
                summary.failed.push(symbol.clone());
                continue;
            }
        };
        info!("{}: found {} quotes", symbol, quotes.len());

        let Some(latest) = quotes.first() else {
            continue;
        };
        info!("{}: inserting most recent quote from {}", symbol, latest.date);
        match sink.upsert(latest) {
            Ok(()) => {
                summary.inserted += 1;
                info!("{}: inserted", symbol);
            }
            Err(e) => {
                error!("{}: failed to insert: {}", symbol, e);
                summary.failed.push(symbol.clone());
            }
        }
    }

    summary
}

/// Store every quote within `bounds` for each symbol, pausing `delay` after each insert.
///
/// The first failed insert stops that symbol's loop; the next symbol still runs.
pub fn run_backfill<S, W>(
    source: &S,
    sink: &W,
    symbols: &[String],
    bounds: &DateBounds,
    delay: Duration,
) -> RunSummary
where
    S: QuoteSource,
    W: QuoteSink,
{
    let mut summary = RunSummary::default();

    for symbol in symbols {
        summary.symbols += 1;
        info!("Fetching {}...", symbol);

        let quotes = match source.fetch_quotes(symbol) {
            Ok(quotes) => quotes,
            Err(e) => {
                error!("{}: fetch failed: {}", symbol, e);
                summary.failed.push(symbol.clone());
                continue;
            }
        };
        let found = quotes.len();
        let quotes = bounds.filter(quotes);
        info!("{}: found {} quotes, {} within {}", symbol, found, quotes.len(), bounds);

        let total = quotes.len();
        let mut inserted = 0;
        for (i, quote) in quotes.iter().enumerate() {
            info!("{}: inserting quote {}/{} ({})", symbol, i + 1, total, quote.date);
            if let Err(e) = sink.upsert(quote) {
                error!("{}: insert of {} failed: {}", symbol, quote.date, e);
                summary.failed.push(symbol.clone());
                break;
            }
            inserted += 1;
            if !delay.is_zero() {
                thread::sleep(delay);
            }
        }
        summary.inserted += inserted;
        info!("{}: complete, {}/{} inserted", symbol, inserted, total);
    }

    summary
}
