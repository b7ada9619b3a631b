//! Sector ETF symbols and resolution of `backfill` arguments.
use log::info;

use crate::dates::{DateBounds, parse_cli_date};
use crate::error::SectorsError;

/// SPDR sector ETFs ingested when no symbols are given.
pub const DEFAULT_SYMBOLS: [&str; 11] = [
    "XLF", "XLE", "XLC", "XLP", "XLV", "XLU", "XLRE", "XLI", "XLY", "XLB", "XLK",
];

/// The default symbol list as owned strings.
pub fn default_symbols() -> Vec<String> {
    DEFAULT_SYMBOLS.iter().map(|s| s.to_string()).collect()
}

/// Symbols and date bounds for a backfill run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackfillPlan {
    /// Symbols to backfill, in the order given.
    pub symbols: Vec<String>,
    /// Inclusive range of quote dates to insert.
    pub bounds: DateBounds,
}

impl BackfillPlan {
    /// Split raw `backfill` arguments into symbols and date bounds.
    ///
    /// Any argument that parses as a date (`MM/DD/YYYY` or `YYYY-MM-DD`) is a
    /// bound; everything else is a symbol. Without symbols the default list is
    /// used. More than two dates is an error.
    pub fn from_args<S: AsRef<str>>(args: &[S]) -> Result<Self, SectorsError> {
        let mut symbols = Vec::new();
        let mut raw_dates = Vec::new();
        let mut dates = Vec::new();

        for arg in args {
            let arg = arg.as_ref().trim();
            if arg.is_empty() {
                continue;
            }
            match parse_cli_date(arg) {
                Some(date) => {
                    raw_dates.push(arg.to_string());
                    dates.push(date);
                }
                None => symbols.push(arg.to_string()),
            }
        }

        if dates.len() > 2 {
            return Err(SectorsError::TooManyDates(dates.len(), raw_dates));
        }
        if symbols.is_empty() {
            symbols = default_symbols();
        }

        let bounds = DateBounds::from_dates(&dates);
        if !bounds.is_unbounded() {
            info!("Using date bounds: {}", bounds);
        }
        Ok(Self { symbols, bounds })
    }
}
