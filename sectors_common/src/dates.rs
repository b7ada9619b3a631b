//! Date parsing for command-line arguments and inclusive date-range filtering.
use chrono::NaiveDate;

use crate::quote::{QUOTE_DATE_FORMAT, Quote};

/// US-style date accepted on the command line (`MM/DD/YYYY`).
pub const US_DATE_FORMAT: &str = "%m/%d/%Y";

/// Parse a command-line date in either `MM/DD/YYYY` or `YYYY-MM-DD` form.
///
/// Single-digit months and days (`1/5/2025`, `2025-1-5`) are accepted too.
///
/// Used both to decide whether an argument is a date and to build the bounds,
/// so the two can never disagree.
pub fn parse_cli_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    NaiveDate::parse_from_str(trimmed, US_DATE_FORMAT)
        .or_else(|_| NaiveDate::parse_from_str(trimmed, QUOTE_DATE_FORMAT))
        .ok()
}

/// Optional inclusive lower and upper bounds on a quote's date.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateBounds {
    /// Earliest date to keep, inclusive.
    pub lower: Option<NaiveDate>,
    /// Latest date to keep, inclusive.
    pub upper: Option<NaiveDate>,
}

impl DateBounds {
    /// Build bounds from the date arguments given to `backfill`.
    ///
    /// One date is an upper bound; two dates become lower/upper in
    /// chronological order regardless of the order they were given in.
    /// Callers reject more than two dates before getting here.
    pub fn from_dates(dates: &[NaiveDate]) -> Self {
        match dates {
            [] => Self::default(),
            [only] => Self {
                lower: None,
                upper: Some(*only),
            },
            [a, b, ..] => Self {
                lower: Some(*a.min(b)),
                upper: Some(*a.max(b)),
            },
        }
    }

    /// Whether no bound is set.
    pub fn is_unbounded(&self) -> bool {
        self.lower.is_none() && self.upper.is_none()
    }

    /// Whether `date` lies within the bounds.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.lower.is_none_or(|lower| date >= lower) && self.upper.is_none_or(|upper| date <= upper)
    }

    /// Keep only the quotes whose date lies within the bounds.
    ///
    /// Quotes whose date cannot be parsed are dropped. Order is preserved.
    pub fn filter(&self, quotes: Vec<Quote>) -> Vec<Quote> {
        quotes
            .into_iter()
            .filter(|q| q.trading_day().is_some_and(|day| self.contains(day)))
            .collect()
    }
}

impl std::fmt::Display for DateBounds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.lower, self.upper) {
            (None, None) => write!(f, "all dates"),
            (Some(lower), None) => write!(f, "from {lower}"),
            (None, Some(upper)) => write!(f, "up to and including {upper}"),
            (Some(lower), Some(upper)) => write!(f, "{lower} through {upper}"),
        }
    }
}
