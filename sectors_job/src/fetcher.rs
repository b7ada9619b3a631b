//! Fetching end-of-day quotes from Financial Modeling Prep.
use log::debug;
use reqwest::blocking::Client;
use sectors_common::net::{FMP_BASE_URL, FMP_EOD_PATH, HTTP_TIMEOUT, endpoint};
use sectors_common::pipeline::QuoteSource;
use sectors_common::quote::sort_newest_first;
use sectors_common::{Quote, Result, SectorsError};

/// Blocking client for the FMP historical price endpoint.
pub struct FmpFetcher {
    client: Client,
    base_url: String,
    api_key: String,
}

impl FmpFetcher {
    /// Client for the public FMP API.
    pub fn new(api_key: &str) -> Result<Self> {
        Self::with_base_url(FMP_BASE_URL, api_key)
    }

    /// Client for an FMP-compatible API at `base_url`.
    pub fn with_base_url(base_url: &str, api_key: &str) -> Result<Self> {
        let client = Client::builder().timeout(HTTP_TIMEOUT).build()?;
        Ok(Self {
            client,
            base_url: base_url.to_string(),
            api_key: api_key.to_string(),
        })
    }
}

impl QuoteSource for FmpFetcher {
    fn fetch_quotes(&self, symbol: &str) -> Result<Vec<Quote>> {
        let url = endpoint(&self.base_url, FMP_EOD_PATH);
        debug!("GET {} symbol={}", url, symbol);

        let resp = self
            .client
            .get(&url)
            .query(&[("symbol", symbol), ("apikey", self.api_key.as_str())])
            .send()?;
        let status = resp.status().as_u16();
        let body = resp.bytes()?;

        let mut quotes: Vec<Quote> =
            serde_json::from_slice(&body).map_err(|source| SectorsError::Decode {
                symbol: symbol.to_string(),
                status,
                source,
            })?;
        if quotes.is_empty() {
            return Err(SectorsError::NoData(symbol.to_string()));
        }

        sort_newest_first(&mut quotes);
        Ok(quotes)
    }
}
