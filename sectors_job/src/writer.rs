//! Upserting quotes into the Supabase `sectors` table over PostgREST.
//!
//! Each quote is POSTed on its own with `Prefer: resolution=merge-duplicates`,
//! so the table's unique key (symbol + date) turns the insert into an update
//! when the row already exists.
use log::debug;
use reqwest::blocking::Client;
use reqwest::redirect::Policy;
use sectors_common::net::{HTTP_TIMEOUT, PREFER_MERGE_DUPLICATES, SECTORS_TABLE_PATH, endpoint};
use sectors_common::pipeline::QuoteSink;
use sectors_common::{Quote, Result, SectorsError};

/// Blocking PostgREST writer for the `sectors` table.
pub struct SupabaseWriter {
    client: Client,
    table_url: String,
    service_key: String,
}

impl SupabaseWriter {
    /// Writer for the project at `supabase_url`, authenticated with `service_key`.
    pub fn new(supabase_url: &str, service_key: &str) -> Result<Self> {
        let client = Client::builder()
            .timeout(HTTP_TIMEOUT)
            .redirect(Policy::none())
            .build()?;
        Ok(Self {
            client,
            table_url: endpoint(supabase_url, SECTORS_TABLE_PATH),
            service_key: service_key.to_string(),
        })
    }
}

impl QuoteSink for SupabaseWriter {
    fn upsert(&self, quote: &Quote) -> Result<()> {
        debug!("POST {} {} {}", self.table_url, quote.symbol, quote.date);

        let resp = self
            .client
            .post(&self.table_url)
            .header("apikey", &self.service_key)
            .bearer_auth(&self.service_key)
            .header("Prefer", PREFER_MERGE_DUPLICATES)
            .json(quote)
            .send()?;

        let status = resp.status().as_u16();
        if status >= 300 {
            return Err(SectorsError::UpsertStatus {
                symbol: quote.symbol.clone(),
                date: quote.date.clone(),
                status,
            });
        }
        Ok(())
    }
}
