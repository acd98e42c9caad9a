use async_trait::async_trait;

use crate::alpha_vantage::{
    alpha_vantage_client::AlphaVantageClient, alpha_vantage_config::AlphaVantageConfig,
};
use crate::fetch::types::{FetchOutcome, SkipReason};
use crate::market::quote_source::QuoteSource;

/// `QuoteSource` backed by the Alpha Vantage `GLOBAL_QUOTE` endpoint. Without
/// a usable API key every lookup is skipped before touching the network.
#[derive(Debug, Clone)]
pub struct AlphaVantageQuotes {
    client: Option<AlphaVantageClient>,
}

impl AlphaVantageQuotes {
    pub fn new(config: &AlphaVantageConfig) -> Self {
        let client = config
            .api_key
            .clone()
            .map(|api_key| AlphaVantageClient::new(config.base_url.clone(), api_key));

        if client.is_none() {
            tracing::error!("ALPHA_VANTAGE_API_KEY not configured; quote fetching is disabled");
        }

        Self { client }
    }
}

#[async_trait]
impl QuoteSource for AlphaVantageQuotes {
    async fn fetch_quote(&self, symbol: &str) -> FetchOutcome {
        let Some(client) = &self.client else {
            return Err(SkipReason::MissingApiKey);
        };

        let symbol = symbol.trim();
        client.global_quote(symbol).await?.into_quote(symbol)
    }
}
