use async_trait::async_trait;

use crate::fetch::types::FetchOutcome;

/// One quote lookup against an upstream provider. Implementations never fail
/// the caller; every problem becomes a `SkipReason`.
#[async_trait]
pub trait QuoteSource: Send + Sync {
    async fn fetch_quote(&self, symbol: &str) -> FetchOutcome;
}

pub type DynamicQuoteSource = Box<dyn QuoteSource>;
