use std::time::Duration;

use tracing::{debug, error, info, warn};

use crate::fetch::types::FetchReport;
use crate::market::quote_source::DynamicQuoteSource;
use crate::types::quote::Quote;

/// Pause between requests that keeps a batch under 5 calls per minute.
pub const DEFAULT_REQUEST_INTERVAL: Duration = Duration::from_secs(12);

/// Fetches a batch of symbols one at a time, pausing between requests so the
/// upstream per-minute quota is never exceeded. Holds no lock: callers must
/// not run two batches at once.
pub struct QuoteFetcher {
    source: DynamicQuoteSource,
    request_interval: Duration,
}

impl QuoteFetcher {
    pub fn new(source: DynamicQuoteSource, request_interval: Duration) -> Self {
        Self {
            source,
            request_interval,
        }
    }

    pub fn request_interval(&self) -> Duration {
        self.request_interval
    }

    pub async fn fetch_quotes(&self, symbols: &[String]) -> Vec<Quote> {
        self.fetch_report(symbols).await.into_quotes()
    }

    pub async fn fetch_report(&self, symbols: &[String]) -> FetchReport {
        let mut report = FetchReport::default();

        for (index, symbol) in symbols.iter().enumerate() {
            let outcome = self.source.fetch_quote(symbol).await;

            let issued_request = match &outcome {
                Ok(quote) => {
                    debug!(symbol = %quote.symbol, price = %quote.price, change_percent = quote.change_percent, "quote fetched");
                    true
                }
                Err(reason) => {
                    if reason.is_fault() {
                        error!(%symbol, %reason, "skipping symbol");
                    } else {
                        warn!(%symbol, %reason, "skipping symbol");
                    }
                    reason.issued_request()
                }
            };

            report.record(symbol, outcome);

            let is_last = index + 1 == symbols.len();
            if issued_request && !is_last {
                debug!(interval = ?self.request_interval, "pacing before next request");
                tokio::time::sleep(self.request_interval).await;
                report.record_pause();
            }
        }

        info!(
            requested = symbols.len(),
            requests_issued = report.requests_issued(),
            pauses = report.pauses(),
            skipped = report.skipped().count(),
            "quote batch complete"
        );

        report
    }
}
