use url::Url;

use crate::alpha_vantage::responses::GlobalQuoteResponse;
use crate::fetch::types::SkipReason;

#[derive(Clone, Debug)]
pub struct AlphaVantageClient {
    http: reqwest::Client,
    base_url: Url,
    api_key: String,
}

impl AlphaVantageClient {
    pub fn new(base_url: Url, api_key: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url,
            api_key,
        }
    }

    fn global_quote_url(&self, symbol: &str) -> Url {
        let mut url = self.base_url.clone();
        url.query_pairs_mut()
            .append_pair("function", "GLOBAL_QUOTE")
            .append_pair("symbol", symbol)
            .append_pair("apikey", &self.api_key);
        url
    }

    /// Transport, status and decoding problems are reported as skip reasons.
    /// Notices inside a well-formed body are left for the caller.
    pub async fn global_quote(&self, symbol: &str) -> Result<GlobalQuoteResponse, SkipReason> {
        let resp = self
            .http
            .get(self.global_quote_url(symbol))
            .send()
            .await
            .map_err(|e| SkipReason::Transport {
                message: e.without_url().to_string(),
            })?;

        let status = resp.status();
        if !status.is_success() {
            return Err(SkipReason::HttpStatus {
                status: status.as_u16(),
            });
        }

        let text = resp.text().await.map_err(|e| SkipReason::Transport {
            message: e.without_url().to_string(),
        })?;

        serde_json::from_str(&text).map_err(|e| {
            tracing::debug!(%symbol, error = %e, %text, "failed to parse quote response");
            SkipReason::MalformedBody {
                message: e.to_string(),
            }
        })
    }
}
