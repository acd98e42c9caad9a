use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::fetch::types::{FetchOutcome, SkipReason};
use crate::market::quote_source::QuoteSource;
use crate::types::{price::Price, quote::Quote};

/// Replays canned outcomes per symbol and records every lookup.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    outcomes: HashMap<String, FetchOutcome>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl ScriptedSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_quote(mut self, symbol: &str, price: f64, change_percent: f64) -> Self {
        self.outcomes.insert(
            symbol.to_string(),
            Ok(Quote::new(symbol, Price::new(price), change_percent)),
        );
        self
    }

    pub fn with_skip(mut self, symbol: &str, reason: SkipReason) -> Self {
        self.outcomes.insert(symbol.to_string(), Err(reason));
        self
    }

    pub fn calls(&self) -> Arc<Mutex<Vec<String>>> {
        Arc::clone(&self.calls)
    }
}

#[async_trait]
impl QuoteSource for ScriptedSource {
    async fn fetch_quote(&self, symbol: &str) -> FetchOutcome {
        self.calls.lock().unwrap().push(symbol.to_string());

        self.outcomes
            .get(symbol)
            .cloned()
            .unwrap_or_else(|| Err(SkipReason::EmptyQuote { information: None }))
    }
}
