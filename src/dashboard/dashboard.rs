use std::sync::Arc;

use anyhow::Context;
use chrono::Utc;
use tracing::{info, warn};

use crate::dashboard::dashboard_state::DashboardState;
use crate::fetch::quote_fetcher::QuoteFetcher;

/// Binds a fetcher to a fixed symbol batch and keeps the resulting state.
pub struct Dashboard {
    fetcher: Arc<QuoteFetcher>,
    symbols: Arc<Vec<String>>,
    state: DashboardState,
}

impl Dashboard {
    pub fn new(fetcher: QuoteFetcher, symbols: Vec<String>) -> Self {
        Self {
            fetcher: Arc::new(fetcher),
            symbols: Arc::new(symbols),
            state: DashboardState::new(),
        }
    }

    pub fn symbols(&self) -> &[String] {
        &self.symbols
    }

    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut DashboardState {
        &mut self.state
    }

    /// Runs one fetch cycle over the configured batch. Returns `false` without
    /// fetching if a cycle is already running.
    pub async fn refresh(&mut self) -> bool {
        if !self.state.begin_load() {
            warn!("refresh requested while a load is in flight; ignoring");
            return false;
        }

        info!(
            symbols = self.symbols.len(),
            interval = ?self.fetcher.request_interval(),
            "loading quotes"
        );

        let fetcher = Arc::clone(&self.fetcher);
        let symbols = Arc::clone(&self.symbols);
        let result = tokio::spawn(async move { fetcher.fetch_quotes(&symbols).await })
            .await
            .context("quote load task failed");

        self.state.finish_load(result, Utc::now());
        info!(
            loaded = self.state.quotes().len(),
            requested = self.symbols.len(),
            "quotes loaded"
        );
        true
    }
}
