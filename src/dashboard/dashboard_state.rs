use anyhow::Result;
use chrono::{DateTime, Utc};

use crate::types::{price::Price, quote::Quote};
use crate::view::{
    projection::project,
    sort::{SortConfig, SortKey},
};

pub const LOAD_FAILED_MESSAGE: &str = "Failed to load stock data. Please try again later.";
pub const NO_DATA_MESSAGE: &str = "No stock data available. Check your API key or try again later.";

/// What the table shows: the last fetched list plus the user's view settings.
#[derive(Debug, Clone, Default)]
pub struct DashboardState {
    quotes: Vec<Quote>,
    is_loading: bool,
    error: Option<String>,
    search_term: String,
    sort_config: Option<SortConfig>,
    last_loaded_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DashboardStats {
    pub total: usize,
    pub average_price: Option<Price>,
    pub filtered: usize,
}

impl DashboardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks a load as in flight. Returns `false` if one already is.
    pub fn begin_load(&mut self) -> bool {
        if self.is_loading {
            return false;
        }

        self.is_loading = true;
        self.error = None;
        true
    }

    pub fn finish_load(&mut self, result: Result<Vec<Quote>>, now: DateTime<Utc>) {
        self.is_loading = false;

        match result {
            Ok(quotes) => {
                if quotes.is_empty() {
                    self.error = Some(NO_DATA_MESSAGE.to_string());
                }
                self.quotes = quotes;
                self.last_loaded_at = Some(now);
            }
            Err(error) => {
                tracing::error!(error = %format!("{error:#}"), "quote load failed");
                self.error = Some(LOAD_FAILED_MESSAGE.to_string());
            }
        }
    }

    pub fn set_search_term(&mut self, search_term: impl Into<String>) {
        self.search_term = search_term.into();
    }

    pub fn toggle_sort(&mut self, key: SortKey) -> SortConfig {
        let next = SortConfig::toggle(self.sort_config, key);
        self.sort_config = Some(next);
        next
    }

    pub fn set_sort(&mut self, sort_config: Option<SortConfig>) {
        self.sort_config = sort_config;
    }

    pub fn visible(&self) -> Vec<Quote> {
        project(&self.quotes, &self.search_term, self.sort_config)
    }

    pub fn stats(&self) -> DashboardStats {
        let total = self.quotes.len();
        let average_price = if total > 0 {
            let count = total as f64;
            let mean: f64 = self.quotes.iter().map(|q| q.price.as_f64() / count).sum();
            Price::try_new(mean)
        } else {
            None
        };

        DashboardStats {
            total,
            average_price,
            filtered: self.visible().len(),
        }
    }

    pub fn quotes(&self) -> &[Quote] {
        &self.quotes
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn sort_config(&self) -> Option<SortConfig> {
        self.sort_config
    }

    pub fn last_loaded_at(&self) -> Option<DateTime<Utc>> {
        self.last_loaded_at
    }
}
