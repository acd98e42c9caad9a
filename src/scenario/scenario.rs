use anyhow::{Result, bail};

use crate::{
    alpha_vantage::{
        alpha_vantage_config::AlphaVantageConfig, alpha_vantage_quotes::AlphaVantageQuotes,
    },
    fetch::quote_fetcher::QuoteFetcher,
    universe::{self, sectors::Sector},
};

pub struct Scenario;

impl Scenario {
    pub fn quote_fetcher(config: &AlphaVantageConfig) -> QuoteFetcher {
        tracing::info!(configured = config.is_configured(), ?config, "creating quote fetcher");

        QuoteFetcher::new(
            Box::new(AlphaVantageQuotes::new(config)),
            config.request_interval,
        )
    }

    /// Explicit symbols win, then a sector, then the first `limit` of the
    /// universe; with none of those the demo batch is used.
    pub fn symbol_batch(
        explicit: &[String],
        sector: Option<Sector>,
        limit: Option<usize>,
    ) -> Result<Vec<String>> {
        let explicit: Vec<String> = explicit
            .iter()
            .map(|symbol| symbol.trim().to_uppercase())
            .filter(|symbol| !symbol.is_empty())
            .collect();

        let batch = if !explicit.is_empty() {
            explicit
        } else if let Some(sector) = sector {
            let mut symbols = universe::sector_symbols(sector);
            if let Some(limit) = limit.filter(|limit| *limit > 0) {
                symbols.truncate(limit);
            }
            symbols
        } else if limit.is_some() {
            universe::symbols(limit)
        } else {
            universe::demo_symbols()
        };

        if batch.is_empty() {
            bail!("no symbols selected");
        }

        tracing::info!(symbols = ?batch, "symbol batch selected");
        Ok(batch)
    }
}
