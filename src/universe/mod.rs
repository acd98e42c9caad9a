//! The curated ticker universe the dashboard picks its batches from.
//!
//! The table is process-wide constant data. `all_symbols` flattens it once,
//! dropping tickers already listed under an earlier sector.

pub mod sectors;

use std::collections::HashSet;

use once_cell::sync::Lazy;

use crate::universe::sectors::{SECTORS, Sector};

/// Size of the default batch. Five symbols at one request per 12 seconds
/// stays inside a 5 calls/minute quota.
pub const DEMO_BATCH_SIZE: usize = 5;

static ALL_SYMBOLS: Lazy<Vec<&'static str>> = Lazy::new(|| {
    let mut seen = HashSet::new();

    SECTORS
        .iter()
        .flat_map(|(_, symbols)| symbols.iter().copied())
        .filter(|symbol| seen.insert(*symbol))
        .collect()
});

pub fn all_symbols() -> &'static [&'static str] {
    &ALL_SYMBOLS
}

/// The first `limit` symbols of the universe. `None` or `Some(0)` returns all
/// of them.
pub fn symbols(limit: Option<usize>) -> Vec<String> {
    let all = all_symbols();
    let count = match limit {
        Some(limit) if limit > 0 => limit.min(all.len()),
        _ => all.len(),
    };

    all[..count].iter().map(|symbol| symbol.to_string()).collect()
}

pub fn demo_symbols() -> Vec<String> {
    symbols(Some(DEMO_BATCH_SIZE))
}

pub fn sector_symbols(sector: Sector) -> Vec<String> {
    SECTORS
        .iter()
        .filter(|(candidate, _)| *candidate == sector)
        .flat_map(|(_, symbols)| symbols.iter().map(|symbol| symbol.to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_subset_is_a_five_symbol_prefix() {
        let demo = demo_symbols();

        assert_eq!(demo.len(), 5);
        assert_eq!(demo, vec!["AAPL", "MSFT", "NVDA", "GOOGL", "GOOG"]);
        for (demo_symbol, universe_symbol) in demo.iter().zip(all_symbols()) {
            assert_eq!(demo_symbol, universe_symbol);
        }
    }

    #[test]
    fn universe_symbols_are_unique_uppercase_tickers() {
        let all = all_symbols();
        let unique: HashSet<_> = all.iter().collect();

        assert_eq!(unique.len(), all.len());
        assert_eq!(all.len(), 127);
        assert!(all.iter().all(|s| s.chars().all(|c| c.is_ascii_uppercase())));
    }

    #[test]
    fn limit_zero_or_none_returns_everything() {
        assert_eq!(symbols(None).len(), all_symbols().len());
        assert_eq!(symbols(Some(0)).len(), all_symbols().len());
        assert_eq!(symbols(Some(3)), vec!["AAPL", "MSFT", "NVDA"]);
        assert_eq!(symbols(Some(10_000)).len(), all_symbols().len());
    }

    #[test]
    fn duplicate_tickers_keep_first_sector() {
        let all = all_symbols();
        let netflix = all.iter().filter(|s| **s == "NFLX").count();

        assert_eq!(netflix, 1);
        assert!(sector_symbols(Sector::Communication).contains(&"NFLX".to_string()));
    }

    #[test]
    fn sector_lookup_and_parsing() {
        assert_eq!(sector_symbols(Sector::Financials).first().map(String::as_str), Some("JPM"));
        assert_eq!("tech".parse::<Sector>().unwrap(), Sector::Technology);
        assert_eq!(Sector::RealEstate.to_string(), "real-estate");
        assert!("crypto".parse::<Sector>().is_err());
    }
}
