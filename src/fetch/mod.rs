pub mod quote_fetcher;
pub mod types;
