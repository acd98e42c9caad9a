pub mod alpha_vantage_client;
pub mod alpha_vantage_config;
pub mod alpha_vantage_quotes;
pub mod responses;
