use std::fmt;
use std::str::FromStr;

use anyhow::{Result, anyhow};
use clap::ValueEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum Sector {
    Technology,
    Financials,
    Healthcare,
    Consumer,
    Industrials,
    Energy,
    Communication,
    #[clap(name = "consumer-staples")]
    ConsumerStaples,
    Utilities,
    #[clap(name = "real-estate")]
    RealEstate,
    Materials,
}

impl fmt::Display for Sector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Technology => write!(f, "technology"),
            Self::Financials => write!(f, "financials"),
            Self::Healthcare => write!(f, "healthcare"),
            Self::Consumer => write!(f, "consumer"),
            Self::Industrials => write!(f, "industrials"),
            Self::Energy => write!(f, "energy"),
            Self::Communication => write!(f, "communication"),
            Self::ConsumerStaples => write!(f, "consumer-staples"),
            Self::Utilities => write!(f, "utilities"),
            Self::RealEstate => write!(f, "real-estate"),
            Self::Materials => write!(f, "materials"),
        }
    }
}

impl FromStr for Sector {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "technology" | "tech" => Ok(Self::Technology),
            "financials" | "financial" => Ok(Self::Financials),
            "healthcare" => Ok(Self::Healthcare),
            "consumer" => Ok(Self::Consumer),
            "industrials" | "industrial" => Ok(Self::Industrials),
            "energy" => Ok(Self::Energy),
            "communication" => Ok(Self::Communication),
            "consumer-staples" | "staples" => Ok(Self::ConsumerStaples),
            "utilities" => Ok(Self::Utilities),
            "real-estate" => Ok(Self::RealEstate),
            "materials" => Ok(Self::Materials),
            other => Err(anyhow!("unknown sector: {other}")),
        }
    }
}

/// Large-cap S&P 500 constituents, grouped by sector. A ticker may appear in
/// more than one group.
pub static SECTORS: &[(Sector, &[&str])] = &[
    (
        Sector::Technology,
        &[
            "AAPL", "MSFT", "NVDA", "GOOGL", "GOOG", "AMZN", "META", "TSLA", "AVGO", "ORCL",
            "NFLX", "CRM", "AMD", "INTC", "ADBE", "CSCO", "QCOM", "TXN", "AMAT", "MU",
        ],
    ),
    (
        Sector::Financials,
        &["JPM", "BAC", "WFC", "GS", "MS", "C", "SCHW", "BLK", "CME", "AXP"],
    ),
    (
        Sector::Healthcare,
        &[
            "UNH", "JNJ", "ABBV", "LLY", "MRK", "TMO", "ABT", "DHR", "BMY", "AMGN", "CVS", "CI",
            "HUM", "ELV", "SYK", "ISRG", "ZTS", "BSX", "BDX", "EW",
        ],
    ),
    (
        Sector::Consumer,
        &["WMT", "COST", "HD", "NKE", "SBUX", "TGT", "LOW", "TJX", "BKNG", "MCD"],
    ),
    (
        Sector::Industrials,
        &["BA", "CAT", "GE", "HON", "RTX", "LMT", "DE", "EMR", "ETN", "ITW"],
    ),
    (
        Sector::Energy,
        &["XOM", "CVX", "COP", "SLB", "EOG", "MPC", "PSX", "VLO", "OXY", "HAL"],
    ),
    (
        Sector::Communication,
        &["VZ", "T", "CMCSA", "DIS", "NFLX", "CHTR", "TMUS", "FOX", "FOXA", "PARA"],
    ),
    (
        Sector::ConsumerStaples,
        &["PG", "KO", "PEP", "WMT", "COST", "CL", "KMB", "MDLZ", "GIS", "HSY"],
    ),
    (
        Sector::Utilities,
        &["NEE", "DUK", "SO", "AEP", "SRE", "EXC", "XEL", "ES", "PEG", "ETR"],
    ),
    (
        Sector::RealEstate,
        &["AMT", "PLD", "EQIX", "PSA", "WELL", "SPG", "DLR", "O", "VICI", "CBRE"],
    ),
    (
        Sector::Materials,
        &["LIN", "APD", "ECL", "SHW", "DD", "FCX", "NEM", "PPG", "DOW", "VALE"],
    ),
];
