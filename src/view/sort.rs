use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use anyhow::{Result, anyhow};
use clap::ValueEnum;

use crate::types::quote::Quote;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortKey {
    Symbol,
    Price,
    #[clap(name = "change-percent")]
    ChangePercent,
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Symbol => write!(f, "symbol"),
            Self::Price => write!(f, "price"),
            Self::ChangePercent => write!(f, "change-percent"),
        }
    }
}

impl FromStr for SortKey {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "symbol" => Ok(Self::Symbol),
            "price" => Ok(Self::Price),
            "change-percent" | "change" | "changepercent" | "%" => Ok(Self::ChangePercent),
            other => Err(anyhow!("unknown sort key: {other}")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortDirection {
    #[clap(name = "asc")]
    Ascending,
    #[clap(name = "desc")]
    Descending,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ascending => write!(f, "asc"),
            Self::Descending => write!(f, "desc"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortConfig {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl SortConfig {
    pub fn new(key: SortKey, direction: SortDirection) -> Self {
        Self { key, direction }
    }

    /// Clicking the active column flips it; any other column starts ascending.
    pub fn toggle(previous: Option<SortConfig>, key: SortKey) -> SortConfig {
        match previous {
            Some(previous) if previous.key == key => {
                SortConfig::new(key, previous.direction.flipped())
            }
            _ => SortConfig::new(key, SortDirection::Ascending),
        }
    }

    pub fn compare(&self, a: &Quote, b: &Quote) -> Ordering {
        let natural = match self.key {
            SortKey::Symbol => locale_compare(&a.symbol, &b.symbol),
            SortKey::Price => a.price.as_f64().total_cmp(&b.price.as_f64()),
            SortKey::ChangePercent => a.change_percent.total_cmp(&b.change_percent),
        };

        match self.direction {
            SortDirection::Ascending => natural,
            SortDirection::Descending => natural.reverse(),
        }
    }
}

impl fmt::Display for SortConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.key, self.direction)
    }
}

/// Dictionary order: letters compare case-insensitively, and on a tie the
/// lowercase form sorts first.
fn locale_compare(a: &str, b: &str) -> Ordering {
    let folded = a
        .chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase));

    folded.then_with(|| {
        a.chars()
            .zip(b.chars())
            .map(|(x, y)| match (x.is_lowercase(), y.is_lowercase()) {
                (true, false) => Ordering::Less,
                (false, true) => Ordering::Greater,
                _ => Ordering::Equal,
            })
            .find(|ordering| ordering.is_ne())
            .unwrap_or(Ordering::Equal)
    })
}
