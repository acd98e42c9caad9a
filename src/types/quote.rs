use serde::Serialize;

use crate::types::price::Price;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub symbol: String,
    pub price: Price,
    pub change_percent: f64,
}

impl Quote {
    pub fn new(symbol: &str, price: Price, change_percent: f64) -> Self {
        Self {
            symbol: symbol.trim().to_uppercase(),
            price,
            change_percent,
        }
    }
}
