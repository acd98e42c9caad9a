use serde::Deserialize;
use tracing::{debug, warn};

use crate::fetch::types::{FetchOutcome, SkipReason};
use crate::types::{price::Price, quote::Quote};

/// Body of a `function=GLOBAL_QUOTE` call. Failures come back with a 200
/// status and one of the notice fields set instead of the quote.
#[derive(Debug, Deserialize)]
pub struct GlobalQuoteResponse {
    #[serde(rename = "Global Quote")]
    pub global_quote: Option<GlobalQuote>,
    #[serde(rename = "Error Message")]
    pub error_message: Option<String>,
    #[serde(rename = "Note")]
    pub note: Option<String>,
    #[serde(rename = "Information")]
    pub information: Option<String>,
}

#[derive(Debug, Default, PartialEq, Deserialize)]
pub struct GlobalQuote {
    #[serde(rename = "01. symbol")]
    pub symbol: Option<String>,
    #[serde(rename = "02. open")]
    pub open: Option<String>,
    #[serde(rename = "03. high")]
    pub high: Option<String>,
    #[serde(rename = "04. low")]
    pub low: Option<String>,
    #[serde(rename = "05. price")]
    pub price: Option<String>,
    #[serde(rename = "06. volume")]
    pub volume: Option<String>,
    #[serde(rename = "07. latest trading day")]
    pub latest_trading_day: Option<String>,
    #[serde(rename = "08. previous close")]
    pub previous_close: Option<String>,
    #[serde(rename = "09. change")]
    pub change: Option<String>,
    #[serde(rename = "10. change percent")]
    pub change_percent: Option<String>,
}

impl GlobalQuote {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl GlobalQuoteResponse {
    pub fn into_quote(self, symbol: &str) -> FetchOutcome {
        if let Some(message) = self.error_message {
            return Err(SkipReason::ApiError { message });
        }

        /* Information alone is a soft notice; a quote may still be attached */
        if let Some(information) = &self.information {
            warn!(%symbol, %information, "api information notice");
        }

        if let Some(message) = self.note {
            return Err(SkipReason::RateLimited { message });
        }

        let quote = match self.global_quote {
            Some(quote) if !quote.is_empty() => quote,
            _ => {
                return Err(SkipReason::EmptyQuote {
                    information: self.information,
                });
            }
        };

        debug!(
            %symbol,
            reported_symbol = ?quote.symbol,
            open = ?quote.open,
            high = ?quote.high,
            low = ?quote.low,
            volume = ?quote.volume,
            latest_trading_day = ?quote.latest_trading_day,
            previous_close = ?quote.previous_close,
            change = ?quote.change,
            "global quote received"
        );

        let price = match quote.price {
            Some(raw) => raw
                .parse::<Price>()
                .map_err(|_| SkipReason::InvalidPrice { raw: Some(raw) })?,
            None => return Err(SkipReason::InvalidPrice { raw: None }),
        };

        let change_percent = parse_change_percent(symbol, quote.change_percent.as_deref());

        Ok(Quote::new(symbol, price, change_percent))
    }
}

/// `"-2.3100%"` -> `-2.31`. Absent or unreadable values count as no change.
fn parse_change_percent(symbol: &str, raw: Option<&str>) -> f64 {
    let Some(raw) = raw else {
        return 0.0;
    };

    let trimmed = raw.trim();
    let number = trimmed.strip_suffix('%').unwrap_or(trimmed).trim();
    if number.is_empty() {
        return 0.0;
    }

    match number.parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => {
            warn!(%symbol, raw, "unreadable change percent; using 0");
            0.0
        }
    }
}
