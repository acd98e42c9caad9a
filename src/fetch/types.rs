use std::fmt;

use crate::types::quote::Quote;

/// Why a symbol is absent from a fetch batch.
#[derive(Debug, Clone, PartialEq)]
pub enum SkipReason {
    MissingApiKey,
    Transport { message: String },
    HttpStatus { status: u16 },
    MalformedBody { message: String },
    ApiError { message: String },
    RateLimited { message: String },
    EmptyQuote { information: Option<String> },
    InvalidPrice { raw: Option<String> },
}

impl SkipReason {
    /// `false` only when the symbol was rejected before any request went out.
    pub fn issued_request(&self) -> bool {
        !matches!(self, Self::MissingApiKey)
    }

    /// Local or transport faults, as opposed to notices reported by the API.
    pub fn is_fault(&self) -> bool {
        matches!(
            self,
            Self::MissingApiKey
                | Self::Transport { .. }
                | Self::HttpStatus { .. }
                | Self::MalformedBody { .. }
        )
    }
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingApiKey => write!(f, "API key not configured"),
            Self::Transport { message } => write!(f, "request failed: {message}"),
            Self::HttpStatus { status } => write!(f, "http status {status}"),
            Self::MalformedBody { message } => write!(f, "malformed response: {message}"),
            Self::ApiError { message } => write!(f, "api error: {message}"),
            Self::RateLimited { message } => write!(f, "rate limited: {message}"),
            Self::EmptyQuote { information: None } => write!(f, "no quote data"),
            Self::EmptyQuote {
                information: Some(information),
            } => write!(f, "no quote data ({information})"),
            Self::InvalidPrice { raw: None } => write!(f, "price missing"),
            Self::InvalidPrice { raw: Some(raw) } => write!(f, "invalid price {raw:?}"),
        }
    }
}

pub type FetchOutcome = Result<Quote, SkipReason>;

#[derive(Debug, Clone)]
pub struct SymbolOutcome {
    pub symbol: String,
    pub outcome: FetchOutcome,
}

/// Per-symbol results of one batch, in the order the fetches ran.
#[derive(Debug, Clone, Default)]
pub struct FetchReport {
    outcomes: Vec<SymbolOutcome>,
    requests_issued: usize,
    pauses: usize,
}

impl FetchReport {
    pub(crate) fn record(&mut self, symbol: &str, outcome: FetchOutcome) {
        let issued = match &outcome {
            Ok(_) => true,
            Err(reason) => reason.issued_request(),
        };
        if issued {
            self.requests_issued += 1;
        }

        self.outcomes.push(SymbolOutcome {
            symbol: symbol.to_string(),
            outcome,
        });
    }

    pub(crate) fn record_pause(&mut self) {
        self.pauses += 1;
    }

    pub fn requests_issued(&self) -> usize {
        self.requests_issued
    }

    pub fn pauses(&self) -> usize {
        self.pauses
    }

    pub fn skipped(&self) -> impl Iterator<Item = (&str, &SkipReason)> {
        self.outcomes
            .iter()
            .filter_map(|entry| match &entry.outcome {
                Ok(_) => None,
                Err(reason) => Some((entry.symbol.as_str(), reason)),
            })
    }

    #[cfg(test)]
    pub fn quotes(&self) -> Vec<Quote> {
        self.outcomes
            .iter()
            .filter_map(|entry| entry.outcome.as_ref().ok().cloned())
            .collect()
    }

    pub fn into_quotes(self) -> Vec<Quote> {
        self.outcomes
            .into_iter()
            .filter_map(|entry| entry.outcome.ok())
            .collect()
    }
}
