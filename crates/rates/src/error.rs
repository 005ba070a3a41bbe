//! Rate source error types.

use thiserror::Error;

/// Errors raised while fetching rates. All of them mean "upstream unavailable".
#[derive(Debug, Error)]
pub enum RateSourceError {
    /// HTTP client could not be constructed.
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// Connection, timeout or body read failure.
    #[error("Request for {symbol} failed: {source}")]
    Request {
        /// Ticker symbol being fetched.
        symbol: String,
        /// Underlying client error.
        #[source]
        source: reqwest::Error,
    },

    /// Provider answered with a non-success status.
    #[error("Rate provider returned HTTP {status} for {symbol}")]
    Status {
        /// Ticker symbol being fetched.
        symbol: String,
        /// HTTP status code.
        status: u16,
    },

    /// Price missing, unparsable or not positive.
    #[error("Invalid price {price:?} for {symbol}")]
    InvalidPrice {
        /// Ticker symbol being fetched.
        symbol: String,
        /// Raw price text.
        price: String,
    },
}

impl RateSourceError {
    /// Returns true when the provider did not answer in time.
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        match self {
            Self::Request { source, .. } => source.is_timeout(),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_display() {
        let error = RateSourceError::Status {
            symbol: "USDTTHB".into(),
            status: 503,
        };
        assert_eq!(error.to_string(), "Rate provider returned HTTP 503 for USDTTHB");
        assert!(!error.is_timeout());
    }

    #[test]
    fn test_invalid_price_display() {
        let error = RateSourceError::InvalidPrice {
            symbol: "USDTRUB".into(),
            price: "abc".into(),
        };
        assert_eq!(error.to_string(), "Invalid price \"abc\" for USDTRUB");
    }
}
