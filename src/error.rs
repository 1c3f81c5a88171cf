//! Error types for the crypto-info crate.
//!
//! Two layers: `ApiError` classifies transport-level failures (timeout,
//! HTTP status, network, JSON decode), `CryptoInfoError` is the closed
//! set of failures the lookup engine can surface to callers.

use reqwest::StatusCode;
use thiserror::Error;

/// Transport-level failure from an API call.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("request to {url} timed out")]
    Timeout { url: String },

    #[error("API error: {status} - {body}")]
    Status { status: StatusCode, body: String },

    #[error("network error: {0}")]
    Network(#[source] reqwest::Error),

    #[error("invalid response format: {0}")]
    Decode(#[source] reqwest::Error),

    #[error("invalid client configuration: {0}")]
    Config(String),
}

/// Failure surfaced by the lookup engine.
///
/// Every variant carries the symbol as originally requested so callers
/// can report it without re-deriving context. Variants with a cause
/// chain it via `source()`.
#[derive(Error, Debug)]
pub enum CryptoInfoError {
    /// The search returned no candidates at all for the symbol.
    #[error("could not find cryptocurrency with symbol '{symbol}'")]
    SymbolNotFound { symbol: String },

    /// The search call itself failed (network/HTTP/decode).
    #[error("failed to resolve symbol '{symbol}'")]
    ResolutionFailed {
        symbol: String,
        #[source]
        source: ApiError,
    },

    /// Resolution or the detail fetch failed; no partial record is returned.
    #[error("failed to get information for cryptocurrency '{symbol}'")]
    InfoRetrievalFailed {
        symbol: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Resolution succeeded but the batch price response had no entry
    /// for the resolved identifier.
    #[error("no price data found for cryptocurrency '{symbol}'")]
    PriceNotFound { symbol: String },

    /// Resolution or the price fetch failed.
    #[error("failed to get price for cryptocurrency '{symbol}'")]
    PriceRetrievalFailed {
        symbol: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}
