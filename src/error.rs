//! Error types for card_scout

use crate::retailer::RetailerId;

/// Unified error type for card_scout operations
#[derive(Debug, thiserror::Error)]
pub enum ScoutError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    /// Failed to parse JSON response
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
    /// HTTP error status code from a source endpoint
    #[error("HTTP error: {0}")]
    HttpStatus(reqwest::StatusCode),
    /// A source adapter failed for one retailer
    #[error("Source {retailer} failed: {reason}")]
    Source { retailer: RetailerId, reason: String },
}

/// Result alias for card_scout operations
pub type Result<T> = std::result::Result<T, ScoutError>;
