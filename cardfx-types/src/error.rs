//! Error types for the settlement client.
//!
//! Every error is terminal for a single settlement call; the core never
//! retries internally. The caller decides whether to try a different date.

/// Domain-level errors (caller contract violations).
#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("Unrecognized date format: {0}")]
    InvalidDateFormat(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Provider-level errors (remote lookup failures).
///
/// Adapter internals are carried as strings so this crate stays free of
/// IO dependencies.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("Provider request failed with status {status}")]
    RequestFailed { status: u16 },

    #[error("No rates published for {0} (weekend, holiday, or date out of range)")]
    NoRatesPublished(String),

    #[error("Currency not covered by the provider: {0}")]
    UnknownCurrency(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Malformed provider response: {0}")]
    MalformedResponse(String),
}

/// Top-level error returned by the settlement service.
#[derive(Debug, thiserror::Error)]
pub enum SettleError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Provider(#[from] ProviderError),
}
