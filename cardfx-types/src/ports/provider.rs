//! Rate provider port.
//!
//! This trait defines the interface to the remote settlement-rate
//! provider. Implementations can be HTTP clients, test doubles, etc.

use crate::domain::settlement::{RateQuote, SettlementRequest};
use crate::error::ProviderError;

/// Port trait for the settlement-rate provider.
#[async_trait::async_trait]
pub trait RateProvider: Send + Sync {
    /// Looks up the conversion rate and billed amount for one request.
    /// A single remote call; failures propagate immediately, no retry.
    async fn conversion_rate(
        &self,
        req: &SettlementRequest,
    ) -> Result<RateQuote, ProviderError>;

    /// Whether the provider has issued rates for the given `YYYY-MM-DD`
    /// date. True only on the provider's explicit "issued" sentinel.
    async fn rates_available(&self, date: &str) -> Result<bool, ProviderError>;
}
