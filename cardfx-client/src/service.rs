//! Settlement Application Service
//!
//! Orchestrates settlement lookups through the rate provider port.
//! Contains NO transport logic - pure orchestration and field mapping.

use chrono::NaiveDate;

use cardfx_types::{
    RateProvider, SettleError, SettlementRequest, SettlementResult, date,
};

/// Application service for settlement lookups.
///
/// Generic over `P: RateProvider` - the adapter is injected at compile
/// time, enabling tests with an in-memory provider. Holds no mutable
/// state; each call is independent.
pub struct SettlementService<P: RateProvider> {
    provider: P,
}

impl<P: RateProvider> SettlementService<P> {
    /// Creates a new settlement service with the given provider.
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// Returns a reference to the underlying provider.
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Performs one settlement lookup for a fully resolved request.
    ///
    /// Maps the provider's quote field-by-field into the stable result
    /// shape, echoing the request's bank fee since the provider does not
    /// return it reliably.
    pub async fn settle(&self, req: &SettlementRequest) -> Result<SettlementResult, SettleError> {
        let quote = self.provider.conversion_rate(req).await?;
        tracing::debug!(?quote, "provider quote");

        Ok(SettlementResult {
            bank_fee_percentage: req.bank_fee_percentage,
            card_amount: quote.card_amount,
            card_currency: quote.card_currency,
            conversion_rate: quote.conversion_rate,
            conversion_rate_date: quote.conversion_rate_date,
            transaction_amount: quote.transaction_amount,
            transaction_currency: quote.transaction_currency,
        })
    }

    /// Settles on the most recent date with published rates.
    ///
    /// Two sequential provider calls: an availability check for `today`,
    /// then the settlement lookup dated today or yesterday. No fallback
    /// beyond yesterday is attempted; if yesterday's rates are also
    /// unpublished, the settlement call surfaces the provider's answer
    /// as-is.
    pub async fn settle_latest(
        &self,
        transaction_amount: f64,
        transaction_currency: &str,
        card_currency: &str,
        bank_fee_percentage: f64,
        today: NaiveDate,
    ) -> Result<SettlementResult, SettleError> {
        let today_formatted = date::format_date(today);
        let exchange_rate_date = if self.provider.rates_available(&today_formatted).await? {
            today_formatted
        } else {
            date::format_date(date::n_days_ago(today, 1)?)
        };
        tracing::debug!(%exchange_rate_date, "settling on most recent available date");

        let req = SettlementRequest::new(
            transaction_amount,
            transaction_currency,
            card_currency,
            exchange_rate_date,
            bank_fee_percentage,
        );
        self.settle(&req).await
    }

    /// Whether rates have been issued for the given `YYYY-MM-DD` date.
    pub async fn rates_available(&self, date: &str) -> Result<bool, SettleError> {
        Ok(self.provider.rates_available(date).await?)
    }
}
