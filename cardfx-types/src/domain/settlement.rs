//! Settlement request and result types.
//!
//! Both are immutable value objects, constructed fresh per call and never
//! persisted. `SettlementResult` is the stable contract returned to all
//! callers, decoupled from the provider's wire field names.

use serde::{Deserialize, Serialize};

/// A single settlement lookup: convert `transaction_amount` of
/// `transaction_currency` into `card_currency` at `exchange_rate_date`'s
/// published rate, with an optional bank fee applied provider-side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettlementRequest {
    pub transaction_amount: f64,
    /// Always uppercase; normalized by the constructor.
    pub transaction_currency: String,
    /// Always uppercase; normalized by the constructor.
    pub card_currency: String,
    /// Calendar date in `YYYY-MM-DD` form.
    pub exchange_rate_date: String,
    pub bank_fee_percentage: f64,
}

impl SettlementRequest {
    /// Creates a request, uppercasing both currency codes.
    ///
    /// Codes are not validated beyond case normalization; an unsupported
    /// code surfaces later as the provider's unknown-currency condition.
    pub fn new(
        transaction_amount: f64,
        transaction_currency: &str,
        card_currency: &str,
        exchange_rate_date: impl Into<String>,
        bank_fee_percentage: f64,
    ) -> Self {
        Self {
            transaction_amount,
            transaction_currency: transaction_currency.to_uppercase(),
            card_currency: card_currency.to_uppercase(),
            exchange_rate_date: exchange_rate_date.into(),
            bank_fee_percentage,
        }
    }
}

/// The provider's rate payload after normalization, still missing the
/// request-side bank fee. Produced by adapters, consumed by the service.
#[derive(Debug, Clone, PartialEq)]
pub struct RateQuote {
    pub conversion_rate: f64,
    pub card_amount: f64,
    pub card_currency: String,
    /// The date the provider actually used; may differ from the request.
    pub conversion_rate_date: String,
    pub transaction_amount: f64,
    pub transaction_currency: String,
}

/// Stable settlement result returned to all callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettlementResult {
    /// Echoed from the request; the provider does not return it reliably.
    pub bank_fee_percentage: f64,
    pub card_amount: f64,
    pub card_currency: String,
    pub conversion_rate: f64,
    /// The date whose published rate was used; may differ from the
    /// requested date.
    pub conversion_rate_date: String,
    pub transaction_amount: f64,
    pub transaction_currency: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_uppercases_currencies() {
        let req = SettlementRequest::new(10.0, "usd", "gBp", "2018-06-03", 0.0);
        assert_eq!(req.transaction_currency, "USD");
        assert_eq!(req.card_currency, "GBP");
    }

    #[test]
    fn test_request_keeps_amount_and_fee() {
        let req = SettlementRequest::new(10.0, "USD", "GBP", "2018-06-03", 5.0);
        assert_eq!(req.transaction_amount, 10.0);
        assert_eq!(req.bank_fee_percentage, 5.0);
        assert_eq!(req.exchange_rate_date, "2018-06-03");
    }
}
