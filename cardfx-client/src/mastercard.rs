//! HTTP adapter for the provider's settlement-rate endpoints.
//!
//! One GET per operation, no retry or backoff; a non-success status or a
//! connection failure propagates immediately. The provider rejects
//! non-browser traffic, so every request carries a browser-like header set.

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;

use cardfx_types::{ProviderError, RateProvider, RateQuote, SettlementRequest};

use crate::wire::{self, ConversionRateData, Envelope, RateIssuedData};

const DEFAULT_BASE_URL: &str = "https://www.mastercard.com/settlement/currencyrate";
const REFERRER_URL: &str =
    "https://www.mastercard.com/global/en/personal/get-support/convert-currency.html";
const USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:127.0) Gecko/20100101 Firefox/127.0";

/// Client for the provider's `conversion-rate` and
/// `conversion-rate-issued` endpoints.
pub struct MastercardClient {
    base_url: String,
    http: Client,
}

impl MastercardClient {
    /// Creates a client against the live provider.
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Creates a client against an alternative base URL (e.g. a local stub).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<Envelope<T>, ProviderError> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%url, ?query, "querying rate provider");

        let resp = self
            .http
            .get(&url)
            .query(query)
            .header("Accept", "application/json, text/plain, */*")
            .header("Referer", REFERRER_URL)
            .header("User-Agent", USER_AGENT)
            .send()
            .await
            .map_err(|e| ProviderError::Transport(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ProviderError::RequestFailed {
                status: status.as_u16(),
            });
        }

        let body = resp
            .text()
            .await
            .map_err(|e| ProviderError::Transport(e.to_string()))?;
        tracing::debug!(%body, "provider response");

        serde_json::from_str(&body).map_err(|e| ProviderError::MalformedResponse(e.to_string()))
    }
}

impl Default for MastercardClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RateProvider for MastercardClient {
    async fn conversion_rate(
        &self,
        req: &SettlementRequest,
    ) -> Result<RateQuote, ProviderError> {
        let query = [
            ("fxDate", req.exchange_rate_date.clone()),
            ("transCurr", req.transaction_currency.clone()),
            ("crdhldBillCurr", req.card_currency.clone()),
            ("bankFee", req.bank_fee_percentage.to_string()),
            ("transAmt", req.transaction_amount.to_string()),
        ];
        let envelope: Envelope<ConversionRateData> = self.get("/conversion-rate", &query).await?;
        wire::into_quote(envelope.data, &req.exchange_rate_date)
    }

    async fn rates_available(&self, date: &str) -> Result<bool, ProviderError> {
        let query = [("date", date.to_string())];
        let envelope: Envelope<RateIssuedData> =
            self.get("/conversion-rate-issued", &query).await?;
        Ok(wire::rates_issued(envelope.data))
    }
}
