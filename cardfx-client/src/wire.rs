//! Wire types for the provider's JSON responses.
//!
//! The provider wraps everything in a `{name, description, date, data}`
//! envelope; only `data` carries domain information. Normalization into
//! [`RateQuote`] is explicit and field-by-field so that a provider schema
//! change fails loudly here instead of leaking odd field names upward.

use serde::Deserialize;

use cardfx_types::{ProviderError, RateQuote};

/// Provider's in-payload marker for a date with no published rates.
const ERROR_CODE_NO_RATES: &str = "104";
/// Provider's in-payload marker for a currency pair it does not quote.
const ERROR_CODE_UNKNOWN_CURRENCY: &str = "114";
/// Sentinel value of `rateIssued` meaning rates exist for the date.
const RATE_ISSUED_YES: &str = "YES";

/// Top-level response envelope. Unknown fields are ignored.
#[derive(Debug, Deserialize)]
pub(crate) struct Envelope<T> {
    pub data: Option<T>,
}

/// Raw `conversion-rate` payload. Every field is optional because the
/// provider reuses the payload to carry its error markers.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct ConversionRateData {
    #[serde(rename = "conversionRate")]
    pub conversion_rate: Option<f64>,
    #[serde(rename = "crdhldBillAmt")]
    pub crdhld_bill_amt: Option<f64>,
    #[serde(rename = "crdhldBillCurr")]
    pub crdhld_bill_curr: Option<String>,
    #[serde(rename = "fxDate")]
    pub fx_date: Option<String>,
    #[serde(rename = "transAmt")]
    pub trans_amt: Option<f64>,
    #[serde(rename = "transCurr")]
    pub trans_curr: Option<String>,
    #[serde(rename = "errorCode")]
    pub error_code: Option<String>,
    #[serde(rename = "errorMessage")]
    pub error_message: Option<String>,
}

/// Raw `conversion-rate-issued` payload. `rateIssued` is kept as a raw
/// JSON value: anything but the exact `"YES"` string means not issued,
/// so a wrong-typed value must read as `false`, not as a parse failure.
#[derive(Debug, Deserialize)]
pub(crate) struct RateIssuedData {
    #[serde(rename = "rateIssued")]
    pub rate_issued: Option<serde_json::Value>,
}

/// True only when the payload carries the exact issued sentinel.
pub(crate) fn rates_issued(data: Option<RateIssuedData>) -> bool {
    data.and_then(|d| d.rate_issued)
        .as_ref()
        .and_then(serde_json::Value::as_str)
        == Some(RATE_ISSUED_YES)
}

/// Normalizes a `conversion-rate` payload into a [`RateQuote`].
///
/// An empty payload or the no-rates error marker surfaces as
/// `NoRatesPublished`; the unknown-currency marker as `UnknownCurrency`;
/// a partially filled payload as `MalformedResponse`.
pub(crate) fn into_quote(
    data: Option<ConversionRateData>,
    requested_date: &str,
) -> Result<RateQuote, ProviderError> {
    let Some(data) = data else {
        return Err(ProviderError::NoRatesPublished(requested_date.to_string()));
    };

    if let Some(code) = &data.error_code {
        let message = data.error_message.as_deref().unwrap_or("no message");
        return Err(match code.as_str() {
            ERROR_CODE_NO_RATES => ProviderError::NoRatesPublished(requested_date.to_string()),
            ERROR_CODE_UNKNOWN_CURRENCY => ProviderError::UnknownCurrency(message.to_string()),
            other => ProviderError::MalformedResponse(format!("provider error {other}: {message}")),
        });
    }

    let ConversionRateData {
        conversion_rate,
        crdhld_bill_amt,
        crdhld_bill_curr,
        fx_date,
        trans_amt,
        trans_curr,
        ..
    } = data;

    match (
        conversion_rate,
        crdhld_bill_amt,
        crdhld_bill_curr,
        fx_date,
        trans_amt,
        trans_curr,
    ) {
        (
            Some(conversion_rate),
            Some(card_amount),
            Some(card_currency),
            Some(conversion_rate_date),
            Some(transaction_amount),
            Some(transaction_currency),
        ) => Ok(RateQuote {
            conversion_rate,
            card_amount,
            card_currency,
            conversion_rate_date,
            transaction_amount,
            transaction_currency,
        }),
        (None, None, None, None, None, None) => {
            Err(ProviderError::NoRatesPublished(requested_date.to_string()))
        }
        _ => Err(ProviderError::MalformedResponse(
            "conversion-rate payload is missing fields".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONVERSION_RATE_BODY: &str = r#"{
        "name": "settlement-conversion-rate",
        "description": "Settlement conversion rate and billing amount",
        "date": "2018-06-03 16:03:19",
        "data": {
            "conversionRate": 0.754287,
            "crdhldBillAmt": 7.542870,
            "fxDate": "2018-06-03",
            "transCurr": "USD",
            "crdhldBillCurr": "GBP",
            "transAmt": 10
        }
    }"#;

    fn parse(body: &str) -> Envelope<ConversionRateData> {
        serde_json::from_str(body).unwrap()
    }

    #[test]
    fn test_full_payload_maps_field_by_field() {
        let envelope = parse(CONVERSION_RATE_BODY);
        let quote = into_quote(envelope.data, "2018-06-03").unwrap();
        assert_eq!(
            quote,
            RateQuote {
                conversion_rate: 0.754287,
                card_amount: 7.542870,
                card_currency: "GBP".to_string(),
                conversion_rate_date: "2018-06-03".to_string(),
                transaction_amount: 10.0,
                transaction_currency: "USD".to_string(),
            }
        );
    }

    #[test]
    fn test_missing_data_is_no_rates() {
        let envelope = parse(r#"{"name": "settlement-conversion-rate"}"#);
        let result = into_quote(envelope.data, "2018-06-03");
        assert!(matches!(result, Err(ProviderError::NoRatesPublished(d)) if d == "2018-06-03"));
    }

    #[test]
    fn test_empty_data_is_no_rates() {
        let envelope = parse(r#"{"data": {}}"#);
        let result = into_quote(envelope.data, "2018-06-03");
        assert!(matches!(result, Err(ProviderError::NoRatesPublished(_))));
    }

    #[test]
    fn test_no_rates_error_marker() {
        let envelope = parse(
            r#"{"data": {"errorCode": "104", "errorMessage": "Date out of range"}}"#,
        );
        let result = into_quote(envelope.data, "2018-06-03");
        assert!(matches!(result, Err(ProviderError::NoRatesPublished(_))));
    }

    #[test]
    fn test_unknown_currency_error_marker() {
        let envelope = parse(
            r#"{"data": {"errorCode": "114", "errorMessage": "Rate not found for XXX"}}"#,
        );
        let result = into_quote(envelope.data, "2018-06-03");
        assert!(matches!(result, Err(ProviderError::UnknownCurrency(m)) if m.contains("XXX")));
    }

    #[test]
    fn test_partial_payload_is_malformed() {
        let envelope = parse(r#"{"data": {"conversionRate": 0.754287}}"#);
        let result = into_quote(envelope.data, "2018-06-03");
        assert!(matches!(result, Err(ProviderError::MalformedResponse(_))));
    }

    fn parse_issued(body: &str) -> Envelope<RateIssuedData> {
        serde_json::from_str(body).unwrap()
    }

    #[test]
    fn test_rate_issued_sentinel_only() {
        let envelope = parse_issued(
            r#"{
                "name": "settlement-conversion-rate-issued",
                "description": "Is settlement conversion rate issued",
                "date": "2018-06-03 16:02:25",
                "data": {"rateIssued": "YES"}
            }"#,
        );
        assert!(rates_issued(envelope.data));

        let envelope = parse_issued(r#"{"data": {"rateIssued": "NO"}}"#);
        assert!(!rates_issued(envelope.data));
    }

    #[test]
    fn test_rate_issued_absent_or_wrong_type_is_false() {
        for body in [
            r#"{"data": {}}"#,
            r#"{"data": null}"#,
            r#"{"name": "settlement-conversion-rate-issued"}"#,
            r#"{"data": {"rateIssued": 1}}"#,
            r#"{"data": {"rateIssued": true}}"#,
            r#"{"data": {"rateIssued": null}}"#,
            r#"{"data": {"rateIssued": ["YES"]}}"#,
        ] {
            let envelope = parse_issued(body);
            assert!(!rates_issued(envelope.data), "{body}");
        }
    }
}
