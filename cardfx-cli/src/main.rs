//! cardfx CLI
//!
//! Converts a transaction amount into the card's billing currency using
//! the provider's settlement exchange rates. With no date flag, the most
//! recent date with published rates is used.

use anyhow::Result;
use chrono::Local;
use clap::Parser;

use cardfx_client::{MastercardClient, SettlementService};
use cardfx_types::{DateIntent, ResolvedDate, SettlementRequest, date};

#[derive(Debug, Parser)]
#[command(name = "cardfx")]
#[command(
    author,
    version,
    about = "Convert currency using card settlement exchange rates",
    long_about = None,
    after_help = "If no date flag is given, the most recent date with published rates is used."
)]
struct Cli {
    /// Transaction amount, in the transaction currency
    amount: f64,

    /// Currency the transaction was made in (case-insensitive, e.g. usd)
    from_currency: String,

    /// Currency the card is billed in (case-insensitive, e.g. gbp)
    to_currency: String,

    /// Exchange-rate date, e.g. 2018-06-03, 06/03/2018 or "3 June 2018".
    /// The provider only keeps a short window of historical rates.
    #[arg(short, long)]
    date: Option<String>,

    /// Use today's rates. May fail if today's rates have not been uploaded
    #[arg(short, long)]
    today: bool,

    /// Use yesterday's rates. Repeat to go further back in time
    #[arg(short, long, action = clap::ArgAction::Count)]
    yesterday: u8,

    /// Bank fee percentage applied on top of the conversion
    #[arg(short = 'f', long, default_value_t = 0.0)]
    bank_fee: f64,

    /// Print the full settlement result as JSON instead of the bare amount
    #[arg(long)]
    json: bool,

    /// Log level filter (error, warn, info, debug, trace); RUST_LOG overrides
    #[arg(long, default_value = "warn")]
    log_level: String,

    /// Base URL of the rate provider (for testing against a stub)
    #[arg(long, env = "CARDFX_BASE_URL", hide = true)]
    base_url: Option<String>,
}

/// Date-flag precedence: explicit date > today > yesterday > most recent.
fn date_intent(date: Option<&str>, today: bool, yesterday: u8) -> DateIntent {
    if let Some(raw) = date {
        DateIntent::Explicit(raw.to_string())
    } else if today {
        DateIntent::Today
    } else if yesterday > 0 {
        DateIntent::DaysAgo(i64::from(yesterday))
    } else {
        DateIntent::MostRecent
    }
}

fn init_tracing(level: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli) -> Result<()> {
    let client = match &cli.base_url {
        Some(url) => MastercardClient::with_base_url(url),
        None => MastercardClient::new(),
    };
    let service = SettlementService::new(client);
    let today = Local::now().date_naive();

    let intent = date_intent(cli.date.as_deref(), cli.today, cli.yesterday);
    let result = match date::resolve(&intent, today)? {
        ResolvedDate::On(day) => {
            let req = SettlementRequest::new(
                cli.amount,
                &cli.from_currency,
                &cli.to_currency,
                date::format_date(day),
                cli.bank_fee,
            );
            service.settle(&req).await?
        }
        ResolvedDate::Latest => {
            service
                .settle_latest(
                    cli.amount,
                    &cli.from_currency,
                    &cli.to_currency,
                    cli.bank_fee,
                    today,
                )
                .await?
        }
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("{}", result.card_amount);
    }
    Ok(())
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(&cli.log_level);
    tracing::debug!(?cli, "parsed arguments");

    // Each error kind carries its own message; nothing is ever printed
    // to stdout on failure.
    if let Err(err) = run(cli).await {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_date_wins_over_other_flags() {
        let intent = date_intent(Some("2018-06-03"), true, 2);
        assert_eq!(intent, DateIntent::Explicit("2018-06-03".to_string()));
    }

    #[test]
    fn test_today_wins_over_yesterday() {
        assert_eq!(date_intent(None, true, 2), DateIntent::Today);
    }

    #[test]
    fn test_repeated_yesterday_goes_further_back() {
        assert_eq!(date_intent(None, false, 3), DateIntent::DaysAgo(3));
    }

    #[test]
    fn test_default_is_most_recent() {
        assert_eq!(date_intent(None, false, 0), DateIntent::MostRecent);
    }

    #[test]
    fn test_parses_positionals_and_counts() {
        let cli = Cli::try_parse_from(["cardfx", "10", "usd", "gbp", "-yy"]).unwrap();
        assert_eq!(cli.amount, 10.0);
        assert_eq!(cli.from_currency, "usd");
        assert_eq!(cli.to_currency, "gbp");
        assert_eq!(cli.yesterday, 2);
        assert_eq!(cli.bank_fee, 0.0);
    }
}
