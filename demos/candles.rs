//! Fetch recent candles and print the close series.
//!
//! Reads `OANDA_ACCOUNT_ID` / `OANDA_API_TOKEN` from the environment or `.env`.
//!
//! ```sh
//! cargo run --example candles -- EUR_USD H1 20
//! ```

use oanda_sdk::prelude::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut args = std::env::args().skip(1);
    let instrument = args.next().unwrap_or_else(|| "EUR_USD".to_string());
    let granularity = args.next().unwrap_or_else(|| Granularity::H1.to_string());
    let count = args.next().unwrap_or_else(|| "20".to_string());

    let client = OandaClient::from_env()?;
    let history = client.get_candles(&instrument, &count, &granularity).await?;

    println!("{} {} ({} candles)", history.instrument, history.granularity, history.candles.len());
    for candle in &history.candles {
        println!(
            "{}  o={:<10} h={:<10} l={:<10} c={:<10} v={}{}",
            candle.time.format("%Y-%m-%d %H:%M"),
            candle.mid.open,
            candle.mid.high,
            candle.mid.low,
            candle.mid.close,
            candle.volume,
            if candle.complete { "" } else { "  (forming)" },
        );
    }

    let closes = history.extract_closed();
    if let (Some(first), Some(last)) = (closes.first(), closes.last()) {
        println!("change: {:+.5}", last - first);
    }

    Ok(())
}
