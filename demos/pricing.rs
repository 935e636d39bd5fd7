//! Print the current quote for a few instruments.
//!
//! ```sh
//! cargo run --example pricing -- EUR_USD USD_JPY GBP_USD
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

    let mut instruments: Vec<String> = std::env::args().skip(1).collect();
    if instruments.is_empty() {
        instruments.push("EUR_USD".to_string());
    }
    let refs: Vec<&str> = instruments.iter().map(String::as_str).collect();

    let client = OandaClient::from_env()?;
    let pricing = client.get_pricing(&refs).await?;

    for price in &pricing.prices {
        println!(
            "{:<8} bid={:?} ask={:?} spread={:?} status={}",
            price.instrument,
            price.best_bid(),
            price.best_ask(),
            price.spread(),
            price.status,
        );
    }

    let book = client.order_book(refs[0]).await?;
    println!(
        "{} order book: {} buckets of width {} around {}",
        book.instrument,
        book.buckets.len(),
        book.bucket_width,
        book.price
    );

    Ok(())
}
