//! List open trades and optionally close one.
//!
//! ```sh
//! cargo run --example trades
//! cargo run --example trades -- close 1234
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

    let client = OandaClient::from_env()?;
    let args: Vec<String> = std::env::args().skip(1).collect();

    if let [cmd, ticket] = args.as_slice() {
        if cmd == "close" {
            match client.reduce_trade_size(ticket, CloseTradePayload::all()).await {
                Ok(modified) if modified.is_filled() => {
                    for closed in &modified.order_fill_transaction.trades_closed {
                        println!("closed {} units of {} (P/L {})", closed.units, closed.trade_id, closed.realized_pl);
                    }
                }
                Ok(modified) => println!("close not filled: {}", modified.order_cancel_transaction.reason),
                Err(ApiError::Oanda { response, .. }) => println!("rejected: {}", response.get_message()),
                Err(e) => return Err(e.into()),
            }
            return Ok(());
        }
    }

    let open = client.get_open_trades().await?;
    println!("{} open trades (last transaction {})", open.trades.len(), open.last_transaction_id);
    for trade in &open.trades {
        println!(
            "#{:<6} {:<8} units={:<8} price={:<10} uPL={}",
            trade.id, trade.instrument, trade.current_units, trade.price, trade.unrealized_pl
        );
    }
    println!("total unrealized P/L: {}", format_decimal(open.total_unrealized_pl()));

    Ok(())
}
