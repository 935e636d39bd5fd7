//! REST API client module for OANDA v20.
//!
//! This module provides a typed HTTP client for instrument history, order and
//! position books, pricing, and trade management.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use oanda_sdk::api::{CloseTradePayload, OandaClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = OandaClient::from_env()?;
//!
//!     let history = client.get_candles("EUR_USD", "3", "M1").await?;
//!     println!("Closes: {:?}", history.extract_closed());
//!
//!     let trades = client.get_open_trades().await?;
//!     for trade in &trades.trades {
//!         println!("{} {} @ {}", trade.id, trade.current_units, trade.price);
//!     }
//!
//!     let closed = client.reduce_trade_size("1234", CloseTradePayload::all()).await?;
//!     println!("Filled: {}", closed.is_filled());
//!
//!     Ok(())
//! }
//! ```
//!
//! # Error Handling
//!
//! All client methods return `ApiResult<T>`. Transport failures surface as
//! [`ApiError::Http`]; a body carrying `errorMessage` surfaces as
//! [`ApiError::Oanda`] with the route and raw body attached.
//!
//! A body that is not valid JSON for the target type is **not** an error: it
//! is logged at `warn` level and the method returns `T::default()`.
//!
//! ```rust,ignore
//! match client.get_trade("999999").await {
//!     Ok(resp) => println!("Trade: {:?}", resp.trade),
//!     Err(ApiError::Oanda { route, response, .. }) => {
//!         println!("{} rejected: {}", route, response.get_message())
//!     }
//!     Err(e) => println!("Other error: {}", e),
//! }
//! ```

#[cfg(feature = "http")]
pub mod client;
pub mod endpoints;
pub mod error;
pub mod types;

// Re-export main types for convenience
#[cfg(feature = "http")]
pub use client::{OandaClient, OandaClientBuilder};
pub use error::{ApiError, ApiResult, ErrorResponse};
pub use types::*;
