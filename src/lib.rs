//! # OANDA Rust SDK
//!
//! A Rust client for the OANDA v20 REST API.
//!
//! ## Modules
//!
//! - [`api`]: REST client, endpoint builders, request/response types
//! - [`network`]: API host constants and [`network::Environment`]
//! - [`shared`]: Granularity, decimal helpers and serde helpers
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use oanda_sdk::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = OandaClient::new("101-004-1435156-001", "token", Environment::Practice)?;
//!
//!     let history = client
//!         .get_candles("EUR_USD", "50", Granularity::H1.as_str())
//!         .await?;
//!     println!("Last close: {:?}", history.extract_closed().last());
//!
//!     let pricing = client.get_instrument_price("EUR_USD").await?;
//!     println!("Spread: {:?}", pricing.prices.first().and_then(|p| p.spread()));
//!
//!     Ok(())
//! }
//! ```

// ============================================================================
// MODULES
// ============================================================================

/// REST API client module: connection, endpoints, record types.
pub mod api;

/// Network URL constants.
pub mod network;

/// Shared utilities and types.
pub mod shared;

// ============================================================================
// PRELUDE
// ============================================================================

/// Prelude module for convenient imports.
///
/// ```rust,ignore
/// use oanda_sdk::prelude::*;
/// ```
pub mod prelude {
    #[cfg(feature = "http")]
    pub use crate::api::{OandaClient, OandaClientBuilder};

    pub use crate::api::{
        ApiError, ApiResult, ErrorResponse,
        // Instrument
        BidAskCandlestick, Candle, Candlestick, InstrumentBidAskHistory, InstrumentHistory,
        // Books
        BookBucket, BrokerBook,
        // Pricing
        InstrumentPricing, Price, PriceBucket, QuoteHomeConversionFactors, UnitsAvailable,
        UnitsAvailableDetails,
        // Trades
        CloseTradePayload, OnFill, ReceivedTrade, ReceivedTrades, Trade, TradeOrderRef,
        UpdateTradeOrdersPayload,
        // Transactions
        ModifiedTrade, OrderCancelTransaction, OrderCreateTransaction, OrderFillTransaction,
        OrderTransaction, TradeClose, TradeReduction,
    };

    // Network constants
    pub use crate::network::{Environment, LIVE_API_URL, PRACTICE_API_URL};

    // Shared utilities
    pub use crate::shared::{format_decimal, parse_decimal, Granularity};
}
