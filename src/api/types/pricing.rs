//! Pricing snapshot types for GET /accounts/{account}/pricing.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One rung of a bid or ask ladder.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PriceBucket {
    #[serde(with = "crate::shared::serde_util::f64_string")]
    pub price: f64,
    /// Units available at this price
    pub liquidity: i64,
}

/// Long/short unit limits, as decimal strings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UnitsAvailableDetails {
    pub long: String,
    pub short: String,
}

/// Units available per order position-fill mode.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UnitsAvailable {
    pub default: UnitsAvailableDetails,
    pub open_only: UnitsAvailableDetails,
    pub reduce_first: UnitsAvailableDetails,
    pub reduce_only: UnitsAvailableDetails,
}

/// Factors converting quote currency into the account home currency.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct QuoteHomeConversionFactors {
    pub positive_units: String,
    pub negative_units: String,
}

/// Price snapshot of one instrument.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Price {
    #[serde(rename = "type")]
    pub price_type: String,
    pub instrument: String,
    pub time: DateTime<Utc>,
    pub bids: Vec<PriceBucket>,
    pub asks: Vec<PriceBucket>,
    #[serde(with = "crate::shared::serde_util::f64_string")]
    pub closeout_bid: f64,
    #[serde(with = "crate::shared::serde_util::f64_string")]
    pub closeout_ask: f64,
    pub status: String,
    pub tradeable: bool,
    pub units_available: UnitsAvailable,
    pub quote_home_conversion_factors: QuoteHomeConversionFactors,
}

impl Price {
    /// Top of the bid ladder.
    pub fn best_bid(&self) -> Option<f64> {
        self.bids.first().map(|b| b.price)
    }

    /// Top of the ask ladder.
    pub fn best_ask(&self) -> Option<f64> {
        self.asks.first().map(|a| a.price)
    }

    /// Ask minus bid at the top of the ladders.
    pub fn spread(&self) -> Option<f64> {
        Some(self.best_ask()? - self.best_bid()?)
    }
}

/// Response for GET /accounts/{account}/pricing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InstrumentPricing {
    pub time: DateTime<Utc>,
    pub prices: Vec<Price>,
}

impl InstrumentPricing {
    /// Snapshot for a single instrument, if present.
    pub fn price_for(&self, instrument: &str) -> Option<&Price> {
        self.prices.iter().find(|p| p.instrument == instrument)
    }
}
