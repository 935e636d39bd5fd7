//! Candlestick types for the instrument endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// OHLC prices of one candlestick. Sent as decimal strings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Candle {
    /// Open price
    #[serde(rename = "o", with = "crate::shared::serde_util::f64_string")]
    pub open: f64,
    /// Close price
    #[serde(rename = "c", with = "crate::shared::serde_util::f64_string")]
    pub close: f64,
    /// Low price
    #[serde(rename = "l", with = "crate::shared::serde_util::f64_string")]
    pub low: f64,
    /// High price
    #[serde(rename = "h", with = "crate::shared::serde_util::f64_string")]
    pub high: f64,
}

/// Midpoint candlestick with volume and completeness flag.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Candlestick {
    /// `false` while the candle's time bucket is still open
    pub complete: bool,
    /// Tick volume
    pub volume: i64,
    /// Start of the time bucket
    pub time: DateTime<Utc>,
    /// Midpoint OHLC
    pub mid: Candle,
}

/// Candlestick with separate bid and ask OHLC (`price=BA`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BidAskCandlestick {
    pub complete: bool,
    pub volume: i64,
    pub time: DateTime<Utc>,
    /// Bid OHLC
    pub bid: Candle,
    /// Ask OHLC
    pub ask: Candle,
}

/// Response for GET /instruments/{instrument}/candles.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InstrumentHistory {
    pub instrument: String,
    pub granularity: String,
    /// Candlesticks in chronological order
    pub candles: Vec<Candlestick>,
}

impl InstrumentHistory {
    /// Close prices of every candle, in response order.
    pub fn extract_closed(&self) -> Vec<f64> {
        self.candles.iter().map(|c| c.mid.close).collect()
    }

    /// Open prices of every candle, in response order.
    pub fn extract_open(&self) -> Vec<f64> {
        self.candles.iter().map(|c| c.mid.open).collect()
    }

    /// High prices of every candle, in response order.
    pub fn extract_high(&self) -> Vec<f64> {
        self.candles.iter().map(|c| c.mid.high).collect()
    }

    /// Low prices of every candle, in response order.
    pub fn extract_low(&self) -> Vec<f64> {
        self.candles.iter().map(|c| c.mid.low).collect()
    }

    /// Volumes of every candle, in response order.
    pub fn extract_volume(&self) -> Vec<i64> {
        self.candles.iter().map(|c| c.volume).collect()
    }
}

/// Response for GET /instruments/{instrument}/candles?price=BA.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InstrumentBidAskHistory {
    pub instrument: String,
    pub granularity: String,
    pub candles: Vec<BidAskCandlestick>,
}

impl InstrumentBidAskHistory {
    pub fn extract_bid_closed(&self) -> Vec<f64> {
        self.candles.iter().map(|c| c.bid.close).collect()
    }

    pub fn extract_ask_closed(&self) -> Vec<f64> {
        self.candles.iter().map(|c| c.ask.close).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HISTORY: &str = r#"{
        "instrument": "EUR_USD",
        "granularity": "M1",
        "candles": [
            {"complete": true, "volume": 12, "time": "2024-03-01T10:00:00.000000000Z",
             "mid": {"o": "1.08010", "h": "1.08050", "l": "1.07990", "c": "1.08040"}},
            {"complete": true, "volume": 7, "time": "2024-03-01T10:01:00.000000000Z",
             "mid": {"o": "1.08040", "h": "1.08060", "l": "1.08020", "c": "1.08025"}},
            {"complete": false, "volume": 3, "time": "2024-03-01T10:02:00.000000000Z",
             "mid": {"o": "1.08025", "h": "1.08030", "l": "1.08000", "c": "1.08005"}}
        ]
    }"#;

    #[test]
    fn test_extract_series_preserves_order() {
        let history: InstrumentHistory = serde_json::from_str(HISTORY).unwrap();
        assert_eq!(history.candles.len(), 3);
        assert_eq!(history.extract_closed(), vec![1.0804, 1.08025, 1.08005]);
        assert_eq!(history.extract_open(), vec![1.0801, 1.0804, 1.08025]);
        assert_eq!(history.extract_high(), vec![1.0805, 1.0806, 1.0803]);
        assert_eq!(history.extract_low(), vec![1.0799, 1.0802, 1.08]);
        assert_eq!(history.extract_volume(), vec![12, 7, 3]);
    }

    #[test]
    fn test_incomplete_candles_are_included() {
        let history: InstrumentHistory = serde_json::from_str(HISTORY).unwrap();
        assert!(!history.candles[2].complete);
        assert_eq!(history.extract_closed().len(), history.candles.len());
    }

    #[test]
    fn test_empty_history_extracts_nothing() {
        let history = InstrumentHistory::default();
        assert!(history.extract_closed().is_empty());
        assert!(history.extract_volume().is_empty());
    }

    #[test]
    fn test_candle_time_parsed() {
        let history: InstrumentHistory = serde_json::from_str(HISTORY).unwrap();
        assert_eq!(history.candles[1].time.to_rfc3339(), "2024-03-01T10:01:00+00:00");
    }

    #[test]
    fn test_bid_ask_history() {
        let json = r#"{
            "instrument": "USD_JPY",
            "granularity": "H1",
            "candles": [{
                "complete": true, "volume": 100, "time": "2024-03-01T10:00:00Z",
                "bid": {"o": "150.010", "h": "150.100", "l": "149.900", "c": "150.050"},
                "ask": {"o": "150.020", "h": "150.110", "l": "149.910", "c": "150.060"}
            }]
        }"#;
        let history: InstrumentBidAskHistory = serde_json::from_str(json).unwrap();
        assert_eq!(history.extract_bid_closed(), vec![150.05]);
        assert_eq!(history.extract_ask_closed(), vec![150.06]);
        assert_eq!(history.candles[0].bid.low, 149.9);
    }
}
