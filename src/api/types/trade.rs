//! Trade-related types for the trade endpoints.

use crate::shared::parse_decimal;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Summary of a dependent order (stop loss, take profit, trailing stop)
/// attached to a trade.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TradeOrderRef {
    pub id: String,
    /// Trigger price as decimal string
    pub price: String,
    /// Trailing distance as decimal string (trailing stops only)
    pub distance: String,
    pub state: String,
}

/// An open or closed trade.
///
/// Units, prices and P&L stay as decimal strings; use the `*_decimal`
/// accessors for exact arithmetic.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Trade {
    pub id: String,
    pub instrument: String,
    /// Fill price as decimal string
    pub price: String,
    pub open_time: DateTime<Utc>,
    /// `OPEN`, `CLOSED` or `CLOSE_WHEN_TRADEABLE`
    pub state: String,
    pub initial_units: String,
    pub current_units: String,
    pub financing: String,
    #[serde(rename = "realizedPL")]
    pub realized_pl: String,
    #[serde(rename = "unrealizedPL")]
    pub unrealized_pl: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop_loss_order: Option<TradeOrderRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub take_profit_order: Option<TradeOrderRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trailing_stop_loss_order: Option<TradeOrderRef>,
}

impl Trade {
    pub fn price_decimal(&self) -> Option<Decimal> {
        parse_decimal(&self.price)
    }

    pub fn current_units_decimal(&self) -> Option<Decimal> {
        parse_decimal(&self.current_units)
    }

    pub fn realized_pl_decimal(&self) -> Option<Decimal> {
        parse_decimal(&self.realized_pl)
    }

    pub fn unrealized_pl_decimal(&self) -> Option<Decimal> {
        parse_decimal(&self.unrealized_pl)
    }

    /// Whether the trade is still open.
    pub fn is_open(&self) -> bool {
        self.state == "OPEN"
    }
}

/// Response for GET /accounts/{account}/trades and /openTrades.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReceivedTrades {
    #[serde(rename = "lastTransactionID")]
    pub last_transaction_id: String,
    pub trades: Vec<Trade>,
}

impl ReceivedTrades {
    /// Sum of unrealized P&L over all trades with a parseable value.
    pub fn total_unrealized_pl(&self) -> Decimal {
        self.trades
            .iter()
            .filter_map(Trade::unrealized_pl_decimal)
            .sum()
    }
}

/// Response for GET /accounts/{account}/trades/{ticket}.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReceivedTrade {
    #[serde(rename = "lastTransactionID")]
    pub last_transaction_id: String,
    pub trade: Trade,
}

// ============================================================================
// Request bodies
// ============================================================================

/// Body for reducing (or fully closing) a trade.
///
/// `units` is a positive decimal string or `"ALL"`; the default closes the
/// whole trade.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CloseTradePayload {
    #[serde(rename = "Units")]
    pub units: String,
}

impl CloseTradePayload {
    /// Close the whole trade.
    pub fn all() -> Self {
        Self {
            units: "ALL".to_string(),
        }
    }

    /// Close part of the trade.
    pub fn units(units: impl Into<String>) -> Self {
        Self {
            units: units.into(),
        }
    }
}

impl Default for CloseTradePayload {
    fn default() -> Self {
        Self::all()
    }
}

/// Dependent-order details for [`UpdateTradeOrdersPayload`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OnFill {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_in_force: Option<String>,
    /// Trigger price; a string to keep the caller's precision
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    /// Distance from the current price (trailing stops)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<String>,
}

impl OnFill {
    /// Order triggered at `price`.
    pub fn at_price(price: impl Into<String>) -> Self {
        Self {
            price: Some(price.into()),
            ..Default::default()
        }
    }

    /// Order triggered `distance` away from the current price.
    pub fn at_distance(distance: impl Into<String>) -> Self {
        Self {
            distance: Some(distance.into()),
            ..Default::default()
        }
    }

    /// Set the time in force (`GTC`, `GTD`, `GFD`).
    pub fn with_time_in_force(mut self, tif: impl Into<String>) -> Self {
        self.time_in_force = Some(tif.into());
        self
    }
}

/// Body for creating/replacing a trade's dependent orders.
///
/// Omitted entries leave the existing order untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTradeOrdersPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop_loss: Option<OnFill>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub take_profit: Option<OnFill>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trailing_stop_loss: Option<OnFill>,
}

impl UpdateTradeOrdersPayload {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_stop_loss(mut self, order: OnFill) -> Self {
        self.stop_loss = Some(order);
        self
    }

    pub fn with_take_profit(mut self, order: OnFill) -> Self {
        self.take_profit = Some(order);
        self
    }

    pub fn with_trailing_stop_loss(mut self, order: OnFill) -> Self {
        self.trailing_stop_loss = Some(order);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TRADES: &str = r#"{
        "lastTransactionID": "6397",
        "trades": [{
            "currentUnits": "-600",
            "financing": "0.00000",
            "id": "6395",
            "initialUnits": "-600",
            "instrument": "EUR_USD",
            "openTime": "2016-06-22T18:41:48.258142231Z",
            "price": "1.13033",
            "realizedPL": "0.00000",
            "state": "OPEN",
            "stopLossOrder": {"id": "6397", "price": "1.14000", "state": "PENDING"},
            "takeProfitOrder": {"id": "6396", "price": "1.12000", "state": "PENDING"},
            "unrealizedPL": "-0.01438"
        }, {
            "currentUnits": "100",
            "financing": "-0.0021",
            "id": "6390",
            "initialUnits": "100",
            "instrument": "EUR_USD",
            "openTime": "2016-06-22T18:40:00Z",
            "price": "1.12900",
            "realizedPL": "0",
            "state": "OPEN",
            "unrealizedPL": "0.51438"
        }]
    }"#;

    #[test]
    fn test_trades_decode() {
        let resp: ReceivedTrades = serde_json::from_str(TRADES).unwrap();
        assert_eq!(resp.last_transaction_id, "6397");
        assert_eq!(resp.trades.len(), 2);

        let first = &resp.trades[0];
        assert_eq!(first.current_units, "-600");
        assert_eq!(first.unrealized_pl, "-0.01438");
        assert_eq!(first.stop_loss_order.as_ref().unwrap().price, "1.14000");
        assert_eq!(first.take_profit_order.as_ref().unwrap().id, "6396");
        assert!(first.trailing_stop_loss_order.is_none());
        assert!(first.is_open());
    }

    #[test]
    fn test_decimal_accessors() {
        let resp: ReceivedTrades = serde_json::from_str(TRADES).unwrap();
        let first = &resp.trades[0];
        assert_eq!(first.current_units_decimal(), Some(Decimal::new(-600, 0)));
        assert_eq!(first.price_decimal(), Some(Decimal::new(113033, 5)));
        assert_eq!(resp.total_unrealized_pl(), Decimal::new(5, 1));
    }

    #[test]
    fn test_single_trade_decode() {
        let json = r#"{"lastTransactionID": "10", "trade": {"id": "7", "instrument": "GBP_USD", "state": "CLOSED", "realizedPL": "12.5"}}"#;
        let resp: ReceivedTrade = serde_json::from_str(json).unwrap();
        assert_eq!(resp.trade.id, "7");
        assert!(!resp.trade.is_open());
        assert_eq!(resp.trade.realized_pl_decimal(), Some(Decimal::new(125, 1)));
        assert_eq!(resp.trade.unrealized_pl_decimal(), None);
    }

    #[test]
    fn test_close_trade_payload_wire_name() {
        let json = serde_json::to_string(&CloseTradePayload::all()).unwrap();
        assert_eq!(json, r#"{"Units":"ALL"}"#);

        let json = serde_json::to_string(&CloseTradePayload::units("250")).unwrap();
        assert_eq!(json, r#"{"Units":"250"}"#);
        assert_eq!(CloseTradePayload::default(), CloseTradePayload::all());
    }

    #[test]
    fn test_update_trade_orders_payload_omits_unset() {
        let payload = UpdateTradeOrdersPayload::new()
            .with_stop_loss(OnFill::at_price("1.10000").with_time_in_force("GTC"))
            .with_trailing_stop_loss(OnFill::at_distance("0.00500"));
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "stopLoss": {"timeInForce": "GTC", "price": "1.10000"},
                "trailingStopLoss": {"distance": "0.00500"}
            })
        );
    }
}
