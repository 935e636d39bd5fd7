//! Transaction records returned by trade modification endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Which trade a market order closes, and by how much.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TradeClose {
    pub units: String,
    #[serde(rename = "tradeID")]
    pub trade_id: String,
}

/// A trade closed or reduced by a fill.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TradeReduction {
    #[serde(rename = "tradeID")]
    pub trade_id: String,
    pub units: String,
    #[serde(rename = "realizedPL")]
    pub realized_pl: String,
    pub financing: String,
}

/// The market order created to close/reduce a trade.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OrderCreateTransaction {
    #[serde(rename = "type")]
    pub transaction_type: String,
    pub instrument: String,
    pub units: String,
    pub time_in_force: String,
    pub position_fill: String,
    pub reason: String,
    pub trade_close: TradeClose,
    pub id: String,
    #[serde(rename = "userID")]
    pub user_id: i64,
    #[serde(rename = "accountID")]
    pub account_id: String,
    #[serde(rename = "batchID")]
    pub batch_id: String,
    #[serde(rename = "requestID")]
    pub request_id: String,
    pub time: DateTime<Utc>,
}

/// The fill of the closing order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OrderFillTransaction {
    #[serde(rename = "type")]
    pub transaction_type: String,
    pub instrument: String,
    pub units: String,
    pub price: String,
    pub full_price: String,
    pub pl: String,
    pub financing: String,
    pub commission: String,
    pub account_balance: String,
    pub trade_opened: String,
    pub time_in_force: String,
    pub position_fill: String,
    pub reason: String,
    pub trades_closed: Vec<TradeReduction>,
    pub trade_reduced: TradeReduction,
    pub id: String,
    #[serde(rename = "userID")]
    pub user_id: i64,
    #[serde(rename = "accountID")]
    pub account_id: String,
    #[serde(rename = "batchID")]
    pub batch_id: String,
    #[serde(rename = "requestID")]
    pub request_id: String,
    #[serde(rename = "orderID", alias = "orderId")]
    pub order_id: String,
    #[serde(rename = "clientOrderID", alias = "clientOrderId")]
    pub client_order_id: String,
    pub time: DateTime<Utc>,
}

/// Cancellation of the closing order (e.g. the market was halted).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OrderCancelTransaction {
    #[serde(rename = "type")]
    pub transaction_type: String,
    #[serde(rename = "orderID")]
    pub order_id: String,
    pub reason: String,
    pub id: String,
    #[serde(rename = "userID")]
    pub user_id: i64,
    #[serde(rename = "accountID")]
    pub account_id: String,
    #[serde(rename = "batchID")]
    pub batch_id: String,
    #[serde(rename = "requestID")]
    pub request_id: String,
    pub time: DateTime<Utc>,
}

/// Creation of a take-profit, stop-loss or trailing-stop order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OrderTransaction {
    #[serde(rename = "type")]
    pub transaction_type: String,
    #[serde(rename = "tradeID")]
    pub trade_id: String,
    pub price: String,
    pub distance: String,
    pub time_in_force: String,
    pub trigger_condition: String,
    pub reason: String,
    #[serde(rename = "replacesOrderID")]
    pub replaces_order_id: String,
    pub id: String,
    #[serde(rename = "accountID")]
    pub account_id: String,
    #[serde(rename = "batchID")]
    pub batch_id: String,
    pub time: DateTime<Utc>,
}

/// Response for PUT /accounts/{account}/trades/{ticket} and
/// PUT /accounts/{account}/trades/{ticket}/orders.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ModifiedTrade {
    pub order_create_transaction: OrderCreateTransaction,
    pub order_fill_transaction: OrderFillTransaction,
    pub order_cancel_transaction: OrderCancelTransaction,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub take_profit_order_transaction: Option<OrderTransaction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop_loss_order_transaction: Option<OrderTransaction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trailing_stop_loss_order_transaction: Option<OrderTransaction>,
    #[serde(rename = "relatedTransactionIDs")]
    pub related_transaction_ids: Vec<String>,
    #[serde(rename = "lastTransactionID")]
    pub last_transaction_id: String,
}

impl ModifiedTrade {
    /// Whether the closing order was filled.
    pub fn is_filled(&self) -> bool {
        !self.order_fill_transaction.id.is_empty()
    }

    /// Whether the closing order was cancelled.
    pub fn is_cancelled(&self) -> bool {
        !self.order_cancel_transaction.id.is_empty()
    }
}
