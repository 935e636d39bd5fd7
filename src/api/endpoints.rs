//! Endpoint path builders.
//!
//! Each function is a pure concatenation of its inputs into a path relative
//! to the API base URL. Values are not validated or escaped; the service is
//! the only validator.

/// GET candles by count.
pub fn candles(instrument: &str, count: &str, granularity: &str) -> String {
    format!(
        "/instruments/{}/candles?count={}&granularity={}",
        instrument, count, granularity
    )
}

/// GET candles between two Unix timestamps.
///
/// The query starts directly at `granularity`; the service treats
/// `candles?&granularity=` the same way, so no leading `&` is emitted.
pub fn candles_by_time(
    instrument: &str,
    granularity: &str,
    from: &str,
    to: &str,
    smooth: bool,
) -> String {
    format!(
        "/instruments/{}/candles?granularity={}&from={}&to={}&smooth={}",
        instrument, granularity, from, to, smooth
    )
}

/// GET bid/ask candles by count.
pub fn bid_ask_candles(instrument: &str, count: &str, granularity: &str) -> String {
    format!(
        "/instruments/{}/candles?count={}&granularity={}&price=BA",
        instrument, count, granularity
    )
}

/// GET bid/ask candles between two Unix timestamps.
///
/// Same query layout as [`candles_by_time`] plus `price=BA`.
pub fn bid_ask_candles_by_time(
    instrument: &str,
    granularity: &str,
    from: &str,
    to: &str,
    smooth: bool,
) -> String {
    format!(
        "/instruments/{}/candles?granularity={}&price=BA&from={}&to={}&smooth={}",
        instrument, granularity, from, to, smooth
    )
}

pub fn order_book(instrument: &str) -> String {
    format!("/instruments/{}/orderBook", instrument)
}

pub fn position_book(instrument: &str) -> String {
    format!("/instruments/{}/positionBook", instrument)
}

/// GET pricing; several instruments are comma-joined.
pub fn pricing(account_id: &str, instruments: &[&str]) -> String {
    format!(
        "/accounts/{}/pricing?instruments={}",
        account_id,
        instruments.join(",")
    )
}

pub fn trades_for_instrument(account_id: &str, instrument: &str) -> String {
    format!("/accounts/{}/trades?instrument={}", account_id, instrument)
}

pub fn open_trades(account_id: &str) -> String {
    format!("/accounts/{}/openTrades", account_id)
}

/// Single trade; also the PUT target for reducing a trade.
pub fn trade(account_id: &str, ticket: &str) -> String {
    format!("/accounts/{}/trades/{}", account_id, ticket)
}

pub fn trade_orders(account_id: &str, ticket: &str) -> String {
    format!("/accounts/{}/trades/{}/orders", account_id, ticket)
}
