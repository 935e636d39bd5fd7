//! Order book and position book types.

use chrono::{DateTime, Utc};
use serde::{de, Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One price bucket of a book histogram.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BookBucket {
    /// Lowest price of the bucket as decimal string
    pub price: String,
    /// Percentage of long orders/positions in this bucket
    pub long_count_percent: String,
    /// Percentage of short orders/positions in this bucket
    pub short_count_percent: String,
}

/// Snapshot histogram of resting orders or open positions by price bucket.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BrokerBook {
    pub instrument: String,
    pub time: DateTime<Utc>,
    /// Instrument price at snapshot time as decimal string
    pub price: String,
    /// Price width of each bucket as decimal string
    pub bucket_width: String,
    pub buckets: Vec<BookBucket>,
}

/// Decode a book that may be wrapped in `key`.
///
/// The envelope is chosen by key presence so that a malformed inner book
/// fails instead of decoding as an empty bare book.
fn book_from_value<E: de::Error>(mut value: Value, key: &str) -> Result<BrokerBook, E> {
    let wrapped = value.as_object_mut().and_then(|map| map.remove(key));
    BrokerBook::deserialize(wrapped.unwrap_or(value)).map_err(E::custom)
}

/// Body of GET /instruments/{instrument}/orderBook.
///
/// The live service wraps the book in `orderBook`; a bare book is accepted too.
#[derive(Debug, Clone, Default)]
pub(crate) struct OrderBookBody(BrokerBook);

impl<'de> Deserialize<'de> for OrderBookBody {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        book_from_value(value, "orderBook").map(Self)
    }
}

impl From<OrderBookBody> for BrokerBook {
    fn from(body: OrderBookBody) -> Self {
        body.0
    }
}

/// Body of GET /instruments/{instrument}/positionBook.
#[derive(Debug, Clone, Default)]
pub(crate) struct PositionBookBody(BrokerBook);

impl<'de> Deserialize<'de> for PositionBookBody {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        book_from_value(value, "positionBook").map(Self)
    }
}

impl From<PositionBookBody> for BrokerBook {
    fn from(body: PositionBookBody) -> Self {
        body.0
    }
}
