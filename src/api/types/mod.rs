//! Response and request types for the OANDA v20 REST API.
//!
//! Every response type derives `Default` so a body that fails to decode
//! yields an empty record.

pub mod book;
pub mod instrument;
pub mod pricing;
pub mod trade;
pub mod transaction;

// Re-export all types for convenience
pub use book::{BookBucket, BrokerBook};
pub use instrument::*;
pub use pricing::*;
pub use trade::*;
pub use transaction::*;
