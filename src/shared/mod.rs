//! Shared utilities and types used across the record types and the client.

pub mod price;
pub mod serde_util;
pub mod types;

// Re-export commonly used items
pub use price::{format_decimal, parse_decimal};
pub use types::*;
