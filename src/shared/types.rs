//! Shared type definitions for the OANDA SDK.
//!
//! This module contains types used by both the record types and the client.

use serde::{Deserialize, Serialize};

// ============================================================================
// Granularity Enum
// ============================================================================

/// Candlestick granularity.
///
/// Endpoint builders take granularity as a plain `&str` so any code the
/// service understands can be passed; this enum is a typed convenience.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Granularity {
    /// 5 second candles
    S5,
    /// 10 second candles
    S10,
    /// 15 second candles
    S15,
    /// 30 second candles
    S30,
    /// 1 minute candles
    M1,
    /// 2 minute candles
    M2,
    /// 4 minute candles
    M4,
    /// 5 minute candles
    #[default]
    M5,
    /// 10 minute candles
    M10,
    /// 15 minute candles
    M15,
    /// 30 minute candles
    M30,
    /// 1 hour candles
    H1,
    /// 2 hour candles
    H2,
    /// 3 hour candles
    H3,
    /// 4 hour candles
    H4,
    /// 6 hour candles
    H6,
    /// 8 hour candles
    H8,
    /// 12 hour candles
    H12,
    /// 1 day candles
    D,
    /// 1 week candles
    W,
    /// 1 month candles
    M,
}

impl Granularity {
    /// Get the wire representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::S5 => "S5",
            Self::S10 => "S10",
            Self::S15 => "S15",
            Self::S30 => "S30",
            Self::M1 => "M1",
            Self::M2 => "M2",
            Self::M4 => "M4",
            Self::M5 => "M5",
            Self::M10 => "M10",
            Self::M15 => "M15",
            Self::M30 => "M30",
            Self::H1 => "H1",
            Self::H2 => "H2",
            Self::H3 => "H3",
            Self::H4 => "H4",
            Self::H6 => "H6",
            Self::H8 => "H8",
            Self::H12 => "H12",
            Self::D => "D",
            Self::W => "W",
            Self::M => "M",
        }
    }
}

impl std::fmt::Display for Granularity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl AsRef<str> for Granularity {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
