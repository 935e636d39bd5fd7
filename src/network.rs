//! Network URL constants for the OANDA v20 REST API.

use serde::{Deserialize, Serialize};

/// REST base URL for practice (demo) accounts.
pub const PRACTICE_API_URL: &str = "https://api-fxpractice.oanda.com/v3";

/// REST base URL for live accounts.
pub const LIVE_API_URL: &str = "https://api-fxtrade.oanda.com/v3";

/// Trading environment an account lives in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Practice,
    Live,
}

impl Environment {
    /// REST base URL for this environment.
    pub fn api_url(&self) -> &'static str {
        match self {
            Self::Practice => PRACTICE_API_URL,
            Self::Live => LIVE_API_URL,
        }
    }

    /// Parse the value of `OANDA_ENVIRONMENT`. Case-insensitive.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "practice" | "demo" => Some(Self::Practice),
            "live" | "trade" => Some(Self::Live),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_urls() {
        assert_eq!(Environment::Practice.api_url(), PRACTICE_API_URL);
        assert_eq!(Environment::Live.api_url(), LIVE_API_URL);
        assert_eq!(Environment::default(), Environment::Practice);
    }

    #[test]
    fn test_environment_parse() {
        assert_eq!(Environment::parse("LIVE"), Some(Environment::Live));
        assert_eq!(Environment::parse(" practice "), Some(Environment::Practice));
        assert_eq!(Environment::parse("staging"), None);
    }
}
