//! OANDA v20 REST API client implementation.
//!
//! The [`OandaClient`] holds the connection settings (host, account id and the
//! fixed request headers) and exposes one method per supported endpoint.
//!
//! # Example
//!
//! ```rust,ignore
//! use oanda_sdk::api::OandaClient;
//! use oanda_sdk::network::Environment;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = OandaClient::new("101-004-1435156-001", "token", Environment::Practice)?;
//!
//!     let history = client.get_candles("EUR_USD", "10", "M1").await?;
//!     println!("closes: {:?}", history.extract_closed());
//!
//!     Ok(())
//! }
//! ```

use std::fmt;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::api::endpoints;
use crate::api::error::{ApiError, ApiResult, ERROR_MARKER};
use crate::api::types::book::{OrderBookBody, PositionBookBody};
use crate::api::types::*;
use crate::network::Environment;

/// Default `User-Agent` header value.
pub const DEFAULT_USER_AGENT: &str = concat!("oanda-sdk-rust/", env!("CARGO_PKG_VERSION"));

/// Environment variable holding the account identifier.
pub const ENV_ACCOUNT_ID: &str = "OANDA_ACCOUNT_ID";
/// Environment variable holding the personal access token.
pub const ENV_API_TOKEN: &str = "OANDA_API_TOKEN";
/// Environment variable selecting `practice` or `live`.
pub const ENV_ENVIRONMENT: &str = "OANDA_ENVIRONMENT";
/// Environment variable overriding the REST base URL.
pub const ENV_API_URL: &str = "OANDA_API_URL";

/// Builder for configuring [`OandaClient`].
#[derive(Clone)]
pub struct OandaClientBuilder {
    account_id: String,
    token: String,
    base_url: String,
    user_agent: String,
    timeout: Option<Duration>,
    default_headers: Vec<(String, String)>,
}

impl fmt::Debug for OandaClientBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OandaClientBuilder")
            .field("account_id", &self.account_id)
            .field("token", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("user_agent", &self.user_agent)
            .field("timeout", &self.timeout)
            .field("default_headers", &self.default_headers)
            .finish()
    }
}

impl OandaClientBuilder {
    /// Create a new builder for a practice account.
    pub fn new(account_id: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            account_id: account_id.into(),
            token: token.into(),
            base_url: Environment::Practice.api_url().to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: None,
            default_headers: Vec::new(),
        }
    }

    /// Target the practice or live host.
    pub fn environment(mut self, environment: Environment) -> Self {
        self.base_url = environment.api_url().to_string();
        self
    }

    /// Override the base URL (e.g. a proxy or a mock server).
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set the `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set a request timeout. Without one the HTTP client default applies.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the timeout in seconds.
    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.timeout = Some(Duration::from_secs(secs));
        self
    }

    /// Add a default header to all requests.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_headers.push((name.into(), value.into()));
        self
    }

    /// Build the client.
    pub fn build(self) -> ApiResult<OandaClient> {
        let mut headers = HeaderMap::new();
        headers.insert(
            reqwest::header::USER_AGENT,
            HeaderValue::from_str(&self.user_agent).map_err(|e| {
                ApiError::InvalidParameter(format!("Invalid user agent: {}", e))
            })?,
        );

        let mut auth = HeaderValue::from_str(&format!("Bearer {}", self.token))
            .map_err(|_| ApiError::InvalidParameter("Invalid API token".to_string()))?;
        auth.set_sensitive(true);
        headers.insert(reqwest::header::AUTHORIZATION, auth);

        headers.insert(
            reqwest::header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );

        for (name, value) in self.default_headers {
            let header_name = HeaderName::try_from(name.as_str()).map_err(|e| {
                ApiError::InvalidParameter(format!("Invalid header name '{}': {}", name, e))
            })?;
            let header_value = HeaderValue::from_str(&value).map_err(|e| {
                ApiError::InvalidParameter(format!("Invalid header value for '{}': {}", name, e))
            })?;
            headers.insert(header_name, header_value);
        }

        let mut builder = Client::builder().default_headers(headers);
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        let http_client = builder.build()?;

        Ok(OandaClient {
            http_client,
            base_url: self.base_url,
            account_id: self.account_id,
        })
    }
}

/// OANDA v20 REST API client.
///
/// Immutable after construction; clone it freely to share across tasks.
#[derive(Debug, Clone)]
pub struct OandaClient {
    http_client: Client,
    base_url: String,
    account_id: String,
}

impl OandaClient {
    /// Create a client for `account_id` on the given environment.
    ///
    /// # Errors
    ///
    /// Returns an error if the token is not a valid header value or the HTTP
    /// client cannot be initialized.
    pub fn new(
        account_id: impl Into<String>,
        token: impl Into<String>,
        environment: Environment,
    ) -> ApiResult<Self> {
        OandaClientBuilder::new(account_id, token)
            .environment(environment)
            .build()
    }

    /// Create a new client builder for custom configuration.
    pub fn builder(account_id: impl Into<String>, token: impl Into<String>) -> OandaClientBuilder {
        OandaClientBuilder::new(account_id, token)
    }

    /// Create a client from `OANDA_ACCOUNT_ID`, `OANDA_API_TOKEN`,
    /// `OANDA_ENVIRONMENT` (default `practice`) and `OANDA_API_URL`.
    pub fn from_env() -> ApiResult<Self> {
        Self::builder_from_vars(|key| std::env::var(key).ok())?.build()
    }

    fn builder_from_vars<F>(var: F) -> ApiResult<OandaClientBuilder>
    where
        F: Fn(&str) -> Option<String>,
    {
        let account_id = var(ENV_ACCOUNT_ID)
            .filter(|v| !v.is_empty())
            .ok_or_else(|| ApiError::Config(format!("{} is not set", ENV_ACCOUNT_ID)))?;
        let token = var(ENV_API_TOKEN)
            .filter(|v| !v.is_empty())
            .ok_or_else(|| ApiError::Config(format!("{} is not set", ENV_API_TOKEN)))?;

        let environment = match var(ENV_ENVIRONMENT) {
            Some(value) => Environment::parse(&value).ok_or_else(|| {
                ApiError::Config(format!("{} has unknown value '{}'", ENV_ENVIRONMENT, value))
            })?,
            None => Environment::default(),
        };

        let mut builder = OandaClientBuilder::new(account_id, token).environment(environment);
        if let Some(url) = var(ENV_API_URL).filter(|v| !v.is_empty()) {
            builder = builder.base_url(url);
        }
        Ok(builder)
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the account identifier.
    pub fn account_id(&self) -> &str {
        &self.account_id
    }

    // =========================================================================
    // Transport
    // =========================================================================

    /// GET `endpoint` and return the raw body.
    ///
    /// Fails on transport errors and on bodies carrying the service error
    /// marker; the latter error embeds the route and body.
    pub async fn request(&self, endpoint: &str) -> ApiResult<String> {
        self.execute(Method::GET, endpoint, None).await
    }

    /// PUT `body` as JSON to `endpoint` and return the raw response body.
    pub async fn update<B: Serialize>(&self, endpoint: &str, body: &B) -> ApiResult<String> {
        let payload = serde_json::to_vec(body)?;
        self.execute(Method::PUT, endpoint, Some(payload)).await
    }

    async fn execute(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<Vec<u8>>,
    ) -> ApiResult<String> {
        let url = create_url(&self.base_url, endpoint);
        tracing::debug!(method = %method, url = %url, "Sending request");

        let mut request = self.http_client.request(method, &url);
        if let Some(payload) = body {
            request = request.body(payload);
        }

        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;

        check_api_error(&text, endpoint, status.as_u16())?;

        if !status.is_success() {
            tracing::warn!(
                status = %status,
                route = endpoint,
                "Non-success status without an error body"
            );
        }

        Ok(text)
    }

    async fn get_decoded<T: DeserializeOwned + Default>(&self, endpoint: &str) -> ApiResult<T> {
        let body = self.request(endpoint).await?;
        Ok(decode_or_default(endpoint, &body))
    }

    async fn update_decoded<T: DeserializeOwned + Default, B: Serialize>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> ApiResult<T> {
        let response = self.update(endpoint, body).await?;
        Ok(decode_or_default(endpoint, &response))
    }

    // =========================================================================
    // Instrument endpoints
    // =========================================================================

    /// Get the last `count` candlesticks.
    ///
    /// # Arguments
    ///
    /// * `instrument` - Symbol to query, e.g. `EUR_USD`
    /// * `count` - Number of candlesticks to return
    /// * `granularity` - Bucket size: `S5`, `M1`, `H1`, `D`, ... (see [`crate::shared::Granularity`])
    pub async fn get_candles(
        &self,
        instrument: &str,
        count: &str,
        granularity: &str,
    ) -> ApiResult<InstrumentHistory> {
        let endpoint = endpoints::candles(instrument, count, granularity);
        self.get_decoded(&endpoint).await
    }

    /// Get candlesticks between two times.
    ///
    /// # Arguments
    ///
    /// * `from` / `to` - Range bounds as Unix timestamps
    /// * `smooth` - Use the previous candle's close as each candle's open
    pub async fn get_candles_by_time(
        &self,
        instrument: &str,
        granularity: &str,
        from: &str,
        to: &str,
        smooth: bool,
    ) -> ApiResult<InstrumentHistory> {
        let endpoint = endpoints::candles_by_time(instrument, granularity, from, to, smooth);
        self.get_decoded(&endpoint).await
    }

    /// Get the last `count` candlesticks with separate bid and ask prices.
    pub async fn get_bid_ask_candles(
        &self,
        instrument: &str,
        count: &str,
        granularity: &str,
    ) -> ApiResult<InstrumentBidAskHistory> {
        let endpoint = endpoints::bid_ask_candles(instrument, count, granularity);
        self.get_decoded(&endpoint).await
    }

    /// Get bid/ask candlesticks between two Unix timestamps.
    pub async fn get_bid_ask_candles_by_time(
        &self,
        instrument: &str,
        granularity: &str,
        from: &str,
        to: &str,
        smooth: bool,
    ) -> ApiResult<InstrumentBidAskHistory> {
        let endpoint =
            endpoints::bid_ask_candles_by_time(instrument, granularity, from, to, smooth);
        self.get_decoded(&endpoint).await
    }

    /// Get the order book snapshot of an instrument.
    pub async fn order_book(&self, instrument: &str) -> ApiResult<BrokerBook> {
        let endpoint = endpoints::order_book(instrument);
        let body: OrderBookBody = self.get_decoded(&endpoint).await?;
        Ok(body.into())
    }

    /// Get the position book snapshot of an instrument.
    pub async fn position_book(&self, instrument: &str) -> ApiResult<BrokerBook> {
        let endpoint = endpoints::position_book(instrument);
        let body: PositionBookBody = self.get_decoded(&endpoint).await?;
        Ok(body.into())
    }

    // =========================================================================
    // Pricing endpoints
    // =========================================================================

    /// Get the current price of one instrument.
    pub async fn get_instrument_price(&self, instrument: &str) -> ApiResult<InstrumentPricing> {
        self.get_pricing(&[instrument]).await
    }

    /// Get current prices of several instruments in one call.
    pub async fn get_pricing(&self, instruments: &[&str]) -> ApiResult<InstrumentPricing> {
        let endpoint = endpoints::pricing(&self.account_id, instruments);
        self.get_decoded(&endpoint).await
    }

    // =========================================================================
    // Trade endpoints
    // =========================================================================

    /// Get the trades of the account for one instrument.
    pub async fn get_trades_for_instrument(&self, instrument: &str) -> ApiResult<ReceivedTrades> {
        let endpoint = endpoints::trades_for_instrument(&self.account_id, instrument);
        self.get_decoded(&endpoint).await
    }

    /// Get all open trades of the account.
    pub async fn get_open_trades(&self) -> ApiResult<ReceivedTrades> {
        let endpoint = endpoints::open_trades(&self.account_id);
        self.get_decoded(&endpoint).await
    }

    /// Get one trade by ticket.
    pub async fn get_trade(&self, ticket: &str) -> ApiResult<ReceivedTrade> {
        let endpoint = endpoints::trade(&self.account_id, ticket);
        self.get_decoded(&endpoint).await
    }

    /// Close part or all of a trade.
    ///
    /// [`CloseTradePayload::all`] closes the whole trade.
    pub async fn reduce_trade_size(
        &self,
        ticket: &str,
        body: CloseTradePayload,
    ) -> ApiResult<ModifiedTrade> {
        let endpoint = endpoints::trade(&self.account_id, ticket);
        self.update_decoded(&endpoint, &body).await
    }

    /// Create or replace the stop-loss, take-profit and trailing-stop orders
    /// of a trade.
    pub async fn update_trade_orders(
        &self,
        ticket: &str,
        body: UpdateTradeOrdersPayload,
    ) -> ApiResult<ModifiedTrade> {
        let endpoint = endpoints::trade_orders(&self.account_id, ticket);
        self.update_decoded(&endpoint, &body).await
    }
}

// =============================================================================
// Helpers
// =============================================================================

/// Join host and endpoint.
pub(crate) fn create_url(base_url: &str, endpoint: &str) -> String {
    let mut url = String::with_capacity(base_url.len() + endpoint.len());
    url.push_str(base_url);
    url.push_str(endpoint);
    url
}

/// Fail if `body` carries the service error marker.
pub(crate) fn check_api_error(body: &str, route: &str, status: u16) -> ApiResult<()> {
    if body.contains(ERROR_MARKER) {
        return Err(ApiError::oanda(route, status, body.to_string()));
    }
    Ok(())
}

/// Decode `body`, logging and returning an empty record on failure.
pub(crate) fn decode_or_default<T: DeserializeOwned + Default>(route: &str, body: &str) -> T {
    match serde_json::from_str(body) {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!(route, error = %e, "Failed to decode response body");
            T::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_client_creation() {
        let client = OandaClient::new("101-1", "token", Environment::Live).unwrap();
        assert_eq!(client.base_url(), "https://api-fxtrade.oanda.com/v3");
        assert_eq!(client.account_id(), "101-1");
    }

    #[test]
    fn test_client_builder() {
        let client = OandaClient::builder("101-1", "token")
            .base_url("http://localhost:8080/v3/")
            .timeout_secs(5)
            .header("X-Custom", "test")
            .build()
            .unwrap();

        // Base URL should have trailing slash removed
        assert_eq!(client.base_url(), "http://localhost:8080/v3");
    }

    #[test]
    fn test_builder_rejects_bad_header() {
        let res = OandaClient::builder("101-1", "token")
            .header("bad header", "x")
            .build();
        assert!(matches!(res, Err(ApiError::InvalidParameter(_))));

        let res = OandaClient::builder("101-1", "tok\nen").build();
        assert!(matches!(res, Err(ApiError::InvalidParameter(_))));
    }

    #[test]
    fn test_builder_debug_redacts_token() {
        let builder = OandaClient::builder("101-1", "super-secret");
        let dbg = format!("{:?}", builder);
        assert!(!dbg.contains("super-secret"));
    }

    #[test]
    fn test_builder_from_vars() {
        let vars: HashMap<&str, &str> = [
            (ENV_ACCOUNT_ID, "101-2"),
            (ENV_API_TOKEN, "abc"),
            (ENV_ENVIRONMENT, "live"),
        ]
        .into_iter()
        .collect();
        let client = OandaClient::builder_from_vars(|k| vars.get(k).map(|v| v.to_string()))
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(client.account_id(), "101-2");
        assert_eq!(client.base_url(), "https://api-fxtrade.oanda.com/v3");
    }

    #[test]
    fn test_builder_from_vars_url_override() {
        let vars: HashMap<&str, &str> = [
            (ENV_ACCOUNT_ID, "101-2"),
            (ENV_API_TOKEN, "abc"),
            (ENV_API_URL, "http://127.0.0.1:9000"),
        ]
        .into_iter()
        .collect();
        let client = OandaClient::builder_from_vars(|k| vars.get(k).map(|v| v.to_string()))
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(client.base_url(), "http://127.0.0.1:9000");
    }

    #[test]
    fn test_builder_from_vars_missing() {
        let res = OandaClient::builder_from_vars(|k| {
            (k == ENV_ACCOUNT_ID).then(|| "101-2".to_string())
        });
        assert!(matches!(res, Err(ApiError::Config(msg)) if msg.contains(ENV_API_TOKEN)));

        let res = OandaClient::builder_from_vars(|k| match k {
            ENV_ENVIRONMENT => Some("staging".to_string()),
            _ => Some("x".to_string()),
        });
        assert!(matches!(res, Err(ApiError::Config(_))));
    }

    #[test]
    fn test_create_url() {
        assert_eq!(
            create_url("https://api-fxpractice.oanda.com/v3", "/accounts/1/openTrades"),
            "https://api-fxpractice.oanda.com/v3/accounts/1/openTrades"
        );
    }

    #[test]
    fn test_check_api_error_marker() {
        assert!(check_api_error(r#"{"trades":[]}"#, "/r", 200).is_ok());

        // Marker wins even when the rest of the body is valid JSON for the route.
        let body = r#"{"candles":[],"errorMessage":"Invalid granularity"}"#;
        let err = check_api_error(body, "/instruments/EUR_USD/candles", 200).unwrap_err();
        match err {
            ApiError::Oanda { route, body: raw, .. } => {
                assert_eq!(route, "/instruments/EUR_USD/candles");
                assert_eq!(raw, body);
            }
            other => panic!("unexpected error: {other:?}"),
        }

        // Not even JSON.
        assert!(check_api_error("errorMessage", "/r", 500).is_err());
    }

    #[test]
    fn test_decode_or_default_swallows_malformed_json() {
        let history: InstrumentHistory = decode_or_default("/r", "{not json");
        assert_eq!(history, InstrumentHistory::default());

        let trades: ReceivedTrades = decode_or_default("/r", r#"{"trades": 5}"#);
        assert!(trades.trades.is_empty());
    }

    #[test]
    fn test_decode_or_default_fills_missing_fields() {
        let trades: ReceivedTrades = decode_or_default("/r", r#"{"lastTransactionID":"9"}"#);
        assert_eq!(trades.last_transaction_id, "9");
        assert!(trades.trades.is_empty());
    }
}
