//! CoinGecko API client.
//!
//! Maps the provider capabilities onto CoinGecko v3 endpoints.
//! - Public API: 10-30 calls/minute (no API key)
//! - Demo API: 30 calls/minute (free API key, starts with "CG-")
//! - Pro API: Higher limits (paid)
//!
//! API documentation: https://docs.coingecko.com/

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{CoinDetail, CoinSearchResult, PriceFields, PriceRecord};
use crate::provider::CoinDataProvider;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue};
use std::collections::HashMap;
use std::time::Duration;

/// Public and Demo API (demo keys use the public host)
const PUBLIC_BASE_URL: &str = "https://api.coingecko.com/api/v3";
/// Pro API (paid)
const PRO_BASE_URL: &str = "https://pro-api.coingecko.com/api/v3";

/// Get base URL based on API key
fn get_base_url(api_key: Option<&str>) -> &'static str {
    match api_key {
        Some(key) if !key.starts_with("CG-") => PRO_BASE_URL,
        _ => PUBLIC_BASE_URL,
    }
}

/// CoinGecko search response wrapper
#[derive(Debug, serde::Deserialize)]
struct SearchResponse {
    #[serde(default)]
    coins: Vec<CoinSearchResult>,
}

/// Build the `/simple/price` path with the original flag set.
fn price_path(coin_ids: &[&str], vs_currencies: &[&str], fields: PriceFields) -> String {
    format!(
        "/simple/price?ids={}&vs_currencies={}&include_market_cap={}&include_24hr_vol={}&include_24hr_change={}&include_last_updated_at={}",
        coin_ids.join(","),
        vs_currencies.join(","),
        fields.market_cap,
        fields.volume_24h,
        fields.change_24h,
        fields.last_updated_at,
    )
}

/// Build the `/coins/{id}` path; market data only, no localization.
fn detail_path(coin_id: &str) -> String {
    format!(
        "/coins/{}?localization=false&tickers=false&market_data=true&community_data=false&developer_data=false&sparkline=false",
        urlencoding::encode(coin_id)
    )
}

/// Client for the CoinGecko API.
#[derive(Debug, Clone)]
pub struct CoinGeckoClient {
    api: ApiClient,
}

impl CoinGeckoClient {
    /// Public API client with the default timeout.
    pub fn new() -> Result<Self, ApiError> {
        Self::with_config(None, Duration::from_secs(crate::client::DEFAULT_TIMEOUT_SECS))
    }

    /// Client authenticated with a Demo ("CG-...") or Pro API key.
    pub fn with_api_key(api_key: &str) -> Result<Self, ApiError> {
        Self::with_config(
            Some(api_key),
            Duration::from_secs(crate::client::DEFAULT_TIMEOUT_SECS),
        )
    }

    /// Client with an optional API key and a custom request timeout.
    pub fn with_config(api_key: Option<&str>, timeout: Duration) -> Result<Self, ApiError> {
        let mut headers = HeaderMap::new();
        if let Some(key) = api_key {
            let header_name = if key.starts_with("CG-") {
                "x-cg-demo-api-key"
            } else {
                "x-cg-pro-api-key"
            };
            let value = HeaderValue::from_str(key)
                .map_err(|_| ApiError::Config("API key is not a valid header value".into()))?;
            headers.insert(header_name, value);
        }

        let api = ApiClient::builder(get_base_url(api_key), timeout, headers)?;
        Ok(Self { api })
    }
}

#[async_trait]
impl CoinDataProvider for CoinGeckoClient {
    async fn search_coins(&self, query: &str) -> Result<Vec<CoinSearchResult>, ApiError> {
        let path = format!("/search?query={}", urlencoding::encode(query));
        let data: SearchResponse = self.api.get_json(&path).await?;
        Ok(data.coins)
    }

    async fn get_coin_by_id(&self, coin_id: &str) -> Result<CoinDetail, ApiError> {
        self.api.get_json(&detail_path(coin_id)).await
    }

    async fn get_coin_price(
        &self,
        coin_ids: &[&str],
        vs_currencies: &[&str],
        fields: PriceFields,
    ) -> Result<HashMap<String, PriceRecord>, ApiError> {
        self.api
            .get_json(&price_path(coin_ids, vs_currencies, fields))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_selection() {
        assert_eq!(get_base_url(None), PUBLIC_BASE_URL);
        assert_eq!(get_base_url(Some("CG-abc123")), PUBLIC_BASE_URL);
        assert_eq!(get_base_url(Some("pro-key-xyz")), PRO_BASE_URL);
    }

    #[test]
    fn test_price_path() {
        let fields = PriceFields {
            market_cap: true,
            change_24h: true,
            ..Default::default()
        };
        let path = price_path(&["bitcoin"], &["usd", "eur", "gbp"], fields);
        assert_eq!(
            path,
            "/simple/price?ids=bitcoin&vs_currencies=usd,eur,gbp\
             &include_market_cap=true&include_24hr_vol=false\
             &include_24hr_change=true&include_last_updated_at=false"
        );
    }

    #[test]
    fn test_detail_path_encodes_id() {
        assert_eq!(
            detail_path("avalanche-2"),
            "/coins/avalanche-2?localization=false&tickers=false&market_data=true\
             &community_data=false&developer_data=false&sparkline=false"
        );
    }

    #[test]
    fn test_search_response_parsing() {
        let data: SearchResponse = serde_json::from_value(serde_json::json!({
            "coins": [
                {"id": "bitcoin", "symbol": "btc", "name": "Bitcoin"},
                {"id": "bitcoin-cash", "symbol": "bch", "name": "Bitcoin Cash"}
            ],
            "exchanges": [],
            "categories": []
        }))
        .unwrap();
        assert_eq!(data.coins.len(), 2);
        assert_eq!(data.coins[0].id, "bitcoin");
    }

    #[tokio::test]
    #[ignore] // Requires network
    async fn test_search_bitcoin() {
        let client = CoinGeckoClient::new().unwrap();
        let coins = client.search_coins("btc").await.unwrap();
        assert!(coins.iter().any(|c| c.id == "bitcoin"));
    }

    #[tokio::test]
    #[ignore] // Requires network
    async fn test_fetch_bitcoin_price() {
        let client = CoinGeckoClient::new().unwrap();
        let prices = client
            .get_coin_price(&["bitcoin"], &["usd"], PriceFields::default())
            .await
            .unwrap();
        let record = prices.get("bitcoin").unwrap();
        assert!(record.price("usd").unwrap() > 0.0);
    }
}
