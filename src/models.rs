//! Payload shapes consumed from the provider and records returned to callers.
//!
//! Upstream JSON is loosely shaped: currency-keyed sub-objects carry an
//! arbitrary set of currency codes and most scalar fields can be
//! absent. Absent fields stay `None` / empty — they are never filled in
//! with zeroes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One entry of a provider search response, in provider relevance order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoinSearchResult {
    pub id: String,
    pub symbol: String,
    #[serde(default)]
    pub name: String,
}

/// Image URLs from the coin detail payload.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CoinImage {
    pub thumb: Option<String>,
    pub small: Option<String>,
    pub large: Option<String>,
}

/// Market data sub-object of the coin detail payload.
///
/// The five currency-keyed maps hold whatever currencies the provider
/// returned; a missing map deserializes as empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MarketData {
    #[serde(default)]
    pub current_price: HashMap<String, f64>,
    #[serde(default)]
    pub market_cap: HashMap<String, f64>,
    #[serde(default)]
    pub total_volume: HashMap<String, f64>,
    #[serde(default)]
    pub high_24h: HashMap<String, f64>,
    #[serde(default)]
    pub low_24h: HashMap<String, f64>,
    pub price_change_24h: Option<f64>,
    pub price_change_percentage_24h: Option<f64>,
}

/// Full coin detail payload from the provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoinDetail {
    pub id: String,
    pub symbol: String,
    pub name: String,
    /// Localized descriptions keyed by language code (e.g. "en").
    #[serde(default)]
    pub description: HashMap<String, String>,
    pub image: Option<CoinImage>,
    pub market_cap_rank: Option<u32>,
    pub market_data: Option<MarketData>,
    pub last_updated: Option<DateTime<Utc>>,
}

/// Optional per-currency fields to request from the batch price endpoint.
#[derive(Debug, Clone, Copy, Default)]
pub struct PriceFields {
    pub market_cap: bool,
    pub volume_24h: bool,
    pub change_24h: bool,
    pub last_updated_at: bool,
}

/// Price data for a single coin from the batch price endpoint.
///
/// The provider returns a flat object with plain currency keys
/// ("usd") plus suffixed keys for the optional fields
/// ("usd_market_cap", "usd_24h_vol", "usd_24h_change"). The map is kept
/// verbatim; the accessors below look up the suffixed keys.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PriceRecord {
    #[serde(flatten)]
    pub values: HashMap<String, f64>,
}

impl PriceRecord {
    /// Price in the given currency, if present.
    pub fn price(&self, currency: &str) -> Option<f64> {
        self.values.get(&currency.to_lowercase()).copied()
    }

    /// Market cap in the given currency, if requested and present.
    pub fn market_cap(&self, currency: &str) -> Option<f64> {
        self.values
            .get(&format!("{}_market_cap", currency.to_lowercase()))
            .copied()
    }

    /// 24h volume in the given currency, if requested and present.
    pub fn volume_24h(&self, currency: &str) -> Option<f64> {
        self.values
            .get(&format!("{}_24h_vol", currency.to_lowercase()))
            .copied()
    }

    /// 24h change in the given currency, if requested and present.
    pub fn change_24h(&self, currency: &str) -> Option<f64> {
        self.values
            .get(&format!("{}_24h_change", currency.to_lowercase()))
            .copied()
    }

    /// Unix timestamp of the last update, if requested and present.
    pub fn last_updated_at(&self) -> Option<i64> {
        self.values.get("last_updated_at").map(|v| *v as i64)
    }
}

/// Normalized information about one cryptocurrency.
///
/// The five currency maps carry exactly the currencies the provider
/// returned. `symbol` is always upper-cased.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CryptoInfoRecord {
    pub id: String,
    pub name: String,
    pub symbol: String,
    pub description: String,
    pub image: Option<String>,
    pub current_price: HashMap<String, f64>,
    pub market_cap: HashMap<String, f64>,
    pub market_cap_rank: Option<u32>,
    pub total_volume: HashMap<String, f64>,
    pub high_24h: HashMap<String, f64>,
    pub low_24h: HashMap<String, f64>,
    pub price_change_24h: Option<f64>,
    pub price_change_percentage_24h: Option<f64>,
    pub last_updated: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_coin_detail_deserialization() {
        let detail: CoinDetail = serde_json::from_value(json!({
            "id": "bitcoin",
            "symbol": "btc",
            "name": "Bitcoin",
            "description": {"en": "Bitcoin is a cryptocurrency."},
            "image": {"large": "https://example.com/bitcoin.png"},
            "market_cap_rank": 1,
            "market_data": {
                "current_price": {"usd": 50000.0, "eur": 42000.0},
                "market_cap": {"usd": 1000000000.0},
                "price_change_24h": 1000.0,
                "price_change_percentage_24h": 2.0
            },
            "last_updated": "2023-01-01T00:00:00Z"
        }))
        .unwrap();

        assert_eq!(detail.id, "bitcoin");
        let market_data = detail.market_data.unwrap();
        assert_eq!(market_data.current_price.get("usd"), Some(&50000.0));
        assert_eq!(market_data.current_price.len(), 2);
        // Maps absent upstream stay empty, not invented.
        assert!(market_data.total_volume.is_empty());
        assert_eq!(detail.image.unwrap().large.as_deref(), Some("https://example.com/bitcoin.png"));
    }

    #[test]
    fn test_coin_detail_minimal_payload() {
        let detail: CoinDetail = serde_json::from_value(json!({
            "id": "obscurecoin",
            "symbol": "obs",
            "name": "Obscure Coin"
        }))
        .unwrap();

        assert!(detail.description.is_empty());
        assert!(detail.image.is_none());
        assert!(detail.market_cap_rank.is_none());
        assert!(detail.market_data.is_none());
        assert!(detail.last_updated.is_none());
    }

    #[test]
    fn test_price_record_accessors() {
        let record: PriceRecord = serde_json::from_value(json!({
            "usd": 50000.0,
            "usd_market_cap": 1000000000.0,
            "usd_24h_vol": 50000000.0,
            "usd_24h_change": 2.5,
            "eur": 42000.0,
            "last_updated_at": 1672531200.0
        }))
        .unwrap();

        assert_eq!(record.price("USD"), Some(50000.0));
        assert_eq!(record.price("eur"), Some(42000.0));
        assert_eq!(record.market_cap("usd"), Some(1000000000.0));
        assert_eq!(record.volume_24h("usd"), Some(50000000.0));
        assert_eq!(record.change_24h("usd"), Some(2.5));
        assert_eq!(record.last_updated_at(), Some(1672531200));
        assert_eq!(record.price("gbp"), None);
        assert_eq!(record.market_cap("eur"), None);
    }
}
