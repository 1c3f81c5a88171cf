//! Symbol lookup and aggregation engine.
//!
//! Resolves a ticker symbol ("BTC") to the provider's stable coin
//! identifier ("bitcoin") through a cached search, then assembles
//! normalized info and price records from the provider payloads.
//!
//! Resolution policy: the first search candidate whose symbol equals
//! the query (case-insensitively) wins; with no exact match the first
//! candidate in provider relevance order is used and logged as a
//! fallback; an empty result set is an error. Successful resolutions
//! are cached for the lifetime of the engine and never re-resolved.

use crate::coingecko::CoinGeckoClient;
use crate::error::{ApiError, CryptoInfoError};
use crate::models::{CryptoInfoRecord, PriceFields, PriceRecord};
use crate::provider::CoinDataProvider;
use std::collections::HashMap;
use tokio::sync::Mutex;

/// Currencies used by `get_price` when the caller does not pick any.
pub const DEFAULT_VS_CURRENCIES: &[&str] = &["usd", "eur", "gbp"];

/// Cryptocurrency lookup engine with a process-lifetime symbol cache.
pub struct CryptoInfo<C: CoinDataProvider = CoinGeckoClient> {
    api: C,
    id_cache: Mutex<HashMap<String, String>>,
}

impl CryptoInfo {
    /// Engine backed by the public CoinGecko API.
    pub fn new() -> Result<Self, ApiError> {
        Ok(Self::with_provider(CoinGeckoClient::new()?))
    }

    /// Engine backed by CoinGecko with a Demo or Pro API key.
    pub fn with_api_key(api_key: &str) -> Result<Self, ApiError> {
        Ok(Self::with_provider(CoinGeckoClient::with_api_key(api_key)?))
    }
}

impl<C: CoinDataProvider> CryptoInfo<C> {
    /// Engine backed by a custom provider implementation.
    pub fn with_provider(api: C) -> Self {
        Self {
            api,
            id_cache: Mutex::new(HashMap::new()),
        }
    }

    /// Resolve a ticker symbol to the provider's coin identifier.
    ///
    /// Cache hits return without any provider call. A cache miss runs
    /// one search; nothing is cached unless a candidate was selected.
    pub async fn resolve(&self, symbol: &str) -> Result<String, CryptoInfoError> {
        let key = symbol.trim().to_lowercase();

        // The lock is held across the search so concurrent callers
        // cannot race duplicate resolutions of the same symbol.
        let mut cache = self.id_cache.lock().await;
        if let Some(id) = cache.get(&key) {
            return Ok(id.clone());
        }

        let coins = self
            .api
            .search_coins(&key)
            .await
            .map_err(|e| CryptoInfoError::ResolutionFailed {
                symbol: symbol.to_string(),
                source: e,
            })?;

        if let Some(exact) = coins.iter().find(|c| c.symbol.to_lowercase() == key) {
            cache.insert(key, exact.id.clone());
            return Ok(exact.id.clone());
        }

        // No exact symbol match: trust the provider's relevance ranking
        // and take the first candidate.
        if let Some(first) = coins.first() {
            log::warn!("No exact match for symbol '{}', using '{}'", key, first.id);
            cache.insert(key, first.id.clone());
            return Ok(first.id.clone());
        }

        Err(CryptoInfoError::SymbolNotFound {
            symbol: symbol.to_string(),
        })
    }

    /// Get normalized information about a cryptocurrency by its symbol.
    pub async fn get_info(&self, symbol: &str) -> Result<CryptoInfoRecord, CryptoInfoError> {
        let wrap = |source: Box<dyn std::error::Error + Send + Sync>| {
            CryptoInfoError::InfoRetrievalFailed {
                symbol: symbol.to_string(),
                source,
            }
        };

        let coin_id = self.resolve(symbol).await.map_err(|e| wrap(Box::new(e)))?;
        let detail = self
            .api
            .get_coin_by_id(&coin_id)
            .await
            .map_err(|e| wrap(Box::new(e)))?;

        let market_data = detail.market_data.unwrap_or_default();
        Ok(CryptoInfoRecord {
            id: detail.id,
            name: detail.name,
            symbol: detail.symbol.to_uppercase(),
            description: detail.description.get("en").cloned().unwrap_or_default(),
            image: detail.image.and_then(|i| i.large),
            current_price: market_data.current_price,
            market_cap: market_data.market_cap,
            market_cap_rank: detail.market_cap_rank,
            total_volume: market_data.total_volume,
            high_24h: market_data.high_24h,
            low_24h: market_data.low_24h,
            price_change_24h: market_data.price_change_24h,
            price_change_percentage_24h: market_data.price_change_percentage_24h,
            last_updated: detail.last_updated,
        })
    }

    /// Get the current price in the default currencies (usd, eur, gbp).
    pub async fn get_price(&self, symbol: &str) -> Result<PriceRecord, CryptoInfoError> {
        self.get_price_in(symbol, DEFAULT_VS_CURRENCIES).await
    }

    /// Get the current price in the given currencies, with market cap
    /// and 24h change included.
    pub async fn get_price_in(
        &self,
        symbol: &str,
        vs_currencies: &[&str],
    ) -> Result<PriceRecord, CryptoInfoError> {
        let wrap = |source: Box<dyn std::error::Error + Send + Sync>| {
            CryptoInfoError::PriceRetrievalFailed {
                symbol: symbol.to_string(),
                source,
            }
        };

        let coin_id = self.resolve(symbol).await.map_err(|e| wrap(Box::new(e)))?;
        let fields = PriceFields {
            market_cap: true,
            change_24h: true,
            ..Default::default()
        };
        let mut prices = self
            .api
            .get_coin_price(&[coin_id.as_str()], vs_currencies, fields)
            .await
            .map_err(|e| wrap(Box::new(e)))?;

        prices
            .remove(&coin_id)
            .ok_or_else(|| CryptoInfoError::PriceNotFound {
                symbol: symbol.to_string(),
            })
    }
}
