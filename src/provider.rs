//! Provider abstraction consumed by the lookup engine.

use crate::error::ApiError;
use crate::models::{CoinDetail, CoinSearchResult, PriceFields, PriceRecord};
use async_trait::async_trait;
use std::collections::HashMap;

/// The three capabilities the lookup engine needs from a market-data
/// provider. `CoinGeckoClient` is the production implementation; tests
/// substitute a mock.
#[async_trait]
pub trait CoinDataProvider: Send + Sync {
    /// Search for coins matching `query`, ordered by provider relevance.
    async fn search_coins(&self, query: &str) -> Result<Vec<CoinSearchResult>, ApiError>;

    /// Fetch the full detail payload for a provider coin identifier.
    async fn get_coin_by_id(&self, coin_id: &str) -> Result<CoinDetail, ApiError>;

    /// Fetch current prices for `coin_ids` in `vs_currencies`, keyed by
    /// coin identifier in the response.
    async fn get_coin_price(
        &self,
        coin_ids: &[&str],
        vs_currencies: &[&str],
        fields: PriceFields,
    ) -> Result<HashMap<String, PriceRecord>, ApiError>;
}
