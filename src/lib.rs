//! Cryptocurrency information and price lookup.
//!
//! Resolves ticker symbols ("BTC") to CoinGecko coin identifiers
//! ("bitcoin") through a cached search, then fetches detail and price
//! data for the resolved coin.
//!
//! ```no_run
//! use crypto_info::CryptoInfo;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let client = CryptoInfo::new()?;
//! let info = client.get_info("BTC").await?;
//! println!("{}: {:?}", info.name, info.current_price.get("usd"));
//! let price = client.get_price("ETH").await?;
//! println!("ETH: {:?}", price.price("usd"));
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod coingecko;
pub mod crypto;
pub mod error;
pub mod models;
pub mod provider;

pub use client::ApiClient;
pub use coingecko::CoinGeckoClient;
pub use crypto::{CryptoInfo, DEFAULT_VS_CURRENCIES};
pub use error::{ApiError, CryptoInfoError};
pub use models::{CoinDetail, CoinSearchResult, CryptoInfoRecord, PriceFields, PriceRecord};
pub use provider::CoinDataProvider;
