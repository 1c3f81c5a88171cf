//! Sample usage of the crypto-info library.
//!
//! Run with: cargo run --bin sample_usage

use anyhow::Result;
use crypto_info::CryptoInfo;

/// Print detailed information about a cryptocurrency.
async fn print_crypto_details(client: &CryptoInfo, symbol: &str) {
    let info = match client.get_info(symbol).await {
        Ok(info) => info,
        Err(e) => {
            eprintln!("Error retrieving information for {}: {}", symbol, e);
            return;
        }
    };

    println!("\n{}", "=".repeat(50));
    println!("Cryptocurrency Information: {} ({})", info.name, info.symbol);
    println!("{}", "=".repeat(50));

    println!("ID: {}", info.id);
    if let Some(rank) = info.market_cap_rank {
        println!("Market Cap Rank: {}", rank);
    }

    if let Some(usd) = info.current_price.get("usd") {
        println!("\nCurrent Price (USD): ${:.2}", usd);
    }
    if let Some(eur) = info.current_price.get("eur") {
        println!("Current Price (EUR): €{:.2}", eur);
    }
    if let Some(gbp) = info.current_price.get("gbp") {
        println!("Current Price (GBP): £{:.2}", gbp);
    }

    if let Some(change) = info.price_change_24h {
        println!("\n24h Price Change: ${:.2}", change);
    }
    if let Some(pct) = info.price_change_percentage_24h {
        println!("24h Price Change (%): {:.2}%", pct);
    }

    if let Some(cap) = info.market_cap.get("usd") {
        println!("\nMarket Cap (USD): ${:.2}", cap);
    }
    if let Some(vol) = info.total_volume.get("usd") {
        println!("24h Trading Volume (USD): ${:.2}", vol);
    }

    if let (Some(high), Some(low)) = (info.high_24h.get("usd"), info.low_24h.get("usd")) {
        println!("\n24h High (USD): ${:.2}", high);
        println!("24h Low (USD): ${:.2}", low);
    }

    if let Some(updated) = info.last_updated {
        println!("\nLast Updated: {}", updated);
    }
    println!("{}\n", "=".repeat(50));
}

/// Print current prices for several cryptocurrencies.
async fn print_prices(client: &CryptoInfo, symbols: &[&str]) {
    println!("\n{}", "=".repeat(50));
    println!("Cryptocurrency Prices");
    println!("{}", "=".repeat(50));

    for symbol in symbols {
        match client.get_price(symbol).await {
            Ok(price) => {
                println!("{}:", symbol);
                if let Some(usd) = price.price("usd") {
                    println!("  USD: ${:.2}", usd);
                }
                if let Some(eur) = price.price("eur") {
                    println!("  EUR: €{:.2}", eur);
                }
                if let Some(gbp) = price.price("gbp") {
                    println!("  GBP: £{:.2}", gbp);
                }
                println!();
            }
            Err(e) => eprintln!("Error retrieving price for {}: {}", symbol, e),
        }
    }
    println!("{}\n", "=".repeat(50));
}

#[tokio::main]
async fn main() -> Result<()> {
    println!("\nCrypto Info - Sample Usage\n");

    let client = CryptoInfo::new()?;

    print_crypto_details(&client, "BTC").await;
    print_crypto_details(&client, "ETH").await;

    print_prices(&client, &["BTC", "ETH", "SOL", "RAY"]).await;

    Ok(())
}
