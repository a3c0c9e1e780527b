use anyhow::Result;
use erc20_balances::{config::Config, TokenService};
use tracing_subscriber::EnvFilter;

// SHIBA INU on Ethereum mainnet
const SHIB_ADDRESS: &str = "0x95aD61b0a150d79219dCF64E1E6Cc01f0B64C4cE";

const HOLDERS: [&str; 3] = [
    "0xF977814e90dA44bFA03b6295A0616a897441aceC", // Binance 8
    "0x5a52E96BAcdaBb82fd05763E25335261B270Efcb", // Binance 28
    "0xaaaaaaaaaaa",                               // malformed on purpose
];

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    println!("🚀 ERC-20 token balances");
    println!("{}", "=".repeat(60));

    // ETHEREUM_BLOCKCHAIN_ENDPOINT, e.g. https://eth.llamarpc.com
    let service = TokenService::from_config(&Config::from_env()?);

    let info = service.get_token_info(SHIB_ADDRESS).await?;
    println!("🪙 {} ({})", info.name, info.symbol);
    println!("   decimals:     {}", info.decimals);
    println!("   total supply: {}", info.total_supply);

    println!("\n🔍 All-or-nothing lookup of {} holders", HOLDERS.len());
    match service.get_token_balances(SHIB_ADDRESS, &HOLDERS).await {
        Ok(balances) => {
            for entry in balances {
                println!("✅ {}: {}", entry.address, entry.balance);
            }
        }
        Err(error) => {
            println!("❌ HTTP {}", error.http_status());
            println!("{}", serde_json::to_string_pretty(&error.to_body())?);
        }
    }

    println!("\n🔍 Per-address lookup");
    for (address, result) in HOLDERS.iter().zip(service.get_token_balances_settled(SHIB_ADDRESS, &HOLDERS).await?) {
        match result {
            Ok(entry) => println!("✅ {}: {}", address, entry.balance),
            Err(error) => println!("❌ {}: {} ({})", address, error.name(), error.kind()),
        }
    }

    Ok(())
}
