use alloy::providers::{DynProvider, Provider, ProviderBuilder};

use crate::config::Config;

/// Create a type-erased HTTP provider for `config.rpc_url`
///
/// Only read-only `eth_call` requests are issued, so the recommended fillers
/// (nonce, gas, chain id) are disabled and no extra round-trips happen.
///
/// # Example
/// ```no_run
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// use erc20_balances::{config::Config, rpc::get_http_provider};
/// let provider = get_http_provider(&Config::new("https://eth.llamarpc.com")?);
/// # Ok(())
/// # }
/// ```
pub fn get_http_provider(config: &Config) -> DynProvider {
    ProviderBuilder::new()
        .disable_recommended_fillers()
        .connect_http(config.rpc_url.clone())
        .erased()
}
