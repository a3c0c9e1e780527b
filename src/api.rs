//! Exposed token operations
//!
//! `TokenService` holds one shared invoker and builds a fresh [`TokenClient`] per
//! request. The token address is validated before any call is made.
//!
//! # Example
//! ```no_run
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! use erc20_balances::{config::Config, TokenService};
//!
//! let service = TokenService::from_config(&Config::from_env()?);
//! let info = service.get_token_info("0x95aD61b0a150d79219dCF64E1E6Cc01f0B64C4cE").await?;
//! println!("{} ({}) has {} decimals", info.name, info.symbol, info.decimals);
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

use tracing::info;

use crate::{
    config::Config,
    errors::TokenError,
    fetch::{FetchTokenBalances, FetchTokenInfo},
    rpc::RpcInvoker,
    token::TokenClient,
    traits::ContractInvoker,
    types::{AddressBalance, BalanceResult, TokenInfo},
};

#[derive(Debug)]
pub struct TokenService<I> {
    invoker: Arc<I>,
}

impl<I> Clone for TokenService<I> {
    fn clone(&self) -> Self {
        Self { invoker: Arc::clone(&self.invoker) }
    }
}

impl TokenService<RpcInvoker> {
    /// Service talking to the JSON-RPC endpoint in `config`
    pub fn from_config(config: &Config) -> Self {
        Self::new(RpcInvoker::from_config(config))
    }
}

impl<I: ContractInvoker> TokenService<I> {
    pub fn new(invoker: I) -> Self {
        Self::from_shared(Arc::new(invoker))
    }

    pub fn from_shared(invoker: Arc<I>) -> Self {
        Self { invoker }
    }

    fn client(&self, token_address: &str) -> Result<TokenClient<Arc<I>>, TokenError> {
        TokenClient::new(Arc::clone(&self.invoker), token_address)
    }

    /// Name, symbol, decimals and total supply of `token_address`
    pub async fn get_token_info(&self, token_address: &str) -> Result<TokenInfo, TokenError> {
        info!(token = token_address, "get_token_info");
        let client = self.client(token_address)?;
        FetchTokenInfo::new(&client).execute().await
    }

    /// Formatted balances of `addresses`, all-or-nothing
    pub async fn get_token_balances<S: AsRef<str>>(
        &self,
        token_address: &str,
        addresses: &[S],
    ) -> Result<Vec<AddressBalance>, TokenError> {
        info!(token = token_address, count = addresses.len(), "get_token_balances");
        let client = self.client(token_address)?;
        FetchTokenBalances::new(&client).execute(addresses).await
    }

    /// Formatted balances of `addresses`, one `Result` per address
    pub async fn get_token_balances_settled<S: AsRef<str>>(
        &self,
        token_address: &str,
        addresses: &[S],
    ) -> Result<Vec<BalanceResult>, TokenError> {
        info!(token = token_address, count = addresses.len(), "get_token_balances_settled");
        let client = self.client(token_address)?;
        FetchTokenBalances::new(&client).execute_settled(addresses).await
    }
}
