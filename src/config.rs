//! Runtime configuration

use url::Url;

use crate::errors::InitError;

/// Environment variable holding the JSON-RPC endpoint
pub const RPC_URL_ENV: &str = "ETHEREUM_BLOCKCHAIN_ENDPOINT";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub rpc_url: Url,
}

impl Config {
    /// Build a configuration from an HTTP(S) endpoint
    ///
    /// # Returns
    /// * `Ok(Config)` - Parsed endpoint
    /// * `Err(InitError::InvalidRpcUrl)` - Unparseable URL or a non-HTTP scheme
    pub fn new(rpc_url: &str) -> Result<Self, InitError> {
        let url = Url::parse(rpc_url.trim())
            .map_err(|e| InitError::InvalidRpcUrl(format!("Failed to parse RPC URL: {e}")))?;

        match url.scheme() {
            "http" | "https" => Ok(Self { rpc_url: url }),
            scheme => Err(InitError::InvalidRpcUrl(format!("Unsupported scheme \"{scheme}\", expected http or https"))),
        }
    }

    /// Read the endpoint from `ETHEREUM_BLOCKCHAIN_ENDPOINT`
    pub fn from_env() -> Result<Self, InitError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self, InitError>
    where
        F: Fn(&str) -> Option<String>,
    {
        match lookup(RPC_URL_ENV) {
            Some(value) if !value.trim().is_empty() => Self::new(&value),
            _ => Err(InitError::MissingEnv(RPC_URL_ENV.to_string())),
        }
    }
}
