//! # ERC-20 Token Balances
//!
//! A data-access layer for reading ERC-20 token state over JSON-RPC.
//!
//! ## Core Features
//!
//! - **Token Metadata**
//!   - `name()`, `symbol()`, `decimals()` and `totalSupply()` fetched concurrently
//!   - Fresh on every request, nothing is cached
//!
//! - **Holder Balances**
//!   - One `balanceOf` call per holder, all dispatched at once
//!   - Results kept in input order
//!   - All-or-nothing by default, per-address results on request
//!
//! - **Balance Formatting**
//!   - Exact fixed-point rendering with `decimals` fractional digits
//!   - Working precision sized from the token's total supply
//!
//! - **Classified Errors**
//!   - Every failure carries a kind, a retryable flag and an HTTP status
//!   - Serializable `{name, kind, retryable, message}` body
//!
//! ## Features
//!
//! - `rustls-tls`: Uses rustls as the TLS implementation instead of native-tls (OpenSSL).
//!
//!   Usage example:
//!   ```toml
//!   [dependencies]
//!   erc20-balances = { version = "0.1.0", default-features = false, features = ["rustls-tls"] }
//!   ```
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use erc20_balances::{config::Config, TokenService};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let service = TokenService::from_config(&Config::new("https://eth.llamarpc.com")?);
//!
//! let shib = "0x95aD61b0a150d79219dCF64E1E6Cc01f0B64C4cE";
//! let holders = ["0xF977814e90dA44bFA03b6295A0616a897441aceC"];
//!
//! match service.get_token_balances(shib, &holders).await {
//!     Ok(balances) => {
//!         for entry in balances {
//!             println!("{}: {}", entry.address, entry.balance);
//!         }
//!     }
//!     Err(error) => {
//!         let body = error.to_body();
//!         println!("{} {}: {}", error.http_status(), body.name, body.message);
//!     }
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Module Structure
//!
//! - `api`: `TokenService`, the exposed operations
//! - `fetch`: token-info and token-balances use cases
//! - `token`: ERC-20 client and error classification
//! - `rpc`: HTTP provider and `eth_call` invoker
//! - `config`: endpoint configuration
//! - `types`: Core data structures and type definitions
//! - `traits`: Trait definitions for substitution in tests
//! - `errors`: Error types and handling
//! - `utils`: Helper functions and utilities

pub mod api;
pub mod config;
pub mod errors;
pub mod fetch;
pub mod rpc;
pub mod token;
pub mod traits;
pub mod types;
pub mod utils;

// Re-export only the essential types and functions
pub use api::TokenService;
pub use errors::{ErrorBody, ErrorKind, TokenError};
pub use token::TokenClient;
pub use traits::{ContractInvoker, TokenReader};
pub use types::{AddressBalance, TokenAddress, TokenInfo};
pub use utils::balance_utils::{format_balance, format_balance_with_hint};
