//! Seams between the token data-access layers
//!
//! - `ContractInvoker`: invoke a named contract function with string arguments and
//!   get decoded values or a classified `CallError`
//! - `TokenReader`: the five ERC-20 reads against one bound token
//!
//! Both traits are implemented for `Arc<T>` and `&T`, so a single invoker built at
//! start-up can be shared by every client.

use alloy::{
    dyn_abi::DynSolValue,
    json_abi::Function,
    primitives::{Address, U256},
};
use async_trait::async_trait;
use auto_impl::auto_impl;

use crate::{
    errors::{CallError, TokenError},
    types::TokenAddress,
};

/// Contract call invocation
///
/// Implementations own ABI encoding/decoding and the transport. They report
/// failures in their own categories; they never produce `TokenError`.
#[async_trait]
#[auto_impl(Arc, &)]
pub trait ContractInvoker: Send + Sync {
    /// Call `function` on `contract` with `args` coerced to the function's input types
    ///
    /// # Returns
    /// * `Ok(Vec<DynSolValue>)` - Decoded return values, one per declared output
    /// * `Err(CallError)` - Argument validation, decoding or transport failure
    async fn invoke(&self, contract: Address, function: &Function, args: &[&str]) -> Result<Vec<DynSolValue>, CallError>;
}

/// Read access to one ERC-20 token
#[async_trait]
#[auto_impl(Arc, &)]
pub trait TokenReader: Send + Sync {
    /// Address of the token this reader is bound to
    fn token_address(&self) -> &TokenAddress;

    async fn fetch_name(&self) -> Result<String, TokenError>;

    async fn fetch_symbol(&self) -> Result<String, TokenError>;

    async fn fetch_decimals(&self) -> Result<u8, TokenError>;

    async fn fetch_total_supply(&self) -> Result<U256, TokenError>;

    /// Raw balance of `address`; a zero result is reported as `InvalidAddressBalance`
    async fn fetch_balance_of(&self, address: &str) -> Result<U256, TokenError>;
}
