//! ERC-20 token client
//!
//! `TokenClient` is bound to one validated token address and performs the five
//! ERC-20 reads through a [`ContractInvoker`]. It is the single place where
//! invocation failures are classified into [`TokenError`] variants:
//!
//! | invoker failure                      | domain error           |
//! |--------------------------------------|------------------------|
//! | `CallError::AbiDecoding`             | `InvalidTokenContract` |
//! | `CallError::Validation` on `address` | `InvalidAddressFormat` |
//! | `CallError::InvalidAddress`          | `InvalidTokenAddress`  |
//! | anything else                        | `UnknownCall`          |
//!
//! Successful calls are checked for shape; anything unexpected becomes
//! `InvalidCallResult`.

pub mod abi;

use alloy::{dyn_abi::DynSolValue, json_abi::Function, primitives::U256};
use async_trait::async_trait;
use tracing::{info, warn};

use crate::{
    errors::{CallError, TokenError},
    traits::{ContractInvoker, TokenReader},
    types::TokenAddress,
};

/// Client for one ERC-20 token contract
#[derive(Debug, Clone)]
pub struct TokenClient<I> {
    invoker: I,
    token: TokenAddress,
}

impl<I: ContractInvoker> TokenClient<I> {
    /// Bind a client to `token_address`
    ///
    /// The address is validated before any network access.
    ///
    /// # Returns
    /// * `Ok(TokenClient)` - Ready to issue calls
    /// * `Err(TokenError::InvalidTokenAddress)` - Malformed address
    pub fn new(invoker: I, token_address: &str) -> Result<Self, TokenError> {
        let token = TokenAddress::parse(token_address)?;
        Ok(Self::with_address(invoker, token))
    }

    pub fn with_address(invoker: I, token: TokenAddress) -> Self {
        Self { invoker, token }
    }

    async fn call(&self, function: &Function, args: &[&str]) -> Result<Vec<DynSolValue>, TokenError> {
        info!(args = ?args, "calling ERC-20 function {} for token {}", function.signature(), self.token);

        self.invoker
            .invoke(self.token.address(), function, args)
            .await
            .map_err(|error| self.classify(function, error))
    }

    fn classify(&self, function: &Function, error: CallError) -> TokenError {
        let token_address = self.token.to_string();
        let function_signature = function.signature();
        warn!(token = %token_address, function = %function_signature, %error, "ERC-20 call failed");

        match error {
            CallError::AbiDecoding { .. } => TokenError::InvalidTokenContract {
                token_address,
                function_signature,
                source: Some(Box::new(error)),
            },
            CallError::Validation { ref value, .. } if error.is_address_validation() => {
                let address = value.clone();
                TokenError::InvalidAddressFormat {
                    token_address,
                    function_signature,
                    address,
                    source: Some(Box::new(error)),
                }
            }
            CallError::InvalidAddress(_) => TokenError::InvalidTokenAddress {
                token_address,
                source: Some(Box::new(error)),
            },
            _ => TokenError::UnknownCall {
                token_address,
                function_signature,
                source: Some(Box::new(error)),
            },
        }
    }

    fn invalid_result(&self, function: &Function, values: &[DynSolValue]) -> TokenError {
        TokenError::InvalidCallResult {
            token_address: self.token.to_string(),
            function_signature: function.signature(),
            result: format!("{values:?}"),
        }
    }

    async fn fetch_text(&self, function: &Function) -> Result<String, TokenError> {
        let values = self.call(function, &[]).await?;
        match values.as_slice() {
            [DynSolValue::String(text)] if !text.is_empty() => Ok(text.clone()),
            other => Err(self.invalid_result(function, other)),
        }
    }

    async fn fetch_uint(&self, function: &Function, args: &[&str]) -> Result<U256, TokenError> {
        let values = self.call(function, args).await?;
        match values.as_slice() {
            [DynSolValue::Uint(value, _)] => Ok(*value),
            other => Err(self.invalid_result(function, other)),
        }
    }
}

#[async_trait]
impl<I: ContractInvoker> TokenReader for TokenClient<I> {
    fn token_address(&self) -> &TokenAddress {
        &self.token
    }

    async fn fetch_name(&self) -> Result<String, TokenError> {
        self.fetch_text(&abi::NAME).await
    }

    async fn fetch_symbol(&self) -> Result<String, TokenError> {
        self.fetch_text(&abi::SYMBOL).await
    }

    async fn fetch_decimals(&self) -> Result<u8, TokenError> {
        let function = &*abi::DECIMALS;
        let values = self.call(function, &[]).await?;
        match values.as_slice() {
            [DynSolValue::Uint(value, _)] => u8::try_from(*value).map_err(|_| self.invalid_result(function, &values)),
            other => Err(self.invalid_result(function, other)),
        }
    }

    async fn fetch_total_supply(&self) -> Result<U256, TokenError> {
        self.fetch_uint(&abi::TOTAL_SUPPLY, &[]).await
    }

    async fn fetch_balance_of(&self, address: &str) -> Result<U256, TokenError> {
        let holder = TokenAddress::parse_holder(address, &self.token, &abi::BALANCE_OF.signature())?;
        let balance = self.fetch_uint(&abi::BALANCE_OF, &[&holder.address().to_string()]).await?;
        if balance.is_zero() {
            return Err(TokenError::InvalidAddressBalance {
                token_address: self.token.to_string(),
                function_signature: abi::BALANCE_OF.signature(),
                address: address.to_string(),
            });
        }
        Ok(balance)
    }
}
