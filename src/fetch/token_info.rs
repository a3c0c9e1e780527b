use crate::{errors::TokenError, traits::TokenReader, types::TokenInfo};

/// Fetch name, symbol, decimals and total supply of one token
pub struct FetchTokenInfo<'a, T> {
    reader: &'a T,
}

impl<'a, T: TokenReader> FetchTokenInfo<'a, T> {
    pub fn new(reader: &'a T) -> Self {
        Self { reader }
    }

    /// Issue the four metadata calls concurrently
    ///
    /// The first failing call decides the error; the others are dropped.
    pub async fn execute(&self) -> Result<TokenInfo, TokenError> {
        let (name, symbol, decimals, total_supply) = tokio::try_join!(
            self.reader.fetch_name(),
            self.reader.fetch_symbol(),
            self.reader.fetch_decimals(),
            self.reader.fetch_total_supply(),
        )?;

        Ok(TokenInfo { name, symbol, decimals, total_supply })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{TokenAddress, U256};
    use async_trait::async_trait;

    struct FixedToken {
        token: TokenAddress,
        fail_symbol: bool,
    }

    impl FixedToken {
        fn new(fail_symbol: bool) -> Self {
            Self {
                token: TokenAddress::parse("0x0000000000000000000000000000000000001111").unwrap(),
                fail_symbol,
            }
        }
    }

    #[async_trait]
    impl TokenReader for FixedToken {
        fn token_address(&self) -> &TokenAddress {
            &self.token
        }

        async fn fetch_name(&self) -> Result<String, TokenError> {
            Ok("Shiba Inu".to_string())
        }

        async fn fetch_symbol(&self) -> Result<String, TokenError> {
            if self.fail_symbol {
                return Err(TokenError::InvalidCallResult {
                    token_address: self.token.to_string(),
                    function_signature: "symbol()".to_string(),
                    result: "[]".to_string(),
                });
            }
            Ok("SHIBA".to_string())
        }

        async fn fetch_decimals(&self) -> Result<u8, TokenError> {
            Ok(18)
        }

        async fn fetch_total_supply(&self) -> Result<U256, TokenError> {
            Ok(U256::from(10u64).pow(U256::from(27u64)))
        }

        async fn fetch_balance_of(&self, _address: &str) -> Result<U256, TokenError> {
            unreachable!("token info never reads balances")
        }
    }

    #[tokio::test]
    async fn test_execute_collects_metadata() {
        let reader = FixedToken::new(false);
        let info = FetchTokenInfo::new(&reader).execute().await.unwrap();

        assert_eq!(info.name, "Shiba Inu");
        assert_eq!(info.symbol, "SHIBA");
        assert_eq!(info.decimals, 18);
        assert_eq!(info.total_supply.to_string(), "1000000000000000000000000000");
    }

    #[tokio::test]
    async fn test_execute_propagates_failure_verbatim() {
        let reader = FixedToken::new(true);
        let error = FetchTokenInfo::new(&reader).execute().await.unwrap_err();

        assert!(matches!(error, TokenError::InvalidCallResult { ref function_signature, .. } if function_signature == "symbol()"));
    }
}
