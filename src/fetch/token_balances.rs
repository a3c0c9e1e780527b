//! Balance aggregation
//!
//! Token metadata is fetched once, then one `balanceOf` call per holder is
//! dispatched at the same time and the results are joined positionally. There is
//! no throttling; the fan-out width equals the number of requested addresses.
//!
//! Nothing is logged here. Errors propagate exactly as the reader produced them.

use futures::future::{join_all, try_join_all};

use crate::{
    errors::TokenError,
    fetch::token_info::FetchTokenInfo,
    token::abi,
    traits::TokenReader,
    types::{AddressBalance, BalanceResult, TokenAddress, TokenInfo},
    utils::balance_utils::format_balance_with_hint,
};

pub const EMPTY_ADDRESSES_MESSAGE: &str = "Received empty list of addresses to fetch balances for";

/// Fetch formatted balances of many holders of one token
pub struct FetchTokenBalances<'a, T> {
    reader: &'a T,
}

impl<'a, T: TokenReader> FetchTokenBalances<'a, T> {
    pub fn new(reader: &'a T) -> Self {
        Self { reader }
    }

    /// All-or-nothing balance lookup
    ///
    /// Every holder address is validated before the first call.
    ///
    /// # Returns
    /// * `Ok(Vec<AddressBalance>)` - One entry per input address, in input order
    /// * `Err(TokenError::InvalidArgument)` - `addresses` is empty; nothing was called
    /// * `Err(TokenError::InvalidAddressFormat)` - A malformed holder; nothing was called
    /// * `Err(TokenError)` - The first metadata or balance failure
    pub async fn execute<S: AsRef<str>>(&self, addresses: &[S]) -> Result<Vec<AddressBalance>, TokenError> {
        check_not_empty(addresses)?;
        let holders = addresses
            .iter()
            .map(|address| self.parse_holder(address.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;

        let info = FetchTokenInfo::new(self.reader).execute().await?;
        try_join_all(holders.iter().map(|holder| self.fetch_one(&info, holder))).await
    }

    /// Balance lookup that keeps going past individual failures
    ///
    /// Empty input and metadata failures still fail the whole call. After that,
    /// every address gets its own `Result`, in input order; a malformed holder only
    /// fails its own entry.
    pub async fn execute_settled<S: AsRef<str>>(&self, addresses: &[S]) -> Result<Vec<BalanceResult>, TokenError> {
        check_not_empty(addresses)?;
        let info = FetchTokenInfo::new(self.reader).execute().await?;
        let info = &info;

        Ok(join_all(addresses.iter().map(|address| async move {
            match self.parse_holder(address.as_ref()) {
                Ok(holder) => self.fetch_one(info, &holder).await,
                Err(error) => Err(error),
            }
        }))
        .await)
    }

    fn parse_holder(&self, address: &str) -> Result<TokenAddress, TokenError> {
        TokenAddress::parse_holder(address, self.reader.token_address(), &abi::BALANCE_OF.signature())
    }

    async fn fetch_one(&self, info: &TokenInfo, holder: &TokenAddress) -> Result<AddressBalance, TokenError> {
        let raw_balance = self.reader.fetch_balance_of(holder.as_str()).await?;
        Ok(AddressBalance {
            address: holder.clone(),
            raw_balance,
            balance: format_balance_with_hint(raw_balance, info.decimals, Some(info.total_supply)),
        })
    }
}

fn check_not_empty<S>(addresses: &[S]) -> Result<(), TokenError> {
    if addresses.is_empty() {
        return Err(TokenError::invalid_argument(EMPTY_ADDRESSES_MESSAGE));
    }
    Ok(())
}
