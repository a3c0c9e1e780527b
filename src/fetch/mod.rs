//! Token read use cases
//!
//! Both use cases are generic over [`TokenReader`](crate::traits::TokenReader) and
//! borrow it, so a caller can run them back to back against the same client.

pub mod token_balances;
pub mod token_info;

pub use token_balances::{FetchTokenBalances, EMPTY_ADDRESSES_MESSAGE};
pub use token_info::FetchTokenInfo;
