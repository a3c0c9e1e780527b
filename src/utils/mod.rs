//! Utility functions for ERC-20 balance handling
//!
//! # Modules
//!
//! - [`balance_utils`]: Raw balance to fixed-point decimal conversion
//!   - Magnitude-driven working precision
//!   - Round-half-up scaling by `10^decimals`
//!
//! - [`error_utils`]: Revert payload decoding
//!   - `Error(string)` reasons
//!   - Solidity panic codes
//!
//! # Example
//!
//! ```
//! use alloy::primitives::U256;
//! use erc20_balances::utils::balance_utils::format_balance_with_hint;
//!
//! let total_supply = U256::from(10u64).pow(U256::from(27u64));
//! let formatted = format_balance_with_hint(U256::from(123u64), 18, Some(total_supply));
//! assert_eq!(formatted, "0.000000000000000123");
//! ```

/// Balance formatting utilities
pub mod balance_utils;

/// Revert reason parsing utilities
pub mod error_utils;
