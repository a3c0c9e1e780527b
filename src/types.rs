//! Core types for ERC-20 token lookups
//!
//! - `TokenAddress`: validated contract or holder address, kept with its original spelling
//! - `TokenInfo`: token metadata fetched per request
//! - `AddressBalance`: one holder's raw and human-readable balance

use std::{fmt, str::FromStr};

pub use alloy::primitives::{Address, U256};
use serde::{Serialize, Serializer};

use crate::errors::{BoxError, TokenError};

/// A validated Ethereum address, used both for ERC-20 contracts and for holders
///
/// Accepts a `0x`-prefixed, 20-byte hex string in any letter case. The caller's
/// spelling is preserved for messages; the parsed `Address` is used for calls.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TokenAddress {
    raw: String,
    address: Address,
}

impl TokenAddress {
    /// Validate a candidate address string
    ///
    /// # Returns
    /// * `Ok(TokenAddress)` - The address is well formed
    /// * `Err(TokenError::InvalidTokenAddress)` - Missing prefix, wrong length or non-hex digits
    pub fn parse(candidate: &str) -> Result<Self, TokenError> {
        let invalid = |source| TokenError::InvalidTokenAddress {
            token_address: candidate.to_string(),
            source,
        };

        if !(candidate.starts_with("0x") || candidate.starts_with("0X")) {
            return Err(invalid(None));
        }
        let address = Address::from_str(&candidate[2..]).map_err(|e| invalid(Some(Box::new(e) as BoxError)))?;

        Ok(Self { raw: candidate.to_string(), address })
    }

    /// Validate a holder address passed to `function_signature` on `token`
    ///
    /// Same rules as [`TokenAddress::parse`], reported as
    /// `TokenError::InvalidAddressFormat`.
    pub fn parse_holder(candidate: &str, token: &TokenAddress, function_signature: &str) -> Result<Self, TokenError> {
        Self::parse(candidate).map_err(|e| TokenError::InvalidAddressFormat {
            token_address: token.to_string(),
            function_signature: function_signature.to_string(),
            address: candidate.to_string(),
            source: Some(Box::new(e) as BoxError),
        })
    }

    pub fn address(&self) -> Address {
        self.address
    }

    /// The address as the caller spelled it
    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl FromStr for TokenAddress {
    type Err = TokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for TokenAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl Serialize for TokenAddress {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.raw)
    }
}

/// ERC-20 token metadata
///
/// Fetched fresh on every request and never cached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenInfo {
    /// Token name (e.g., "Shiba Inu")
    pub name: String,
    /// Token symbol (e.g., "SHIBA")
    pub symbol: String,
    /// Number of decimal places
    pub decimals: u8,
    /// Total supply in the token's smallest unit
    #[serde(serialize_with = "serialize_decimal")]
    pub total_supply: U256,
}

/// Balance of a single holder address
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddressBalance {
    /// Holder address, serialized exactly as requested
    pub address: TokenAddress,
    /// Balance in the token's smallest unit
    #[serde(serialize_with = "serialize_decimal")]
    pub raw_balance: U256,
    /// Balance scaled by the token's decimals, with exactly `decimals` fractional digits
    pub balance: String,
}

/// Per-address outcome when partial results are requested
pub type BalanceResult = Result<AddressBalance, TokenError>;

fn serialize_decimal<S: Serializer>(value: &U256, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&value.to_string())
}
