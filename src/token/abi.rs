//! ERC-20 interface fragments
//!
//! Parsed once from human-readable signatures:
//! - `name()`: Returns token name
//! - `symbol()`: Returns token symbol
//! - `decimals()`: Returns token decimal places
//! - `totalSupply()`: Returns total token supply
//! - `balanceOf(address)`: Returns token balance for an address

use alloy::json_abi::Function;
use once_cell::sync::Lazy;

fn parse(signature: &str) -> Function {
    // only ever called on the literals below
    Function::parse(signature).expect("valid ERC-20 function signature")
}

pub static NAME: Lazy<Function> = Lazy::new(|| parse("function name() external view returns (string)"));

pub static SYMBOL: Lazy<Function> = Lazy::new(|| parse("function symbol() external view returns (string)"));

pub static DECIMALS: Lazy<Function> = Lazy::new(|| parse("function decimals() external view returns (uint8)"));

pub static TOTAL_SUPPLY: Lazy<Function> =
    Lazy::new(|| parse("function totalSupply() external view returns (uint256)"));

pub static BALANCE_OF: Lazy<Function> =
    Lazy::new(|| parse("function balanceOf(address owner) external view returns (uint256)"));
