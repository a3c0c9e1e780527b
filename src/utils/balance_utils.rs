//! Balance formatting utilities
//!
//! Converts raw ERC-20 integer balances into fixed-point decimal strings.
//!
//! The working precision (number of significant decimal digits) is sized from the
//! token's magnitude. When it covers every digit of the balance, the conversion is
//! alloy's `format_units`. Otherwise, and for decimal counts `format_units` does not
//! render, the digits are rounded half-up at that precision and the point is placed
//! by hand.
//!
//! Output rules:
//! - exactly `decimals` fractional digits, zero padded
//! - never scientific notation
//! - `decimals == 0` renders the bare integer with no decimal point

use alloy::primitives::{utils::format_units, U256};

/// Extra significant digits on top of the computed minimum
const PRECISION_MARGIN: usize = 2;

/// Format a raw balance with exactly `decimals` fractional digits
///
/// # Example
/// ```
/// use alloy::primitives::U256;
/// use erc20_balances::utils::balance_utils::format_balance;
///
/// assert_eq!(format_balance(U256::from(123456u64), 5), "1.23456");
/// assert_eq!(format_balance(U256::ZERO, 5), "0.00000");
/// ```
pub fn format_balance(raw: U256, decimals: u8) -> String {
    format_balance_with_hint(raw, decimals, None)
}

/// Format a raw balance, sizing the working precision from `magnitude_hint`
///
/// The hint is usually the token's total supply: any holder balance is bounded by
/// it, so a precision covering the hint covers every balance of that token.
///
/// # Arguments
/// * `raw` - Balance in the token's smallest unit
/// * `decimals` - Token decimal places
/// * `magnitude_hint` - Optional upper-magnitude reference (e.g. total supply)
pub fn format_balance_with_hint(raw: U256, decimals: u8, magnitude_hint: Option<U256>) -> String {
    let precision = working_precision(raw, decimals, magnitude_hint);
    format_with_precision(raw, decimals, precision)
}

/// Significant digits needed to render `raw / 10^decimals` without loss
///
/// `max(digits(hint), digits(raw)) + decimals + PRECISION_MARGIN`
pub fn working_precision(raw: U256, decimals: u8, magnitude_hint: Option<U256>) -> usize {
    let hint_digits = magnitude_hint.map(digit_count).unwrap_or(0);
    digit_count(raw).max(hint_digits) + decimals as usize + PRECISION_MARGIN
}

/// Divide `raw` by `10^decimals` keeping at most `precision` significant digits
///
/// Digits beyond `precision` are rounded half-up. A precision below the digit count
/// of `raw` loses information; callers outside tests should use
/// [`format_balance_with_hint`].
pub fn format_with_precision(raw: U256, decimals: u8, precision: usize) -> String {
    let digits = raw.to_string();

    // format_units leaves a trailing point for 0 and rejects anything above 77
    if precision >= digits.len() && decimals > 0 {
        if let Ok(formatted) = format_units(raw, decimals) {
            return formatted;
        }
    }

    let rounded = round_half_up(&digits, precision.max(1));
    shift_point(&rounded, decimals as usize)
}

/// Number of decimal digits of `value` (`0` has one digit)
pub fn digit_count(value: U256) -> usize {
    value.to_string().len()
}

fn round_half_up(digits: &str, precision: usize) -> String {
    if digits.len() <= precision {
        return digits.to_string();
    }

    let (kept, dropped) = digits.split_at(precision);
    let mut kept: Vec<u8> = kept.bytes().map(|b| b - b'0').collect();

    if dropped.as_bytes()[0] >= b'5' {
        let mut carry = true;
        for digit in kept.iter_mut().rev() {
            if *digit == 9 {
                *digit = 0;
            } else {
                *digit += 1;
                carry = false;
                break;
            }
        }
        if carry {
            kept.insert(0, 1);
        }
    }

    let mut rounded: String = kept.into_iter().map(|d| char::from(b'0' + d)).collect();
    rounded.extend(std::iter::repeat('0').take(dropped.len()));
    rounded
}

fn shift_point(digits: &str, decimals: usize) -> String {
    if decimals == 0 {
        return digits.to_string();
    }

    let padded = format!("{digits:0>width$}", width = decimals + 1);
    let (integer, fraction) = padded.split_at(padded.len() - decimals);
    format!("{integer}.{fraction}")
}
