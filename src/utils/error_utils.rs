//! Revert payload decoding
//!
//! A reverted `eth_call` comes back as a JSON-RPC error carrying the raw revert
//! data. This module turns the two standard Solidity payloads into readable text:
//! - `Error(string)`, selector `0x08c379a0`
//! - `Panic(uint256)`, selector `0x4e487b71`
//!
//! Custom errors are left undecoded.

use alloy::dyn_abi::{DynSolType, DynSolValue};

const ERROR_SELECTOR: [u8; 4] = [0x08, 0xc3, 0x79, 0xa0];
const PANIC_SELECTOR: [u8; 4] = [0x4e, 0x48, 0x7b, 0x71];

/// Decode a revert reason from raw revert data
///
/// # Returns
/// * `Some(String)` - The `Error(string)` message or a described panic code
/// * `None` - Unknown selector or malformed payload
pub fn decode_revert_reason(data: &[u8]) -> Option<String> {
    if data.len() < 4 {
        return None;
    }
    let (selector, payload) = data.split_at(4);

    if selector == ERROR_SELECTOR {
        match DynSolType::String.abi_decode(payload).ok()? {
            DynSolValue::String(reason) => Some(reason),
            _ => None,
        }
    } else if selector == PANIC_SELECTOR {
        match DynSolType::Uint(256).abi_decode(payload).ok()? {
            DynSolValue::Uint(code, _) => {
                let code = code.saturating_to::<u64>();
                Some(format!("Panic(0x{code:02x}): {}", panic_description(code)))
            }
            _ => None,
        }
    } else {
        None
    }
}

fn panic_description(code: u64) -> &'static str {
    match code {
        0x01 => "assertion failed",
        0x11 => "arithmetic overflow or underflow",
        0x12 => "division or modulo by zero",
        0x21 => "invalid enum value",
        0x22 => "invalid storage byte array encoding",
        0x31 => "pop on empty array",
        0x32 => "array index out of bounds",
        0x41 => "out of memory",
        0x51 => "call to zero-initialized function",
        _ => "unknown panic code",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::hex;

    #[test]
    fn test_decode_error_string() {
        let data = hex::decode(
            "08c379a0\
             0000000000000000000000000000000000000000000000000000000000000020\
             0000000000000000000000000000000000000000000000000000000000000014\
             496e73756666696369656e742062616c616e6365000000000000000000000000",
        )
        .unwrap();

        assert_eq!(decode_revert_reason(&data), Some("Insufficient balance".to_string()));
    }

    #[test]
    fn test_decode_panic() {
        let mut data = PANIC_SELECTOR.to_vec();
        data.extend_from_slice(&[0u8; 31]);
        data.push(0x11);

        assert_eq!(
            decode_revert_reason(&data),
            Some("Panic(0x11): arithmetic overflow or underflow".to_string())
        );
    }

    #[test]
    fn test_undecodable_payloads() {
        assert_eq!(decode_revert_reason(&[]), None);
        assert_eq!(decode_revert_reason(&ERROR_SELECTOR[..3]), None);
        assert_eq!(decode_revert_reason(&ERROR_SELECTOR), None);
        assert_eq!(decode_revert_reason(&[0xde, 0xad, 0xbe, 0xef, 0x00]), None);
    }
}
