//! Error types for ERC-20 token lookups
//!
//! This module defines the error taxonomy shared by every layer:
//! - `ErrorKind`: closed set of kinds modelled on RPC status codes
//! - `TokenError`: classified domain errors handed to API callers
//! - `CallError`: failures reported by the contract invocation layer
//! - `InitError`: configuration and provider setup failures
//!
//! Retryability and transport status are derived from `ErrorKind` alone, so callers
//! never need to parse message text.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Boxed cause retained inside domain errors for diagnostics
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Error kinds, inspired by <https://grpc.io/docs/guides/status-codes/>
///
/// Serialized as SCREAMING_SNAKE_CASE strings (`INVALID_ARGUMENT`, ...). Any
/// unrecognised string deserializes to `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    Unauthenticated,
    PermissionDenied,
    InvalidArgument,
    NotFound,
    FailedPrecondition,
    ResourceExhausted,
    AlreadyExists,
    Internal,
    Unavailable,
    DeadlineExceeded,
    #[serde(other)]
    Unknown,
}

impl ErrorKind {
    /// Only transient kinds are worth retrying
    pub const fn is_retryable(self) -> bool {
        matches!(self, Self::Unavailable | Self::DeadlineExceeded)
    }

    /// HTTP status an API layer should answer with for this kind
    pub const fn http_status(self) -> u16 {
        match self {
            Self::InvalidArgument | Self::FailedPrecondition => 400,
            Self::Unauthenticated => 401,
            Self::PermissionDenied => 403,
            Self::NotFound => 404,
            Self::AlreadyExists => 409,
            Self::ResourceExhausted => 429,
            Self::Internal => 500,
            Self::Unavailable => 503,
            Self::DeadlineExceeded => 504,
            Self::Unknown => 500,
        }
    }

    /// Wire representation of the kind
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unauthenticated => "UNAUTHENTICATED",
            Self::PermissionDenied => "PERMISSION_DENIED",
            Self::InvalidArgument => "INVALID_ARGUMENT",
            Self::NotFound => "NOT_FOUND",
            Self::FailedPrecondition => "FAILED_PRECONDITION",
            Self::ResourceExhausted => "RESOURCE_EXHAUSTED",
            Self::AlreadyExists => "ALREADY_EXISTS",
            Self::Internal => "INTERNAL",
            Self::Unavailable => "UNAVAILABLE",
            Self::DeadlineExceeded => "DEADLINE_EXCEEDED",
            Self::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Serialized shape of a domain error at the API boundary
///
/// The wrapped cause is not serialized; it stays inside `TokenError` for logging.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub name: String,
    pub kind: ErrorKind,
    pub retryable: bool,
    pub message: String,
}

/// Domain errors raised while reading ERC-20 state
///
/// The Token Client is the only place foreign errors get classified into these
/// variants; outer layers propagate them untouched.
#[derive(Debug, Error)]
pub enum TokenError {
    /// The token address is not a well-formed Ethereum address
    #[error("Invalid ERC-20 token address format - not an Ethereum address. $token_address: {token_address}")]
    InvalidTokenAddress {
        token_address: String,
        #[source]
        source: Option<BoxError>,
    },

    /// The call could not be decoded as an ERC-20 response
    #[error(
        "Invalid ERC-20 token - call to {function_signature} could not be decoded. This most likely means the \
         token address does not exist or is not an ERC-20 contract, or the node is not synced. \
         $token_address: {token_address}"
    )]
    InvalidTokenContract {
        token_address: String,
        function_signature: String,
        #[source]
        source: Option<BoxError>,
    },

    /// The call succeeded but returned a value of the wrong shape
    #[error(
        "Invalid result returned from ERC-20 call {function_signature}. \
         $token_address: {token_address}; $result: {result}"
    )]
    InvalidCallResult {
        token_address: String,
        function_signature: String,
        result: String,
    },

    /// An address argument is not a well-formed Ethereum address
    #[error(
        "Invalid address format - not an Ethereum address. $function_signature: {function_signature}; \
         $token_address: {token_address}; $address: {address}"
    )]
    InvalidAddressFormat {
        token_address: String,
        function_signature: String,
        address: String,
        #[source]
        source: Option<BoxError>,
    },

    /// `balanceOf` returned exactly zero
    ///
    /// Treated as a signal that the holder address does not exist. A zero balance is
    /// a valid ERC-20 state, so this is a heuristic rather than a protocol rule.
    #[error(
        "ERC-20 {function_signature} call result returned zero. This most likely means the address does not \
         exist, although it could also be a genuine zero balance. $token_address: {token_address}; \
         $address: {address}"
    )]
    InvalidAddressBalance {
        token_address: String,
        function_signature: String,
        address: String,
    },

    /// Caller supplied arguments that can never succeed
    #[error("{message}")]
    InvalidArgument { message: String },

    /// Unclassified failure; the message is generic, the cause is kept for logs
    #[error(
        "Unexpected error when calling ERC-20 token function. $function_signature: {function_signature}; \
         $token_address: {token_address}"
    )]
    UnknownCall {
        token_address: String,
        function_signature: String,
        #[source]
        source: Option<BoxError>,
    },
}

impl TokenError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument { message: message.into() }
    }

    /// Stable error name used on the wire
    pub fn name(&self) -> &'static str {
        match self {
            Self::InvalidTokenAddress { .. } => "InvalidTokenAddress",
            Self::InvalidTokenContract { .. } => "InvalidTokenContract",
            Self::InvalidCallResult { .. } => "InvalidCallResult",
            Self::InvalidAddressFormat { .. } => "InvalidAddressFormat",
            Self::InvalidAddressBalance { .. } => "InvalidAddressBalance",
            Self::InvalidArgument { .. } => "InvalidArgument",
            Self::UnknownCall { .. } => "UnknownCallError",
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidTokenAddress { .. }
            | Self::InvalidTokenContract { .. }
            | Self::InvalidAddressFormat { .. }
            | Self::InvalidAddressBalance { .. }
            | Self::InvalidArgument { .. } => ErrorKind::InvalidArgument,
            // a malformed result is the node's or the contract's fault
            Self::InvalidCallResult { .. } => ErrorKind::Internal,
            Self::UnknownCall { .. } => ErrorKind::Unknown,
        }
    }

    pub fn is_retryable(&self) -> bool {
        self.kind().is_retryable()
    }

    pub fn http_status(&self) -> u16 {
        self.kind().http_status()
    }

    pub fn to_body(&self) -> ErrorBody {
        ErrorBody {
            name: self.name().to_string(),
            kind: self.kind(),
            retryable: self.is_retryable(),
            message: self.to_string(),
        }
    }
}

impl From<&TokenError> for ErrorBody {
    fn from(error: &TokenError) -> Self {
        error.to_body()
    }
}

/// Failures reported by a contract invoker
///
/// These are the invocation layer's own categories; `TokenClient` maps them onto
/// `TokenError`.
#[derive(Debug, Error)]
pub enum CallError {
    /// Return data could not be decoded against the function's outputs
    #[error("ABI decoding failed for {function_signature}: {reason}")]
    AbiDecoding {
        function_signature: String,
        reason: String,
    },

    /// An argument failed validation against its ABI parameter type
    #[error("value \"{value}\" must pass \"{param_type}\" validation")]
    Validation { param_type: String, value: String },

    /// The contract address itself was rejected
    #[error("invalid contract address: {0}")]
    InvalidAddress(String),

    /// The node reported an execution revert
    #[error("execution reverted: {reason}")]
    Reverted { reason: String },

    /// Transport or any other failure
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CallError {
    /// Whether this is a validation failure of an `address` argument
    pub fn is_address_validation(&self) -> bool {
        matches!(self, Self::Validation { param_type, .. } if param_type == "address")
    }
}

/// Configuration and provider setup errors
#[derive(Debug, Error)]
pub enum InitError {
    /// Required environment variable is unset or empty
    #[error("Could not load {0} from the environment, or it has an empty value")]
    MissingEnv(String),

    /// Invalid or malformed RPC URL
    #[error("Invalid RPC URL: {0}")]
    InvalidRpcUrl(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::error::Error as _;

    #[rstest]
    #[case(ErrorKind::InvalidArgument, 400)]
    #[case(ErrorKind::FailedPrecondition, 400)]
    #[case(ErrorKind::Unauthenticated, 401)]
    #[case(ErrorKind::PermissionDenied, 403)]
    #[case(ErrorKind::NotFound, 404)]
    #[case(ErrorKind::AlreadyExists, 409)]
    #[case(ErrorKind::ResourceExhausted, 429)]
    #[case(ErrorKind::Internal, 500)]
    #[case(ErrorKind::Unavailable, 503)]
    #[case(ErrorKind::DeadlineExceeded, 504)]
    #[case(ErrorKind::Unknown, 500)]
    fn test_kind_to_http_status(#[case] kind: ErrorKind, #[case] status: u16) {
        assert_eq!(kind.http_status(), status);
    }

    #[rstest]
    #[case(ErrorKind::InvalidArgument, false)]
    #[case(ErrorKind::FailedPrecondition, false)]
    #[case(ErrorKind::Unauthenticated, false)]
    #[case(ErrorKind::PermissionDenied, false)]
    #[case(ErrorKind::NotFound, false)]
    #[case(ErrorKind::AlreadyExists, false)]
    #[case(ErrorKind::ResourceExhausted, false)]
    #[case(ErrorKind::Internal, false)]
    #[case(ErrorKind::Unavailable, true)]
    #[case(ErrorKind::DeadlineExceeded, true)]
    #[case(ErrorKind::Unknown, false)]
    fn test_kind_is_retryable(#[case] kind: ErrorKind, #[case] retryable: bool) {
        assert_eq!(kind.is_retryable(), retryable);
    }

    #[test]
    fn test_unrecognised_kind_falls_back_to_unknown() {
        let kind: ErrorKind = serde_json::from_str("\"FOOBAR\"").unwrap();
        assert_eq!(kind, ErrorKind::Unknown);
        assert_eq!(kind.http_status(), 500);
        assert!(!kind.is_retryable());
    }

    #[test]
    fn test_kind_wire_strings() {
        assert_eq!(serde_json::to_string(&ErrorKind::DeadlineExceeded).unwrap(), "\"DEADLINE_EXCEEDED\"");
        assert_eq!(ErrorKind::PermissionDenied.to_string(), "PERMISSION_DENIED");
    }

    #[test]
    fn test_domain_error_kinds() {
        let token = "0x0000000000000000000000000000000000001111".to_string();
        let invalid_result = TokenError::InvalidCallResult {
            token_address: token.clone(),
            function_signature: "decimals()".into(),
            result: "[]".into(),
        };
        assert_eq!(invalid_result.kind(), ErrorKind::Internal);
        assert_eq!(invalid_result.http_status(), 500);

        let zero_balance = TokenError::InvalidAddressBalance {
            token_address: token,
            function_signature: "balanceOf(address)".into(),
            address: "0x0000000000000000000000000000aaaaaaaaaaaa".into(),
        };
        assert_eq!(zero_balance.kind(), ErrorKind::InvalidArgument);
        assert_eq!(zero_balance.http_status(), 400);
        assert!(!zero_balance.is_retryable());
    }

    #[test]
    fn test_error_body_json() {
        let error = TokenError::invalid_argument("Received empty list of addresses to fetch balances for");
        let json = serde_json::to_value(error.to_body()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "InvalidArgument",
                "kind": "INVALID_ARGUMENT",
                "retryable": false,
                "message": "Received empty list of addresses to fetch balances for"
            })
        );
    }

    #[test]
    fn test_unknown_call_keeps_cause_out_of_message() {
        let cause = CallError::Other(anyhow::anyhow!("connection reset by peer"));
        let error = TokenError::UnknownCall {
            token_address: "0x0000000000000000000000000000000000001111".into(),
            function_signature: "name()".into(),
            source: Some(Box::new(cause)),
        };

        let body = ErrorBody::from(&error);
        assert_eq!(body.kind, ErrorKind::Unknown);
        assert_eq!(body.name, "UnknownCallError");
        assert!(!body.message.contains("connection reset"));

        let source = error.source().expect("cause retained");
        assert!(source.to_string().contains("connection reset"));
    }

    #[test]
    fn test_address_validation_detection() {
        let address = CallError::Validation { param_type: "address".into(), value: "0xaaaa".into() };
        let uint = CallError::Validation { param_type: "uint256".into(), value: "abc".into() };
        assert!(address.is_address_validation());
        assert!(!uint.is_address_validation());
        assert!(address.to_string().contains("must pass \"address\" validation"));
    }
}
