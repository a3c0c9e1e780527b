//! `eth_call` contract invoker
//!
//! Arguments arrive as strings and are coerced against the function's declared
//! input types, so an argument that does not fit its type is rejected here before
//! anything is sent to the node.

use alloy::{
    dyn_abi::{DynSolType, DynSolValue, FunctionExt, JsonAbiExt, Specifier},
    eips::BlockId,
    json_abi::Function,
    network::TransactionBuilder,
    primitives::{Address, Bytes},
    providers::{DynProvider, Provider},
    rpc::types::TransactionRequest,
    transports::TransportError,
};
use anyhow::anyhow;
use async_trait::async_trait;
use tracing::debug;

use crate::{
    config::Config,
    errors::CallError,
    rpc::builder::get_http_provider,
    traits::ContractInvoker,
    utils::error_utils::decode_revert_reason,
};

/// Contract invoker backed by a JSON-RPC provider
#[derive(Clone)]
pub struct RpcInvoker {
    provider: DynProvider,
}

impl RpcInvoker {
    pub fn new(provider: DynProvider) -> Self {
        Self { provider }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(get_http_provider(config))
    }
}

impl std::fmt::Debug for RpcInvoker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RpcInvoker").finish_non_exhaustive()
    }
}

#[async_trait]
impl ContractInvoker for RpcInvoker {
    async fn invoke(&self, contract: Address, function: &Function, args: &[&str]) -> Result<Vec<DynSolValue>, CallError> {
        let values = coerce_args(function, args)?;
        let input = function
            .abi_encode_input(&values)
            .map_err(|e| CallError::Other(anyhow!("failed to encode {}: {e}", function.signature())))?;

        let tx = TransactionRequest::default().with_to(contract).with_input(input);
        let output = self
            .provider
            .call(tx)
            .block(BlockId::latest())
            .await
            .map_err(classify_rpc_error)?;
        debug!(%contract, function = %function.signature(), %output, "eth_call returned");

        function.abi_decode_output(&output).map_err(|e| CallError::AbiDecoding {
            function_signature: function.signature(),
            reason: e.to_string(),
        })
    }
}

/// Coerce string arguments into values of the function's input types
fn coerce_args(function: &Function, args: &[&str]) -> Result<Vec<DynSolValue>, CallError> {
    if function.inputs.len() != args.len() {
        return Err(CallError::Other(anyhow!(
            "{} expects {} argument(s), got {}",
            function.signature(),
            function.inputs.len(),
            args.len()
        )));
    }

    function
        .inputs
        .iter()
        .zip(args)
        .map(|(param, arg)| {
            let ty: DynSolType = param
                .resolve()
                .map_err(|e| CallError::Other(anyhow!("unsupported parameter type {}: {e}", param.ty)))?;
            ty.coerce_str(arg).map_err(|_| CallError::Validation {
                param_type: param.ty.clone(),
                value: arg.to_string(),
            })
        })
        .collect()
}

fn classify_rpc_error(error: TransportError) -> CallError {
    let revert_data: Option<Bytes> = error.as_error_resp().and_then(|payload| payload.as_revert_data());
    match revert_data {
        Some(data) => CallError::Reverted {
            reason: decode_revert_reason(&data).unwrap_or_else(|| data.to_string()),
        },
        None => CallError::Other(error.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::abi;

    #[test]
    fn test_coerce_holder_address() {
        let values = coerce_args(&abi::BALANCE_OF, &["0x35579dD4fa266ABE6380868fcaE65CA2017a6806"]).unwrap();
        assert!(matches!(values.as_slice(), [DynSolValue::Address(_)]));
    }

    #[test]
    fn test_coerce_rejects_short_address() {
        let error = coerce_args(&abi::BALANCE_OF, &["0xaaaaaaaaaaa"]).unwrap_err();
        assert!(error.is_address_validation());
        assert_eq!(error.to_string(), "value \"0xaaaaaaaaaaa\" must pass \"address\" validation");
    }

    #[test]
    fn test_coerce_checks_arity() {
        assert!(matches!(coerce_args(&abi::NAME, &["unexpected"]), Err(CallError::Other(_))));
        assert!(matches!(coerce_args(&abi::BALANCE_OF, &[]), Err(CallError::Other(_))));
        assert!(coerce_args(&abi::TOTAL_SUPPLY, &[]).unwrap().is_empty());
    }
}
