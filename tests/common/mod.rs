//! JSON-RPC node stub shared by the integration tests
//!
//! Answers `eth_call` requests by function selector, echoing the request id the
//! way a real node does. Unknown selectors get empty return data, which is what a
//! code-less address produces.

#![allow(dead_code)]

use std::{collections::HashMap, sync::Arc};

use alloy::{
    dyn_abi::{DynSolValue, FunctionExt},
    json_abi::Function,
    primitives::hex,
};
use erc20_balances::{config::Config, rpc::RpcInvoker};
use serde_json::{json, Value};
use wiremock::{matchers::method, Mock, MockServer, Request, Respond, ResponseTemplate};

/// What the stub node answers for one selector
#[derive(Clone, Debug)]
pub enum Reply {
    /// Hex-encoded return data
    Data(String),
    /// JSON-RPC error object
    Error(Value),
    /// Bare HTTP status with no JSON-RPC body
    Status(u16),
}

impl Reply {
    pub fn encode(function: &Function, values: &[DynSolValue]) -> Self {
        let data = function.abi_encode_output(values).unwrap();
        Self::Data(hex::encode_prefixed(data))
    }

    pub fn revert(reason_data: &str) -> Self {
        Self::Error(json!({
            "code": 3,
            "message": "execution reverted",
            "data": reason_data,
        }))
    }
}

#[derive(Clone, Default)]
pub struct EthCallStub {
    replies: Arc<HashMap<String, Reply>>,
    by_holder: Arc<HashMap<String, Reply>>,
}

impl EthCallStub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer every call to `function` with `reply`
    pub fn on(mut self, function: &Function, reply: Reply) -> Self {
        Arc::make_mut(&mut self.replies).insert(selector(function), reply);
        self
    }

    /// Answer `balanceOf(holder)` with `reply`
    pub fn on_balance_of(mut self, holder: &str, reply: Reply) -> Self {
        Arc::make_mut(&mut self.by_holder).insert(holder.trim_start_matches("0x").to_lowercase(), reply);
        self
    }

    pub async fn start(self) -> MockServer {
        let server = MockServer::start().await;
        Mock::given(method("POST")).respond_with(self).mount(&server).await;
        server
    }

    fn reply_for(&self, input: &str) -> Reply {
        let input = input.to_lowercase();
        let (selector, args) = input.split_at(input.len().min(10));

        // balanceOf(address) carries the holder in the last 20 bytes of the first word
        if args.len() >= 64 {
            if let Some(reply) = self.by_holder.get(&args[24..64]) {
                return reply.clone();
            }
        }
        self.replies.get(selector).cloned().unwrap_or_else(|| Reply::Data("0x".to_string()))
    }
}

impl Respond for EthCallStub {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let body: Value = request.body_json().unwrap();
        let id = body["id"].clone();
        let params = &body["params"][0];
        let input = params["input"].as_str().or_else(|| params["data"].as_str()).unwrap_or("0x");

        match self.reply_for(input) {
            Reply::Data(data) => {
                ResponseTemplate::new(200).set_body_json(json!({ "jsonrpc": "2.0", "id": id, "result": data }))
            }
            Reply::Error(error) => {
                ResponseTemplate::new(200).set_body_json(json!({ "jsonrpc": "2.0", "id": id, "error": error }))
            }
            Reply::Status(status) => ResponseTemplate::new(status),
        }
    }
}

pub fn selector(function: &Function) -> String {
    hex::encode_prefixed(function.selector())
}

pub fn invoker(server: &MockServer) -> RpcInvoker {
    RpcInvoker::from_config(&Config::new(&server.uri()).unwrap())
}

/// Number of JSON-RPC requests the stub has seen
pub async fn request_count(server: &MockServer) -> usize {
    server.received_requests().await.map(|requests| requests.len()).unwrap_or_default()
}
