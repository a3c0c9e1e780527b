//! JSON-RPC access
//!
//! - [`builder`]: HTTP provider construction
//! - [`invoker`]: `eth_call` based [`ContractInvoker`](crate::traits::ContractInvoker)

pub mod builder;
pub mod invoker;

pub use builder::get_http_provider;
pub use invoker::RpcInvoker;
