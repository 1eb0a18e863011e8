mod eth_rpc;
pub use eth_rpc::*;
