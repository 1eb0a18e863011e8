use alloy::{
    eips::BlockId,
    rpc::types::{TransactionInput, TransactionRequest},
    transports::TransportErrorKind,
};
use alloy_json_rpc::RpcError;
use alloy_primitives::{Address, TxHash, TxKind};
use alloy_provider::Provider;
use alloy_sol_types::SolCall;

use crate::types::LaunchSdkError;

/// Executes a read-only contract call and decodes the return value.
pub(crate) async fn view_call<P, IC>(
    provider: &P,
    contract: Address,
    call: IC,
) -> Result<Result<IC::Return, alloy_sol_types::Error>, RpcError<TransportErrorKind>>
where
    P: Provider,
    IC: SolCall + Send,
{
    let tx = TransactionRequest {
        to: Some(TxKind::Call(contract)),
        input: TransactionInput::both(call.abi_encode().into()),
        ..Default::default()
    };

    let data = provider.call(tx).block(BlockId::latest()).await?;

    Ok(IC::abi_decode_returns(&data))
}

/// Signs and submits a state-changing contract call, waiting for the
/// receipt. Requires a provider built with a wallet filler.
pub(crate) async fn send_call<P, IC>(
    provider: &P,
    contract: Address,
    call: IC,
) -> eyre::Result<(TxHash, u64)>
where
    P: Provider,
    IC: SolCall + Send,
{
    let tx = TransactionRequest {
        to: Some(TxKind::Call(contract)),
        input: TransactionInput::both(call.abi_encode().into()),
        ..Default::default()
    };

    let receipt = provider.send_transaction(tx).await?.get_receipt().await?;
    if !receipt.status() {
        return Err(LaunchSdkError::TransactionReverted(receipt.transaction_hash).into());
    }

    Ok((receipt.transaction_hash, receipt.gas_used))
}
