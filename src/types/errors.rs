use alloy_primitives::TxHash;

#[derive(Debug, thiserror::Error)]
pub enum LaunchSdkError {
    #[error("price math error: {0}")]
    Math(#[from] crate::math::DomainError),
    #[error("launch config error: {0}")]
    Config(String),
    #[error("deployment receipt carries no contract address")]
    MissingContractAddress,
    #[error("factory reports no pool after create-and-initialize")]
    PoolUnavailable,
    #[error("transaction {0} reverted")]
    TransactionReverted(TxHash),
}
