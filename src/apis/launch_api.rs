use std::time::{SystemTime, UNIX_EPOCH};

use alloy_primitives::{
    Address, Bytes, TxHash, U256,
    aliases::{U24, U160},
};
use alloy_provider::Provider;
use alloy_rpc_types::{TransactionInput, TransactionRequest};
use alloy_sol_types::SolValue;
use async_trait::async_trait;

use super::{
    LaunchDataApi,
    utils::send_call,
};
use crate::{
    builders::MintParamsBuilder,
    contracts::{LaunchToken, PositionManager},
    math::{SuppliedAsset, clamp_for_single_sided, compute_single_sided_range, price_to_tick},
    types::{LaunchConfig, LaunchReceipt, LaunchSdkError, MintReceipt, PoolRef, TokenOrdering},
};

/// State-changing operations for launching a token and seeding its pool.
/// All of these submit transactions, so the provider must carry a wallet.
#[async_trait]
pub trait LaunchUserApi: LaunchDataApi {
    /// Deploys the launch token from its creation bytecode, passing
    /// `initial_owner` as the sole constructor argument. Returns the
    /// deployed address.
    async fn deploy_token(
        &self,
        creation_code: Bytes,
        initial_owner: Address,
    ) -> eyre::Result<Address>;

    /// Approves `spender` for `amount` of `token` unless the standing
    /// allowance already covers it. Returns the approval tx hash when one
    /// was sent.
    async fn ensure_allowance(
        &self,
        token: Address,
        owner: Address,
        spender: Address,
        amount: U256,
    ) -> eyre::Result<Option<TxHash>>;

    /// Returns the pool for the pair, creating and initializing it at
    /// `initial_sqrt_price_x96` when the factory has none. The flag is true
    /// when this call created the pool.
    async fn ensure_pool(
        &self,
        factory: Address,
        position_manager: Address,
        ordering: &TokenOrdering,
        fee: u32,
        initial_sqrt_price_x96: U256,
    ) -> eyre::Result<(Address, bool)>;

    /// Mints a liquidity position through the position manager.
    async fn mint_position(
        &self,
        position_manager: Address,
        params: PositionManager::MintParams,
    ) -> eyre::Result<MintReceipt>;

    /// Claims the caller's one-time free mint.
    async fn free_mint(&self, token: Address) -> eyre::Result<TxHash>;

    async fn transfer_token(
        &self,
        token: Address,
        to: Address,
        amount: U256,
    ) -> eyre::Result<TxHash>;

    async fn pause_token(&self, token: Address) -> eyre::Result<TxHash>;

    async fn unpause_token(&self, token: Address) -> eyre::Result<TxHash>;

    async fn burn_token(&self, token: Address, amount: U256) -> eyre::Result<TxHash>;

    /// The full launch flow: derive the single-sided range, approve the
    /// position manager, create the pool if needed, and mint the position.
    async fn bootstrap_liquidity(&self, config: &LaunchConfig) -> eyre::Result<LaunchReceipt>;
}

#[async_trait]
impl<P: Provider> LaunchUserApi for P {
    async fn deploy_token(
        &self,
        creation_code: Bytes,
        initial_owner: Address,
    ) -> eyre::Result<Address> {
        let mut input = creation_code.to_vec();
        input.extend_from_slice(&initial_owner.abi_encode());

        let tx = TransactionRequest {
            to: Some(alloy_primitives::TxKind::Create),
            input: TransactionInput::both(input.into()),
            ..Default::default()
        };

        let receipt = self.send_transaction(tx).await?.get_receipt().await?;
        if !receipt.status() {
            return Err(LaunchSdkError::TransactionReverted(receipt.transaction_hash).into());
        }

        let token = receipt
            .contract_address
            .ok_or(LaunchSdkError::MissingContractAddress)?;
        tracing::info!(%token, tx = %receipt.transaction_hash, "launch token deployed");

        Ok(token)
    }

    async fn ensure_allowance(
        &self,
        token: Address,
        owner: Address,
        spender: Address,
        amount: U256,
    ) -> eyre::Result<Option<TxHash>> {
        let existing = self.token_allowance(token, owner, spender).await?;
        if existing >= amount {
            return Ok(None);
        }

        let (tx_hash, _) =
            send_call(self, token, LaunchToken::approveCall { spender, amount }).await?;
        tracing::info!(%token, %spender, %amount, tx = %tx_hash, "allowance granted");

        Ok(Some(tx_hash))
    }

    async fn ensure_pool(
        &self,
        factory: Address,
        position_manager: Address,
        ordering: &TokenOrdering,
        fee: u32,
        initial_sqrt_price_x96: U256,
    ) -> eyre::Result<(Address, bool)> {
        if let Some(pool) = self.pool_address(factory, ordering, fee).await? {
            return Ok((pool, false));
        }

        send_call(self, position_manager, PositionManager::createAndInitializePoolIfNecessaryCall {
            token0:       ordering.token0,
            token1:       ordering.token1,
            fee:          U24::from(fee),
            // Bounded by MAX_SQRT_PRICE_X96, which fits in 160 bits.
            sqrtPriceX96: initial_sqrt_price_x96.to::<U160>(),
        })
        .await?;

        let pool = self
            .pool_address(factory, ordering, fee)
            .await?
            .ok_or(LaunchSdkError::PoolUnavailable)?;

        Ok((pool, true))
    }

    async fn mint_position(
        &self,
        position_manager: Address,
        params: PositionManager::MintParams,
    ) -> eyre::Result<MintReceipt> {
        let (tx_hash, gas_used) =
            send_call(self, position_manager, PositionManager::mintCall { params }).await?;

        Ok(MintReceipt { tx_hash, gas_used })
    }

    async fn free_mint(&self, token: Address) -> eyre::Result<TxHash> {
        let (tx_hash, _) = send_call(self, token, LaunchToken::freeMintCall {}).await?;
        Ok(tx_hash)
    }

    async fn transfer_token(
        &self,
        token: Address,
        to: Address,
        amount: U256,
    ) -> eyre::Result<TxHash> {
        let (tx_hash, _) = send_call(self, token, LaunchToken::transferCall { to, amount }).await?;
        Ok(tx_hash)
    }

    async fn pause_token(&self, token: Address) -> eyre::Result<TxHash> {
        let (tx_hash, _) = send_call(self, token, LaunchToken::pauseCall {}).await?;
        Ok(tx_hash)
    }

    async fn unpause_token(&self, token: Address) -> eyre::Result<TxHash> {
        let (tx_hash, _) = send_call(self, token, LaunchToken::unpauseCall {}).await?;
        Ok(tx_hash)
    }

    async fn burn_token(&self, token: Address, amount: U256) -> eyre::Result<TxHash> {
        let (tx_hash, _) = send_call(self, token, LaunchToken::burnCall { amount }).await?;
        Ok(tx_hash)
    }

    async fn bootstrap_liquidity(&self, config: &LaunchConfig) -> eyre::Result<LaunchReceipt> {
        config.validate()?;

        let ordering = config.ordering();
        let start_price = config.start_price.start_price(config.price_lower, config.price_upper);

        let range = compute_single_sided_range(
            config.price_lower,
            config.price_upper,
            start_price,
            config.tick_spacing,
            ordering.base_is_token0(),
        )?;

        // The pool quotes token1 per token0, so flip the configured
        // quote-per-base price when the base asset sorted into slot 1.
        let pool_current =
            if ordering.base_is_token0() { start_price } else { 1.0 / start_price };
        let current_tick = price_to_tick(pool_current)?;
        let supplied = if ordering.base_is_token0() {
            SuppliedAsset::Token0
        } else {
            SuppliedAsset::Token1
        };
        let range = clamp_for_single_sided(range, current_tick, supplied, config.tick_spacing)?;
        tracing::info!(
            tick_lower = range.tick_lower,
            tick_upper = range.tick_upper,
            current_tick,
            sqrt_price_x96 = %range.initial_sqrt_price_x96,
            "derived single-sided range"
        );

        let approval_tx = self
            .ensure_allowance(
                config.token,
                config.recipient,
                config.position_manager,
                config.supply_amount,
            )
            .await?;

        let (pool, pool_created) = self
            .ensure_pool(
                config.factory,
                config.position_manager,
                &ordering,
                config.fee_tier,
                range.initial_sqrt_price_x96,
            )
            .await?;
        tracing::info!(%pool, pool_created, "pool ready");

        let deadline =
            SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs() + config.deadline_secs;
        let params = MintParamsBuilder::single_sided(ordering, range, config.supply_amount)
            .with_fee(config.fee_tier)
            .with_recipient(config.recipient)
            .with_deadline(U256::from(deadline))
            .build();
        let amount0_desired = params.amount0Desired;
        let amount1_desired = params.amount1Desired;

        let mint = self.mint_position(config.position_manager, params).await?;
        tracing::info!(tx = %mint.tx_hash, gas_used = mint.gas_used, "position minted");

        Ok(LaunchReceipt {
            pool: PoolRef {
                address: pool,
                token0:  ordering.token0,
                token1:  ordering.token1,
                fee:     config.fee_tier,
            },
            pool_created,
            approval_tx,
            mint,
            range,
            amount0_desired,
            amount1_desired,
        })
    }
}
