use alloy_primitives::{Address, U256, aliases::U24};
use alloy_provider::Provider;
use async_trait::async_trait;
use futures::future::try_join;

use super::utils::view_call;
use crate::{
    contracts::{LaunchToken, PoolFactory},
    types::{TokenMetadata, TokenOrdering},
};

/// Read-only chain queries backing the launch flow.
#[async_trait]
pub trait LaunchDataApi {
    /// Fetches the ERC-20 descriptor fields for `token` in one pass.
    async fn token_metadata(&self, token: Address) -> eyre::Result<TokenMetadata>;

    async fn native_balance(&self, owner: Address) -> eyre::Result<U256>;

    async fn token_balance(&self, token: Address, owner: Address) -> eyre::Result<U256>;

    async fn token_allowance(
        &self,
        token: Address,
        owner: Address,
        spender: Address,
    ) -> eyre::Result<U256>;

    /// Looks up the pool for the ordered pair at `fee`. Returns `None`
    /// when the factory has no pool deployed yet.
    async fn pool_address(
        &self,
        factory: Address,
        ordering: &TokenOrdering,
        fee: u32,
    ) -> eyre::Result<Option<Address>>;

    async fn token_paused(&self, token: Address) -> eyre::Result<bool>;

    async fn token_owner(&self, token: Address) -> eyre::Result<Address>;

    /// Whether `account` already claimed its one-time free mint.
    async fn has_free_minted(&self, token: Address, account: Address) -> eyre::Result<bool>;
}

#[async_trait]
impl<P: Provider> LaunchDataApi for P {
    async fn token_metadata(&self, token: Address) -> eyre::Result<TokenMetadata> {
        let (names, supply) = try_join(
            try_join(
                view_call(self, token, LaunchToken::nameCall {}),
                view_call(self, token, LaunchToken::symbolCall {}),
            ),
            try_join(
                view_call(self, token, LaunchToken::decimalsCall {}),
                view_call(self, token, LaunchToken::totalSupplyCall {}),
            ),
        )
        .await?;

        let ((name, symbol), (decimals, total_supply)) = (names, supply);

        Ok(TokenMetadata {
            address: token,
            name: name?,
            symbol: symbol?,
            decimals: decimals?,
            total_supply: total_supply?,
        })
    }

    async fn native_balance(&self, owner: Address) -> eyre::Result<U256> {
        Ok(self.get_balance(owner).await?)
    }

    async fn token_balance(&self, token: Address, owner: Address) -> eyre::Result<U256> {
        Ok(view_call(self, token, LaunchToken::balanceOfCall { account: owner }).await??)
    }

    async fn token_allowance(
        &self,
        token: Address,
        owner: Address,
        spender: Address,
    ) -> eyre::Result<U256> {
        Ok(view_call(self, token, LaunchToken::allowanceCall { owner, spender }).await??)
    }

    async fn pool_address(
        &self,
        factory: Address,
        ordering: &TokenOrdering,
        fee: u32,
    ) -> eyre::Result<Option<Address>> {
        let pool = view_call(self, factory, PoolFactory::getPoolCall {
            tokenA: ordering.token0,
            tokenB: ordering.token1,
            fee:    U24::from(fee),
        })
        .await??;

        Ok((pool != Address::ZERO).then_some(pool))
    }

    async fn token_paused(&self, token: Address) -> eyre::Result<bool> {
        Ok(view_call(self, token, LaunchToken::pausedCall {}).await??)
    }

    async fn token_owner(&self, token: Address) -> eyre::Result<Address> {
        Ok(view_call(self, token, LaunchToken::ownerCall {}).await??)
    }

    async fn has_free_minted(&self, token: Address, account: Address) -> eyre::Result<bool> {
        Ok(view_call(self, token, LaunchToken::hasMintedCall { account }).await??)
    }
}
