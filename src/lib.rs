//! SDK for launching an ERC-20 token and bootstrapping a single-sided
//! Uniswap V3 liquidity position for it on Base.
//!
//! The crate splits into a pure math core ([`math`]) that derives
//! tick-aligned price ranges and initial sqrt prices, and an on-chain layer
//! ([`apis`]) that deploys the token, prepares the pool, and mints the
//! position. [`LaunchApi`] bundles a provider with a [`LaunchConfig`] for
//! the common path; the api traits are blanket-implemented on any alloy
//! [`Provider`](alloy_provider::Provider) for direct use.

pub mod apis;
pub mod builders;
pub mod contracts;
pub mod math;
pub mod providers;
pub mod types;

use alloy_network::TxSigner;
use alloy_primitives::{Address, Bytes, Signature};
use alloy_provider::{Provider, RootProvider};
use alloy_signer::{Signer, SignerSync};

use crate::{
    apis::{LaunchDataApi, LaunchUserApi},
    providers::{AlloyRpcProvider, AlloyWalletRpcProvider, EthRpcProvider},
    types::{LaunchConfig, LaunchReceipt, TokenMetadata},
};

/// One provider plus one launch configuration, with the flows pre-wired to
/// the configured addresses.
#[derive(Debug, Clone)]
pub struct LaunchApi<P: Provider + Clone> {
    eth_provider: EthRpcProvider<P>,
    config:       LaunchConfig,
}

impl LaunchApi<AlloyRpcProvider<RootProvider>> {
    pub async fn connect(url: &str, config: LaunchConfig) -> eyre::Result<Self> {
        Ok(Self { eth_provider: EthRpcProvider::connect(url).await?, config })
    }
}

impl<P: Provider + Clone> LaunchApi<P> {
    pub fn new(eth_provider: EthRpcProvider<P>, config: LaunchConfig) -> Self {
        Self { eth_provider, config }
    }

    pub fn config(&self) -> &LaunchConfig {
        &self.config
    }

    pub fn eth_provider(&self) -> &EthRpcProvider<P> {
        &self.eth_provider
    }

    /// Attaches a signing wallet, enabling the state-changing flows.
    pub fn with_signer<S>(self, signer: S) -> LaunchApi<AlloyWalletRpcProvider<P>>
    where
        S: Signer + SignerSync + TxSigner<Signature> + Send + Sync + 'static,
    {
        LaunchApi {
            eth_provider: self.eth_provider.with_wallet(signer),
            config:       self.config,
        }
    }

    pub async fn token_metadata(&self) -> eyre::Result<TokenMetadata> {
        self.eth_provider.token_metadata(self.config.token).await
    }

    pub async fn pool_address(&self) -> eyre::Result<Option<Address>> {
        self.eth_provider
            .pool_address(self.config.factory, &self.config.ordering(), self.config.fee_tier)
            .await
    }

    /// Deploys the launch token owned by the configured recipient and
    /// records its address in the configuration.
    pub async fn deploy_token(&mut self, creation_code: Bytes) -> eyre::Result<Address> {
        let token = self
            .eth_provider
            .deploy_token(creation_code, self.config.recipient)
            .await?;
        self.config.token = token;

        Ok(token)
    }

    pub async fn bootstrap_liquidity(&self) -> eyre::Result<LaunchReceipt> {
        self.eth_provider.bootstrap_liquidity(&self.config).await
    }
}
