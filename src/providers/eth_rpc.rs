use alloy_network::{Ethereum, EthereumWallet, TxSigner};
use alloy_primitives::Signature;
use alloy_provider::{
    Identity, Provider, RootProvider,
    fillers::{
        BlobGasFiller, ChainIdFiller, FillProvider, GasFiller, JoinFill, NonceFiller,
        WalletFiller,
    },
};
use alloy_signer::{Signer, SignerSync};

pub type AlloyRpcProvider<P> = FillProvider<
    JoinFill<
        Identity,
        JoinFill<GasFiller, JoinFill<BlobGasFiller, JoinFill<NonceFiller, ChainIdFiller>>>,
    >,
    P,
>;

pub type AlloyWalletRpcProvider<P> =
    FillProvider<JoinFill<Identity, WalletFiller<EthereumWallet>>, P>;

/// Thin wrapper over an alloy provider. All chain reads and writes in this
/// crate go through the blanket api-trait impls on [`Provider`], so this
/// type only adds url connection and wallet attachment.
#[derive(Debug, Clone)]
#[repr(transparent)]
pub struct EthRpcProvider<P: Provider + Clone>(P);

impl EthRpcProvider<AlloyRpcProvider<RootProvider>> {
    /// Based on the url passed in, will auto parse to http or ws.
    pub async fn connect(url: &str) -> eyre::Result<Self> {
        Ok(Self(
            RootProvider::builder()
                .with_recommended_fillers()
                .connect(url)
                .await?,
        ))
    }
}

impl<P: Provider + Clone> EthRpcProvider<P> {
    pub fn new(provider: P) -> Self {
        Self(provider)
    }

    pub fn provider(&self) -> &P {
        &self.0
    }

    pub fn with_wallet<S>(self, signer: S) -> EthRpcProvider<AlloyWalletRpcProvider<P>>
    where
        S: Signer + SignerSync + TxSigner<Signature> + Send + Sync + 'static,
    {
        let provider = alloy_provider::builder::<Ethereum>()
            .wallet(EthereumWallet::new(signer))
            .on_provider(self.0);

        EthRpcProvider(provider)
    }
}

impl<P: Provider + Clone> Provider for EthRpcProvider<P> {
    fn root(&self) -> &RootProvider {
        self.0.root()
    }
}

#[cfg(test)]
mod tests {
    use alloy_signer_local::PrivateKeySigner;

    use super::*;

    #[test]
    fn wallet_attachment_rewraps_the_inner_provider() {
        let root = RootProvider::new_http("http://localhost:8545".parse().unwrap());
        let provider = EthRpcProvider::new(root);

        let signer: PrivateKeySigner =
            "0x0000000000000000000000000000000000000000000000000000000000000001"
                .parse()
                .unwrap();
        let with_wallet = provider.with_wallet(signer);

        // Still a usable provider after the wallet filler is layered on.
        let _: &RootProvider = with_wallet.root();
    }
}
