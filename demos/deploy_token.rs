//! Deploys the launch token and prints its on-chain metadata.
//!
//! Expects in `.env`:
//! - `LAUNCH_RPC_URL`: Base rpc endpoint
//! - `LAUNCH_PRIVATE_KEY`: deployer key, also becomes the token owner
//! - `LAUNCH_TOKEN_BYTECODE`: path to a file holding the hex creation code

use alloy_primitives::{Address, Bytes, hex};
use alloy_signer_local::PrivateKeySigner;
use pool_launch_sdk::{LaunchApi, types::LaunchConfig};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let url = std::env::var("LAUNCH_RPC_URL")?;
    let signer: PrivateKeySigner = std::env::var("LAUNCH_PRIVATE_KEY")?.parse()?;
    let deployer = signer.address();

    let bytecode_path = std::env::var("LAUNCH_TOKEN_BYTECODE")?;
    let creation_code: Bytes =
        hex::decode(std::fs::read_to_string(&bytecode_path)?.trim())?.into();

    // The token address is filled in by the deployment itself.
    let config = LaunchConfig::base_mainnet(Address::ZERO, deployer);
    let mut api = LaunchApi::connect(&url, config).await?.with_signer(signer);

    let token = api.deploy_token(creation_code).await?;
    println!("launch token deployed at {token}");

    let metadata = api.token_metadata().await?;
    println!(
        "{} ({}), {} decimals, total supply {}",
        metadata.name, metadata.symbol, metadata.decimals, metadata.total_supply
    );

    Ok(())
}
