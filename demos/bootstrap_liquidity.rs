//! Seeds a fresh single-sided liquidity position for an already-deployed
//! launch token: approves the position manager, creates and initializes the
//! pool if the factory has none, then mints the position.
//!
//! Expects in `.env`:
//! - `LAUNCH_RPC_URL`: Base rpc endpoint
//! - `LAUNCH_PRIVATE_KEY`: account funding the position
//! - `LAUNCH_TOKEN`: deployed token address
//! - `LAUNCH_SUPPLY`: whole tokens to supply, e.g. `5000`

use alloy_primitives::{Address, utils::parse_ether};
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
    let token: Address = std::env::var("LAUNCH_TOKEN")?.parse()?;
    let supply_amount = parse_ether(&std::env::var("LAUNCH_SUPPLY")?)?;

    let config = LaunchConfig::base_mainnet(token, signer.address())
        .with_supply_amount(supply_amount);
    let api = LaunchApi::connect(&url, config).await?.with_signer(signer);

    let receipt = api.bootstrap_liquidity().await?;
    println!(
        "pool {} ({}), position over ticks [{}, {}]",
        receipt.pool.address,
        if receipt.pool_created { "created" } else { "existing" },
        receipt.range.tick_lower,
        receipt.range.tick_upper,
    );
    println!(
        "minted with amounts ({}, {}) in tx {} using {} gas",
        receipt.amount0_desired, receipt.amount1_desired, receipt.mint.tx_hash, receipt.mint.gas_used
    );
    println!("{}", serde_json::to_string_pretty(&receipt)?);

    Ok(())
}
