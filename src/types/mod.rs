mod common;
pub use common::*;

mod config;
pub use config::*;

mod errors;
pub use errors::*;

/// Uniswap V3 factory on Base mainnet.
pub const FACTORY_ADDRESS: alloy_primitives::Address =
    alloy_primitives::address!("33128a8fC17869897dcE68Ed026d694621f6FDfD");

/// NonfungiblePositionManager on Base mainnet.
pub const POSITION_MANAGER_ADDRESS: alloy_primitives::Address =
    alloy_primitives::address!("03a520b32C04BF3bEEf7BEb72E919cf822Ed34f1");

/// Canonical wrapped-ether on Base mainnet, the default counter asset.
pub const WETH_ADDRESS: alloy_primitives::Address =
    alloy_primitives::address!("4200000000000000000000000000000000000006");

/// The 1% fee tier, in hundredths of a basis point.
pub const FEE_TIER_1_PERCENT: u32 = 10_000;

/// Tick spacing the factory assigns to the 1% fee tier.
pub const TICK_SPACING_1_PERCENT: i32 = 200;
