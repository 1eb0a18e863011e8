use alloy_primitives::{Address, U256};

use super::{
    FACTORY_ADDRESS, FEE_TIER_1_PERCENT, LaunchSdkError, POSITION_MANAGER_ADDRESS,
    TICK_SPACING_1_PERCENT, TokenOrdering, WETH_ADDRESS,
};
use crate::math::StartPricePolicy;

/// Deployment-time configuration for a liquidity bootstrap. Contract
/// addresses, fee tier and price policy are all explicit here rather than
/// constants buried in the flow.
#[derive(Debug, Clone)]
pub struct LaunchConfig {
    /// The launched (base) token.
    pub token: Address,
    /// The asset the token trades against, token1 or token0 by address
    /// order.
    pub counter_asset: Address,
    pub factory: Address,
    pub position_manager: Address,
    /// Fee in hundredths of a basis point, e.g. 10000 for 1%.
    pub fee_tier: u32,
    /// Tick spacing of the chosen fee tier; the factory dictates it, this
    /// config only repeats it.
    pub tick_spacing: i32,
    /// Desired price range in quote units per base unit.
    pub price_lower: f64,
    pub price_upper: f64,
    pub start_price: StartPricePolicy,
    /// Base-token amount supplied single-sided.
    pub supply_amount: U256,
    /// Account funding the position and receiving the position NFT. The
    /// flow assumes it is also the transaction sender.
    pub recipient: Address,
    /// Mint deadline, seconds from now.
    pub deadline_secs: u64,
}

impl LaunchConfig {
    /// Configuration preloaded with the Base-mainnet Uniswap V3 addresses
    /// and the 1% fee tier.
    pub fn base_mainnet(token: Address, recipient: Address) -> Self {
        Self {
            token,
            counter_asset: WETH_ADDRESS,
            factory: FACTORY_ADDRESS,
            position_manager: POSITION_MANAGER_ADDRESS,
            fee_tier: FEE_TIER_1_PERCENT,
            tick_spacing: TICK_SPACING_1_PERCENT,
            price_lower: 0.0001,
            price_upper: 0.1,
            start_price: StartPricePolicy::RangeLower,
            supply_amount: U256::ZERO,
            recipient,
            deadline_secs: 60 * 20,
        }
    }

    pub fn with_counter_asset(mut self, counter_asset: Address) -> Self {
        self.counter_asset = counter_asset;
        self
    }

    pub fn with_factory(mut self, factory: Address) -> Self {
        self.factory = factory;
        self
    }

    pub fn with_position_manager(mut self, position_manager: Address) -> Self {
        self.position_manager = position_manager;
        self
    }

    pub fn with_fee_tier(mut self, fee_tier: u32, tick_spacing: i32) -> Self {
        self.fee_tier = fee_tier;
        self.tick_spacing = tick_spacing;
        self
    }

    pub fn with_price_range(mut self, price_lower: f64, price_upper: f64) -> Self {
        self.price_lower = price_lower;
        self.price_upper = price_upper;
        self
    }

    pub fn with_start_price(mut self, policy: StartPricePolicy) -> Self {
        self.start_price = policy;
        self
    }

    pub fn with_supply_amount(mut self, supply_amount: U256) -> Self {
        self.supply_amount = supply_amount;
        self
    }

    pub fn with_deadline_secs(mut self, deadline_secs: u64) -> Self {
        self.deadline_secs = deadline_secs;
        self
    }

    pub fn ordering(&self) -> TokenOrdering {
        TokenOrdering::new(self.token, self.counter_asset)
    }

    /// Sanity checks applied before any transaction is sent. The fee tier
    /// must fit the factory's uint24 and a single-sided position needs a
    /// non-zero supply.
    pub fn validate(&self) -> Result<(), LaunchSdkError> {
        if self.fee_tier >= 1 << 24 {
            return Err(LaunchSdkError::Config(format!(
                "fee tier {} does not fit in uint24",
                self.fee_tier
            )));
        }
        if self.supply_amount.is_zero() {
            return Err(LaunchSdkError::Config(
                "supply_amount must be non-zero to seed liquidity".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use alloy_primitives::address;

    use super::*;

    #[test]
    fn base_mainnet_defaults_match_the_one_percent_tier() {
        let token = address!("A7de8462a852eBA2C9b4A3464C8fC577cb7090b8");
        let recipient = address!("0000000000000000000000000000000000000001");
        let config = LaunchConfig::base_mainnet(token, recipient);

        assert_eq!(config.fee_tier, 10_000);
        assert_eq!(config.tick_spacing, 200);
        assert_eq!(config.counter_asset, WETH_ADDRESS);
        assert_eq!(config.start_price, StartPricePolicy::RangeLower);
        // This token sorts above WETH, so it lands on the token1 side.
        assert!(!config.ordering().base_is_token0());
    }

    #[test]
    fn builder_methods_override_defaults() {
        let token = address!("A7de8462a852eBA2C9b4A3464C8fC577cb7090b8");
        let recipient = address!("0000000000000000000000000000000000000001");
        let config = LaunchConfig::base_mainnet(token, recipient)
            .with_fee_tier(3000, 60)
            .with_price_range(0.001, 0.5)
            .with_start_price(StartPricePolicy::Custom(0.002))
            .with_supply_amount(U256::from(1_000_000u64));

        assert_eq!(config.fee_tier, 3000);
        assert_eq!(config.tick_spacing, 60);
        assert_eq!(config.price_lower, 0.001);
        assert_eq!(config.price_upper, 0.5);
        assert_eq!(config.start_price, StartPricePolicy::Custom(0.002));
        assert_eq!(config.supply_amount, U256::from(1_000_000u64));
    }

    #[test]
    fn validate_rejects_oversized_fee_tiers_and_zero_supply() {
        let token = address!("A7de8462a852eBA2C9b4A3464C8fC577cb7090b8");
        let recipient = address!("0000000000000000000000000000000000000001");

        // Defaults carry a zero supply, which cannot seed a position.
        let config = LaunchConfig::base_mainnet(token, recipient);
        assert!(matches!(config.validate(), Err(LaunchSdkError::Config(_))));

        let config = config.with_supply_amount(U256::from(1u8));
        assert!(config.validate().is_ok());

        // 2^24 overflows the factory's uint24 fee slot.
        let config = config.with_fee_tier(1 << 24, 200);
        assert!(matches!(config.validate(), Err(LaunchSdkError::Config(_))));
    }
}
