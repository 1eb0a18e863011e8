use alloy_primitives::{
    Address, U256,
    aliases::{I24, U24},
};

use crate::{
    contracts::PositionManager,
    math::PositionRange,
    types::TokenOrdering,
};

/// Assembles the position manager's `MintParams` for a single-sided
/// position. The whole supplied amount lands on whichever slot the base
/// asset sorted into; the other slot stays zero.
#[derive(Debug, Clone)]
pub struct MintParamsBuilder {
    ordering:      TokenOrdering,
    range:         PositionRange,
    supply_amount: U256,
    fee:           u32,
    recipient:     Address,
    deadline:      U256,
    amount0_min:   U256,
    amount1_min:   U256,
}

impl MintParamsBuilder {
    pub fn single_sided(
        ordering: TokenOrdering,
        range: PositionRange,
        supply_amount: U256,
    ) -> Self {
        Self {
            ordering,
            range,
            supply_amount,
            fee: 0,
            recipient: Address::ZERO,
            deadline: U256::ZERO,
            amount0_min: U256::ZERO,
            amount1_min: U256::ZERO,
        }
    }

    pub fn with_fee(mut self, fee: u32) -> Self {
        self.fee = fee;
        self
    }

    pub fn with_recipient(mut self, recipient: Address) -> Self {
        self.recipient = recipient;
        self
    }

    pub fn with_deadline(mut self, deadline: U256) -> Self {
        self.deadline = deadline;
        self
    }

    /// Slippage floors for the mint. Left at zero for fresh pools where the
    /// caller is the only liquidity.
    pub fn with_min_amounts(mut self, amount0_min: U256, amount1_min: U256) -> Self {
        self.amount0_min = amount0_min;
        self.amount1_min = amount1_min;
        self
    }

    pub fn build(self) -> PositionManager::MintParams {
        let (amount0_desired, amount1_desired) = if self.ordering.base_is_token0() {
            (self.supply_amount, U256::ZERO)
        } else {
            (U256::ZERO, self.supply_amount)
        };

        PositionManager::MintParams {
            token0:         self.ordering.token0,
            token1:         self.ordering.token1,
            fee:            U24::from(self.fee),
            // Ticks were bounds-checked when the range was derived.
            tickLower:      I24::unchecked_from(self.range.tick_lower),
            tickUpper:      I24::unchecked_from(self.range.tick_upper),
            amount0Desired: amount0_desired,
            amount1Desired: amount1_desired,
            amount0Min:     self.amount0_min,
            amount1Min:     self.amount1_min,
            recipient:      self.recipient,
            deadline:       self.deadline,
        }
    }
}

#[cfg(test)]
mod tests {
    use alloy_primitives::{address, uint};

    use super::*;
    use crate::math::Q96;

    const BASE: Address = address!("00000000000000000000000000000000000000ff");
    const QUOTE: Address = address!("0000000000000000000000000000000000000001");

    fn sample_range() -> PositionRange {
        PositionRange {
            tick_lower:              23000,
            tick_upper:              92000,
            initial_sqrt_price_x96: Q96,
        }
    }

    #[test]
    fn supply_lands_on_the_base_slot() {
        let ordering = TokenOrdering::new(BASE, QUOTE);
        assert!(!ordering.base_is_token0());

        let params = MintParamsBuilder::single_sided(
            ordering,
            sample_range(),
            uint!(1_000_000_U256),
        )
        .with_fee(10_000)
        .with_recipient(BASE)
        .with_deadline(U256::from(1_700_000_000u64))
        .build();

        assert_eq!(params.token0, QUOTE);
        assert_eq!(params.token1, BASE);
        assert_eq!(params.amount0Desired, U256::ZERO);
        assert_eq!(params.amount1Desired, uint!(1_000_000_U256));
        assert_eq!(params.tickLower, I24::unchecked_from(23000));
        assert_eq!(params.tickUpper, I24::unchecked_from(92000));
        assert_eq!(params.fee, U24::from(10_000u32));
        assert_eq!(params.recipient, BASE);
    }

    #[test]
    fn supply_lands_on_token0_when_the_base_sorts_first() {
        let ordering = TokenOrdering::new(QUOTE, BASE);
        let params = MintParamsBuilder::single_sided(
            ordering,
            sample_range(),
            uint!(5_U256),
        )
        .build();

        assert_eq!(params.amount0Desired, uint!(5_U256));
        assert_eq!(params.amount1Desired, U256::ZERO);
        assert_eq!(params.amount0Min, U256::ZERO);
        assert_eq!(params.amount1Min, U256::ZERO);
    }
}
