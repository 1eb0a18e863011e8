use alloy_primitives::{Address, TxHash, U256};
use serde::{Deserialize, Serialize};

use crate::math::PositionRange;

/// Canonical ordering of a trading pair. The factory identifies a pool by
/// its tokens sorted ascending, and tick direction depends on which side the
/// base (launched) asset lands on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenOrdering {
    pub token0: Address,
    pub token1: Address,
    base_is_token0: bool,
}

impl TokenOrdering {
    pub fn new(base: Address, quote: Address) -> Self {
        if base < quote {
            Self { token0: base, token1: quote, base_is_token0: true }
        } else {
            Self { token0: quote, token1: base, base_is_token0: false }
        }
    }

    pub fn base(&self) -> Address {
        if self.base_is_token0 { self.token0 } else { self.token1 }
    }

    pub fn quote(&self) -> Address {
        if self.base_is_token0 { self.token1 } else { self.token0 }
    }

    pub fn base_is_token0(&self) -> bool {
        self.base_is_token0
    }
}

/// A pool together with the pair and fee tier that identify it on the
/// factory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolRef {
    pub address: Address,
    pub token0: Address,
    pub token1: Address,
    pub fee: u32,
}

/// ERC20 metadata snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenMetadata {
    pub address: Address,
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
    pub total_supply: U256,
}

/// Outcome of a submitted transaction that was waited on.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MintReceipt {
    pub tx_hash: TxHash,
    pub gas_used: u64,
}

/// Everything the liquidity-bootstrap flow produced, for reporting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LaunchReceipt {
    pub pool: PoolRef,
    pub pool_created: bool,
    pub approval_tx: Option<TxHash>,
    pub mint: MintReceipt,
    pub range: PositionRange,
    pub amount0_desired: U256,
    pub amount1_desired: U256,
}

#[cfg(test)]
mod tests {
    use alloy_primitives::address;

    use super::*;

    const LOW: Address = address!("0000000000000000000000000000000000000001");
    const HIGH: Address = address!("00000000000000000000000000000000000000ff");

    #[test]
    fn ordering_sorts_ascending_and_tracks_the_base_side() {
        let ordering = TokenOrdering::new(LOW, HIGH);
        assert_eq!(ordering.token0, LOW);
        assert_eq!(ordering.token1, HIGH);
        assert!(ordering.base_is_token0());
        assert_eq!(ordering.base(), LOW);
        assert_eq!(ordering.quote(), HIGH);

        let flipped = TokenOrdering::new(HIGH, LOW);
        assert_eq!(flipped.token0, LOW);
        assert_eq!(flipped.token1, HIGH);
        assert!(!flipped.base_is_token0());
        assert_eq!(flipped.base(), HIGH);
        assert_eq!(flipped.quote(), LOW);
    }
}
