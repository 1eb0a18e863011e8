//! Price-range math for concentrated-liquidity pools.
//!
//! Converts a human-readable price range ("quote units per base unit") into
//! the pool-native representations: discrete ticks on the 1.0001-geometric
//! grid and the Q64.96 fixed-point square-root price the pool is initialized
//! with. The range derivation is kept separate from the single-sidedness
//! policy (`clamp_for_single_sided`) so each step is testable on its own.

mod exact;
mod price_range;

pub use price_range::{
    PositionRange, StartPricePolicy, SuppliedAsset, clamp_for_single_sided,
    compute_single_sided_range, nearest_usable_tick, price_to_sqrt_price_x96, price_to_tick,
    validate_tick,
};

use alloy_primitives::{U256, uint};

/// Lowest tick the pool accepts, `log_1.0001(2^-128)` rounded in.
pub const MIN_TICK: i32 = -887272;
/// Highest tick the pool accepts.
pub const MAX_TICK: i32 = 887272;

/// 2^96, the fixed-point scale of sqrt prices.
pub const Q96: U256 = U256::from_limbs([0, 1 << 32, 0, 0]);

/// Sqrt price at [`MIN_TICK`]; pools reject anything below it.
pub const MIN_SQRT_PRICE_X96: U256 = U256::from_limbs([4295128739, 0, 0, 0]);
/// Sqrt price at [`MAX_TICK`], exclusive upper bound.
pub const MAX_SQRT_PRICE_X96: U256 =
    uint!(1461446703485210103287273052203988822378723970342_U256);

/// Deterministic validation failure on out-of-domain input. Never retried:
/// it always indicates a configuration mistake upstream.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum DomainError {
    #[error("price must be positive and finite, got {0}")]
    InvalidPrice(f64),
    #[error("tick spacing must be positive, got {0}")]
    NonPositiveSpacing(i32),
    #[error("tick {0} outside global bounds [{MIN_TICK}, {MAX_TICK}]")]
    TickOutOfBounds(i64),
    #[error("sqrt price outside the pool's supported range")]
    SqrtPriceOutOfRange,
    #[error("price range is inverted: lower {lower} >= upper {upper}")]
    InvertedRange { lower: f64, upper: f64 },
    #[error("tick range is empty after alignment")]
    EmptyRange,
}
