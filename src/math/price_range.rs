use alloy_primitives::U256;
use serde::{Deserialize, Serialize};

use super::{
    DomainError, MAX_SQRT_PRICE_X96, MAX_TICK, MIN_SQRT_PRICE_X96, MIN_TICK, exact,
};

/// Distance (in ticks) from an integer boundary inside which the float
/// logarithm is not trusted and the exact rational comparison decides. The
/// float estimate carries at most ~1e-10 ticks of rounding error across the
/// whole tick range, so the band is orders of magnitude wider than needed.
const TICK_GUARD_BAND: f64 = 1e-6;

/// Tick boundaries plus the sqrt price the pool should be initialized with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionRange {
    pub tick_lower: i32,
    pub tick_upper: i32,
    pub initial_sqrt_price_x96: U256,
}

/// Where inside the configured price range the pool starts trading. The
/// choice is economic policy, not math, so it is always explicit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum StartPricePolicy {
    /// Open at the bottom of the range so the price appreciates as the base
    /// asset is bought.
    RangeLower,
    /// Open at the top of the range.
    RangeUpper,
    /// Open at an explicit quote-per-base price.
    Custom(f64),
}

impl StartPricePolicy {
    pub fn start_price(&self, price_lower: f64, price_upper: f64) -> f64 {
        match self {
            StartPricePolicy::RangeLower => price_lower,
            StartPricePolicy::RangeUpper => price_upper,
            StartPricePolicy::Custom(price) => *price,
        }
    }
}

/// Which pool asset a single-sided position consists of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SuppliedAsset {
    Token0,
    Token1,
}

fn checked_price(price: f64) -> Result<malachite::Rational, DomainError> {
    if !price.is_finite() || price <= 0.0 {
        return Err(DomainError::InvalidPrice(price));
    }
    exact::rational_price(price).ok_or(DomainError::InvalidPrice(price))
}

/// `floor(sqrt(price) * 2^96)`, the Q64.96 sqrt price the pool's
/// initialization call expects. `price` is a token1/token0 ratio.
///
/// Computed exactly over the rational value of the input, so a ratio of 1
/// yields exactly `2^96` and no float sqrt rounding leaks into the pool's
/// starting price.
pub fn price_to_sqrt_price_x96(price: f64) -> Result<U256, DomainError> {
    let exact_price = checked_price(price)?;
    let sqrt = exact::floor_sqrt_x96(&exact_price);

    let limbs = sqrt.to_limbs_asc();
    if limbs.len() > 4 {
        return Err(DomainError::SqrtPriceOutOfRange);
    }
    let mut padded = [0u64; 4];
    padded[..limbs.len()].copy_from_slice(&limbs);
    let sqrt_price = U256::from_limbs(padded);

    if sqrt_price < MIN_SQRT_PRICE_X96 || sqrt_price >= MAX_SQRT_PRICE_X96 {
        return Err(DomainError::SqrtPriceOutOfRange);
    }
    Ok(sqrt_price)
}

/// `floor(log_1.0001(price))`: the highest tick whose implied price does not
/// exceed `price` (a token1/token0 ratio).
///
/// The float logarithm is only an estimate. Whenever it lands inside the
/// guard band around a tick boundary the result is re-derived with exact
/// rational arithmetic; a correction is logged as a precision warning.
pub fn price_to_tick(price: f64) -> Result<i32, DomainError> {
    let exact_price = checked_price(price)?;

    let estimate = price.ln() / 1.0001f64.ln();
    if !(MIN_TICK as f64 - 1.0..=MAX_TICK as f64 + 1.0).contains(&estimate) {
        return Err(DomainError::TickOutOfBounds(estimate as i64));
    }

    let mut tick = estimate.floor() as i32;
    if (estimate - estimate.round()).abs() < TICK_GUARD_BAND {
        let resolved = exact::resolve_tick(&exact_price, tick);
        if resolved != tick {
            tracing::warn!(
                price,
                float_tick = tick,
                exact_tick = resolved,
                "floating-point tick estimate corrected by exact arithmetic"
            );
            tick = resolved;
        }
    }

    validate_tick(tick)?;
    Ok(tick)
}

/// Nearest multiple of `spacing`, ties rounding half-up (toward +inf) on
/// both sides of zero. Callers re-validate the result against the global
/// tick bounds when they use it as a position boundary.
pub fn nearest_usable_tick(tick: i32, spacing: i32) -> Result<i32, DomainError> {
    if spacing <= 0 {
        return Err(DomainError::NonPositiveSpacing(spacing));
    }
    let tick = i64::from(tick);
    let spacing = i64::from(spacing);

    let rem = tick.rem_euclid(spacing);
    let down = tick - rem;
    let aligned = if 2 * rem >= spacing { down + spacing } else { down };

    i32::try_from(aligned).map_err(|_| DomainError::TickOutOfBounds(aligned))
}

/// Checks a tick against the pool's global bounds.
pub fn validate_tick(tick: i32) -> Result<(), DomainError> {
    if !(MIN_TICK..=MAX_TICK).contains(&tick) {
        return Err(DomainError::TickOutOfBounds(i64::from(tick)));
    }
    Ok(())
}

/// Derives the tick pair bounding `[price_lower, price_upper]` (quote units
/// per base unit) plus the initial sqrt price implied by `current_price`.
///
/// The pool always quotes token1 in units of token0, so when the base asset
/// is token1 every ratio inverts and the tick ordering flips. This is the
/// pure derivation step only: it does not make the range single-sided, see
/// [`clamp_for_single_sided`].
pub fn compute_single_sided_range(
    price_lower: f64,
    price_upper: f64,
    current_price: f64,
    tick_spacing: i32,
    base_is_token0: bool,
) -> Result<PositionRange, DomainError> {
    if !(price_lower < price_upper) {
        return Err(DomainError::InvertedRange { lower: price_lower, upper: price_upper });
    }

    let (pool_lower, pool_upper, pool_current) = if base_is_token0 {
        (price_lower, price_upper, current_price)
    } else {
        (1.0 / price_upper, 1.0 / price_lower, 1.0 / current_price)
    };

    let tick_lower = nearest_usable_tick(price_to_tick(pool_lower)?, tick_spacing)?;
    let tick_upper = nearest_usable_tick(price_to_tick(pool_upper)?, tick_spacing)?;
    validate_tick(tick_lower)?;
    validate_tick(tick_upper)?;
    if tick_lower >= tick_upper {
        return Err(DomainError::EmptyRange);
    }

    Ok(PositionRange {
        tick_lower,
        tick_upper,
        initial_sqrt_price_x96: price_to_sqrt_price_x96(pool_current)?,
    })
}

/// Moves the boundary nearest the current price strictly onto its far side,
/// so that a position minted over the range holds 100% of `supplied`.
///
/// A position is all token1 while the pool trades at or above its top
/// boundary, and all token0 while it trades below its bottom boundary. The
/// adjusted boundary stays aligned to `spacing`.
pub fn clamp_for_single_sided(
    range: PositionRange,
    current_tick: i32,
    supplied: SuppliedAsset,
    spacing: i32,
) -> Result<PositionRange, DomainError> {
    if spacing <= 0 {
        return Err(DomainError::NonPositiveSpacing(spacing));
    }
    let mut clamped = range;

    match supplied {
        SuppliedAsset::Token1 => {
            if clamped.tick_upper > current_tick {
                let aligned = floor_to_spacing(current_tick, spacing);
                if aligned <= clamped.tick_lower {
                    return Err(DomainError::EmptyRange);
                }
                clamped.tick_upper = aligned;
            }
        }
        SuppliedAsset::Token0 => {
            if clamped.tick_lower <= current_tick {
                let aligned = ceil_to_spacing(current_tick + 1, spacing);
                if aligned >= clamped.tick_upper {
                    return Err(DomainError::EmptyRange);
                }
                clamped.tick_lower = aligned;
            }
        }
    }

    validate_tick(clamped.tick_lower)?;
    validate_tick(clamped.tick_upper)?;
    Ok(clamped)
}

fn floor_to_spacing(tick: i32, spacing: i32) -> i32 {
    let spacing = i64::from(spacing);
    (i64::from(tick).div_euclid(spacing) * spacing) as i32
}

fn ceil_to_spacing(tick: i32, spacing: i32) -> i32 {
    -floor_to_spacing(-tick, spacing)
}
