//! Arbitrary-precision slow path.
//!
//! `f64` log/sqrt on very large or very small price ratios can shift the
//! derived tick or sqrt price by more than the pool tolerates. The functions
//! here operate on the exact rational value of the `f64` input, so they are
//! the authority whenever the fast path is in doubt.

use malachite::num::arithmetic::traits::{FloorSqrt, Pow};
use malachite::{Natural, Rational};

/// Exact rational value of a positive finite `f64`. The caller has already
/// rejected zero, negatives, NaN and infinities.
pub(crate) fn rational_price(price: f64) -> Option<Rational> {
    Rational::try_from(price).ok()
}

/// `floor(sqrt(price) * 2^96)` without any floating-point rounding.
///
/// For `price = n/d` this is `floor(sqrt(n * 2^192 / d))`: flooring the
/// inner quotient first cannot change the outer floor, since any integer
/// whose square fits under the true quotient also fits under its floor.
pub(crate) fn floor_sqrt_x96(price: &Rational) -> Natural {
    let (numerator, denominator) = price.clone().into_numerator_and_denominator();
    ((numerator << 192u64) / denominator).floor_sqrt()
}

/// `1.0001^tick <= price`, compared exactly.
pub(crate) fn tick_ratio_le(tick: i32, price: &Rational) -> bool {
    let base = Rational::from_unsigneds(10001u32, 10000u32);
    base.pow(i64::from(tick)) <= *price
}

/// Largest `t` with `1.0001^t <= price`, starting from a float-derived
/// guess. The guess is off by at most one when the fast path escalates, so
/// the loops run a handful of exact comparisons at most.
pub(crate) fn resolve_tick(price: &Rational, guess: i32) -> i32 {
    let mut tick = guess;
    while !tick_ratio_le(tick, price) {
        tick -= 1;
    }
    while tick_ratio_le(tick + 1, price) {
        tick += 1;
    }
    tick
}
