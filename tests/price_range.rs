//! Property tests over the price-range math. Strategies sample prices
//! log-uniformly across the supported 1e-10..=1e10 span so the extremes get
//! as much coverage as the values near 1.

use alloy_primitives::U256;
use pool_launch_sdk::math::{
    MAX_TICK, MIN_TICK, Q96, SuppliedAsset, clamp_for_single_sided, compute_single_sided_range,
    nearest_usable_tick, price_to_sqrt_price_x96, price_to_tick,
};
use proptest::prelude::*;

/// Lossy conversion for assertions only; fine for relative comparisons.
fn u256_to_f64(value: U256) -> f64 {
    value
        .as_limbs()
        .iter()
        .enumerate()
        .map(|(i, limb)| *limb as f64 * 2f64.powi(64 * i as i32))
        .sum()
}

fn price_strategy() -> impl Strategy<Value = f64> {
    (1.0f64..10.0, -10i32..=9).prop_map(|(mantissa, exponent)| mantissa * 10f64.powi(exponent))
}

fn spacing_strategy() -> impl Strategy<Value = i32> {
    prop_oneof![Just(1), Just(10), Just(60), Just(200)]
}

proptest! {
    #[test]
    fn tick_is_monotone_in_price(a in price_strategy(), b in price_strategy()) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(price_to_tick(low).unwrap() <= price_to_tick(high).unwrap());
    }

    #[test]
    fn tick_brackets_the_price(price in price_strategy()) {
        let tick = price_to_tick(price).unwrap();
        // Float powi is itself approximate, so the bracketing check gets a
        // small relative tolerance rather than demanding exactness.
        let at_tick = 1.0001f64.powi(tick);
        let at_next = 1.0001f64.powi(tick + 1);
        prop_assert!(at_tick <= price * (1.0 + 1e-9), "1.0001^{tick} = {at_tick} > {price}");
        prop_assert!(at_next > price * (1.0 - 1e-9), "1.0001^{} = {at_next} <= {price}", tick + 1);
    }

    #[test]
    fn sqrt_price_squares_back_to_the_price(price in price_strategy()) {
        let sqrt = u256_to_f64(price_to_sqrt_price_x96(price).unwrap()) / u256_to_f64(Q96);
        let recovered = sqrt * sqrt;
        prop_assert!(
            (recovered - price).abs() <= price * 1e-9,
            "recovered {recovered} vs {price}"
        );
    }

    #[test]
    fn usable_ticks_are_aligned_and_close(
        tick in MIN_TICK..=MAX_TICK,
        spacing in spacing_strategy(),
    ) {
        let aligned = nearest_usable_tick(tick, spacing).unwrap();
        prop_assert_eq!(aligned.rem_euclid(spacing), 0);
        prop_assert!((i64::from(aligned) - i64::from(tick)).abs() <= i64::from(spacing) / 2 + 1);
        // Half-up: a tick sitting exactly between two multiples goes up.
        if (i64::from(tick) - i64::from(aligned)).abs() * 2 == i64::from(spacing) {
            prop_assert!(aligned > tick);
        }
        prop_assert_eq!(nearest_usable_tick(aligned, spacing).unwrap(), aligned);
    }

    #[test]
    fn derived_ranges_are_ordered_in_both_orientations(
        exponent_low in -8i32..=6,
        width in 1i32..=3,
        spacing in spacing_strategy(),
        base_is_token0 in any::<bool>(),
    ) {
        let price_lower = 10f64.powi(exponent_low);
        let price_upper = 10f64.powi(exponent_low + width);
        let range = compute_single_sided_range(
            price_lower,
            price_upper,
            price_lower,
            spacing,
            base_is_token0,
        )
        .unwrap();

        prop_assert!(range.tick_lower < range.tick_upper);
        prop_assert_eq!(range.tick_lower.rem_euclid(spacing), 0);
        prop_assert_eq!(range.tick_upper.rem_euclid(spacing), 0);
    }

    #[test]
    fn clamped_ranges_exclude_the_current_tick(
        current_tick in -100_000i32..=100_000,
        spacing in spacing_strategy(),
    ) {
        let range = pool_launch_sdk::math::PositionRange {
            tick_lower: -200_000,
            tick_upper: 200_000,
            initial_sqrt_price_x96: Q96,
        };

        let token1 =
            clamp_for_single_sided(range, current_tick, SuppliedAsset::Token1, spacing).unwrap();
        prop_assert!(token1.tick_upper <= current_tick);
        prop_assert_eq!(token1.tick_upper.rem_euclid(spacing), 0);
        prop_assert!(token1.tick_lower < token1.tick_upper);

        let token0 =
            clamp_for_single_sided(range, current_tick, SuppliedAsset::Token0, spacing).unwrap();
        prop_assert!(token0.tick_lower > current_tick);
        prop_assert_eq!(token0.tick_lower.rem_euclid(spacing), 0);
        prop_assert!(token0.tick_lower < token0.tick_upper);
    }
}

#[test]
fn the_launch_scenario_reproduces_the_reference_ticks() {
    // Price range 0.0001..0.1 WETH per token with the token on the token1
    // side, 1% fee tier, pool opened at the bottom of the range.
    let range = compute_single_sided_range(0.0001, 0.1, 0.0001, 200, false).unwrap();
    assert_eq!(range.tick_lower, 23_000);
    assert_eq!(range.tick_upper, 92_200);

    let current_tick = price_to_tick(1.0 / 0.0001).unwrap();
    assert_eq!(current_tick, 92_108);

    let clamped =
        clamp_for_single_sided(range, current_tick, SuppliedAsset::Token1, 200).unwrap();
    assert_eq!(clamped.tick_lower, 23_000);
    assert_eq!(clamped.tick_upper, 92_000);
}
