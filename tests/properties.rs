use fishit_rng_calc::calculator::{cumulative_chance, effective_probability, respawn_after};
use fishit_rng_calc::{Language, Messages, RawInput, compute};
use proptest::prelude::*;

fn messages() -> Messages {
    Messages::for_language(Language::Id).unwrap()
}

proptest! {
    #[test]
    fn single_chance_matches_clamped_formula(base in 0.001f64..1e9, luck in -500f64..2000.0) {
        let result = compute(&RawInput::new("Orca", base.to_string(), luck.to_string(), ""), &messages());
        let expected = (100.0 / base * (1.0 + luck / 100.0)).clamp(0.0, 100.0);
        prop_assert!(result.valid);
        prop_assert!(
            (result.single_chance_pct - expected).abs() <= 1e-9 * expected.max(1.0),
            "{} vs {}", result.single_chance_pct, expected
        );
        prop_assert!((0.0..=100.0).contains(&result.single_chance_pct));
        prop_assert!((0.0..=100.0).contains(&result.cumulative_chance_pct));
    }

    #[test]
    fn cumulative_non_decreasing_in_attempts(p in 1e-4f64..=1.0, n in 0u64..100_000, extra in 0u64..1000) {
        prop_assert!(cumulative_chance(p, n) <= cumulative_chance(p, n + extra));
    }

    #[test]
    fn cumulative_non_decreasing_in_probability(p in 0.0f64..=1.0, q in 0.0f64..=1.0, n in 0u64..100_000) {
        let (lo, hi) = if p <= q { (p, q) } else { (q, p) };
        prop_assert!(cumulative_chance(lo, n) <= cumulative_chance(hi, n));
    }

    #[test]
    fn no_attempts_means_no_cumulative_chance(base in 1f64..1e7, luck in -100f64..500.0) {
        let result = compute(&RawInput::new("Orca", base.to_string(), luck.to_string(), "0"), &messages());
        prop_assert_eq!(result.cumulative_chance_pct, 0.0);
    }

    #[test]
    fn respawn_follows_expectation(base in 0.5f64..1e7, luck in -150f64..500.0) {
        let p = effective_probability(base, Some(luck));
        match respawn_after(p) {
            None => prop_assert!(p <= 0.0 || p >= 1.0),
            Some(r) => prop_assert_eq!(r, (1.0 / p).round() as u64),
        }
    }

    #[test]
    fn compute_is_idempotent(
        fish in ".{0,12}",
        base in "[0-9,.-]{0,8}",
        luck in "[0-9,.-]{0,6}",
        caught in "[0-9,.]{0,8}",
    ) {
        let m = messages();
        let input = RawInput::new(fish, base, luck, caught);
        prop_assert_eq!(compute(&input, &m), compute(&input, &m));
    }
}
