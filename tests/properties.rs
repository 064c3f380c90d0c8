//! Algebraic properties of the exponentiation routines.

use fastpow::{checked_power, power, power_mod, Modulus, PowError};
use proptest::prelude::*;

const SMALL_MODULUS_LIMIT: i64 = 1 << 31;

proptest! {
    #[test]
    fn zeroth_power_is_one(x in any::<i64>()) {
        prop_assert_eq!(power(x, 0), 1);
    }

    #[test]
    fn first_power_is_identity(x in any::<i64>()) {
        prop_assert_eq!(power(x, 1), x);
    }

    #[test]
    fn exponents_add_under_wraparound(a in any::<i64>(), m in 0i64..1 << 40, n in 0i64..1 << 40) {
        prop_assert_eq!(power(a, m + n), power(a, m).wrapping_mul(power(a, n)));
    }

    #[test]
    fn power_matches_std_wrapping_pow(a in any::<i64>(), n in any::<u32>()) {
        prop_assert_eq!(power(a, n as i64), a.wrapping_pow(n));
    }

    #[test]
    fn checked_power_matches_std_checked_pow(a in any::<i64>(), n in 0u32..130) {
        prop_assert_eq!(checked_power(a, n as i64), a.checked_pow(n));
    }

    #[test]
    fn power_mod_agrees_with_power_when_exact(
        a in -1_000i64..1_000,
        n in 0i64..7,
        m in 1i64..SMALL_MODULUS_LIMIT,
    ) {
        let exact = checked_power(a, n);
        prop_assume!(exact.is_some());
        let expected = exact.map(|v| v.rem_euclid(m));
        prop_assert_eq!(power_mod(a, n, m).ok(), expected);
    }

    #[test]
    fn power_mod_zero_exponent_is_one(a in any::<i64>(), m in 2i64..i64::MAX) {
        prop_assert_eq!(power_mod(a, 0, m), Ok(1));
    }

    #[test]
    fn power_mod_result_is_canonical(
        a in any::<i64>(),
        n in 0i64..i64::MAX,
        m in 1i64..SMALL_MODULUS_LIMIT,
    ) {
        let r = power_mod(a, n, m).unwrap();
        prop_assert!((0..m).contains(&r));
    }

    #[test]
    fn non_positive_modulus_always_fails(a in any::<i64>(), n in any::<i64>(), m in i64::MIN..=0) {
        prop_assert_eq!(power_mod(a, n, m), Err(PowError::InvalidModulus { modulus: m }));
    }

    #[test]
    fn wrapping_and_exact_agree_below_two_pow_31(
        a in any::<i64>(),
        n in 0i64..i64::MAX,
        m in 1i64..SMALL_MODULUS_LIMIT,
    ) {
        let modulus = Modulus::new(m).unwrap();
        prop_assert_eq!(modulus.pow(a, n), modulus.pow_exact(a, n));
    }

    #[test]
    fn repeated_calls_are_deterministic(a in any::<i64>(), n in 0i64..i64::MAX, m in 1i64..i64::MAX) {
        prop_assert_eq!(power(a, n), power(a, n));
        prop_assert_eq!(power_mod(a, n, m), power_mod(a, n, m));
    }
}
