//! The design philosophy underlying `fastpow` is pedagogical, yet mathematically rigorous.
//! Each module encapsulates a discrete concept in elementary computational number theory,
//! illustrating how modest abstractions compose into a cohesive arithmetic toolkit.
//!
//! This crate aspires to bridge gaps between theoretical exposition and practical engineering,
//! serving both as a didactic resource and a foundation for future cryptographic research.
//! Integer exponentiation by squaring.
//!
//! The routines here consume the exponent one bit at a time, squaring the
//! running base and folding it into the accumulator whenever the low bit is
//! set.  At the top of every iteration the accumulator times the running base
//! raised to the remaining exponent equals the original power, which is what
//! makes the loop correct after `O(log n)` multiplications.

use crate::error::{PowError, Result};

/// Raises `base` to `exponent` using two's-complement wraparound arithmetic.
///
/// Overflow is not reported: products that leave the `i64` range wrap
/// silently, which gives deterministic results modulo `2^64`.
///
/// The exponent must be non-negative.  A negative exponent is a contract
/// violation; the loop body never runs and `1` is returned, but callers must
/// not rely on that.  Use [`try_power`] to have the exponent validated.
#[inline]
pub fn power(base: i64, exponent: i64) -> i64 {
    let mut result = 1i64;
    let mut a = base;
    let mut n = exponent;
    while n > 0 {
        if n & 1 == 1 {
            result = result.wrapping_mul(a);
        }
        a = a.wrapping_mul(a);
        n >>= 1;
    }
    result
}

/// Validates the exponent and then behaves exactly like [`power`].
///
/// # Errors
///
/// Returns [`PowError::InvalidExponent`] if `exponent` is negative.
pub fn try_power(base: i64, exponent: i64) -> Result<i64> {
    if exponent < 0 {
        log::debug!("rejecting negative exponent {exponent} for base {base}");
        return Err(PowError::InvalidExponent { exponent });
    }
    Ok(power(base, exponent))
}

/// Raises `base` to `exponent`, returning `None` on overflow or on a negative
/// exponent.
///
/// The running base is only squared while exponent bits remain, so a square
/// that would never be folded into the result cannot cause a false overflow.
pub fn checked_power(base: i64, exponent: i64) -> Option<i64> {
    if exponent < 0 {
        return None;
    }
    let mut result = 1i64;
    let mut a = base;
    let mut n = exponent;
    while n > 0 {
        if n & 1 == 1 {
            result = result.checked_mul(a)?;
        }
        n >>= 1;
        if n > 0 {
            a = a.checked_mul(a)?;
        }
    }
    Some(result)
}
