//! The design philosophy underlying `fastpow` is pedagogical, yet mathematically rigorous.
//! Each module encapsulates a discrete concept in elementary computational number theory,
//! illustrating how modest abstractions compose into a cohesive arithmetic toolkit.
//!
//! This crate aspires to bridge gaps between theoretical exposition and practical engineering,
//! serving both as a didactic resource and a foundation for future cryptographic research.
//! Modular exponentiation.
//!
//! The [`Modulus`](struct.Modulus.html) type wraps a validated, strictly
//! positive modulus and exposes reduction, multiplication and
//! exponentiation.  [`power_mod`](fn.power_mod.html) is the one-shot entry
//! point that validates its modulus before doing any work.

use serde::{Deserialize, Serialize};

use crate::error::{PowError, Result};

/// A strictly positive `i64` modulus.
///
/// Construction is the only place the sign is checked, so every method can
/// assume `m > 0`.  Products are formed with wrapping 64-bit multiplication
/// and then reduced; results are exact as long as `m * m` fits in an `i64`
/// (in practice `m < 2^31`).  [`Modulus::pow_exact`] lifts that restriction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct Modulus(i64);

impl Modulus {
    /// Creates a modulus after checking that it is strictly positive.
    ///
    /// # Errors
    ///
    /// Returns [`PowError::InvalidModulus`] when `m <= 0`.
    pub fn new(m: i64) -> Result<Self> {
        if m <= 0 {
            log::debug!("rejecting non-positive modulus {m}");
            return Err(PowError::InvalidModulus { modulus: m });
        }
        Ok(Modulus(m))
    }

    /// Returns the raw modulus value.
    #[inline]
    pub fn get(&self) -> i64 {
        self.0
    }

    /// Returns the canonical residue of `a` in `[0, m)`.
    #[inline]
    pub fn reduce(&self, a: i64) -> i64 {
        a.rem_euclid(self.0)
    }

    /// Multiplies two residues.
    #[inline]
    pub fn mul(&self, a: i64, b: i64) -> i64 {
        self.reduce(a).wrapping_mul(self.reduce(b)) % self.0
    }

    /// Computes `base^exponent mod m` by repeated squaring.
    ///
    /// Every product is reduced immediately, so intermediates stay below
    /// `m^2`.  When `m^2` does not fit in an `i64` the products wrap and the
    /// result is deterministic but not the true residue.
    ///
    /// # Errors
    ///
    /// Returns [`PowError::InvalidExponent`] if `exponent` is negative.
    pub fn pow(&self, base: i64, exponent: i64) -> Result<i64> {
        check_exponent(exponent)?;
        let m = self.0;
        let mut result = 1 % m;
        let mut a = self.reduce(base);
        let mut n = exponent;
        while n > 0 {
            if n & 1 == 1 {
                result = result.wrapping_mul(a) % m;
            }
            a = a.wrapping_mul(a) % m;
            n >>= 1;
        }
        Ok(result)
    }

    /// Same as [`Modulus::pow`] but with 128-bit intermediates, which makes
    /// the result exact for every positive `i64` modulus.
    ///
    /// # Errors
    ///
    /// Returns [`PowError::InvalidExponent`] if `exponent` is negative.
    pub fn pow_exact(&self, base: i64, exponent: i64) -> Result<i64> {
        check_exponent(exponent)?;
        let m = self.0 as i128;
        let mut result = 1 % m;
        let mut a = self.reduce(base) as i128;
        let mut n = exponent;
        while n > 0 {
            if n & 1 == 1 {
                result = (result * a) % m;
            }
            a = (a * a) % m;
            n >>= 1;
        }
        // result < m <= i64::MAX
        Ok(result as i64)
    }
}

impl TryFrom<i64> for Modulus {
    type Error = PowError;

    fn try_from(m: i64) -> Result<Self> {
        Modulus::new(m)
    }
}

impl From<Modulus> for i64 {
    fn from(m: Modulus) -> i64 {
        m.0
    }
}

fn check_exponent(exponent: i64) -> Result<()> {
    if exponent < 0 {
        log::debug!("rejecting negative exponent {exponent}");
        return Err(PowError::InvalidExponent { exponent });
    }
    Ok(())
}

/// Computes `(base^exponent) mod modulus`.
///
/// The modulus is validated before any arithmetic happens, then the exponent.
/// The result lies in `[0, modulus)` whenever `modulus * modulus` fits in an
/// `i64`; larger moduli wrap silently, see [`Modulus::pow`].
///
/// # Errors
///
/// Returns [`PowError::InvalidModulus`] when `modulus <= 0` and
/// [`PowError::InvalidExponent`] when `exponent < 0`.
///
/// ```
/// use fastpow::{power_mod, PowError};
///
/// assert_eq!(power_mod(2, 3, 5), Ok(3));
/// assert_eq!(power_mod(2, 3, 0), Err(PowError::InvalidModulus { modulus: 0 }));
/// ```
pub fn power_mod(base: i64, exponent: i64, modulus: i64) -> Result<i64> {
    let modulus = Modulus::new(modulus)?;
    modulus.pow(base, exponent)
}
