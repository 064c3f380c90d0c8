#![deny(missing_docs)]

//! The design philosophy underlying `fastpow` is pedagogical, yet mathematically rigorous.
//! Each module encapsulates a discrete concept in elementary computational number theory,
//! illustrating how modest abstractions compose into a cohesive arithmetic toolkit.
//!
//! This crate aspires to bridge gaps between theoretical exposition and practical engineering,
//! serving both as a didactic resource and a foundation for future cryptographic research.
//! # fastpow
//!
//! **fastpow** provides two numeric primitives over 64-bit signed integers:
//! integer exponentiation by squaring and modular exponentiation by
//! squaring.  Both run in `O(log n)` multiplications, hold no state and are
//! safe to call from any number of threads at once.
//!
//! ## Features
//!
//! * **Wrapping exponentiation** via [`power`](fn.power.html).  Overflow wraps
//!   modulo `2^64` and is never reported; [`checked_power`](fn.checked_power.html)
//!   is available when overflow must be detected.
//! * **Modular exponentiation** via [`power_mod`](fn.power_mod.html), which
//!   returns [`PowError::InvalidModulus`](enum.PowError.html) for a
//!   non-positive modulus instead of aborting.
//! * **Reusable moduli**: the [`Modulus`](struct.Modulus.html) type validates
//!   once and offers reduction, multiplication and an exact 128-bit variant
//!   of exponentiation for moduli beyond `2^31`.
//!
//! ## Usage
//!
//! ```rust
//! use fastpow::{power, power_mod, Modulus};
//!
//! assert_eq!(power(2, 10), 1024);
//! assert_eq!(power_mod(15, 20, 1_000_000_007), Ok(393128630));
//!
//! let p = Modulus::new(101)?;
//! // Fermat inverse of 7 modulo 101.
//! let inv = p.pow(7, 99)?;
//! assert_eq!(p.mul(7, inv), 1);
//! # Ok::<(), fastpow::PowError>(())
//! ```
//!
//! Arbitrary-precision arithmetic is out of scope; everything is fixed at
//! `i64`.

mod error;
mod modular;
mod power;

pub use error::{PowError, Result};
pub use modular::{power_mod, Modulus};
pub use power::{checked_power, power, try_power};
