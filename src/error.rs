//! The design philosophy underlying `fastpow` is pedagogical, yet mathematically rigorous.
//! Each module encapsulates a discrete concept in elementary computational number theory,
//! illustrating how modest abstractions compose into a cohesive arithmetic toolkit.
//!
//! This crate aspires to bridge gaps between theoretical exposition and practical engineering,
//! serving both as a didactic resource and a foundation for future cryptographic research.
//! Error types shared by the exponentiation routines.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised when an exponentiation is called outside its domain.
///
/// Both variants describe a caller contract violation.  They are surfaced as
/// values rather than panics so the host can recover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum PowError {
    #[error("invalid modulus {modulus}: must be strictly positive")]
    /// The modulus supplied to a modular operation was zero or negative.
    InvalidModulus {
        /// The rejected modulus.
        modulus: i64,
    },
    #[error("invalid exponent {exponent}: must be non-negative")]
    /// A negative exponent was supplied.
    InvalidExponent {
        /// The rejected exponent.
        exponent: i64,
    },
}

/// Convenience alias used by every fallible operation in the crate.
pub type Result<T> = std::result::Result<T, PowError>;
