// RSA Error Types
// Failure conditions surfaced by key generation and the message codec

use num_bigint::BigUint;
use thiserror::Error;

/// Errors produced by the RSA core.
///
/// Every variant is a recoverable condition handed back to the caller;
/// the core itself never prints and never panics on bad input.
#[derive(Debug, Error)]
pub enum RsaError {
    /// The prime window derived from the requested bit length did not
    /// yield a usable pair.
    #[error("no primes available between {min} and {max}")]
    NoPrimesInRange { min: BigUint, max: BigUint },

    /// No public exponent coprime with the totient was found within the
    /// retry budget.
    #[error("no suitable public exponent found after {attempts} attempts")]
    ExponentSearchExhausted { attempts: u32 },

    /// The modular inverse does not exist because the inputs were not
    /// coprime.
    #[error("modular inverse does not exist")]
    NoInverse,

    /// A ciphertext token did not parse as an integer.
    #[error("unable to parse message: {token:?} is not an integer")]
    MalformedCiphertext { token: String },

    /// A decoded value does not fit in a single byte.
    #[error("unable to decode message: {value} does not fit in one byte")]
    ValueOutOfRange { value: BigUint },

    /// The decoded byte sequence is not valid UTF-8.
    #[error("unable to decode message: {0}")]
    InvalidText(#[from] std::string::FromUtf8Error),
}
