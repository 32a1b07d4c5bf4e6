// RSA Key Generation
// Synthesizes a modulus and exponent pair from a requested bit length

use std::fmt;

use log::debug;
use num_bigint::{BigUint, RandBigInt};
use num_traits::{One, Zero};
use rand::Rng;

use super::arith::{gcd, mod_inv, power, totient};
use super::error::RsaError;
use super::primes::random_prime_pair;

/// Retry budget for the public exponent search.
const MAX_EXPONENT_ATTEMPTS: u32 = 1_000;

/// An RSA key set: modulus plus public and private exponents.
///
/// Invariants: `n = p·q` for two distinct primes that are not retained,
/// `e·d ≡ 1 (mod totient(n))`, `0 < e < totient(n)`, and
/// `gcd(e, totient(n)) = 1`. Constructed atomically by [`generate_keys`]
/// and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeySet {
    pub n: BigUint, // Modulus
    pub e: BigUint, // Public exponent
    pub d: BigUint, // Private exponent
}

impl fmt::Display for KeySet {
    /// Human-readable rendering; a display format, not meant to be parsed.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{ mod: {}, public: {}, private: {} }}", self.n, self.e, self.d)
    }
}

/// Generate an RSA key set whose modulus occupies exactly `bit_length`
/// bits, drawing all randomness from `rng`.
///
/// The prime factors are sought near half the modulus bit length (give or
/// take one bit) so the two are comparable in size. Fails with
/// [`RsaError::NoPrimesInRange`] when the derived window cannot supply a
/// pair whose product has the requested width, and with
/// [`RsaError::ExponentSearchExhausted`] when no coprime public exponent
/// turns up within the retry budget.
pub fn generate_keys_with<R: Rng + ?Sized>(
    rng: &mut R,
    bit_length: u32,
) -> Result<KeySet, RsaError> {
    let two = BigUint::from(2u32);

    // n must occupy exactly bit_length bits
    let min_n = power(&two, bit_length.saturating_sub(1));
    let max_n = power(&two, bit_length) - 1u32;

    let p_min = power(&two, (bit_length / 2).saturating_sub(1));
    let p_max = power(&two, bit_length / 2 + 1);

    let (p, q) = random_prime_pair(rng, &p_min, &p_max, &min_n, &max_n).ok_or_else(|| {
        RsaError::NoPrimesInRange { min: p_min.clone(), max: p_max.clone() }
    })?;

    // The pair draw hands back its last candidates even when the pool ran
    // dry, so the product constraint is checked again here.
    let n = &p * &q;
    if n < min_n || n > max_n {
        return Err(RsaError::NoPrimesInRange { min: p_min, max: p_max });
    }

    let t = totient(&n, &p, &q);
    debug!("p: {}, q: {}, t: {}", p, q, t);

    // The exponent comes from whole random bytes; below 8 bits every draw
    // is zero and the search stops at the retry cap.
    let e_bits = u64::from(bit_length / 8) * 8;
    let mut e = None;
    for _ in 0..MAX_EXPONENT_ATTEMPTS {
        let candidate = rng.gen_biguint(e_bits);
        if !candidate.is_zero() && candidate <= t && gcd(&candidate, &t).is_one() {
            e = Some(candidate);
            break;
        }
    }
    let e = e.ok_or(RsaError::ExponentSearchExhausted { attempts: MAX_EXPONENT_ATTEMPTS })?;

    let d = mod_inv(&e, &t).ok_or(RsaError::NoInverse)?;

    Ok(KeySet { n, e, d })
}

/// Generate a key set using the thread-local RNG.
pub fn generate_keys(bit_length: u32) -> Result<KeySet, RsaError> {
    generate_keys_with(&mut rand::thread_rng(), bit_length)
}
