// Modular Arithmetic Primitives
// Pure functions over arbitrary-precision integers

use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::{One, Zero};

/// Greatest common divisor by Euclid's algorithm.
///
/// `gcd(a, 0) = a`.
pub fn gcd(a: &BigUint, b: &BigUint) -> BigUint {
    let mut a = a.clone();
    let mut b = b.clone();
    while !b.is_zero() {
        let r = &a % &b;
        a = std::mem::replace(&mut b, r);
    }
    a
}

/// `base^exp` by exponentiation by squaring.
///
/// Used for computing key range bounds; the modular path goes through
/// [`mod_exp`] instead. `exp = 0` yields 1.
pub fn power(base: &BigUint, mut exp: u32) -> BigUint {
    let mut result = BigUint::one();
    let mut base = base.clone();
    while exp > 0 {
        if exp & 1 == 1 {
            result = &result * &base;
        }
        exp >>= 1;
        if exp > 0 {
            base = &base * &base;
        }
    }
    result
}

/// Modular exponentiation: `base^exp mod modulus`.
///
/// Right-to-left binary method. `base` is reduced up front so every
/// intermediate product stays below `modulus²`. A modulus of 1 yields 0.
pub fn mod_exp(base: &BigUint, exp: &BigUint, modulus: &BigUint) -> BigUint {
    if modulus.is_one() {
        return BigUint::zero();
    }

    let mut result = BigUint::one();
    let mut base = base % modulus;
    let mut exp = exp.clone();

    while !exp.is_zero() {
        if exp.is_odd() {
            result = (&result * &base) % modulus;
        }
        exp >>= 1;
        base = (&base * &base) % modulus;
    }

    result
}

/// Modular multiplicative inverse: `a^(-1) mod m`.
///
/// Iterative extended Euclidean algorithm with signed coefficient
/// tracking. Returns `None` when `gcd(a, m) != 1`; otherwise the result
/// is normalized into `[0, m)`.
pub fn mod_inv(a: &BigUint, m: &BigUint) -> Option<BigUint> {
    if m.is_zero() || !gcd(a, m).is_one() {
        return None;
    }

    let m0 = BigInt::from(m.clone());
    let mut a = BigInt::from(a.clone());
    let mut b = m0.clone();
    let mut x0 = BigInt::zero();
    let mut x1 = BigInt::one();

    while a > BigInt::one() {
        let q = &a / &b;
        let r = &a % &b;
        a = std::mem::replace(&mut b, r);
        let new_x0 = &x1 - &q * &x0;
        let t = std::mem::replace(&mut x0, new_x0);
        x1 = t;
    }

    x1.mod_floor(&m0).to_biguint()
}

/// Totient of `n = p·q`, computed as `n - p - q + 1`.
///
/// Algebraic rewrite of `(p-1)(q-1)` given `n = pq`; only valid when `p`
/// and `q` are exactly the prime factors of `n`.
pub fn totient(n: &BigUint, p: &BigUint, q: &BigUint) -> BigUint {
    n - p - q + 1u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn big(n: u64) -> BigUint {
        BigUint::from(n)
    }

    #[test]
    fn gcd_of_zero_is_identity() {
        assert_eq!(gcd(&big(42), &big(0)), big(42));
        assert_eq!(gcd(&big(0), &big(42)), big(42));
    }

    #[test]
    fn gcd_matches_euclid_recurrence() {
        let pairs = [(48u64, 18u64), (270, 192), (17, 5), (1071, 462)];
        for (a, b) in pairs {
            let (a, b) = (big(a), big(b));
            assert_eq!(gcd(&a, &b), gcd(&b, &(&a % &b)));
        }
        assert_eq!(gcd(&big(48), &big(18)), big(6));
        assert_eq!(gcd(&big(1071), &big(462)), big(21));
    }

    #[test]
    fn power_of_zero_exponent_is_one() {
        assert_eq!(power(&big(7), 0), big(1));
        assert_eq!(power(&big(0), 0), big(1));
    }

    #[test]
    fn power_computes_small_cases() {
        assert_eq!(power(&big(2), 10), big(1024));
        assert_eq!(power(&big(5), 1), big(5));
        assert_eq!(power(&big(3), 20), big(3_486_784_401));
    }

    #[test]
    fn power_exceeds_machine_width() {
        // 2^64 does not fit in u64
        assert_eq!(power(&big(2), 64), big(u64::MAX) + 1u32);
    }

    #[test]
    fn mod_exp_known_values() {
        // 3^5 mod 7 = 243 mod 7 = 5
        assert_eq!(mod_exp(&big(3), &big(5), &big(7)), big(5));
        // 4^13 mod 497 = 445
        assert_eq!(mod_exp(&big(4), &big(13), &big(497)), big(445));
    }

    #[test]
    fn mod_exp_modulus_one_is_zero() {
        assert_eq!(mod_exp(&big(12), &big(34), &big(1)), big(0));
    }

    #[test]
    fn mod_exp_zero_exponent_is_one() {
        assert_eq!(mod_exp(&big(9), &big(0), &big(7)), big(1));
    }

    #[test]
    fn mod_inv_satisfies_inverse_property() {
        let cases = [(3u64, 7u64), (10, 17), (7, 40), (17, 3120)];
        for (a, m) in cases {
            let (a, m) = (big(a), big(m));
            let inv = mod_inv(&a, &m).unwrap();
            assert!(inv < m);
            assert_eq!((&a * &inv) % &m, big(1));
        }
        // The classic 3233 = 61 * 53 key pair
        assert_eq!(mod_inv(&big(17), &big(3120)).unwrap(), big(2753));
    }

    #[test]
    fn mod_inv_of_one_is_one() {
        assert_eq!(mod_inv(&big(1), &big(5)).unwrap(), big(1));
    }

    #[test]
    fn mod_inv_rejects_non_coprime_inputs() {
        assert!(mod_inv(&big(4), &big(8)).is_none());
        assert!(mod_inv(&big(6), &big(9)).is_none());
        assert!(mod_inv(&big(0), &big(7)).is_none());
    }

    #[test]
    fn totient_equals_expanded_product() {
        // (3-1)(5-1) = 8
        assert_eq!(totient(&big(15), &big(3), &big(5)), big(8));
        // (61-1)(53-1) = 3120
        assert_eq!(totient(&big(3233), &big(61), &big(53)), big(3120));
    }
}
