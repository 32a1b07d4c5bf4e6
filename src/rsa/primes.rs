// Prime Discovery
// Windowed trial-division sieve and random pair selection

use log::debug;
use num_bigint::BigUint;
use num_traits::Zero;
use rand::Rng;

/// Collect the primes strictly between `min` and `max`.
///
/// Trial division against the primes found so far; the result is ordered
/// and deduplicated. Empty when `min > max` or the window holds no primes.
pub fn prime_sieve(min: &BigUint, max: &BigUint) -> Vec<BigUint> {
    let mut primes: Vec<BigUint> = Vec::new();

    // Don't bother if the bounds are backwards
    if min > max {
        return primes;
    }

    let mut i = BigUint::from(2u32);
    while i < *max {
        if !primes.iter().any(|p| (&i % p).is_zero()) {
            primes.push(i.clone());
        }
        i += 1u32;
    }

    primes.retain(|p| p > min);
    primes
}

/// Draw a random prime pair from the window `(min, max)` whose product
/// should land in `[product_min, product_max]`.
///
/// Both draws remove the chosen candidate from the pool, so the primes are
/// always distinct. The second draw repeats until the product constraint
/// holds or the pool runs dry, and the last-drawn candidate is returned
/// either way; callers must re-check the product bound on the result.
/// Returns `None` when the window yields fewer than two primes.
pub fn random_prime_pair<R: Rng + ?Sized>(
    rng: &mut R,
    min: &BigUint,
    max: &BigUint,
    product_min: &BigUint,
    product_max: &BigUint,
) -> Option<(BigUint, BigUint)> {
    let mut pool = prime_sieve(min, max);
    debug!("prime window ({}, {}) holds {} candidates", min, max, pool.len());

    if pool.len() < 2 {
        return None;
    }

    let p = pool.remove(rng.gen_range(0..pool.len()));
    let q = loop {
        let q = pool.remove(rng.gen_range(0..pool.len()));
        let n = &p * &q;
        if pool.is_empty() || (n >= *product_min && n <= *product_max) {
            break q;
        }
    };

    Some((p, q))
}
