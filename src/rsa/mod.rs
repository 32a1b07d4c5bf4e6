// RSA Module - Main module file
// Exports all RSA-related functionality

pub mod arith;
pub mod decode;
pub mod encode;
pub mod error;
pub mod keygen;
pub mod primes;

pub use arith::{gcd, mod_exp, mod_inv, power, totient};
pub use decode::decode_message;
pub use encode::encode_message;
pub use error::RsaError;
pub use keygen::{generate_keys, generate_keys_with, KeySet};
pub use primes::{prime_sieve, random_prime_pair};
