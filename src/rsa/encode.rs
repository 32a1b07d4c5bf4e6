// Message Encoding
// Maps text onto the space-separated ciphertext token stream

use num_bigint::BigUint;

use super::arith::mod_exp;

/// Encode `text` under the public half of a key set.
///
/// Each UTF-8 byte is transformed independently as `mod_exp(m, e, n)` and
/// the decimal renderings are joined with single spaces, no trailing
/// delimiter. One byte per token: the ciphertext range is bounded by `n`,
/// the plaintext alphabet by 0..=255.
pub fn encode_message(text: &str, n: &BigUint, e: &BigUint) -> String {
    text.bytes()
        .map(|b| mod_exp(&BigUint::from(b), e, n).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
