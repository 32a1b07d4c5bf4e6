// Message Decoding
// Parses the token stream and recovers the plaintext

use std::str::FromStr;

use num_bigint::BigUint;
use num_traits::ToPrimitive;

use super::arith::mod_exp;
use super::error::RsaError;

/// Decode a space-separated ciphertext token stream with the private half
/// of a key set.
///
/// Each token must parse as an integer, its transform `mod_exp(c, d, n)`
/// must fit in a single byte, and the reassembled bytes must form valid
/// UTF-8; each condition fails with its own [`RsaError`] variant.
pub fn decode_message(stream: &str, n: &BigUint, d: &BigUint) -> Result<String, RsaError> {
    let mut bytes = Vec::new();
    for token in stream.split_whitespace() {
        let value = BigUint::from_str(token)
            .map_err(|_| RsaError::MalformedCiphertext { token: token.to_string() })?;
        let decoded = mod_exp(&value, d, n);
        let byte = decoded
            .to_u8()
            .ok_or_else(|| RsaError::ValueOutOfRange { value: decoded.clone() })?;
        bytes.push(byte);
    }
    Ok(String::from_utf8(bytes)?)
}
