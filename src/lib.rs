// rsa_cli - Educational RSA engine
// Library core consumed by the command-line front end

pub mod cli;
pub mod rsa;

pub use rsa::{decode_message, encode_message, generate_keys, KeySet, RsaError};
