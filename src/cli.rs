//! Command-line interface

use std::io::{self, BufRead};

use anyhow::Context;
use clap::{Parser, Subcommand};
use log::info;
use num_bigint::BigUint;

use crate::rsa::{decode_message, encode_message, generate_keys};

/// Bit length used by the self-test mode.
const TEST_BIT_LENGTH: u32 = 16;
const TEST_MESSAGE: &str = "All your base are belong to us!";

#[derive(Parser)]
#[command(name = "rsa_cli")]
#[command(version)]
#[command(about = "Educational RSA key generation and message encoding")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Encode stdin under a public key and print the token stream
    ///
    /// Input is read until EOF or a line starting with "exit". Best used
    /// by piping in an input file and piping the result to an output
    /// file.
    #[command(visible_alias = "e")]
    Encode {
        /// Key modulus
        modulus: BigUint,
        /// Public exponent
        public_exponent: BigUint,
    },

    /// Decode a token stream from stdin with a private key
    ///
    /// Input is read until EOF or a line starting with "exit". Best used
    /// by piping in an input file and piping the result to an output
    /// file.
    #[command(visible_alias = "d")]
    Decode {
        /// Key modulus
        modulus: BigUint,
        /// Private exponent
        private_exponent: BigUint,
    },

    /// Generate a fresh key set
    #[command(visible_alias = "g")]
    Generate {
        /// Modulus size in bits
        #[arg(value_parser = clap::value_parser!(u32).range(8..=24))]
        bit_length: u32,
    },

    /// Generate a 16-bit key set and round-trip a demonstration message
    #[command(visible_alias = "t")]
    Test,
}

pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Encode { modulus, public_exponent } => {
            let message = read_until_sentinel()?;
            println!("{}", encode_message(&message, &modulus, &public_exponent));
        }
        Command::Decode { modulus, private_exponent } => {
            let stream = read_until_sentinel()?;
            let message =
                decode_message(&stream, &modulus, &private_exponent).context("decoding failed")?;
            println!("{}", message);
        }
        Command::Generate { bit_length } => {
            let keys = generate_keys(bit_length)
                .with_context(|| format!("key generation failed for {} bits", bit_length))?;
            info!("generated a {} bit key set", bit_length);
            println!("{}", keys);
        }
        Command::Test => run_self_test()?,
    }

    Ok(())
}

fn run_self_test() -> anyhow::Result<()> {
    println!("Testing with key length = {}", TEST_BIT_LENGTH);

    let keys = generate_keys(TEST_BIT_LENGTH).context("key generation failed")?;
    println!("Generated Keys: \n\t{}", keys);
    println!("Test Message:\n\t{}", TEST_MESSAGE);

    let encoded = encode_message(TEST_MESSAGE, &keys.n, &keys.e);
    println!("Encoded Message: \n{}", encoded);

    let decoded = decode_message(&encoded, &keys.n, &keys.d).context("decoding failed")?;
    println!("Decoded Message: \n\t{}", decoded);

    Ok(())
}

/// Read stdin line by line until EOF or a line starting with "exit",
/// concatenating the lines without separators.
fn read_until_sentinel() -> anyhow::Result<String> {
    let stdin = io::stdin();
    let mut message = String::new();
    for line in stdin.lock().lines() {
        let line = line.context("failed to read stdin")?;
        if line.starts_with("exit") {
            break;
        }
        message.push_str(&line);
    }
    Ok(message)
}
