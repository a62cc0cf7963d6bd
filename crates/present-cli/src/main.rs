//! Command-line interface for PRESENT CBC/CFB encryption.

#![forbid(unsafe_code)]

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use clap::{Parser, Subcommand, ValueEnum};
use present_core::{decrypt_block, encrypt_block, BLOCK_SIZE};
use present_modes::{
    generate_salt_with, BlockCipher, Encrypted, KeyInit, Mode, Present, TriplePresent,
};
use rand::{CryptoRng, RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// PRESENT block cipher CLI.
#[derive(Parser)]
#[command(
    name = "present",
    version,
    author,
    about = "PRESENT-style block cipher with CBC/CFB chaining"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum ModeArg {
    Cbc,
    Cfb,
}

impl From<ModeArg> for Mode {
    fn from(value: ModeArg) -> Self {
        match value {
            ModeArg::Cbc => Mode::Cbc,
            ModeArg::Cfb => Mode::Cfb,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Print a fresh base64 salt.
    Salt {
        /// Salt length in bytes.
        #[arg(long, default_value_t = BLOCK_SIZE)]
        len: usize,
        /// Optional RNG seed for reproducible output.
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Encrypt a file into a serialized envelope.
    Enc {
        /// Chaining mode.
        #[arg(long, value_enum)]
        mode: ModeArg,
        /// Key as hex: 10 or 16 bytes, or 20/30/32/48 bytes with --triple.
        #[arg(long, value_name = "HEX")]
        key_hex: String,
        /// Salt as base64 (8 bytes). Generated when omitted.
        #[arg(long, value_name = "B64")]
        salt_b64: Option<String>,
        /// Optional RNG seed used when generating the salt.
        #[arg(long)]
        seed: Option<u64>,
        /// Use the three-stage EDE composition of PRESENT.
        #[arg(long, default_value_t = false)]
        triple: bool,
        /// Plaintext input file.
        #[arg(long, value_name = "FILE")]
        input: PathBuf,
        /// Output envelope path.
        #[arg(long, value_name = "FILE")]
        output: PathBuf,
    },
    /// Decrypt an envelope produced by `enc`.
    Dec {
        /// Key as hex, same length rules as `enc`.
        #[arg(long, value_name = "HEX")]
        key_hex: String,
        /// Use the three-stage EDE composition of PRESENT.
        #[arg(long, default_value_t = false)]
        triple: bool,
        /// Envelope input file.
        #[arg(long, value_name = "FILE")]
        input: PathBuf,
        /// Plaintext output path.
        #[arg(long, value_name = "FILE")]
        output: PathBuf,
    },
    /// Verify block and mode round trips on random samples.
    Check {
        /// Key as hex (10 or 16 bytes).
        #[arg(long, value_name = "HEX")]
        key_hex: String,
        /// Number of random samples to test.
        #[arg(long, default_value_t = 64)]
        samples: usize,
        /// Optional RNG seed for reproducibility.
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Run a local demo: random key and salt, "TestData" through both modes.
    Demo {
        /// Optional RNG seed for reproducibility.
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    match cli.command {
        Commands::Salt { len, seed } => cmd_salt(len, seed),
        Commands::Enc {
            mode,
            key_hex,
            salt_b64,
            seed,
            triple,
            input,
            output,
        } => cmd_enc(
            mode.into(),
            &key_hex,
            salt_b64.as_deref(),
            seed,
            triple,
            &input,
            &output,
        ),
        Commands::Dec {
            key_hex,
            triple,
            input,
            output,
        } => cmd_dec(&key_hex, triple, &input, &output),
        Commands::Check {
            key_hex,
            samples,
            seed,
        } => cmd_check(&key_hex, samples, seed),
        Commands::Demo { seed } => cmd_demo(seed),
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn cmd_salt(len: usize, seed: Option<u64>) -> Result<()> {
    let salt = generate_salt_with(&mut seeded_rng(seed), len);
    println!("{}", BASE64.encode(salt));
    Ok(())
}

fn cmd_enc(
    mode: Mode,
    key_hex: &str,
    salt_b64: Option<&str>,
    seed: Option<u64>,
    triple: bool,
    input_path: &Path,
    output_path: &Path,
) -> Result<()> {
    let cipher = build_cipher(key_hex, triple)?;
    let salt = match salt_b64 {
        Some(encoded) => BASE64.decode(encoded.trim()).context("decode salt base64")?,
        None => generate_salt_with(&mut seeded_rng(seed), cipher.block_size()),
    };
    let data =
        fs::read(input_path).with_context(|| format!("read {}", input_path.display()))?;

    let sealed = mode
        .encrypt(&*cipher, &data, &salt)
        .with_context(|| format!("{mode} encrypt"))?;
    info!(
        %mode,
        plaintext = data.len(),
        ciphertext = sealed.ciphertext.len(),
        "encrypted"
    );

    let bytes = sealed.to_bytes().context("serialize envelope")?;
    fs::write(output_path, bytes).with_context(|| format!("write {}", output_path.display()))?;
    println!("salt (base64): {}", BASE64.encode(&sealed.salt));
    Ok(())
}

fn cmd_dec(key_hex: &str, triple: bool, input_path: &Path, output_path: &Path) -> Result<()> {
    let cipher = build_cipher(key_hex, triple)?;
    let sealed = load_envelope(input_path)?;
    let plain = sealed
        .decrypt(&*cipher)
        .with_context(|| format!("{} decrypt", sealed.mode))?;
    if let Some(reason) = plain.padding_error() {
        warn!(
            %reason,
            "padding check failed; writing raw bytes (wrong key, wrong salt or corrupted input?)"
        );
    }
    fs::write(output_path, plain.as_bytes())
        .with_context(|| format!("write {}", output_path.display()))?;
    Ok(())
}

fn cmd_check(key_hex: &str, samples: usize, seed: Option<u64>) -> Result<()> {
    let key = hex::decode(key_hex.trim()).context("decode key hex")?;
    let cipher = Present::new(&key).context("construct PRESENT")?;
    let mut rng = seeded_rng(seed);

    for _ in 0..samples {
        let mut block = [0u8; BLOCK_SIZE];
        rng.fill_bytes(&mut block);
        let ct = encrypt_block(&block, cipher.round_keys());
        if decrypt_block(&ct, cipher.round_keys()) != block {
            bail!("block round trip failed for {}", hex::encode(block));
        }

        let len = (rng.next_u32() % 256) as usize;
        let mut message = vec![0u8; len];
        rng.fill_bytes(&mut message);
        let salt = generate_salt_with(&mut rng, BLOCK_SIZE);
        for mode in [Mode::Cbc, Mode::Cfb] {
            let sealed = mode.encrypt(&cipher, &message, &salt)?;
            if sealed.decrypt(&cipher)?.as_bytes() != message.as_slice() {
                bail!("{mode} round trip failed for a {len}-byte message");
            }
        }
    }
    println!("{samples} samples ok");
    Ok(())
}

fn cmd_demo(seed: Option<u64>) -> Result<()> {
    let mut rng = seeded_rng(seed);
    let mut key = [0u8; 16];
    rng.fill_bytes(&mut key);
    let salt = generate_salt_with(&mut rng, BLOCK_SIZE);
    let cipher = Present::new(&key)?;
    let plaintext = b"TestData";

    println!("demo key: {}", hex::encode(key));
    println!("salt (base64): {}", BASE64.encode(&salt));
    println!("plaintext: {}", String::from_utf8_lossy(plaintext));
    for mode in [Mode::Cbc, Mode::Cfb] {
        let sealed = mode.encrypt(&cipher, plaintext, &salt)?;
        let decrypted = sealed.decrypt(&cipher)?.into_bytes();
        println!("{mode} ciphertext: {}", hex::encode(&sealed.ciphertext));
        println!("{mode} decrypted: {}", String::from_utf8_lossy(&decrypted));
        if decrypted != plaintext {
            bail!("{mode} demo roundtrip failed");
        }
    }
    Ok(())
}

fn build_cipher(key_hex: &str, triple: bool) -> Result<Box<dyn BlockCipher>> {
    let key = hex::decode(key_hex.trim()).context("decode key hex")?;
    let cipher: Box<dyn BlockCipher> = if triple {
        Box::new(TriplePresent::new_from_slice(&key).context("construct triple PRESENT")?)
    } else {
        Box::new(Present::new(&key).context("construct PRESENT")?)
    };
    Ok(cipher)
}

fn load_envelope(path: &Path) -> Result<Encrypted> {
    let bytes = fs::read(path).with_context(|| format!("read {}", path.display()))?;
    Encrypted::from_bytes(&bytes).context("deserialize envelope")
}

fn seeded_rng(seed: Option<u64>) -> impl RngCore + CryptoRng {
    match seed {
        Some(value) => {
            let mut seed_bytes = [0u8; 32];
            seed_bytes[..8].copy_from_slice(&value.to_le_bytes());
            ChaCha20Rng::from_seed(seed_bytes)
        }
        None => {
            let mut seed_bytes = [0u8; 32];
            rand::rngs::OsRng.fill_bytes(&mut seed_bytes);
            ChaCha20Rng::from_seed(seed_bytes)
        }
    }
}
