//! # CLI Interface
//!
//! Defines the command-line argument structure for `stellar-keytool` using
//! `clap` derive. Every secret input can come from an environment variable
//! so it never has to appear in shell history.

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Stellar key tool.
///
/// Generates and restores SEP-0005 wallets, inspects and builds StrKeys, and
/// signs or verifies messages with Ed25519 keys.
#[derive(Parser, Debug)]
#[command(
    name = "stellar-keytool",
    about = "Stellar keys, StrKeys and SEP-0005 mnemonics",
    version,
    propagate_version = true
)]
pub struct KeytoolCli {
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Options shared by every subcommand.
#[derive(Args, Debug)]
pub struct GlobalArgs {
    /// Log filter used when `RUST_LOG` is unset.
    #[arg(long, global = true, env = "KEYTOOL_LOG", default_value = "warn")]
    pub log: String,

    /// Log output format: `pretty` or `json`.
    #[arg(long, global = true, env = "KEYTOOL_LOG_FORMAT", default_value = "pretty")]
    pub log_format: String,

    /// Print results as JSON documents instead of text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Mnemonic word list language.
    #[arg(long, global = true, env = "KEYTOOL_LANGUAGE", default_value = "english")]
    pub language: String,

    /// File with 2048 newline-separated words, registered under `--language`.
    #[arg(long, global = true, env = "KEYTOOL_WORDLIST")]
    pub wordlist: Option<PathBuf>,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a new mnemonic and show its first accounts.
    Generate(GenerateArgs),
    /// Restore accounts from an existing mnemonic.
    Derive(DeriveArgs),
    /// Generate a standalone random key pair (no mnemonic).
    Random,
    /// Decode any StrKey and describe its contents.
    Inspect(InspectArgs),
    /// Encode raw hex bytes as a StrKey.
    Encode(EncodeArgs),
    /// Sign a message with a secret seed.
    Sign(SignArgs),
    /// Verify a signature against an account id.
    Verify(VerifyArgs),
    /// Print version information and exit.
    Version,
}

/// Arguments for the `generate` subcommand.
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Number of words: 12, 15, 18, 21 or 24.
    #[arg(long, short = 'w', default_value_t = 24)]
    pub words: usize,

    /// Optional BIP-39 passphrase.
    #[arg(long, env = "KEYTOOL_PASSPHRASE", default_value = "", hide_env_values = true)]
    pub passphrase: String,

    /// How many accounts to derive, starting at index 0.
    #[arg(long, short = 'n', default_value_t = 1)]
    pub accounts: u32,
}

/// Arguments for the `derive` subcommand.
#[derive(Args, Debug)]
pub struct DeriveArgs {
    /// Space-separated recovery phrase.
    #[arg(long, short = 'm', env = "KEYTOOL_MNEMONIC", hide_env_values = true)]
    pub mnemonic: String,

    /// Optional BIP-39 passphrase.
    #[arg(long, env = "KEYTOOL_PASSPHRASE", default_value = "", hide_env_values = true)]
    pub passphrase: String,

    /// First account index.
    #[arg(long, short = 'i', default_value_t = 0)]
    pub index: u32,

    /// Number of consecutive accounts to derive.
    #[arg(long, short = 'n', default_value_t = 1)]
    pub count: u32,

    /// Also print the 64-byte BIP-39 seed in hex.
    #[arg(long)]
    pub show_seed: bool,
}

/// Arguments for the `inspect` subcommand.
#[derive(Args, Debug)]
pub struct InspectArgs {
    /// The StrKey to decode (`G...`, `S...`, `M...`, `P...`, ...).
    pub strkey: String,
}

/// StrKey kinds that wrap a single 32-byte payload.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum EncodeKind {
    Account,
    Seed,
    PreAuthTx,
    Sha256Hash,
    Contract,
}

/// Arguments for the `encode` subcommand.
#[derive(Args, Debug)]
pub struct EncodeArgs {
    /// What kind of StrKey to produce.
    #[arg(long, short = 'k', value_enum)]
    pub kind: EncodeKind,

    /// 32 bytes as 64 hex characters.
    pub hex: String,
}

/// Arguments for the `sign` subcommand.
#[derive(Args, Debug)]
pub struct SignArgs {
    /// `S...` secret seed of the signer.
    #[arg(long, short = 's', env = "KEYTOOL_SECRET_SEED", hide_env_values = true)]
    pub secret_seed: String,

    /// Message to sign.
    pub message: String,

    /// Treat the message as hex-encoded bytes.
    #[arg(long)]
    pub hex: bool,
}

/// Arguments for the `verify` subcommand.
#[derive(Args, Debug)]
pub struct VerifyArgs {
    /// `G...` or `M...` account id of the claimed signer.
    #[arg(long, short = 'a')]
    pub account: String,

    /// Hex-encoded 64-byte signature.
    #[arg(long)]
    pub signature: String,

    /// Message that was signed.
    pub message: String,

    /// Treat the message as hex-encoded bytes.
    #[arg(long)]
    pub hex: bool,
}
