// Copyright (c) 2026 ALAS Technology. MIT License.
// See LICENSE for details.

//! # Stellar Key Tool
//!
//! Entry point for the `stellar-keytool` binary. Parses CLI arguments,
//! initializes logging, and runs one key-management command.
//!
//! - `generate`: new mnemonic plus its first accounts
//! - `derive`: restore accounts from a mnemonic
//! - `random`: standalone random key pair
//! - `inspect`: decode any StrKey
//! - `encode`: wrap 32 raw bytes as a StrKey
//! - `sign`: sign a message with a secret seed
//! - `verify`: check a signature against an account id
//! - `version`: print build version information

mod cli;
mod logging;
mod output;

use anyhow::{bail, Context, Result};
use clap::Parser;

use stellar_keys::strkey::{self, MuxedAccount, VersionByte};
use stellar_keys::{DerivationPath, KeyPair, Mnemonic, WordList};

use cli::{Commands, EncodeKind, GlobalArgs, KeytoolCli};
use logging::LogFormat;
use output::{
    emit, AccountReport, EncodeReport, InspectReport, SignReport, VerifyReport, WalletReport,
};

fn main() -> Result<()> {
    let cli = KeytoolCli::parse();
    logging::init_logging(
        &cli.global.log,
        LogFormat::from_str_lossy(&cli.global.log_format),
    );
    install_wordlist(&cli.global)?;

    let json = cli.global.json;
    match cli.command {
        Commands::Generate(args) => generate(args, &cli.global.language, json),
        Commands::Derive(args) => derive(args, &cli.global.language, json),
        Commands::Random => random(json),
        Commands::Inspect(args) => inspect(&args.strkey, json),
        Commands::Encode(args) => encode(args, json),
        Commands::Sign(args) => sign(args, json),
        Commands::Verify(args) => verify(args, json),
        Commands::Version => {
            print_version();
            Ok(())
        }
    }
}

/// Registers a word list file under the configured language, if one was given.
fn install_wordlist(global: &GlobalArgs) -> Result<()> {
    if let Some(path) = &global.wordlist {
        WordList::load_file(&global.language, path).with_context(|| {
            format!(
                "failed to load {} word list from {}",
                global.language,
                path.display()
            )
        })?;
        tracing::info!(language = %global.language, path = %path.display(), "word list installed");
    }
    Ok(())
}

fn account_reports(
    mnemonic: &Mnemonic,
    passphrase: &str,
    first: u32,
    count: u32,
) -> Result<Vec<AccountReport>> {
    let seed = mnemonic.to_seed(passphrase);
    let last = first
        .checked_add(count)
        .context("account range overflows u32")?;

    (first..last)
        .map(|index| -> Result<AccountReport> {
            let kp = KeyPair::from_bip39_seed(&seed, index)
                .with_context(|| format!("failed to derive account {}", index))?;
            tracing::debug!(index, account_id = %kp.account_id(), "derived account");
            Ok(AccountReport {
                index: Some(index),
                path: Some(DerivationPath::for_account(index)?.to_string()),
                account_id: kp.account_id(),
                secret_seed: kp.secret_seed().context("derived key pair has no secret")?,
            })
        })
        .collect()
}

fn generate(args: cli::GenerateArgs, language: &str, json: bool) -> Result<()> {
    let mnemonic = Mnemonic::generate(args.words, language)
        .with_context(|| format!("failed to generate a {}-word mnemonic", args.words))?;
    tracing::info!(words = args.words, language, "generated mnemonic");

    let report = WalletReport {
        mnemonic: Some(mnemonic.phrase()),
        language: mnemonic.language().to_string(),
        seed_hex: None,
        accounts: account_reports(&mnemonic, &args.passphrase, 0, args.accounts)?,
    };
    emit(&report, json)
}

fn derive(args: cli::DeriveArgs, language: &str, json: bool) -> Result<()> {
    let mnemonic =
        Mnemonic::from_phrase(&args.mnemonic, language).context("invalid recovery phrase")?;

    let report = WalletReport {
        mnemonic: None,
        language: mnemonic.language().to_string(),
        seed_hex: args
            .show_seed
            .then(|| mnemonic.to_seed_hex(&args.passphrase)),
        accounts: account_reports(&mnemonic, &args.passphrase, args.index, args.count)?,
    };
    emit(&report, json)
}

fn random(json: bool) -> Result<()> {
    let kp = KeyPair::random();
    let report = AccountReport {
        index: None,
        path: None,
        account_id: kp.account_id(),
        secret_seed: kp.secret_seed().context("random key pair has no secret")?,
    };
    emit(&report, json)
}

fn inspect(encoded: &str, json: bool) -> Result<()> {
    let (version, payload) = strkey::decode_any(encoded).context("not a valid StrKey")?;
    tracing::debug!(kind = version.name(), len = payload.len(), "decoded StrKey");

    let mut report = InspectReport {
        kind: version.name().to_string(),
        version_byte: format!("{:#04x}", version.as_byte()),
        payload_hex: hex::encode(&payload),
        account_id: None,
        muxed_id: None,
        signed_payload_hex: None,
        hint: None,
    };

    match version {
        VersionByte::AccountId | VersionByte::MuxedAccount => {
            let account = MuxedAccount::from_account_id(encoded)?;
            let kp = KeyPair::from_public_key(account.ed25519())?;
            report.account_id = Some(account.ed25519_account_id());
            report.muxed_id = account.id();
            report.hint = Some(hex::encode(kp.hint()));
        }
        VersionByte::Seed => {
            let kp = KeyPair::from_secret_seed(encoded)?;
            report.account_id = Some(kp.account_id());
            report.payload_hex = "<redacted>".to_string();
        }
        VersionByte::SignedPayload => {
            let signer = strkey::decode_signed_payload(encoded)?;
            report.account_id = Some(signer.account_id());
            report.signed_payload_hex = Some(hex::encode(signer.payload()));
            report.hint = Some(hex::encode(signer.hint()));
        }
        VersionByte::PreAuthTx | VersionByte::Sha256Hash | VersionByte::ContractId => {}
    }
    emit(&report, json)
}

fn encode(args: cli::EncodeArgs, json: bool) -> Result<()> {
    let bytes = hex::decode(args.hex.trim()).context("payload is not valid hex")?;
    let payload: [u8; 32] = bytes
        .as_slice()
        .try_into()
        .with_context(|| format!("payload must be 32 bytes, got {}", bytes.len()))?;

    let (kind, encoded) = match args.kind {
        EncodeKind::Account => (VersionByte::AccountId, strkey::encode_account_id(&payload)),
        EncodeKind::Seed => (VersionByte::Seed, strkey::encode_secret_seed(&payload)),
        EncodeKind::PreAuthTx => (VersionByte::PreAuthTx, strkey::encode_pre_auth_tx(&payload)),
        EncodeKind::Sha256Hash => (
            VersionByte::Sha256Hash,
            strkey::encode_sha256_hash(&payload),
        ),
        EncodeKind::Contract => (
            VersionByte::ContractId,
            strkey::encode_contract_id(&payload),
        ),
    };
    emit(
        &EncodeReport {
            kind: kind.name().to_string(),
            strkey: encoded,
        },
        json,
    )
}

fn message_bytes(message: &str, is_hex: bool) -> Result<Vec<u8>> {
    if is_hex {
        hex::decode(message.trim()).context("message is not valid hex")
    } else {
        Ok(message.as_bytes().to_vec())
    }
}

fn sign(args: cli::SignArgs, json: bool) -> Result<()> {
    let kp = KeyPair::from_secret_seed(args.secret_seed.trim()).context("invalid secret seed")?;
    let message = message_bytes(&args.message, args.hex)?;
    let Some(decorated) = kp.sign_decorated(&message) else {
        bail!("signing failed for {}", kp.account_id());
    };

    let report = SignReport {
        account_id: kp.account_id(),
        signature: decorated.signature().to_hex(),
        hint: hex::encode(decorated.hint()),
    };
    emit(&report, json)
}

fn verify(args: cli::VerifyArgs, json: bool) -> Result<()> {
    let kp = KeyPair::from_account_id(args.account.trim()).context("invalid account id")?;
    let message = message_bytes(&args.message, args.hex)?;
    let signature = hex::decode(args.signature.trim()).context("signature is not valid hex")?;

    let valid = kp.verify(&message, &signature);
    emit(
        &VerifyReport {
            account_id: kp.account_id(),
            valid,
        },
        json,
    )?;
    if !valid {
        bail!("signature does not verify");
    }
    Ok(())
}

/// Prints version information to stdout.
fn print_version() {
    println!("stellar-keytool {}", env!("CARGO_PKG_VERSION"));
    println!("rustc           {}", rustc_version());
}

/// Returns the Rust compiler version used to build this binary.
fn rustc_version() -> &'static str {
    option_env!("RUSTC_VERSION").unwrap_or("unknown")
}
