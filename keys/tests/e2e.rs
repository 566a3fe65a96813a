//! End-to-end tests for the key layer.
//!
//! These walk the full path a wallet takes: recovery phrase → BIP-39 seed →
//! SLIP-0010 node → key pair → StrKey strings → signatures, checked against
//! published SEP-0005 and BIP-39 vectors.

use stellar_keys::crypto::signatures;
use stellar_keys::strkey::{self, VersionByte};
use stellar_keys::{
    DerivationPath, HdNode, KeyError, KeyPair, Mnemonic, MuxedAccount, SignedPayloadSigner,
    WordList,
};

// ---------------------------------------------------------------------------
// Vectors
// ---------------------------------------------------------------------------

const SEP5_PHRASE: &str =
    "illness spike retreat truth genius clock brain pass fit cave bargain toe";

const SEP5_SEED_HEX: &str = "e4a5a632e70943ae7f07659df1332160937fad82587216a4c64315a0fb39497e\
                             e4a01f76ddab4cba68147977f3a147b6ad584c41808e8238a07f6cc4b582f186";

/// (index, account id, secret seed) for the 12-word SEP-0005 vector.
const SEP5_ACCOUNTS: [(u32, &str, &str); 2] = [
    (
        0,
        "GDRXE2BQUC3AZNPVFSCEZ76NJ3WWL25FYFK6RGZGIEKWE4SOOHSUJUJ6",
        "SBGWSG6BTNCKCOB3DIFBGCVMUPQFYPA2G4O34RMTB343OYPXU5DJDVMN",
    ),
    (
        1,
        "GBAW5XGWORWVFE2XTJYDTLDHXTY2Q2MO73HYCGB3XMFMQ562Q2W2GJQX",
        "SCEPFFWGAG5P2VX5DHIYK3XEMZYLTYWIPWYEKXFHSK25RVMIUNJ7CTIS",
    ),
];

fn sep5_mnemonic() -> Mnemonic {
    Mnemonic::from_phrase(SEP5_PHRASE, "english").expect("valid SEP-0005 phrase")
}

// ---------------------------------------------------------------------------
// Mnemonic → account
// ---------------------------------------------------------------------------

#[test]
fn sep5_seed_matches_vector() {
    assert_eq!(sep5_mnemonic().to_seed_hex(""), SEP5_SEED_HEX);
}

#[test]
fn sep5_accounts_match_vector() {
    let mnemonic = sep5_mnemonic();
    for (index, account_id, secret_seed) in SEP5_ACCOUNTS {
        let kp = KeyPair::from_mnemonic(&mnemonic, "", index).unwrap();
        assert_eq!(kp.account_id(), account_id, "account {index}");
        assert_eq!(kp.secret_seed().as_deref(), Some(secret_seed), "account {index}");
    }
}

#[test]
fn seed_hex_path_agrees_with_mnemonic_path() {
    let from_hex = KeyPair::from_bip39_seed_hex(SEP5_SEED_HEX, 1).unwrap();
    let from_mnemonic = KeyPair::from_mnemonic(&sep5_mnemonic(), "", 1).unwrap();
    assert_eq!(from_hex, from_mnemonic);
    assert_eq!(from_hex.account_id(), SEP5_ACCOUNTS[1].1);
}

#[test]
fn explicit_path_walk_agrees_with_account_helper() {
    let seed = sep5_mnemonic().to_seed("");
    let node = HdNode::master(&seed)
        .unwrap()
        .derive_path(&"m/44'/148'/0'".parse::<DerivationPath>().unwrap())
        .unwrap();
    assert_eq!(node.key_pair().account_id(), SEP5_ACCOUNTS[0].1);
}

#[test]
fn twenty_four_word_zero_entropy_account() {
    let mnemonic = Mnemonic::from_entropy(&[0u8; 32], "english").unwrap();
    assert_eq!(mnemonic.word_count(), 24);

    let kp = KeyPair::from_mnemonic(&mnemonic, "", 0).unwrap();
    assert_eq!(
        kp.account_id(),
        "GB3TCCIC6KLYKM72PX7KA6RNYC2BHC7DQYDMEAAN7PDMUZQD7UKJGSSY"
    );
    assert_eq!(
        kp.secret_seed().unwrap(),
        "SDJPGZWJUCCGAU7AONCQH4O2STD725OLHPO2GPJZJC2GWG35BAGK6XS5"
    );
}

#[test]
fn passphrase_selects_a_different_wallet() {
    let mnemonic = sep5_mnemonic();
    let plain = KeyPair::from_mnemonic(&mnemonic, "", 0).unwrap();
    let salted = KeyPair::from_mnemonic(&mnemonic, "p4ssphr4se", 0).unwrap();
    assert_ne!(plain, salted);
}

#[test]
fn tampered_phrase_is_rejected() {
    let tampered = SEP5_PHRASE.replace("toe", "tip");
    assert!(matches!(
        Mnemonic::from_phrase(&tampered, "english"),
        Err(KeyError::ChecksumMismatch)
    ));

    let misspelled = SEP5_PHRASE.replace("spike", "spyke");
    assert!(matches!(
        Mnemonic::from_phrase(&misspelled, "english"),
        Err(KeyError::UnknownWord { position: 2, .. })
    ));
}

// ---------------------------------------------------------------------------
// Key pair → strings → signatures
// ---------------------------------------------------------------------------

#[test]
fn derived_key_signs_and_watcher_verifies() {
    let signer = KeyPair::from_mnemonic(&sep5_mnemonic(), "", 0).unwrap();
    let watcher = KeyPair::from_account_id(&signer.account_id()).unwrap();

    let message = b"tx envelope hash";
    let decorated = signer.sign_decorated(message).unwrap();

    assert!(watcher.verify(message, decorated.signature().as_bytes()));
    assert_eq!(decorated.hint(), &watcher.hint());
    assert!(signatures::verify(
        watcher.raw_public_key(),
        message,
        decorated.signature().as_bytes()
    ));
}

#[test]
fn secret_seed_restores_identical_signer() {
    let kp = KeyPair::random();
    let restored = KeyPair::from_secret_seed(&kp.secret_seed().unwrap()).unwrap();
    assert_eq!(kp.sign(b"same"), restored.sign(b"same"));
}

#[test]
fn muxed_account_resolves_to_base_key() {
    let kp = KeyPair::from_mnemonic(&sep5_mnemonic(), "", 0).unwrap();
    let muxed = kp.muxed_account(Some(9_007_199_254_740_993));
    let encoded = muxed.account_id();
    assert!(encoded.starts_with('M'));

    let parsed = MuxedAccount::from_account_id(&encoded).unwrap();
    assert_eq!(parsed.id(), Some(9_007_199_254_740_993));
    assert_eq!(parsed.ed25519_account_id(), kp.account_id());

    let watcher = KeyPair::from_account_id(&encoded).unwrap();
    let sig = kp.sign(b"muxed").unwrap();
    assert!(watcher.verify(b"muxed", sig.as_bytes()));
}

#[test]
fn signed_payload_signer_flow() {
    let kp = KeyPair::from_mnemonic(&sep5_mnemonic(), "", 0).unwrap();
    let payload = [0xDE, 0xAD, 0xBE, 0xEF, 0x01, 0x02, 0x03, 0x04];

    let signer = SignedPayloadSigner::new(*kp.raw_public_key(), &payload).unwrap();
    let encoded = strkey::encode_signed_payload(&signer);
    assert!(encoded.starts_with('P'));

    let decoded = strkey::decode_signed_payload(&encoded).unwrap();
    assert_eq!(decoded.account_id(), kp.account_id());

    let decorated = kp.sign_payload_decorated(decoded.payload()).unwrap();
    assert_eq!(decorated.hint(), &decoded.hint());
    assert!(kp.verify(&payload, decorated.signature().as_bytes()));
}

#[test]
fn decode_any_identifies_every_kind() {
    let kp = KeyPair::random();
    let cases = [
        (kp.account_id(), VersionByte::AccountId),
        (kp.secret_seed().unwrap(), VersionByte::Seed),
        (kp.muxed_account(Some(1)).account_id(), VersionByte::MuxedAccount),
        (strkey::encode_pre_auth_tx(&[1u8; 32]), VersionByte::PreAuthTx),
        (strkey::encode_sha256_hash(&[2u8; 32]), VersionByte::Sha256Hash),
        (strkey::encode_contract_id(&[3u8; 32]), VersionByte::ContractId),
        (
            SignedPayloadSigner::new([4u8; 32], &[5u8; 4]).unwrap().to_string(),
            VersionByte::SignedPayload,
        ),
    ];
    for (encoded, expected) in cases {
        let (version, _) = strkey::decode_any(&encoded).unwrap();
        assert_eq!(version, expected, "{encoded}");
    }
}

// ---------------------------------------------------------------------------
// Word lists
// ---------------------------------------------------------------------------

#[test]
fn installed_word_list_drives_mnemonics() {
    let text: String = (0..2048).map(|i| format!("mot{i}\n")).collect();
    WordList::install("e2e-synthetic", &text).unwrap();

    let mnemonic = Mnemonic::from_entropy(&[0u8; 16], "e2e-synthetic").unwrap();
    assert_eq!(mnemonic.words()[0], "mot0");
    assert_eq!(mnemonic.language(), "e2e-synthetic");

    let back = Mnemonic::from_phrase(&mnemonic.phrase(), "e2e-synthetic").unwrap();
    assert_eq!(back.entropy(), &[0u8; 16]);
}

#[test]
fn bundled_english_survives_install_attempts() {
    let text: String = (0..2048).map(|i| format!("w{i}\n")).collect();
    for code in ["en", "EN", "english"] {
        assert!(matches!(
            WordList::install(code, &text),
            Err(KeyError::WordListInstalled(_))
        ));
    }

    let mnemonic = Mnemonic::from_entropy(&[0u8; 16], "english").unwrap();
    assert_eq!(
        mnemonic.phrase(),
        "abandon abandon abandon abandon abandon abandon \
         abandon abandon abandon abandon abandon about"
    );
}

// ---------------------------------------------------------------------------
// Serialization
// ---------------------------------------------------------------------------

#[test]
fn value_types_survive_json() {
    let kp = KeyPair::from_mnemonic(&sep5_mnemonic(), "", 0).unwrap();

    let decorated = kp.sign_decorated(b"serde").unwrap();
    let json = serde_json::to_string(&decorated).unwrap();
    let back: stellar_keys::DecoratedSignature = serde_json::from_str(&json).unwrap();
    assert_eq!(back, decorated);

    let muxed = kp.muxed_account(Some(42));
    let back: MuxedAccount = serde_json::from_str(&serde_json::to_string(&muxed).unwrap()).unwrap();
    assert_eq!(back.account_id(), muxed.account_id());

    let signer = SignedPayloadSigner::new(*kp.raw_public_key(), b"four").unwrap();
    let back: SignedPayloadSigner =
        serde_json::from_str(&serde_json::to_string(&signer).unwrap()).unwrap();
    assert_eq!(back, signer);
}
