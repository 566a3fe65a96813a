//! # Command Output
//!
//! Every subcommand produces a serializable report. With `--json` it is
//! printed as a JSON document; otherwise as aligned `label : value` lines in
//! the same style the tool uses everywhere.

use anyhow::Result;
use serde::Serialize;

/// A command result that can render itself as text.
pub trait Report: Serialize {
    fn lines(&self) -> Vec<(String, String)>;
}

/// Print `report` to stdout in the requested format.
pub fn emit<R: Report>(report: &R, json: bool) -> Result<()> {
    println!("{}", render(report, json)?);
    Ok(())
}

fn render<R: Report>(report: &R, json: bool) -> Result<String> {
    if json {
        return Ok(serde_json::to_string_pretty(report)?);
    }
    let lines = report.lines();
    let width = lines.iter().map(|(label, _)| label.len()).max().unwrap_or(0);
    Ok(lines
        .iter()
        .map(|(label, value)| format!("  {:<width$} : {}", label, value, width = width))
        .collect::<Vec<_>>()
        .join("\n"))
}

/// One derived or generated account.
#[derive(Debug, Serialize)]
pub struct AccountReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    pub account_id: String,
    pub secret_seed: String,
}

impl Report for AccountReport {
    fn lines(&self) -> Vec<(String, String)> {
        let mut lines = Vec::new();
        if let Some(path) = &self.path {
            lines.push(("Path".to_string(), path.clone()));
        }
        lines.push(("Account id".to_string(), self.account_id.clone()));
        lines.push(("Secret seed".to_string(), self.secret_seed.clone()));
        lines
    }
}

/// A mnemonic with the accounts derived from it.
#[derive(Debug, Serialize)]
pub struct WalletReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mnemonic: Option<String>,
    pub language: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed_hex: Option<String>,
    pub accounts: Vec<AccountReport>,
}

impl Report for WalletReport {
    fn lines(&self) -> Vec<(String, String)> {
        let mut lines = Vec::new();
        if let Some(mnemonic) = &self.mnemonic {
            lines.push(("Mnemonic".to_string(), mnemonic.clone()));
        }
        lines.push(("Language".to_string(), self.language.clone()));
        if let Some(seed) = &self.seed_hex {
            lines.push(("BIP-39 seed".to_string(), seed.clone()));
        }
        for account in &self.accounts {
            lines.extend(account.lines());
        }
        lines
    }
}

/// A decoded StrKey.
#[derive(Debug, Serialize)]
pub struct InspectReport {
    pub kind: String,
    pub version_byte: String,
    pub payload_hex: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub muxed_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signed_payload_hex: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl Report for InspectReport {
    fn lines(&self) -> Vec<(String, String)> {
        let mut lines = vec![
            ("Kind".to_string(), self.kind.clone()),
            ("Version byte".to_string(), self.version_byte.clone()),
            ("Payload".to_string(), self.payload_hex.clone()),
        ];
        if let Some(account_id) = &self.account_id {
            lines.push(("Account id".to_string(), account_id.clone()));
        }
        if let Some(id) = self.muxed_id {
            lines.push(("Muxed id".to_string(), id.to_string()));
        }
        if let Some(payload) = &self.signed_payload_hex {
            lines.push(("Signed payload".to_string(), payload.clone()));
        }
        if let Some(hint) = &self.hint {
            lines.push(("Hint".to_string(), hint.clone()));
        }
        lines
    }
}

/// A freshly encoded StrKey.
#[derive(Debug, Serialize)]
pub struct EncodeReport {
    pub kind: String,
    pub strkey: String,
}

impl Report for EncodeReport {
    fn lines(&self) -> Vec<(String, String)> {
        vec![
            ("Kind".to_string(), self.kind.clone()),
            ("StrKey".to_string(), self.strkey.clone()),
        ]
    }
}

/// A detached signature and its hint.
#[derive(Debug, Serialize)]
pub struct SignReport {
    pub account_id: String,
    pub signature: String,
    pub hint: String,
}

impl Report for SignReport {
    fn lines(&self) -> Vec<(String, String)> {
        vec![
            ("Account id".to_string(), self.account_id.clone()),
            ("Signature".to_string(), self.signature.clone()),
            ("Hint".to_string(), self.hint.clone()),
        ]
    }
}

/// Outcome of a verification.
#[derive(Debug, Serialize)]
pub struct VerifyReport {
    pub account_id: String,
    pub valid: bool,
}

impl Report for VerifyReport {
    fn lines(&self) -> Vec<(String, String)> {
        vec![
            ("Account id".to_string(), self.account_id.clone()),
            ("Valid".to_string(), self.valid.to_string()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> AccountReport {
        AccountReport {
            index: Some(0),
            path: Some("m/44'/148'/0'".to_string()),
            account_id: "GABC".to_string(),
            secret_seed: "SABC".to_string(),
        }
    }

    #[test]
    fn text_output_aligns_labels() {
        let text = render(&sample(), false).unwrap();
        assert_eq!(
            text,
            "  Path        : m/44'/148'/0'\n  Account id  : GABC\n  Secret seed : SABC"
        );
    }

    #[test]
    fn json_output_skips_missing_fields() {
        let report = WalletReport {
            mnemonic: None,
            language: "english".to_string(),
            seed_hex: None,
            accounts: vec![sample()],
        };
        let value: serde_json::Value =
            serde_json::from_str(&render(&report, true).unwrap()).unwrap();
        assert!(value.get("mnemonic").is_none());
        assert_eq!(value["accounts"][0]["account_id"], "GABC");
        assert_eq!(value["accounts"][0]["index"], 0);
    }
}
