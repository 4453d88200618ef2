//! Mock fhevmjs key generation.
//!
//! Real FHE key material comes from fhevmjs in the browser; the tutor only
//! needs plausible-looking keys for the key-manager walkthrough, so each key
//! is 32 random bytes rendered as hex, persisted alongside the config.

use serde::{Deserialize, Serialize};

const KEY_BYTES: usize = 32;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyPair {
    pub public_key: String,
    pub private_key: String,
}

impl KeyPair {
    pub fn generate() -> Result<KeyPair, getrandom::Error> {
        Ok(KeyPair {
            public_key: random_hex()?,
            private_key: random_hex()?,
        })
    }

    /// Short prefix for display, e.g. `0x3fa2…`.
    pub fn public_preview(&self) -> String {
        let head: String = self.public_key.chars().take(8).collect();
        format!("0x{head}\u{2026}")
    }
}

fn random_hex() -> Result<String, getrandom::Error> {
    let mut bytes = [0u8; KEY_BYTES];
    getrandom::fill(&mut bytes)?;
    let mut out = String::with_capacity(KEY_BYTES * 2);
    for b in bytes {
        out.push_str(&format!("{b:02x}"));
    }
    Ok(out)
}
