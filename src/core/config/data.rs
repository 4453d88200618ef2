use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::keys::KeyPair;
use crate::core::learning::UserRole;
use crate::core::persona::Persona;

/// Persisted preferences. Everything is optional; absent fields fall back to
/// first-run behavior (theme default, role/persona prompts on startup).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub persona: Option<Persona>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<UserRole>,

    /// Mock fhevmjs key pair from the key-manager walkthrough, kept across
    /// sessions like the original's local storage.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_pair: Option<KeyPair>,
}

impl Config {
    pub fn persona_or_default(&self) -> Persona {
        self.persona.unwrap_or_default()
    }

    pub fn role_or_default(&self) -> UserRole {
        self.role.unwrap_or(UserRole::Developer)
    }
}

/// Render a path for user-facing messages without panicking on non-UTF-8.
pub fn path_display(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}
