//! Authentication providers offered on the login screen.
//!
//! DESIGN
//! ======
//! The login view renders one control per provider in `AuthProvider::ALL`
//! order. The slug is the stable identifier used for CSS modifiers, DOM
//! attributes, and serialization.

#[cfg(test)]
#[path = "provider_test.rs"]
mod provider_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One of the selectable authentication methods.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthProvider {
    Apple,
    Google,
    Email,
}

impl AuthProvider {
    /// Display order of the provider controls, top to bottom.
    pub const ALL: [AuthProvider; 3] = [Self::Apple, Self::Google, Self::Email];

    /// Human-readable provider name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Apple => "Apple",
            Self::Google => "Google",
            Self::Email => "Email",
        }
    }

    /// Button label for the provider control.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Apple => "Continue with Apple",
            Self::Google => "Continue with Google",
            Self::Email => "Continue with Email",
        }
    }

    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Self::Apple => "apple",
            Self::Google => "google",
            Self::Email => "email",
        }
    }
}

impl fmt::Display for AuthProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// Returned when a string does not name a known provider.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown auth provider: {input:?}")]
pub struct ParseProviderError {
    pub input: String,
}

impl FromStr for AuthProvider {
    type Err = ParseProviderError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let normalized = raw.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|provider| provider.slug() == normalized)
            .ok_or_else(|| ParseProviderError { input: raw.to_owned() })
    }
}
