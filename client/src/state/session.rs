//! Session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Written by the login page when a provider control is activated and read
//! by route guards on pages that need a signed-in user.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use super::provider::AuthProvider;

/// Which provider, if any, the user continued with.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub provider: Option<AuthProvider>,
}

impl SessionState {
    pub fn sign_in(&mut self, provider: AuthProvider) {
        self.provider = Some(provider);
    }

    pub fn sign_out(&mut self) {
        self.provider = None;
    }

    #[must_use]
    pub fn is_signed_in(&self) -> bool {
        self.provider.is_some()
    }
}
