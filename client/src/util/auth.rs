//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components should apply identical signed-out redirect behavior.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::session::SessionState;

pub const LOGIN_PATH: &str = "/login";
pub const HOME_PATH: &str = "/";

/// Whether a page requiring a session should bounce to the login screen.
#[must_use]
pub fn should_redirect_to_login(state: &SessionState) -> bool {
    !state.is_signed_in()
}

/// Redirect to `/login` whenever the session has no provider.
pub fn install_login_redirect<F>(session: RwSignal<SessionState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_to_login(&session.get()) {
            navigate(LOGIN_PATH, NavigateOptions::default());
        }
    });
}
