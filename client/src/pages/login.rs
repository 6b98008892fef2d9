//! Login route: records the chosen provider and continues to the home page.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::login_view::LoginView;
use crate::state::provider::AuthProvider;
use crate::state::session::SessionState;
use crate::util::auth::HOME_PATH;

/// Store the provider picked on the login screen.
pub fn record_selection(state: &mut SessionState, provider: AuthProvider) {
    state.sign_in(provider);
}

/// Whether the continuation has fired since the page mounted.
#[must_use]
pub fn should_continue(continue_seq: u64) -> bool {
    continue_seq > 0
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    // Continuation bumps this; the effect below performs the navigation.
    let continue_seq = RwSignal::new(0_u64);

    let on_select = Callback::new(move |provider: AuthProvider| {
        session.update(|state| record_selection(state, provider));
    });
    let on_continue = Callback::new(move |()| {
        continue_seq.update(|seq| *seq += 1);
    });

    Effect::new(move || {
        if should_continue(continue_seq.get()) {
            navigate(HOME_PATH, NavigateOptions::default());
        }
    });

    view! { <LoginView on_continue=on_continue on_select=on_select /> }
}
