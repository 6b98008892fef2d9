//! Landing page for a signed-in session.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::icons::BrandMark;
use crate::components::login_view::BRAND_NAME;
use crate::state::session::SessionState;
use crate::util::auth::install_login_redirect;

/// Greeting line for the session; empty when signed out.
#[must_use]
pub fn greeting(state: &SessionState) -> String {
    state
        .provider
        .map(|provider| format!("Signed in with {}", provider.name()))
        .unwrap_or_default()
}

/// Clear the session. The login redirect installed by `HomePage` then sends
/// the user back to `/login`.
pub fn sign_out(state: &mut SessionState) {
    state.sign_out();
}

#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    install_login_redirect(session, use_navigate());

    view! {
        <div class="home-page">
            <header class="home-header">
                <BrandMark />
                <h1 class="home-header__name">{BRAND_NAME}</h1>
            </header>
            <p class="home-greeting">{move || greeting(&session.get())}</p>
            <button type="button" class="home-sign-out" on:click=move |_| session.update(sign_out)>
                "Sign out"
            </button>
        </div>
    }
}
