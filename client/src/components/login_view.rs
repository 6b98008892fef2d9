//! Login surface: brand, tagline, and one control per auth provider.
//!
//! SYSTEM CONTEXT
//! ==============
//! The view is presentational. It performs no navigation, network, or
//! storage; activating a control only notifies the caller through the
//! supplied callbacks, which run synchronously on the click's thread.

#[cfg(test)]
#[path = "login_view_test.rs"]
mod login_view_test;

use leptos::prelude::*;

use crate::components::icons::{BrandMark, provider_icon};
use crate::state::provider::AuthProvider;

pub const BRAND_NAME: &str = "Recipefy";
pub const TAGLINE: &str = "Save every recipe you love, all in one place.";

/// Notify the caller that `provider`'s control was activated.
///
/// `on_select` runs first with the provider identity, then `on_continue`
/// with no arguments. Missing callbacks are skipped. Every activation
/// invokes the callbacks again; there is no debounce.
pub fn activate(
    provider: AuthProvider,
    on_select: Option<Callback<AuthProvider>>,
    on_continue: Option<Callback<()>>,
) {
    #[cfg(feature = "hydrate")]
    log::debug!("login provider activated: {provider}");

    if let Some(on_select) = on_select {
        on_select.run(provider);
    }
    if let Some(on_continue) = on_continue {
        on_continue.run(());
    }
}

/// Centered login card with three stacked "Continue with …" buttons.
///
/// `on_continue` is the continuation shared by all three controls.
/// `on_select` additionally receives which provider was chosen.
#[component]
pub fn LoginView(
    #[prop(optional)] on_continue: Option<Callback<()>>,
    #[prop(optional)] on_select: Option<Callback<AuthProvider>>,
) -> impl IntoView {
    let controls = AuthProvider::ALL
        .into_iter()
        .map(move |provider| {
            view! {
                <button
                    type="button"
                    class=format!("login-provider login-provider--{}", provider.slug())
                    data-provider=provider.slug()
                    on:click=move |_| activate(provider, on_select, on_continue)
                >
                    {provider_icon(provider)}
                    <span class="login-provider__label">{provider.label()}</span>
                </button>
            }
        })
        .collect_view();

    view! {
        <div class="login-page">
            <div class="login-card">
                <div class="login-brand">
                    <BrandMark />
                    <h1 class="login-brand__name">{BRAND_NAME}</h1>
                </div>
                <p class="login-card__tagline">{TAGLINE}</p>
                <div class="login-providers">{controls}</div>
            </div>
        </div>
    }
}
