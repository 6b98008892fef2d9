//! Inline SVG glyphs for the login screen.
//!
//! Every renderer is parameterless and produces the same markup on every
//! call. Monochrome glyphs draw with `currentColor` so the surrounding button
//! style decides their colour; the Google mark keeps its brand colours.

#[cfg(test)]
#[path = "icons_test.rs"]
mod icons_test;

use leptos::prelude::*;

use crate::state::provider::AuthProvider;

/// Recipefy brand mark (chef hat).
#[component]
pub fn BrandMark() -> impl IntoView {
    view! {
        <svg
            class="brand-mark"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="1.8"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            <path d="M17 21H7a1 1 0 0 1-1-1v-6.26A5 5 0 0 1 7.5 4.5a4.5 4.5 0 0 1 9 0A5 5 0 0 1 18 13.74V20a1 1 0 0 1-1 1Z" />
            <path d="M6 17h12" />
        </svg>
    }
}

/// Four-colour Google "G".
#[component]
pub fn GoogleLogo() -> impl IntoView {
    view! {
        <svg class="provider-icon provider-icon--google" viewBox="0 0 48 48" aria-hidden="true">
            <path
                fill="#EA4335"
                d="M24 9.5c3.54 0 6.71 1.22 9.21 3.6l6.85-6.85C35.9 2.38 30.47 0 24 0 14.62 0 6.51 5.38 2.56 13.22l7.98 6.19C12.43 13.72 17.74 9.5 24 9.5z"
            />
            <path
                fill="#4285F4"
                d="M46.98 24.55c0-1.57-.15-3.09-.38-4.55H24v9.02h12.94c-.58 2.96-2.26 5.48-4.78 7.18l7.73 6c4.51-4.18 7.09-10.36 7.09-17.65z"
            />
            <path
                fill="#FBBC05"
                d="M10.53 28.59c-.48-1.45-.76-2.99-.76-4.59s.27-3.14.76-4.59l-7.98-6.19C.92 16.46 0 20.12 0 24c0 3.88.92 7.54 2.56 10.78l7.97-6.19z"
            />
            <path
                fill="#34A853"
                d="M24 48c6.48 0 11.93-2.13 15.89-5.81l-7.73-6c-2.15 1.45-4.92 2.3-8.16 2.3-6.26 0-11.57-4.22-13.47-9.91l-7.98 6.19C6.51 42.62 14.62 48 24 48z"
            />
        </svg>
    }
}

#[component]
pub fn AppleLogo() -> impl IntoView {
    view! {
        <svg
            class="provider-icon provider-icon--apple"
            viewBox="0 0 24 24"
            fill="currentColor"
            aria-hidden="true"
        >
            <path d="M16.37 12.78c-.02-2.3 1.88-3.4 1.96-3.46-1.07-1.56-2.73-1.78-3.32-1.8-1.41-.14-2.76.83-3.47.83-.72 0-1.82-.81-2.99-.79-1.54.02-2.96.9-3.75 2.27-1.6 2.78-.41 6.89 1.15 9.14.76 1.1 1.67 2.34 2.86 2.3 1.15-.05 1.58-.74 2.97-.74 1.38 0 1.77.74 2.98.72 1.23-.02 2.01-1.12 2.76-2.23.87-1.28 1.23-2.52 1.25-2.58-.03-.01-2.38-.92-2.4-3.66zM14.1 6.02c.63-.77 1.06-1.83.94-2.89-.91.04-2.01.61-2.67 1.37-.58.67-1.1 1.76-.96 2.79 1.01.08 2.05-.51 2.69-1.27z" />
        </svg>
    }
}

#[component]
pub fn MailIcon() -> impl IntoView {
    view! {
        <svg
            class="provider-icon provider-icon--email"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="1.8"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            <rect x="2" y="4" width="20" height="16" rx="2" />
            <path d="M22 7 13.03 12.7a1.94 1.94 0 0 1-2.06 0L2 7" />
        </svg>
    }
}

/// Glyph shown beside a provider control's label.
pub fn provider_icon(provider: AuthProvider) -> AnyView {
    match provider {
        AuthProvider::Apple => view! { <AppleLogo /> }.into_any(),
        AuthProvider::Google => view! { <GoogleLogo /> }.into_any(),
        AuthProvider::Email => view! { <MailIcon /> }.into_any(),
    }
}
