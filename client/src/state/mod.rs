//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `provider` holds the provider model shared by the login view and pages;
//! `session` is the reactive record provided through context by `App`.

pub mod provider;
pub mod session;
