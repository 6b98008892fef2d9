//! Small client helpers shared across pages.

pub mod auth;
