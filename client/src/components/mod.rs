//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components are presentational: pages own state and routing and hand
//! callbacks down to them.

pub mod icons;
pub mod login_view;
