//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (guard installation, submit
//! handling, redirects) on top of the shared auth client.

pub mod dashboard;
pub mod login;
