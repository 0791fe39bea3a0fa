//! Networking modules for the auth REST surface.
//!
//! SYSTEM CONTEXT
//! ==============
//! `auth_client` drives the four auth endpoints and owns session-state
//! transitions, `interceptor` mirrors the CSRF cookie into a header and
//! watches responses for expiry, `error` is the shared failure taxonomy,
//! and `types` defines the wire schema.

pub mod auth_client;
pub mod error;
pub mod interceptor;
pub mod types;
