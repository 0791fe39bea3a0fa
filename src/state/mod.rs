//! Shared reactive state modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! State structs are plain data held in `RwSignal`s provided via context;
//! mutation is funneled through the auth client so readers only ever
//! observe complete transitions.

pub mod session;
