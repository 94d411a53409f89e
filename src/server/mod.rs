//! Server configuration, access policy, and runtime wiring.

pub mod auth;
pub mod config;
pub mod runtime;
