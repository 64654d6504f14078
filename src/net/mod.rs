//! Networking modules for the identity server and the todo API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the REST calls and `types` defines the shared wire schema.

pub mod api;
pub mod types;
