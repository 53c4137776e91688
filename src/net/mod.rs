//! Networking modules for the gallery backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the two read-only HTTP calls and `types` defines the JSON
//! schema they return.

pub mod api;
pub mod types;
