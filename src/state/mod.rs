//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! The gallery has a single session model; it lives behind an `RwSignal`
//! provided from `App` and is only mutated through the controller flows.

pub mod gallery;
