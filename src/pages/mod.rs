//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! The page owns route-scoped orchestration (startup fetch, event wiring)
//! and delegates rendering details to `components`.

pub mod gallery;
