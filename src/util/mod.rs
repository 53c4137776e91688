//! Utility helpers shared across gallery UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (timers, the viewer
//! script) and pure string helpers from page and component logic.

pub mod debounce;
pub mod image_path;
pub mod lightbox;
