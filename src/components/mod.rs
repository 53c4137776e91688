//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read the gallery state and config from Leptos context and
//! render the category bar and the image grid. Pure view-model builders sit
//! next to each component so rendering rules are testable natively.

pub mod category_bar;
pub mod image_card;
pub mod image_grid;
