//! Category filter buttons.
//!
//! The whole button row is rebuilt from state on every change; there is no
//! per-button diffing to keep in sync.

#[cfg(test)]
#[path = "category_bar_test.rs"]
mod category_bar_test;

use leptos::prelude::*;

use crate::config::{GalleryConfig, messages};
use crate::state::gallery::GalleryState;

/// One selectable control in the category bar.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryButton {
    pub label: String,
    /// Value passed to the controller; empty for "All".
    pub value: String,
    pub active: bool,
}

/// "All" followed by one button per category, with the current one active.
pub fn category_buttons(state: &GalleryState) -> Vec<CategoryButton> {
    let all = CategoryButton {
        label: messages::ALL_CATEGORIES.to_owned(),
        value: String::new(),
        active: state.current_category.is_empty(),
    };
    std::iter::once(all)
        .chain(state.categories.iter().map(|category| CategoryButton {
            label: category.clone(),
            value: category.clone(),
            active: *category == state.current_category,
        }))
        .collect()
}

#[component]
pub fn CategoryBar(on_select: Callback<String>) -> impl IntoView {
    let gallery = expect_context::<RwSignal<GalleryState>>();
    let config = expect_context::<GalleryConfig>();

    view! {
        <div id=config.dom_ids.categories class="categories">
            {move || {
                gallery
                    .with(category_buttons)
                    .into_iter()
                    .map(|button| {
                        let value = button.value;
                        view! {
                            <button
                                class="category-btn"
                                class:active=button.active
                                on:click=move |_| on_select.run(value.clone())
                            >
                                {button.label}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
