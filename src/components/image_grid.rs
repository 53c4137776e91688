//! Image region: spinner, message box, or the card grid.
//!
//! SYSTEM CONTEXT
//! ==============
//! What shows is decided by `GalleryState::grid_view`. Cards are rebuilt
//! wholesale from `images` on every state change, after which the external
//! viewer is re-bound against the new anchors.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::components::image_card::{ImageCard, ImageCardModel};
use crate::config::{GalleryConfig, messages};
use crate::state::gallery::{GalleryState, GridView};

#[component]
pub fn ImageGrid() -> impl IntoView {
    let gallery = expect_context::<RwSignal<GalleryState>>();
    let config = expect_context::<GalleryConfig>();
    let images_root = config.images_root;
    let placeholder = config.placeholder;
    let group = config.viewer_group;

    #[cfg(feature = "hydrate")]
    {
        let selector = config.viewer_selector;
        Effect::new(move || {
            if gallery.with(GalleryState::grid_view) == GridView::Cards {
                request_animation_frame(move || crate::util::lightbox::bind(selector));
            }
        });
    }

    let content = move || match gallery.with(GalleryState::grid_view) {
        GridView::Idle => ().into_any(),
        GridView::Loading => view! {
            <div class="loading">
                <div class="loading-spinner"></div>
            </div>
        }
        .into_any(),
        GridView::Error(message) => view! { <MessageBox message=message/> }.into_any(),
        GridView::Empty => view! { <MessageBox message=messages::NO_MATCHING_IMAGES/> }.into_any(),
        GridView::Cards => gallery
            .with(|s| {
                s.images
                    .iter()
                    .map(|image| {
                        let model = ImageCardModel::from_image(image, images_root);
                        view! { <ImageCard model=model placeholder=placeholder group=group/> }
                    })
                    .collect::<Vec<_>>()
            })
            .into_any(),
    };

    view! {
        <div id=config.dom_ids.image_grid class="image-grid">
            {content}
        </div>
    }
}

/// Message box replacing the grid (errors and the empty state).
#[component]
fn MessageBox(message: &'static str) -> impl IntoView {
    view! { <div class="error-message">{message}</div> }
}
