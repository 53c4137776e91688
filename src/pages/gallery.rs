//! Gallery page: search box, category bar and image grid.
//!
//! SYSTEM CONTEXT
//! ==============
//! On hydrate the page kicks off `controller::init`. Category clicks start a
//! load immediately; search keystrokes go through a debouncer so only the
//! last value after a quiet period triggers a fetch. Enter skips the wait.

#[cfg(test)]
#[path = "gallery_test.rs"]
mod gallery_test;

use leptos::prelude::*;

use crate::components::category_bar::CategoryBar;
use crate::components::image_grid::ImageGrid;
use crate::config::GalleryConfig;
use crate::controller;
use crate::net::api::HttpApi;
use crate::state::gallery::GalleryState;
use crate::util::debounce::Debouncer;

#[component]
pub fn GalleryPage() -> impl IntoView {
    let gallery = expect_context::<RwSignal<GalleryState>>();
    let config = expect_context::<GalleryConfig>();
    let api = HttpApi::new(&config);

    #[cfg(feature = "hydrate")]
    {
        let api = api.clone();
        leptos::task::spawn_local(async move {
            controller::init(&api, &gallery).await;
        });
    }

    let on_select = Callback::new({
        let api = api.clone();
        move |category: String| {
            let api = api.clone();
            leptos::task::spawn_local(async move {
                controller::filter_by_category(&api, &gallery, &category).await;
            });
        }
    });

    let search = Debouncer::new(config.search_debounce_ms, move |raw: String| {
        let api = api.clone();
        leptos::task::spawn_local(async move {
            controller::apply_search(&api, &gallery, &raw).await;
        });
    });
    let search_input = search.clone();
    let search_enter = search.clone();
    on_cleanup(move || search.cancel());

    view! {
        <div class="gallery-page">
            <header class="gallery-page__header">
                <h1 class="gallery-page__title">"Image Gallery"</h1>
                <input
                    id=config.dom_ids.search_input
                    class="search-input"
                    type="search"
                    placeholder="Search file names and tags..."
                    on:input=move |ev| search_input.call(event_target_value(&ev))
                    on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                        if submit_search_on_key(&ev.key(), &search_enter) {
                            ev.prevent_default();
                        }
                    }
                />
            </header>
            <CategoryBar on_select=on_select/>
            <ImageGrid/>
        </div>
    }
}

/// Run the pending search now if `key` is Enter. Returns whether it was.
fn submit_search_on_key(key: &str, search: &Debouncer<String>) -> bool {
    if key != "Enter" {
        return false;
    }
    search.flush();
    true
}
