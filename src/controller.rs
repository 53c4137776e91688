//! Gallery controller: the fetch-then-render flows behind user actions.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages call these flows from event handlers (spawned on the browser event
//! loop). Each flow mutates `GalleryState` through a `GalleryStore`; the
//! category bar and image grid re-render reactively from that state.
//!
//! ERROR HANDLING
//! ==============
//! No flow returns an error. A failed category fetch during `init` shows
//! `INIT_FAILED`; a failed image fetch shows `LOAD_FAILED`. Nothing retries.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use leptos::prelude::*;

use crate::config::messages;
use crate::net::api::GalleryApi;
use crate::state::gallery::GalleryState;

/// Read/write access to the session state.
///
/// Both methods return `None` once the backing store is gone (e.g. a
/// disposed signal after the page unmounts).
pub trait GalleryStore {
    fn read<R>(&self, f: impl FnOnce(&GalleryState) -> R) -> Option<R>;
    fn write<R>(&self, f: impl FnOnce(&mut GalleryState) -> R) -> Option<R>;
}

impl GalleryStore for RwSignal<GalleryState> {
    fn read<R>(&self, f: impl FnOnce(&GalleryState) -> R) -> Option<R> {
        self.try_with_untracked(f)
    }

    fn write<R>(&self, f: impl FnOnce(&mut GalleryState) -> R) -> Option<R> {
        self.try_update(f)
    }
}

impl GalleryStore for std::cell::RefCell<GalleryState> {
    fn read<R>(&self, f: impl FnOnce(&GalleryState) -> R) -> Option<R> {
        Some(f(&self.borrow()))
    }

    fn write<R>(&self, f: impl FnOnce(&mut GalleryState) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}

/// Load categories, then the first page of images.
pub async fn init<A: GalleryApi, S: GalleryStore>(api: &A, store: &S) {
    store.write(GalleryState::begin_loading);
    match api.fetch_categories().await {
        Ok(categories) => {
            store.write(|s| s.categories = categories);
        }
        Err(e) => {
            leptos::logging::warn!("gallery init failed: {e}");
            store.write(|s| s.show_error(messages::INIT_FAILED));
            return;
        }
    }
    load_images(api, store).await;
}

/// Fetch images for the current filters and store them.
///
/// Returns `false` if the response was discarded because a newer load
/// started while this one was in flight.
pub async fn load_images<A: GalleryApi, S: GalleryStore>(api: &A, store: &S) -> bool {
    let Some((token, query)) = store.write(GalleryState::begin_image_load) else {
        return false;
    };
    let result = api.fetch_images(&query).await;
    let applied = store
        .write(|s| s.finish_image_load(token, result, messages::LOAD_FAILED))
        .unwrap_or(false);
    if !applied {
        leptos::logging::log!("discarded stale image response (token {token})");
    }
    applied
}

/// Switch to `category` (`""` for all) and reload images.
///
/// The selection is stored before the fetch starts so the category bar
/// reflects it immediately.
pub async fn filter_by_category<A: GalleryApi, S: GalleryStore>(api: &A, store: &S, category: &str) {
    if store.write(|s| s.select_category(category)) != Some(true) {
        leptos::logging::warn!("ignoring unknown category {category:?}");
        return;
    }
    load_images(api, store).await;
}

/// Store trimmed search text and reload images. Callers debounce.
pub async fn apply_search<A: GalleryApi, S: GalleryStore>(api: &A, store: &S, raw: &str) {
    store.write(|s| s.set_search(raw));
    load_images(api, store).await;
}
