//! Gallery configuration: endpoints, asset paths and UI timing.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` provides one `GalleryConfig` through context. The API client, the
//! card renderer and the search debouncer all read their paths and timings
//! from it instead of hard-coding them at the call site.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_CATEGORIES_ENDPOINT: &str = "/api/categories";
pub const DEFAULT_IMAGES_ENDPOINT: &str = "/api/images";
pub const DEFAULT_IMAGES_ROOT: &str = "/images";
pub const DEFAULT_PLACEHOLDER: &str = "/static/placeholder.png";
pub const DEFAULT_SEARCH_DEBOUNCE_MS: u32 = 300;

/// Fixed user-facing messages.
pub mod messages {
    pub const ALL_CATEGORIES: &str = "All";
    pub const NO_MATCHING_IMAGES: &str = "No matching images found";
    pub const INIT_FAILED: &str = "Initialization failed, please refresh the page and try again";
    pub const LOAD_FAILED: &str = "Failed to load images, please try again";
}

/// Element ids the page markup exposes for the three gallery regions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DomIds {
    pub search_input: &'static str,
    pub categories: &'static str,
    pub image_grid: &'static str,
}

impl Default for DomIds {
    fn default() -> Self {
        Self { search_input: "searchInput", categories: "categories", image_grid: "imageGrid" }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GalleryConfig {
    pub categories_endpoint: String,
    pub images_endpoint: String,
    /// URL prefix the backend serves image files under.
    pub images_root: &'static str,
    /// Asset swapped in when an image fails to load.
    pub placeholder: &'static str,
    pub search_debounce_ms: u32,
    /// CSS selector the viewer binds against.
    pub viewer_selector: &'static str,
    /// Value of `data-fancybox` on every card anchor; groups cards into one slideshow.
    pub viewer_group: &'static str,
    pub viewer_script: &'static str,
    pub viewer_stylesheet: &'static str,
    pub dom_ids: DomIds,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            categories_endpoint: DEFAULT_CATEGORIES_ENDPOINT.to_owned(),
            images_endpoint: DEFAULT_IMAGES_ENDPOINT.to_owned(),
            images_root: DEFAULT_IMAGES_ROOT,
            placeholder: DEFAULT_PLACEHOLDER,
            search_debounce_ms: DEFAULT_SEARCH_DEBOUNCE_MS,
            viewer_selector: "[data-fancybox]",
            viewer_group: "gallery",
            viewer_script: "https://cdn.jsdelivr.net/npm/@fancyapps/ui@5.0/dist/fancybox/fancybox.umd.js",
            viewer_stylesheet: "https://cdn.jsdelivr.net/npm/@fancyapps/ui@5.0/dist/fancybox/fancybox.css",
            dom_ids: DomIds::default(),
        }
    }
}

impl GalleryConfig {
    /// Re-root both API endpoints under `base` (e.g. `http://host:5000`).
    #[must_use]
    pub fn with_api_base(mut self, base: &str) -> Self {
        let base = base.trim_end_matches('/');
        self.categories_endpoint = format!("{base}{DEFAULT_CATEGORIES_ENDPOINT}");
        self.images_endpoint = format!("{base}{DEFAULT_IMAGES_ENDPOINT}");
        self
    }
}
