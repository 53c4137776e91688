//! Gallery session state: filters, fetched lists and load bookkeeping.
//!
//! DESIGN
//! ======
//! Mutations are small methods on `GalleryState` so the async controller
//! flows stay thin and every transition is testable without a browser.
//!
//! Each image load takes a token from `begin_image_load`; only the response
//! carrying the latest token is applied. Out-of-order responses from rapid
//! filter changes are dropped instead of overwriting newer results.

#[cfg(test)]
#[path = "gallery_test.rs"]
mod gallery_test;

use crate::net::types::{Image, ImageQuery};

/// Session state for one browser tab.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GalleryState {
    /// Empty means "all"; otherwise one of `categories`.
    pub current_category: String,
    /// Trimmed search text; empty means no search.
    pub current_search: String,
    pub is_loading: bool,
    pub images: Vec<Image>,
    pub categories: Vec<String>,
    /// Message replacing the grid after a failed fetch.
    pub error: Option<&'static str>,
    /// Token of the most recently started image load; zero before the first.
    pub load_seq: u64,
}

/// What the image region should show, derived from `GalleryState`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GridView {
    /// Nothing requested yet.
    Idle,
    Loading,
    Error(&'static str),
    /// Latest load succeeded with zero images.
    Empty,
    Cards,
}

impl GalleryState {
    /// Mark a fetch as in progress and clear any previous error.
    pub fn begin_loading(&mut self) {
        self.is_loading = true;
        self.error = None;
    }

    /// Replace the grid with `message`.
    pub fn show_error(&mut self, message: &'static str) {
        self.error = Some(message);
    }

    /// Start an image load and return its token plus the filters to send.
    pub fn begin_image_load(&mut self) -> (u64, ImageQuery) {
        self.begin_loading();
        self.load_seq += 1;
        (self.load_seq, self.query())
    }

    /// Apply the outcome of the load identified by `token`.
    ///
    /// Returns `false` and leaves state untouched when a newer load has
    /// started since. On the latest token the loading flag is always
    /// cleared; a failure shows `failure_message` and keeps the previous
    /// `images`.
    pub fn finish_image_load<E>(
        &mut self,
        token: u64,
        result: Result<Vec<Image>, E>,
        failure_message: &'static str,
    ) -> bool {
        if token != self.load_seq {
            return false;
        }
        match result {
            Ok(images) => self.images = images,
            Err(_) => self.show_error(failure_message),
        }
        self.is_loading = false;
        true
    }

    /// Select `category` (`""` for all). Rejects names not in `categories`.
    pub fn select_category(&mut self, category: &str) -> bool {
        if !category.is_empty() && !self.categories.iter().any(|c| c == category) {
            return false;
        }
        category.clone_into(&mut self.current_category);
        true
    }

    /// Store `raw` search input, trimmed.
    pub fn set_search(&mut self, raw: &str) {
        raw.trim().clone_into(&mut self.current_search);
    }

    /// Current filter pair.
    pub fn query(&self) -> ImageQuery {
        ImageQuery { category: self.current_category.clone(), search: self.current_search.clone() }
    }

    /// Derive what the image region shows. An error wins over loading.
    pub fn grid_view(&self) -> GridView {
        if let Some(message) = self.error {
            GridView::Error(message)
        } else if self.is_loading {
            GridView::Loading
        } else if self.load_seq == 0 {
            GridView::Idle
        } else if self.images.is_empty() {
            GridView::Empty
        } else {
            GridView::Cards
        }
    }
}
