use std::cell::RefCell;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use futures::channel::oneshot;
use futures::executor::block_on;

use super::*;
use crate::net::api::ApiError;
use crate::net::types::{Image, ImageQuery};
use crate::state::gallery::GridView;
use crate::util::debounce::Debouncer;

// =============================================================
// Helpers
// =============================================================

type ImagesResult = Result<Vec<Image>, ApiError>;

/// Fake API answering from scripted queues and recording every image query.
#[derive(Default)]
struct ScriptedApi {
    categories: RefCell<VecDeque<Result<Vec<String>, ApiError>>>,
    images: RefCell<VecDeque<ImagesResult>>,
    deferred: RefCell<VecDeque<oneshot::Receiver<ImagesResult>>>,
    queries: RefCell<Vec<ImageQuery>>,
}

impl ScriptedApi {
    fn with_categories(self, categories: &[&str]) -> Self {
        let names = categories.iter().map(|c| (*c).to_owned()).collect();
        self.categories.borrow_mut().push_back(Ok(names));
        self
    }

    fn with_categories_error(self) -> Self {
        self.categories.borrow_mut().push_back(Err(ApiError::Network("offline".to_owned())));
        self
    }

    fn with_images(self, result: ImagesResult) -> Self {
        self.images.borrow_mut().push_back(result);
        self
    }

    fn defer_images(&self) -> oneshot::Sender<ImagesResult> {
        let (tx, rx) = oneshot::channel();
        self.deferred.borrow_mut().push_back(rx);
        tx
    }

    fn queries(&self) -> Vec<ImageQuery> {
        self.queries.borrow().clone()
    }
}

impl GalleryApi for ScriptedApi {
    async fn fetch_categories(&self) -> Result<Vec<String>, ApiError> {
        self.categories.borrow_mut().pop_front().unwrap_or(Ok(Vec::new()))
    }

    async fn fetch_images(&self, query: &ImageQuery) -> Result<Vec<Image>, ApiError> {
        self.queries.borrow_mut().push(query.clone());
        let deferred = self.deferred.borrow_mut().pop_front();
        if let Some(rx) = deferred {
            return rx.await.unwrap_or(Err(ApiError::Unavailable));
        }
        self.images.borrow_mut().pop_front().unwrap_or(Ok(Vec::new()))
    }
}

fn image(path: &str) -> Image {
    Image { path: path.to_owned(), ..Image::default() }
}

fn store() -> RefCell<GalleryState> {
    RefCell::new(GalleryState::default())
}

fn view(store: &RefCell<GalleryState>) -> GridView {
    store.read(GalleryState::grid_view).unwrap()
}

// =============================================================
// init
// =============================================================

#[test]
fn init_loads_categories_then_images() {
    let api = ScriptedApi::default()
        .with_categories(&["nature", "city"])
        .with_images(Ok(vec![image("a.png"), image("b.png")]));
    let store = store();

    block_on(init(&api, &store));

    let state = store.borrow();
    assert_eq!(state.categories, vec!["nature".to_owned(), "city".to_owned()]);
    assert_eq!(state.images.len(), 2);
    assert!(!state.is_loading);
    assert_eq!(state.grid_view(), GridView::Cards);
    assert_eq!(api.queries(), vec![ImageQuery::default()]);
}

#[test]
fn init_category_failure_shows_init_message_without_fetching_images() {
    let api = ScriptedApi::default().with_categories_error();
    let store = store();

    block_on(init(&api, &store));

    assert_eq!(view(&store), GridView::Error(messages::INIT_FAILED));
    assert!(api.queries().is_empty());
}

#[test]
fn init_image_failure_shows_load_message() {
    let api = ScriptedApi::default()
        .with_categories(&["nature"])
        .with_images(Err(ApiError::Status { endpoint: "/api/images".to_owned(), status: 500 }));
    let store = store();

    block_on(init(&api, &store));

    assert_eq!(view(&store), GridView::Error(messages::LOAD_FAILED));
    assert_eq!(store.borrow().categories, vec!["nature".to_owned()]);
    assert!(!store.borrow().is_loading);
}

// =============================================================
// load_images
// =============================================================

#[test]
fn load_images_empty_result_shows_empty_state() {
    let api = ScriptedApi::default().with_images(Ok(Vec::new()));
    let store = store();

    assert!(block_on(load_images(&api, &store)));

    assert_eq!(view(&store), GridView::Empty);
    assert!(store.borrow().images.is_empty());
}

#[test]
fn load_images_failure_keeps_previous_images() {
    let api = ScriptedApi::default()
        .with_images(Ok(vec![image("keep.png")]))
        .with_images(Err(ApiError::Network("reset".to_owned())));
    let store = store();

    block_on(load_images(&api, &store));
    block_on(load_images(&api, &store));

    assert_eq!(store.borrow().images, vec![image("keep.png")]);
    assert_eq!(view(&store), GridView::Error(messages::LOAD_FAILED));
}

#[test]
fn overlapping_loads_keep_latest_request_not_latest_response() {
    let api = ScriptedApi::default();
    let store = store();
    let first = api.defer_images();
    let second = api.defer_images();

    let (old_applied, new_applied, ()) = block_on(async {
        futures::join!(load_images(&api, &store), load_images(&api, &store), async {
            second.send(Ok(vec![image("new.png")])).unwrap();
            futures::pending!();
            first.send(Ok(vec![image("old.png")])).unwrap();
        })
    });

    assert!(!old_applied);
    assert!(new_applied);
    assert_eq!(store.borrow().images, vec![image("new.png")]);
    assert!(!store.borrow().is_loading);
}

// =============================================================
// filter_by_category
// =============================================================

#[test]
fn filter_by_category_marks_selection_and_sends_it() {
    let api = ScriptedApi::default().with_categories(&["nature", "city"]);
    let store = store();
    block_on(init(&api, &store));

    block_on(filter_by_category(&api, &store, "nature"));

    assert_eq!(store.borrow().current_category, "nature");
    let last = api.queries().pop().unwrap();
    assert_eq!(last, ImageQuery { category: "nature".to_owned(), search: String::new() });
}

#[test]
fn filter_by_unknown_category_does_not_fetch() {
    let api = ScriptedApi::default().with_categories(&["nature"]);
    let store = store();
    block_on(init(&api, &store));
    let fetches = api.queries().len();

    block_on(filter_by_category(&api, &store, "<b>bad</b>"));

    assert_eq!(store.borrow().current_category, "");
    assert_eq!(api.queries().len(), fetches);
}

#[test]
fn filter_back_to_all_clears_category() {
    let api = ScriptedApi::default().with_categories(&["nature"]);
    let store = store();
    block_on(init(&api, &store));
    block_on(filter_by_category(&api, &store, "nature"));

    block_on(filter_by_category(&api, &store, ""));

    assert_eq!(store.borrow().current_category, "");
    assert_eq!(api.queries().pop().unwrap().category, "");
}

// =============================================================
// Search
// =============================================================

#[test]
fn apply_search_sends_trimmed_text_with_current_category() {
    let api = ScriptedApi::default().with_categories(&["city"]);
    let store = store();
    block_on(init(&api, &store));
    block_on(filter_by_category(&api, &store, "city"));

    block_on(apply_search(&api, &store, "  cat "));

    let last = api.queries().pop().unwrap();
    assert_eq!(last, ImageQuery { category: "city".to_owned(), search: "cat".to_owned() });
}

#[test]
fn debounced_typing_triggers_one_fetch() {
    let api = ScriptedApi::default();
    let store = store();
    let typed = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&typed);
    let debouncer = Debouncer::new(300, move |value: String| sink.lock().unwrap().push(value));

    for keystroke in [" ", "  c", "  ca", "  cat", "  cat "] {
        debouncer.call(keystroke.to_owned());
    }
    debouncer.flush();

    let values = typed.lock().unwrap().clone();
    for value in &values {
        block_on(apply_search(&api, &store, value));
    }

    assert_eq!(api.queries(), vec![ImageQuery { category: String::new(), search: "cat".to_owned() }]);
}
