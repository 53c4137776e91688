//! Binding for the external Fancybox viewer.
//!
//! The viewer is loaded as a plain `<script>` by the page shell and exposes
//! a global `Fancybox`. Binding is best-effort: if the script is missing or
//! throws, the grid still works as plain links and the failure is logged.

#[cfg(test)]
#[path = "lightbox_test.rs"]
mod lightbox_test;

use serde_json::{Value, json};

/// Toolbar controls in display order.
pub const TOOLBAR_ITEMS: [&str; 8] = ["prev", "counter", "next", "zoom", "slideshow", "fullscreen", "download", "close"];

/// Controls grouped in the toolbar's center slot.
const CENTERED_ITEMS: [&str; 3] = ["prev", "counter", "next"];

#[cfg(feature = "hydrate")]
mod ffi {
    use wasm_bindgen::prelude::*;

    #[wasm_bindgen]
    extern "C" {
        #[wasm_bindgen(catch, js_namespace = Fancybox, js_name = bind)]
        pub fn fancybox_bind(selector: &str, options: &JsValue) -> Result<(), JsValue>;
    }
}

/// Options object passed to `Fancybox.bind`.
pub fn viewer_options() -> Value {
    let display: Vec<Value> = TOOLBAR_ITEMS
        .iter()
        .map(|id| {
            if CENTERED_ITEMS.contains(id) {
                json!({ "id": id, "position": "center" })
            } else {
                json!(id)
            }
        })
        .collect();
    json!({ "Toolbar": { "display": display } })
}

/// (Re)bind the viewer to every element matching `selector`.
pub fn bind(selector: &str) {
    #[cfg(feature = "hydrate")]
    {
        if !viewer_loaded() {
            leptos::logging::warn!("viewer script not loaded; cards open as plain links");
            return;
        }
        let options = match js_sys::JSON::parse(&viewer_options().to_string()) {
            Ok(options) => options,
            Err(e) => {
                leptos::logging::warn!("viewer options rejected: {e:?}");
                return;
            }
        };
        if let Err(e) = ffi::fancybox_bind(selector, &options) {
            leptos::logging::warn!("viewer bind failed for {selector}: {e:?}");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = selector;
    }
}

#[cfg(feature = "hydrate")]
fn viewer_loaded() -> bool {
    web_sys::window()
        .and_then(|w| js_sys::Reflect::get(&w, &wasm_bindgen::JsValue::from_str("Fancybox")).ok())
        .is_some_and(|v| !v.is_undefined())
}
