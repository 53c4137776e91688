//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::config::GalleryConfig;
use crate::pages::gallery::GalleryPage;
use crate::state::gallery::GalleryState;

/// HTML shell rendered on the server for SSR + hydration.
///
/// The viewer script is loaded before the app bundle so `Fancybox` exists
/// by the time the first grid render binds it.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    let config = GalleryConfig::default();
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <link rel="stylesheet" href=config.viewer_stylesheet/>
                <script src=config.viewer_script></script>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the gallery session state and configuration, then mounts the
/// single gallery route.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let gallery = RwSignal::new(GalleryState::default());
    provide_context(gallery);
    provide_context(GalleryConfig::default());

    view! {
        <Stylesheet id="leptos" href="/pkg/gallery.css"/>
        <Title text="Image Gallery"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=GalleryPage/>
            </Routes>
        </Router>
    }
}
