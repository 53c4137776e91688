//! A single image card: viewer link, category tags, AI tags, dimensions.
//!
//! DESIGN
//! ======
//! `ImageCardModel` does all derivation (URL, caption, percentages) so the
//! component is a straight projection. Server-sourced strings only ever
//! become text nodes or attribute values.

#[cfg(test)]
#[path = "image_card_test.rs"]
mod image_card_test;

use leptos::prelude::*;

use crate::net::types::Image;
use crate::util::image_path::{image_url, process_image_path};

/// An AI tag chip: label plus whole-percent confidence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AiChip {
    pub label: String,
    pub percent: i64,
}

impl AiChip {
    pub fn title(&self) -> String {
        format!("Confidence: {}%", self.percent)
    }
}

/// Render-ready projection of one `Image`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageCardModel {
    pub url: String,
    /// Normalized path, used as alt text.
    pub alt: String,
    /// Viewer caption: categories joined with `", "`.
    pub caption: String,
    pub categories: Vec<String>,
    /// Empty when the image has no AI tags; the row is then omitted.
    pub ai_chips: Vec<AiChip>,
    /// `width × height`.
    pub dimensions: String,
}

impl ImageCardModel {
    pub fn from_image(image: &Image, images_root: &str) -> Self {
        Self {
            url: image_url(images_root, &image.path),
            alt: process_image_path(&image.path),
            caption: image.categories.join(", "),
            categories: image.categories.clone(),
            ai_chips: image
                .ai_tags
                .iter()
                .map(|tag| AiChip { label: tag.label.clone(), percent: tag.confidence_percent() })
                .collect(),
            dimensions: format!("{} × {}", image.technical.width, image.technical.height),
        }
    }
}

/// Which URL an image element currently points at.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ImageSource {
    #[default]
    Original,
    Placeholder,
}

impl ImageSource {
    /// Transition on a load error. `None` once already on the placeholder,
    /// so a missing placeholder does not retrigger.
    pub fn after_error(self) -> Option<Self> {
        match self {
            Self::Original => Some(Self::Placeholder),
            Self::Placeholder => None,
        }
    }

    pub fn resolve<'a>(self, url: &'a str, placeholder: &'a str) -> &'a str {
        match self {
            Self::Original => url,
            Self::Placeholder => placeholder,
        }
    }
}

/// Card for one image. Falls back to `placeholder` once if the image fails
/// to load.
#[component]
pub fn ImageCard(model: ImageCardModel, placeholder: &'static str, group: &'static str) -> impl IntoView {
    let source = RwSignal::new(ImageSource::default());
    let url = model.url.clone();
    let src = move || source.get().resolve(&url, placeholder).to_owned();
    let on_error = move |_| {
        if let Some(next) = source.get_untracked().after_error() {
            source.set(next);
        }
    };

    let ai_row = (!model.ai_chips.is_empty()).then(|| {
        let chips = model
            .ai_chips
            .into_iter()
            .map(|chip| {
                let title = chip.title();
                view! { <span class="tag ai-tag" title=title>{chip.label}</span> }
            })
            .collect::<Vec<_>>();
        view! { <div class="ai-tags">{chips}</div> }
    });

    view! {
        <div class="image-card">
            <div class="image-container">
                <a href=model.url data-fancybox=group data-caption=model.caption>
                    <img src=src alt=model.alt loading="lazy" on:error=on_error/>
                </a>
            </div>
            <div class="image-info">
                <div class="categories">
                    {model
                        .categories
                        .into_iter()
                        .map(|category| view! { <span class="tag">{category}</span> })
                        .collect::<Vec<_>>()}
                </div>
                {ai_row}
                <div class="technical-info">
                    <small>{model.dimensions}</small>
                </div>
            </div>
        </div>
    }
}
