use std::rc::Rc;

use dioxus::prelude::*;

use crate::components::{MountHandler, SectionShell};
use crate::content::{content, StoreFacts};
use crate::core::anchors::SectionAnchor;
use crate::i18n::LocaleCode;

/// Shown in place of a gallery image that fails to load.
pub const IMAGE_NOT_FOUND: &str = "https://placehold.co/600x800/d7ccc8/3e2723?text=Image+Not+Found";

/// Source to render for a gallery image, given whether it already failed.
pub fn image_source(src: &str, failed: bool) -> &str {
    if failed {
        IMAGE_NOT_FOUND
    } else {
        src
    }
}

#[component]
pub fn GallerySection(locale: LocaleCode, facts: Rc<StoreFacts>, on_mounted: MountHandler) -> Element {
    let text = content(locale);
    let cards: Vec<(String, String, String)> = facts
        .gallery
        .iter()
        .enumerate()
        .map(|(index, item)| {
            (
                item.src.clone(),
                item.caption.get(locale).to_string(),
                format!("{} {}", text.gallery_image_alt, index + 1),
            )
        })
        .collect();

    rsx! {
        SectionShell { anchor: SectionAnchor::Gallery, light: true, on_mounted: on_mounted,
            h2 { class: "section__title", "{text.gallery_title}" }
            div { class: "gallery",
                for (src, caption, alt) in cards {
                    GalleryCard { key: "{src}", src: src, caption: caption, alt: alt }
                }
            }
        }
    }
}

#[component]
fn GalleryCard(src: String, caption: String, alt: String) -> Element {
    let mut failed = use_signal(|| false);
    let shown = image_source(&src, failed());

    rsx! {
        article { class: "card gallery-card",
            img {
                class: "gallery-card__image",
                src: "{shown}",
                alt: "{alt}",
                onerror: move |_| {
                    // Swap once; a failing placeholder must not retrigger.
                    if !failed() {
                        failed.set(true);
                    }
                },
            }
            p { class: "gallery-card__caption", "{caption}" }
        }
    }
}
