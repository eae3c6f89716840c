use std::rc::Rc;

use dioxus::prelude::*;

use crate::components::{MountHandler, SectionShell};
use crate::content::{content, StoreFacts};
use crate::core::anchors::SectionAnchor;
use crate::i18n::LocaleCode;

#[component]
pub fn AboutSection(locale: LocaleCode, facts: Rc<StoreFacts>, on_mounted: MountHandler) -> Element {
    let text = content(locale);

    rsx! {
        SectionShell { anchor: SectionAnchor::About, light: true, on_mounted: on_mounted,
            div { class: "about",
                img { class: "about__portrait", src: "{facts.about_image}", alt: "{text.about_image_alt}" }
                div { class: "about__text",
                    h2 { class: "section__title", "{text.about_title}" }
                    p { class: "about__body", "{text.about_text}" }
                }
            }
        }
    }
}
