use std::rc::Rc;

use dioxus::prelude::*;

use crate::components::{MountHandler, RichTextView, SectionShell};
use crate::content::{content, StoreFacts};
use crate::core::anchors::SectionAnchor;
use crate::core::page::PageAction;
use crate::i18n::LocaleCode;

#[component]
pub fn HeroSection(
    locale: LocaleCode,
    facts: Rc<StoreFacts>,
    on_action: EventHandler<PageAction>,
    on_mounted: MountHandler,
) -> Element {
    let text = content(locale);

    rsx! {
        SectionShell { anchor: SectionAnchor::Home, on_mounted: on_mounted,
            div { class: "hero",
                div { class: "hero__image-frame",
                    img { class: "hero__image", src: "{facts.hero_image}", alt: "{text.hero_image_alt}" }
                }
                h2 { class: "hero__tagline", "{text.tagline}" }
                p { class: "hero__hours",
                    RichTextView { text: &text.hours_summary }
                }
                button {
                    r#type: "button",
                    class: "button button--primary hero__cta",
                    onclick: move |_| on_action.call(PageAction::NavigateTo(SectionAnchor::Contact)),
                    "{text.nav.contact}"
                }
            }
        }
    }
}
