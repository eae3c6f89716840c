use std::rc::Rc;

use dioxus::prelude::*;

use crate::components::{MountHandler, SectionShell};
use crate::content::{content, StoreFacts};
use crate::core::anchors::SectionAnchor;
use crate::core::page::PageAction;
use crate::i18n::LocaleCode;

/// Address card (with the copy button), map links, hours and the embedded map.
#[component]
pub fn ContactSection(
    locale: LocaleCode,
    facts: Rc<StoreFacts>,
    on_action: EventHandler<PageAction>,
    on_mounted: MountHandler,
) -> Element {
    let text = content(locale);
    let (street, locality) = facts.address_lines();

    rsx! {
        SectionShell { anchor: SectionAnchor::Contact, on_mounted: on_mounted,
            h2 { class: "section__title", "{text.contact_title}" }
            div { class: "contact",
                div { class: "card contact__card",
                    h3 { class: "card__title", "{text.address_label}" }
                    div { class: "contact__address",
                        div {
                            p { "{street}" }
                            p { "{locality}" }
                        }
                        button {
                            r#type: "button",
                            class: "contact__copy",
                            title: "{text.copy_tooltip}",
                            aria_label: "{text.copy_tooltip}",
                            onclick: move |_| on_action.call(PageAction::CopyAddress),
                            "⧉"
                        }
                    }
                    div { class: "contact__maps",
                        a {
                            href: "{facts.google_maps_url}",
                            target: "_blank",
                            rel: "noopener noreferrer",
                            "{text.google_maps}"
                        }
                        span { aria_hidden: "true", "|" }
                        a {
                            href: "{facts.apple_maps_url}",
                            target: "_blank",
                            rel: "noopener noreferrer",
                            "{text.apple_maps}"
                        }
                    }

                    h3 { class: "card__title", "{text.hours}" }
                    p { b { "{text.weekdays}:" } " {facts.hours.weekdays}" }
                    p { b { "{text.weekends}:" } " {facts.hours.weekends}" }
                }
                div { class: "contact__map",
                    iframe {
                        src: "{facts.map_embed_url}",
                        title: "{text.map_title}",
                        "loading": "lazy",
                        "referrerpolicy": "no-referrer-when-downgrade",
                        "allowfullscreen": "true",
                    }
                }
            }
        }
    }
}
