use dioxus::prelude::*;

use crate::components::{MountHandler, SectionShell};
use crate::content::content;
use crate::core::anchors::SectionAnchor;
use crate::i18n::LocaleCode;

#[component]
pub fn DonationsSection(locale: LocaleCode, on_mounted: MountHandler) -> Element {
    let text = content(locale);

    rsx! {
        SectionShell { anchor: SectionAnchor::Donations, on_mounted: on_mounted,
            h2 { class: "section__title", "{text.donations_title}" }
            p { class: "section__subtitle", "{text.donations_intro}" }
            div { class: "donations",
                DonationList {
                    accepted: true,
                    title: text.accepted_title.as_str(),
                    items: text.accepted_items.as_slice(),
                }
                DonationList {
                    accepted: false,
                    title: text.not_accepted_title.as_str(),
                    items: text.not_accepted_items.as_slice(),
                }
            }
        }
    }
}

#[component]
fn DonationList(accepted: bool, title: &'static str, items: &'static [String]) -> Element {
    let modifier = if accepted {
        "donations__card--accepted"
    } else {
        "donations__card--rejected"
    };
    let mark = if accepted { "✓" } else { "✗" };

    rsx! {
        div { class: "card donations__card {modifier}",
            h3 { class: "card__title", "{title}" }
            ul { class: "donations__list",
                for item in items {
                    li { key: "{item}", class: "donations__item",
                        span { class: "donations__mark", aria_hidden: "true", "{mark}" }
                        "{item}"
                    }
                }
            }
        }
    }
}
