use std::rc::Rc;

use dioxus::prelude::*;

use crate::components::{MountHandler, SectionShell};
use crate::content::{content, StoreFacts};
use crate::core::anchors::SectionAnchor;
use crate::i18n::LocaleCode;

/// Social links, community reviews and the "leave a review" link.
#[component]
pub fn SocialSection(locale: LocaleCode, facts: Rc<StoreFacts>, on_mounted: MountHandler) -> Element {
    let text = content(locale);
    let links = [
        ("social__button--facebook", "f", facts.socials.facebook_page.clone(), text.fb_page.as_str()),
        ("social__button--instagram", "◎", facts.socials.instagram.clone(), text.instagram.as_str()),
        (
            "social__button--marketplace",
            "⌂",
            facts.socials.facebook_marketplace.clone(),
            text.marketplace.as_str(),
        ),
    ];

    rsx! {
        SectionShell { anchor: SectionAnchor::Social, light: true, on_mounted: on_mounted,
            h2 { class: "section__title", "{text.social_title}" }
            p { class: "section__subtitle", "{text.social_intro}" }
            div { class: "social",
                for (modifier, icon, href, label) in links {
                    a {
                        key: "{modifier}",
                        class: "social__button {modifier}",
                        href: "{href}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        span { class: "social__icon", aria_hidden: "true", "{icon}" }
                        "{label}"
                    }
                }
            }

            h3 { class: "reviews__title", "{text.reviews_title}" }
            div { class: "reviews",
                for review in facts.reviews.iter() {
                    blockquote { key: "{review.name}", class: "card reviews__card",
                        p { class: "reviews__quote", "“{review.quote}”" }
                        footer { class: "reviews__author", "— {review.name}" }
                    }
                }
            }
            a {
                class: "button button--primary reviews__cta",
                href: "{facts.google_maps_url}",
                target: "_blank",
                rel: "noopener noreferrer",
                "{text.leave_review}"
            }
        }
    }
}
