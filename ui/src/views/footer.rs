use std::rc::Rc;

use dioxus::prelude::*;

use crate::content::{content, StoreFacts};
use crate::i18n::LocaleCode;

#[component]
pub fn SiteFooter(locale: LocaleCode, facts: Rc<StoreFacts>) -> Element {
    let text = content(locale);

    rsx! {
        footer { class: "site-footer",
            p { "{text.contact_us}: {facts.phone}" }
            p { class: "site-footer__credit", "{text.footer_credit}" }
        }
    }
}
