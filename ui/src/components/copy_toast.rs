use dioxus::prelude::*;

use crate::content::content;
use crate::core::notice::{CopyNotice, DismissReason};
use crate::core::page::PageAction;
use crate::i18n::LocaleCode;

/// "Address copied" notification. Only the close button dismisses it early;
/// clicks on it do not reach the page's click-away handler.
#[component]
pub fn CopyToast(locale: LocaleCode, notice: CopyNotice, on_action: EventHandler<PageAction>) -> Element {
    if notice == CopyNotice::Hidden {
        return rsx! {};
    }
    let text = content(locale);

    rsx! {
        div {
            class: "copy-toast",
            role: "status",
            aria_live: "polite",
            onclick: move |evt| evt.stop_propagation(),
            span { class: "copy-toast__icon", aria_hidden: "true", "✓" }
            span { class: "copy-toast__message", "{text.copy_success}" }
            button {
                r#type: "button",
                class: "copy-toast__close",
                aria_label: "{text.close_label}",
                onclick: move |evt| {
                    evt.stop_propagation();
                    on_action.call(PageAction::DismissNotification(DismissReason::CloseButton));
                },
                "×"
            }
        }
    }
}
