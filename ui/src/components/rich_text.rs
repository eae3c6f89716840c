use dioxus::prelude::*;

use crate::content::RichText;

/// Inline rendering of localized text with `<b>` emphasis spans.
#[component]
pub fn RichTextView(text: &'static RichText) -> Element {
    rsx! {
        for segment in text.segments() {
            if segment.emphasis {
                b { "{segment.text}" }
            } else {
                "{segment.text}"
            }
        }
    }
}
