use dioxus::prelude::*;

use crate::content::content;
use crate::core::anchors::SectionAnchor;
use crate::core::page::PageAction;
use crate::i18n::LocaleCode;

/// Fixed page header: brand, one link per section and the language toggle.
///
/// Narrow screens hide the inline links (see `.site-header__links` in the
/// theme) and use the menu button instead; choosing an entry closes the menu.
/// The header never changes page state itself, it only emits actions.
#[component]
pub fn SiteHeader(locale: LocaleCode, on_action: EventHandler<PageAction>) -> Element {
    let text = content(locale);
    let toggle_label = locale.toggled().endonym();
    let mut menu_open = use_signal(|| false);

    rsx! {
        header { id: "site-header", class: "site-header",
            div { class: "site-header__inner",
                h1 {
                    class: "site-header__brand",
                    onclick: move |_| on_action.call(PageAction::NavigateTo(SectionAnchor::Home)),
                    "{text.store_name}"
                }

                nav { class: "site-header__links",
                    for (anchor, label) in text.nav.entries() {
                        button {
                            key: "{anchor.id()}",
                            r#type: "button",
                            class: "site-header__link",
                            onclick: move |_| on_action.call(PageAction::NavigateTo(anchor)),
                            "{label}"
                        }
                    }
                    button {
                        r#type: "button",
                        class: "site-header__locale",
                        onclick: move |_| on_action.call(PageAction::ToggleLocale),
                        span { class: "site-header__locale-icon", aria_hidden: "true", "🌐" }
                        "{toggle_label}"
                    }
                }

                div { class: "site-header__menu",
                    button {
                        r#type: "button",
                        class: "site-header__menu-button",
                        aria_label: "{text.menu_label}",
                        aria_expanded: "{menu_open()}",
                        onclick: move |_| menu_open.set(!menu_open()),
                        "☰"
                    }
                    if menu_open() {
                        ul { class: "site-header__menu-list", role: "menu",
                            for (anchor, label) in text.nav.entries() {
                                li {
                                    key: "{anchor.id()}",
                                    role: "menuitem",
                                    class: "site-header__menu-item",
                                    onclick: move |_| {
                                        menu_open.set(false);
                                        on_action.call(PageAction::NavigateTo(anchor));
                                    },
                                    "{label}"
                                }
                            }
                            li {
                                role: "menuitem",
                                class: "site-header__menu-item",
                                onclick: move |_| {
                                    menu_open.set(false);
                                    on_action.call(PageAction::ToggleLocale);
                                },
                                "{toggle_label}"
                            }
                        }
                    }
                }
            }
        }
    }
}
