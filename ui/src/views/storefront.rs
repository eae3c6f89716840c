use std::cell::RefCell;
use std::rc::Rc;

use dioxus::logger::tracing::{debug, error, warn};
use dioxus::prelude::*;
use futures_channel::mpsc::UnboundedSender;
use futures_util::StreamExt;

use crate::components::{CopyToast, SiteHeader};
use crate::content::{content, StoreFacts};
use crate::core::anchors::{SectionAnchor, SectionNavigator};
use crate::core::clipboard::{self, PlatformClipboard};
use crate::core::notice::{CopyNotice, DismissReason};
use crate::core::page::{PageAction, PageEffect, PageState};
use crate::core::platform;
use crate::core::timing;

use super::{
    AboutSection, ContactSection, DonationsSection, GallerySection, HeroSection, SiteFooter,
    SocialSection,
};

const THEME_CSS: Asset = asset!("/assets/theme/main.css");
const FONTS_CSS: &str =
    "https://fonts.googleapis.com/css2?family=Playfair+Display:wght@700&family=Raleway:wght@400;500;700&display=swap";

type SenderSlot = Rc<RefCell<Option<UnboundedSender<PageAction>>>>;

/// Root of the page. Owns the only mutable state (active locale, copy
/// notification) and the section navigator; everything below receives
/// read-only values and reports clicks back as [`PageAction`]s.
#[component]
pub fn Storefront() -> Element {
    let facts = use_hook(|| StoreFacts::embedded().map(Rc::new).map_err(Rc::new));
    let page = use_signal(PageState::default);
    let mut navigator = use_signal(SectionNavigator::<Rc<MountedData>>::default);
    let clipboard = use_hook(PlatformClipboard::detect);
    let sender_slot: SenderSlot = use_hook(|| Rc::new(RefCell::new(None)));

    use_hook(|| debug!("[page] mounted (clipboard {clipboard:?})"));

    let address = facts.as_ref().ok().map(|f| f.address.clone());
    let coroutine = {
        let sender_slot = sender_slot.clone();

        use_coroutine(move |mut rx: UnboundedReceiver<PageAction>| {
            let sender_slot = sender_slot.clone();
            let address = address.clone();
            let mut page_signal = page;

            async move {
                while let Some(action) = rx.next().await {
                    let Some(effect) = page_signal.with_mut(|state| state.apply(action)) else {
                        continue;
                    };

                    match effect {
                        PageEffect::ScrollTo(anchor) => {
                            let nav = navigator.peek().clone();
                            queue_scroll(nav, anchor);
                        }
                        PageEffect::WriteClipboard => match &address {
                            Some(text) => queue_copy(sender_slot.clone(), clipboard, text.clone()),
                            None => warn!("[page] no address to copy"),
                        },
                        PageEffect::ScheduleDismiss {
                            generation,
                            after_ms,
                        } => queue_dismiss(sender_slot.clone(), generation, after_ms),
                    }
                }
            }
        })
    };

    sender_slot.borrow_mut().get_or_insert_with(|| coroutine.tx());

    let dispatch = use_callback(move |action: PageAction| coroutine.send(action));
    let register = use_callback(move |(anchor, data): (SectionAnchor, Rc<MountedData>)| {
        navigator.write().register(anchor, data);
    });

    let facts = match facts {
        Ok(facts) => facts,
        Err(err) => {
            error!("[page] {err}");
            return rsx! {
                document::Link { rel: "stylesheet", href: THEME_CSS }
                div { class: "page page--broken",
                    p { class: "page__error", "⚠️ {err}" }
                }
            };
        }
    };

    let state = page();
    let locale = state.locale();
    let notice = state.notice();
    let notice_visible = matches!(notice, CopyNotice::Visible { .. });
    let text = content(locale);

    #[cfg(debug_assertions)]
    debug!("[page] render locale={locale} notice={notice:?}");

    rsx! {
        document::Title { "{text.store_name}" }
        document::Link { rel: "preconnect", href: "https://fonts.googleapis.com" }
        document::Link { rel: "stylesheet", href: FONTS_CSS }
        document::Link { rel: "stylesheet", href: THEME_CSS }

        div {
            class: "page",
            lang: locale.code(),
            onclick: move |_| {
                if notice_visible {
                    dispatch.call(PageAction::DismissNotification(DismissReason::ClickAway));
                }
            },

            SiteHeader { locale: locale, on_action: dispatch }

            main {
                HeroSection { locale: locale, facts: facts.clone(), on_action: dispatch, on_mounted: register }
                AboutSection { locale: locale, facts: facts.clone(), on_mounted: register }
                ContactSection { locale: locale, facts: facts.clone(), on_action: dispatch, on_mounted: register }
                GallerySection { locale: locale, facts: facts.clone(), on_mounted: register }
                DonationsSection { locale: locale, on_mounted: register }
                SocialSection { locale: locale, facts: facts.clone(), on_mounted: register }
            }

            SiteFooter { locale: locale, facts: facts.clone() }
            CopyToast { locale: locale, notice: notice, on_action: dispatch }
        }
    }
}

fn queue_scroll(nav: SectionNavigator<Rc<MountedData>>, anchor: SectionAnchor) {
    platform::spawn_future(async move {
        if let Err(err) = nav.scroll_to(anchor).await {
            warn!("[nav] {err}");
        }
    });
}

fn queue_copy(sender_slot: SenderSlot, backend: PlatformClipboard, text: String) {
    if let Some(sender) = sender_slot.borrow().as_ref().cloned() {
        platform::spawn_future(async move {
            let outcome = clipboard::copy_text(&backend, &text).await;
            let _ = sender.unbounded_send(outcome);
        });
    }
}

fn queue_dismiss(sender_slot: SenderSlot, generation: u64, after_ms: u64) {
    if let Some(sender) = sender_slot.borrow().as_ref().cloned() {
        platform::spawn_future(async move {
            timing::sleep_ms(after_ms).await;
            let _ = sender.unbounded_send(PageAction::DismissTimerElapsed { generation });
        });
    }
}
