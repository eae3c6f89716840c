//! Page state and the single reducer every user action goes through.
//!
//! The root component owns one [`PageState`]; sections only ever see the
//! values it hands down. Each click or timer produces a [`PageAction`],
//! [`PageState::apply`] updates the state and returns the side effect (if
//! any) for the component to run. Effects report back with another action,
//! so the whole flow can be replayed in tests without a browser.

use dioxus::logger::tracing::{debug, warn};

use super::anchors::SectionAnchor;
use super::clipboard::ClipboardError;
use super::notice::{CopyNotice, DismissReason, NoticeState, COPY_NOTICE_MS};
use crate::i18n::LocaleCode;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageAction {
    ToggleLocale,
    NavigateTo(SectionAnchor),
    CopyAddress,
    CopyFinished(Result<(), ClipboardError>),
    DismissNotification(DismissReason),
    DismissTimerElapsed { generation: u64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageEffect {
    ScrollTo(SectionAnchor),
    WriteClipboard,
    ScheduleDismiss { generation: u64, after_ms: u64 },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageState {
    locale: LocaleCode,
    notice: NoticeState,
}

impl PageState {
    pub fn locale(&self) -> LocaleCode {
        self.locale
    }

    pub fn notice(&self) -> CopyNotice {
        self.notice.current()
    }

    pub fn apply(&mut self, action: PageAction) -> Option<PageEffect> {
        match action {
            PageAction::ToggleLocale => {
                self.locale = self.locale.toggled();
                debug!("[page] locale -> {}", self.locale);
                None
            }
            PageAction::NavigateTo(anchor) => Some(PageEffect::ScrollTo(anchor)),
            PageAction::CopyAddress => Some(PageEffect::WriteClipboard),
            PageAction::CopyFinished(Ok(())) => {
                let generation = self.notice.show();
                Some(PageEffect::ScheduleDismiss {
                    generation,
                    after_ms: COPY_NOTICE_MS,
                })
            }
            PageAction::CopyFinished(Err(err)) => {
                warn!("[page] address not copied: {err}");
                None
            }
            PageAction::DismissNotification(reason) => {
                if !self.notice.dismiss(reason) {
                    debug!("[page] dismissal ignored ({reason:?})");
                }
                None
            }
            PageAction::DismissTimerElapsed { generation } => {
                self.notice.expire(generation);
                None
            }
        }
    }
}
