//! Visibility of the transient "address copied" notification.

/// How long a notification stays up without input.
pub const COPY_NOTICE_MS: u64 = 3_000;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CopyNotice {
    #[default]
    Hidden,
    /// Shown; `generation` identifies which success put it up.
    Visible { generation: u64 },
}

/// Why a dismissal was requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissReason {
    /// The close button on the notification itself.
    CloseButton,
    /// A click anywhere else on the page. Never dismisses.
    ClickAway,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoticeState {
    current: CopyNotice,
    generation: u64,
}

impl NoticeState {
    pub fn current(&self) -> CopyNotice {
        self.current
    }

    pub fn is_visible(&self) -> bool {
        matches!(self.current, CopyNotice::Visible { .. })
    }

    /// Show (or re-show) the notification and return its new generation.
    /// Timers armed for older generations become stale.
    pub fn show(&mut self) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.current = CopyNotice::Visible {
            generation: self.generation,
        };
        self.generation
    }

    /// Returns whether the notification was hidden.
    pub fn dismiss(&mut self, reason: DismissReason) -> bool {
        match reason {
            DismissReason::ClickAway => false,
            DismissReason::CloseButton => self.hide(),
        }
    }

    /// Timer callback for `generation`; ignored unless it is still the one on screen.
    pub fn expire(&mut self, generation: u64) -> bool {
        match self.current {
            CopyNotice::Visible { generation: shown } if shown == generation => self.hide(),
            _ => false,
        }
    }

    fn hide(&mut self) -> bool {
        let was_visible = self.is_visible();
        self.current = CopyNotice::Hidden;
        was_visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_hidden() {
        assert_eq!(NoticeState::default().current(), CopyNotice::Hidden);
    }

    #[test]
    fn click_away_never_dismisses() {
        let mut notice = NoticeState::default();
        notice.show();
        assert!(!notice.dismiss(DismissReason::ClickAway));
        assert!(notice.is_visible());
        assert!(notice.dismiss(DismissReason::CloseButton));
        assert!(!notice.is_visible());
    }

    #[test]
    fn stale_timer_is_ignored() {
        let mut notice = NoticeState::default();
        let first = notice.show();
        let second = notice.show();
        assert_ne!(first, second);
        assert!(!notice.expire(first));
        assert!(notice.is_visible());
        assert!(notice.expire(second));
        assert!(!notice.is_visible());
    }

    #[test]
    fn timer_after_close_is_harmless() {
        let mut notice = NoticeState::default();
        let generation = notice.show();
        notice.dismiss(DismissReason::CloseButton);
        assert!(!notice.expire(generation));
        assert_eq!(notice.current(), CopyNotice::Hidden);
    }
}
