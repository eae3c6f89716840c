//! Named page sections and smooth scrolling between them.

use std::collections::BTreeMap;
use std::rc::Rc;

use dioxus::logger::tracing::debug;
use dioxus::prelude::{MountedData, ScrollBehavior};

/// A scrollable region of the page, in page order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SectionAnchor {
    Home,
    About,
    Contact,
    Gallery,
    Donations,
    Social,
}

impl SectionAnchor {
    pub const ALL: [SectionAnchor; 6] = [
        SectionAnchor::Home,
        SectionAnchor::About,
        SectionAnchor::Contact,
        SectionAnchor::Gallery,
        SectionAnchor::Donations,
        SectionAnchor::Social,
    ];

    /// DOM id of the section element.
    pub fn id(self) -> &'static str {
        match self {
            SectionAnchor::Home => "home",
            SectionAnchor::About => "about",
            SectionAnchor::Contact => "contact",
            SectionAnchor::Gallery => "gallery",
            SectionAnchor::Donations => "donations",
            SectionAnchor::Social => "social",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|anchor| anchor.id() == id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NavigationError {
    #[error("scrolling to #{anchor} failed: {reason}")]
    Scroll { anchor: &'static str, reason: String },
}

/// Something that can bring its region to the top of the scroll container.
#[allow(async_fn_in_trait)]
pub trait ScrollHandle: Clone {
    async fn scroll_smooth(&self) -> Result<(), String>;
}

impl ScrollHandle for Rc<MountedData> {
    async fn scroll_smooth(&self) -> Result<(), String> {
        self.scroll_to(ScrollBehavior::Smooth)
            .await
            .map_err(|err| err.to_string())
    }
}

/// Anchor → handle associations, filled once while the page mounts.
///
/// The navigator never owns rendered content; it only remembers where each
/// section is so header links can scroll to it.
#[derive(Clone)]
pub struct SectionNavigator<H> {
    handles: BTreeMap<SectionAnchor, H>,
}

impl<H> Default for SectionNavigator<H> {
    fn default() -> Self {
        Self {
            handles: BTreeMap::new(),
        }
    }
}

impl<H: ScrollHandle> SectionNavigator<H> {
    /// Record the handle for `anchor`. The first registration wins; returns
    /// `false` when the anchor already had one.
    pub fn register(&mut self, anchor: SectionAnchor, handle: H) -> bool {
        if self.handles.contains_key(&anchor) {
            debug!("[nav] #{} already registered; ignoring", anchor.id());
            return false;
        }
        self.handles.insert(anchor, handle);
        true
    }

    pub fn is_registered(&self, anchor: SectionAnchor) -> bool {
        self.handles.contains_key(&anchor)
    }

    /// Smooth-scroll to `anchor`. `Ok(false)` when nothing is registered for it.
    pub async fn scroll_to(&self, anchor: SectionAnchor) -> Result<bool, NavigationError> {
        let Some(handle) = self.handles.get(&anchor) else {
            debug!("[nav] #{} not mounted; nothing to scroll", anchor.id());
            return Ok(false);
        };
        handle
            .scroll_smooth()
            .await
            .map_err(|reason| NavigationError::Scroll {
                anchor: anchor.id(),
                reason,
            })?;
        Ok(true)
    }

    /// Like [`Self::scroll_to`] for a raw id; unknown ids are a no-op.
    pub async fn scroll_to_id(&self, id: &str) -> Result<bool, NavigationError> {
        match SectionAnchor::from_id(id) {
            Some(anchor) => self.scroll_to(anchor).await,
            None => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[derive(Clone)]
    struct Marker {
        hits: Rc<Cell<u32>>,
        fail: bool,
    }

    impl ScrollHandle for Marker {
        async fn scroll_smooth(&self) -> Result<(), String> {
            self.hits.set(self.hits.get() + 1);
            if self.fail {
                Err("detached".into())
            } else {
                Ok(())
            }
        }
    }

    fn marker(fail: bool) -> Marker {
        Marker {
            hits: Rc::new(Cell::new(0)),
            fail,
        }
    }

    #[test]
    fn ids_round_trip_through_anchor() {
        for anchor in SectionAnchor::ALL {
            assert_eq!(SectionAnchor::from_id(anchor.id()), Some(anchor));
        }
        assert_eq!(SectionAnchor::from_id("footer"), None);
    }

    #[test]
    fn first_registration_wins() {
        let first = marker(false);
        let second = marker(false);
        let mut nav = SectionNavigator::default();
        assert!(nav.register(SectionAnchor::About, first.clone()));
        assert!(!nav.register(SectionAnchor::About, second.clone()));

        let scrolled = futures::executor::block_on(nav.scroll_to(SectionAnchor::About));
        assert_eq!(scrolled, Ok(true));
        assert_eq!(first.hits.get(), 1);
        assert_eq!(second.hits.get(), 0);
    }

    #[test]
    fn unregistered_anchor_is_a_no_op() {
        let nav: SectionNavigator<Marker> = SectionNavigator::default();
        let scrolled = futures::executor::block_on(nav.scroll_to(SectionAnchor::Gallery));
        assert_eq!(scrolled, Ok(false));
    }

    #[test]
    fn scroll_failure_names_the_anchor() {
        let mut nav = SectionNavigator::default();
        nav.register(SectionAnchor::Social, marker(true));
        let err = futures::executor::block_on(nav.scroll_to(SectionAnchor::Social)).unwrap_err();
        assert_eq!(err.to_string(), "scrolling to #social failed: detached");
    }
}
