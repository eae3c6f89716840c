use std::rc::Rc;

use dioxus::prelude::*;

use crate::core::anchors::SectionAnchor;

/// Called once per section when its element mounts.
pub type MountHandler = EventHandler<(SectionAnchor, Rc<MountedData>)>;

/// Full-height page section that reports its mounted element for navigation.
#[component]
pub fn SectionShell(
    anchor: SectionAnchor,
    #[props(default)] light: bool,
    on_mounted: MountHandler,
    children: Element,
) -> Element {
    let class = if light {
        "section section--light"
    } else {
        "section"
    };

    rsx! {
        section {
            id: anchor.id(),
            class: "{class}",
            onmounted: move |evt: MountedEvent| on_mounted.call((anchor, evt.data())),
            {children}
        }
    }
}
