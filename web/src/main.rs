use dioxus::logger::tracing::{error, Level};
use dioxus::prelude::*;

use ui::Storefront;

fn main() {
    if let Err(err) = dioxus::logger::init(Level::INFO) {
        // Still serve the page; only diagnostics are lost.
        error!("[web] logger init failed: {err}");
    }
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        Storefront {}
    }
}
