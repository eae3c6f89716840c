//! Platform glue: how background work is spawned.

use std::future::Future;

/// Run a local (non-`Send`) future to completion in the background.
///
/// On the web this is a microtask on the browser event loop; natively it is
/// a task on the Dioxus runtime of the calling component.
pub fn spawn_future<F>(future: F)
where
    F: Future<Output = ()> + 'static,
{
    #[cfg(target_arch = "wasm32")]
    {
        wasm_bindgen_futures::spawn_local(future);
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        dioxus::prelude::spawn(future);
    }
}
