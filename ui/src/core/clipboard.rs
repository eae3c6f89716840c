//! Clipboard writes for the "copy address" button.
//!
//! One backend is picked per page by [`PlatformClipboard::detect`]:
//! - web with `navigator.clipboard`: the async `writeText` promise;
//! - web without it (insecure context, old browser): an offscreen
//!   `<textarea>` plus `document.execCommand("copy")`;
//! - native builds: the system clipboard through `arboard`.

use dioxus::logger::tracing::{debug, warn};

use super::page::PageAction;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClipboardError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),
    #[error("clipboard write rejected: {0}")]
    Rejected(String),
    #[error("copy command reported failure")]
    CommandFailed,
}

/// Places text on the system clipboard.
#[allow(async_fn_in_trait)]
pub trait ClipboardBackend {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}

/// Write `text` and turn the outcome into the follow-up page action.
pub async fn copy_text<B: ClipboardBackend>(backend: &B, text: &str) -> PageAction {
    let outcome = backend.write_text(text).await;
    match &outcome {
        Ok(()) => debug!("[clipboard] copied {} bytes", text.len()),
        Err(err) => warn!("[clipboard] could not copy text: {err}"),
    }
    PageAction::CopyFinished(outcome)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformClipboard {
    #[cfg(target_arch = "wasm32")]
    AsyncApi,
    #[cfg(target_arch = "wasm32")]
    LegacyCommand,
    #[cfg(not(target_arch = "wasm32"))]
    System,
}

impl PlatformClipboard {
    /// Capability check; the chosen path is used for the page's lifetime.
    pub fn detect() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            if web::async_clipboard_available() {
                PlatformClipboard::AsyncApi
            } else {
                debug!("[clipboard] navigator.clipboard missing; using copy command");
                PlatformClipboard::LegacyCommand
            }
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            PlatformClipboard::System
        }
    }
}

impl ClipboardBackend for PlatformClipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        match self {
            #[cfg(target_arch = "wasm32")]
            PlatformClipboard::AsyncApi => web::write_async(text).await,
            #[cfg(target_arch = "wasm32")]
            PlatformClipboard::LegacyCommand => web::write_with_command(text),
            #[cfg(not(target_arch = "wasm32"))]
            PlatformClipboard::System => {
                use arboard::Clipboard;

                let mut clipboard =
                    Clipboard::new().map_err(|err| ClipboardError::Unavailable(err.to_string()))?;
                clipboard
                    .set_text(text.to_string())
                    .map_err(|err| ClipboardError::Rejected(err.to_string()))
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
mod web {
    use wasm_bindgen::{JsCast, JsValue};
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{Document, HtmlDocument, HtmlTextAreaElement};

    use super::ClipboardError;

    pub(super) fn async_clipboard_available() -> bool {
        web_sys::window()
            .map(|window| window.navigator())
            .and_then(|navigator| js_sys::Reflect::get(&navigator, &JsValue::from_str("clipboard")).ok())
            .is_some_and(|clipboard| !clipboard.is_undefined() && !clipboard.is_null())
    }

    pub(super) async fn write_async(text: &str) -> Result<(), ClipboardError> {
        let window =
            web_sys::window().ok_or_else(|| ClipboardError::Unavailable("window unavailable".into()))?;
        let promise = window.navigator().clipboard().write_text(text);
        JsFuture::from(promise)
            .await
            .map(|_| ())
            .map_err(|err| ClipboardError::Rejected(format!("{err:?}")))
    }

    pub(super) fn write_with_command(text: &str) -> Result<(), ClipboardError> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| ClipboardError::Unavailable("document unavailable".into()))?;

        let scratch = OffscreenTextArea::attach(&document, text)?;
        scratch.select();

        let html = document
            .dyn_ref::<HtmlDocument>()
            .ok_or_else(|| ClipboardError::Unavailable("not an HTML document".into()))?;
        match html.exec_command("copy") {
            Ok(true) => Ok(()),
            Ok(false) => Err(ClipboardError::CommandFailed),
            Err(err) => Err(ClipboardError::Rejected(format!("{err:?}"))),
        }
        // `scratch` drops here and detaches the textarea on every path.
    }

    /// Invisible textarea that exists only for the duration of one copy.
    struct OffscreenTextArea {
        element: HtmlTextAreaElement,
    }

    impl OffscreenTextArea {
        fn attach(document: &Document, text: &str) -> Result<Self, ClipboardError> {
            let body = document
                .body()
                .ok_or_else(|| ClipboardError::Unavailable("missing body".into()))?;
            let element = document
                .create_element("textarea")
                .map_err(|_| ClipboardError::Unavailable("unable to create textarea".into()))?
                .dyn_into::<HtmlTextAreaElement>()
                .map_err(|_| ClipboardError::Unavailable("textarea cast failed".into()))?;
            element.set_value(text);
            element.set_read_only(true);

            let style = element.style();
            style.set_property("position", "fixed").ok();
            style.set_property("top", "0").ok();
            style.set_property("left", "-9999px").ok();
            style.set_property("opacity", "0").ok();

            body.append_child(&element)
                .map_err(|_| ClipboardError::Unavailable("unable to attach textarea".into()))?;
            Ok(Self { element })
        }

        fn select(&self) {
            self.element.select();
        }
    }

    impl Drop for OffscreenTextArea {
        fn drop(&mut self) {
            self.element.remove();
        }
    }
}
