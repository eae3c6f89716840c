//! Static page content: the localized bundles and the locale-independent store facts.

mod bundle;
pub use bundle::{content, content_for_code, ContentBundle, NavLabels};

mod rich_text;
pub use rich_text::{RichText, Segment};

mod store;
pub use store::{GalleryItem, LocalizedText, OpeningHours, Review, SocialLinks, StoreFacts};

/// Failures while reading the embedded content.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("store facts are malformed: {0}")]
    Facts(#[from] serde_json::Error),
}
