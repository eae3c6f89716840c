//! Locale-independent facts about the store, embedded from `content/store.json`.

use serde::Deserialize;

use super::ContentError;
use crate::i18n::LocaleCode;

const STORE_JSON: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/content/store.json"));

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StoreFacts {
    pub address: String,
    pub phone: String,
    pub google_maps_url: String,
    pub apple_maps_url: String,
    pub map_embed_url: String,
    pub hours: OpeningHours,
    pub socials: SocialLinks,
    pub hero_image: String,
    pub about_image: String,
    pub gallery: Vec<GalleryItem>,
    pub reviews: Vec<Review>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OpeningHours {
    pub weekdays: String,
    pub weekends: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SocialLinks {
    pub facebook_page: String,
    pub facebook_marketplace: String,
    pub instagram: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GalleryItem {
    pub src: String,
    pub caption: LocalizedText,
}

/// A caption written out for every supported locale.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LocalizedText {
    pub en: String,
    pub es: String,
}

impl LocalizedText {
    pub fn get(&self, locale: LocaleCode) -> &str {
        match locale {
            LocaleCode::En => &self.en,
            LocaleCode::Es => &self.es,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Review {
    pub name: String,
    pub quote: String,
}

impl StoreFacts {
    /// Parse the facts compiled into the binary.
    pub fn embedded() -> Result<Self, ContentError> {
        Self::from_json(STORE_JSON)
    }

    pub fn from_json(raw: &str) -> Result<Self, ContentError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Street line and locality line: the address split at its first comma.
    pub fn address_lines(&self) -> (&str, &str) {
        match self.address.split_once(',') {
            Some((street, locality)) => (street.trim(), locality.trim()),
            None => (self.address.trim(), ""),
        }
    }
}
