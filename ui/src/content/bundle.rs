use i18n_embed::fluent::FluentLanguageLoader;
use once_cell::sync::Lazy;

use super::RichText;
use crate::core::anchors::SectionAnchor;
use crate::i18n::{self, LocaleCode};
use crate::t;

/// Every localized string the page renders for one locale.
///
/// Both bundles are built from FTL files with identical IDs, so the two
/// values always carry the same fields and list lengths.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentBundle {
    pub locale: LocaleCode,
    pub store_name: String,
    pub tagline: String,
    pub hours_summary: RichText,
    pub hero_image_alt: String,
    pub nav: NavLabels,
    pub menu_label: String,
    pub close_label: String,
    pub about_title: String,
    pub about_text: String,
    pub about_image_alt: String,
    pub contact_title: String,
    pub address_label: String,
    pub google_maps: String,
    pub apple_maps: String,
    pub copy_success: String,
    pub copy_tooltip: String,
    pub hours: String,
    pub weekdays: String,
    pub weekends: String,
    pub map_title: String,
    pub gallery_title: String,
    pub gallery_image_alt: String,
    pub donations_title: String,
    pub donations_intro: String,
    pub accepted_title: String,
    pub accepted_items: Vec<String>,
    pub not_accepted_title: String,
    pub not_accepted_items: Vec<String>,
    pub social_title: String,
    pub social_intro: String,
    pub fb_page: String,
    pub instagram: String,
    pub marketplace: String,
    pub reviews_title: String,
    pub leave_review: String,
    pub contact_us: String,
    pub footer_credit: String,
}

/// Header / menu labels, one per section anchor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLabels {
    pub home: String,
    pub about: String,
    pub contact: String,
    pub gallery: String,
    pub donations: String,
    pub social: String,
}

impl NavLabels {
    pub fn label(&self, anchor: SectionAnchor) -> &str {
        match anchor {
            SectionAnchor::Home => &self.home,
            SectionAnchor::About => &self.about,
            SectionAnchor::Contact => &self.contact,
            SectionAnchor::Gallery => &self.gallery,
            SectionAnchor::Donations => &self.donations,
            SectionAnchor::Social => &self.social,
        }
    }

    /// Labels in page order.
    pub fn entries(&self) -> impl Iterator<Item = (SectionAnchor, &str)> + '_ {
        SectionAnchor::ALL
            .into_iter()
            .map(move |anchor| (anchor, self.label(anchor)))
    }
}

impl ContentBundle {
    fn from_loader(locale: LocaleCode, loader: &FluentLanguageLoader) -> Self {
        Self {
            locale,
            store_name: t!(loader, "store-name"),
            tagline: t!(loader, "tagline"),
            hours_summary: RichText::parse(&t!(loader, "hours-summary")),
            hero_image_alt: t!(loader, "hero-image-alt"),
            nav: NavLabels {
                home: t!(loader, "nav-home"),
                about: t!(loader, "nav-about"),
                contact: t!(loader, "nav-contact"),
                gallery: t!(loader, "nav-gallery"),
                donations: t!(loader, "nav-donations"),
                social: t!(loader, "nav-social"),
            },
            menu_label: t!(loader, "menu-label"),
            close_label: t!(loader, "close-label"),
            about_title: t!(loader, "about-title"),
            about_text: t!(loader, "about-text"),
            about_image_alt: t!(loader, "about-image-alt"),
            contact_title: t!(loader, "contact-title"),
            address_label: t!(loader, "address-label"),
            google_maps: t!(loader, "google-maps"),
            apple_maps: t!(loader, "apple-maps"),
            copy_success: t!(loader, "copy-success"),
            copy_tooltip: t!(loader, "copy-tooltip"),
            hours: t!(loader, "hours"),
            weekdays: t!(loader, "weekdays"),
            weekends: t!(loader, "weekends"),
            map_title: t!(loader, "map-title"),
            gallery_title: t!(loader, "gallery-title"),
            gallery_image_alt: t!(loader, "gallery-image-alt"),
            donations_title: t!(loader, "donations-title"),
            donations_intro: t!(loader, "donations-intro"),
            accepted_title: t!(loader, "accepted-title"),
            accepted_items: numbered_items(loader, "accepted-item"),
            not_accepted_title: t!(loader, "not-accepted-title"),
            not_accepted_items: numbered_items(loader, "not-accepted-item"),
            social_title: t!(loader, "social-title"),
            social_intro: t!(loader, "social-intro"),
            fb_page: t!(loader, "fb-page"),
            instagram: t!(loader, "instagram"),
            marketplace: t!(loader, "marketplace"),
            reviews_title: t!(loader, "reviews-title"),
            leave_review: t!(loader, "leave-review"),
            contact_us: t!(loader, "contact-us"),
            footer_credit: t!(loader, "footer-credit"),
        }
    }
}

/// Ordered lists live in FTL as `<prefix>-1`, `<prefix>-2`, ... with no gaps.
fn numbered_items(loader: &FluentLanguageLoader, prefix: &str) -> Vec<String> {
    (1..)
        .map(|index| format!("{prefix}-{index}"))
        .take_while(|key| loader.has(key))
        .map(|key| loader.get(&key))
        .collect()
}

struct ContentCatalog {
    en: ContentBundle,
    es: ContentBundle,
}

impl ContentCatalog {
    fn load() -> Self {
        let build = |locale| ContentBundle::from_loader(locale, &i18n::loader_for(locale));
        Self {
            en: build(LocaleCode::En),
            es: build(LocaleCode::Es),
        }
    }

    fn get(&self, locale: LocaleCode) -> &ContentBundle {
        match locale {
            LocaleCode::En => &self.en,
            LocaleCode::Es => &self.es,
        }
    }
}

static CATALOG: Lazy<ContentCatalog> = Lazy::new(ContentCatalog::load);

/// Bundle for `locale`. Pure lookup; bundles are built once and never change.
pub fn content(locale: LocaleCode) -> &'static ContentBundle {
    CATALOG.get(locale)
}

/// Bundle for a raw code; `None` when the code is not a supported locale.
pub fn content_for_code(code: &str) -> Option<&'static ContentBundle> {
    LocaleCode::from_code(code).map(content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_keep_authoring_order() {
        let en = content(LocaleCode::En);
        assert_eq!(
            en.accepted_items.first().map(String::as_str),
            Some("Stylish, gently used clothing & shoes")
        );
        assert_eq!(en.not_accepted_items.last().map(String::as_str), Some("Trash"));
    }

    #[test]
    fn both_bundles_have_the_same_shape() {
        let en = content(LocaleCode::En);
        let es = content(LocaleCode::Es);
        assert_eq!(en.accepted_items.len(), 5);
        assert_eq!(en.accepted_items.len(), es.accepted_items.len());
        assert_eq!(en.not_accepted_items.len(), 3);
        assert_eq!(en.not_accepted_items.len(), es.not_accepted_items.len());
        for ((a_en, label_en), (a_es, label_es)) in en.nav.entries().zip(es.nav.entries()) {
            assert_eq!(a_en, a_es);
            assert!(!label_en.is_empty());
            assert!(!label_es.is_empty());
        }
    }

    #[test]
    fn unknown_code_has_no_bundle() {
        assert!(content_for_code("fr").is_none());
        assert_eq!(
            content_for_code("es").map(|b| b.tagline.as_str()),
            Some("Una Joya Escondida en Altamonte Springs")
        );
    }

    #[test]
    fn hours_summary_carries_emphasis() {
        let en = content(LocaleCode::En);
        let emphasized: Vec<_> = en
            .hours_summary
            .segments()
            .iter()
            .filter(|s| s.emphasis)
            .map(|s| s.text.as_str())
            .collect();
        assert_eq!(emphasized, ["9 AM - 7 PM", "9 AM - 6:30 PM"]);
    }
}
