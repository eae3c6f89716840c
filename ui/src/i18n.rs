//! Internationalization (i18n) support for `lamejorfigura-ui`.
//!
//! This module wires together:
//! - `i18n-embed` (bundle selection + asset loading)
//! - `rust-embed` (compile-time embedding of `.ftl` files)
//! - `i18n-embed-fl` (`fl!` macro for compile‑time checked lookups)
//!
//! Folder layout (relative to this crate root):
//! ```text
//! i18n.toml
//! i18n/
//!   en-US/lamejorfigura-ui.ftl   (fallback/reference)
//!   es-ES/lamejorfigura-ui.ftl
//! ```
//!
//! Unlike a picker with an open-ended language list, the site only ever
//! shows two locales. Each [`LocaleCode`] gets its own loader, built once by
//! [`crate::content`] and discarded after the strings are extracted, so
//! switching the active locale never touches a shared loader.
//!
//! To change copy, edit both FTL files and keep the IDs identical; the
//! completeness tests fail on any drift.
use std::fmt;

use dioxus::logger::tracing::{debug, error};
use i18n_embed::fluent::FluentLanguageLoader;
use rust_embed::Embed;
use unic_langid::{langid, LanguageIdentifier};

pub use i18n_embed_fl::fl; // Re-export for the `t!` macro.

/// Keyed lookup against an explicit loader.
/// Examples:
///     t!(loader, "nav-home")
///     t!(loader, "tagline")
///
/// Expands to `fl!(loader, ...)` so every ID is checked against the
/// fallback bundle at compile time.
#[macro_export]
macro_rules! t {
    ($loader:expr, $key:literal) => {
        $crate::i18n::fl!($loader, $key)
    };
}

/// Fluent "domain" (matches the crate / the fallback FTL filename).
///
/// Fallback file path must be: `i18n/en-US/{DOMAIN}.ftl`
const DOMAIN: &str = "lamejorfigura-ui";

/// Embed all locale folders under `i18n/`.
#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

/// Display language of the page. The page always starts in English.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LocaleCode {
    #[default]
    En,
    Es,
}

impl LocaleCode {
    pub const ALL: [LocaleCode; 2] = [LocaleCode::En, LocaleCode::Es];

    /// Two-letter code (`"en"` / `"es"`).
    pub fn code(self) -> &'static str {
        match self {
            LocaleCode::En => "en",
            LocaleCode::Es => "es",
        }
    }

    /// Accepts bare codes and region tags, case-insensitively.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_ascii_lowercase().as_str() {
            "en" | "en-us" => Some(LocaleCode::En),
            "es" | "es-es" => Some(LocaleCode::Es),
            _ => None,
        }
    }

    /// The other supported locale.
    pub fn toggled(self) -> Self {
        match self {
            LocaleCode::En => LocaleCode::Es,
            LocaleCode::Es => LocaleCode::En,
        }
    }

    /// Name of the language in that language, used on the toggle button.
    pub fn endonym(self) -> &'static str {
        match self {
            LocaleCode::En => "English",
            LocaleCode::Es => "Español",
        }
    }

    /// Embedded folder holding this locale's bundle.
    pub fn language_id(self) -> LanguageIdentifier {
        match self {
            LocaleCode::En => langid!("en-US"),
            LocaleCode::Es => langid!("es-ES"),
        }
    }
}

impl fmt::Display for LocaleCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Build a loader whose active bundle is `locale` (en-US underneath as fallback).
///
/// A selection failure is logged and the loader keeps serving the fallback.
pub fn loader_for(locale: LocaleCode) -> FluentLanguageLoader {
    let loader = FluentLanguageLoader::new(DOMAIN, LocaleCode::En.language_id());
    match i18n_embed::select(&loader, &Localizations, &[locale.language_id()]) {
        Ok(selected) => debug!("[i18n] loaded {locale} bundle ({selected:?})"),
        Err(err) => error!("[i18n] failed loading {locale} bundle ({err}); using fallback"),
    }
    loader
}

/// List available (embedded) language identifiers.
pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(|s| s.to_string()))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_locales_are_embedded() {
        let langs = available_languages();
        for locale in LocaleCode::ALL {
            let tag = locale.language_id().to_string();
            assert!(langs.contains(&tag), "missing embedded folder {tag}");
        }
    }

    #[test]
    fn fl_macro_domain_matches_loader_domain() {
        // `fl!` reads its domain from i18n.toml; it must name the same FTL file.
        let config = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/i18n.toml"));
        let domain_line = format!("domain = \"{DOMAIN}\"");
        assert!(
            config.lines().any(|line| line.trim() == domain_line),
            "i18n.toml must declare `{domain_line}`"
        );
        let fallback = format!("en-US/{DOMAIN}.ftl");
        assert!(Localizations::get(&fallback).is_some(), "missing {fallback}");
    }

    #[test]
    fn basic_lookup_works() {
        let loader = loader_for(LocaleCode::En);
        assert_eq!(t!(&loader, "nav-home"), "Home");
        let loader = loader_for(LocaleCode::Es);
        assert_eq!(t!(&loader, "nav-home"), "Inicio");
    }

    #[test]
    fn codes_parse_with_and_without_region() {
        assert_eq!(LocaleCode::from_code("en"), Some(LocaleCode::En));
        assert_eq!(LocaleCode::from_code("ES-es"), Some(LocaleCode::Es));
        assert_eq!(LocaleCode::from_code("fr"), None);
        assert_eq!(LocaleCode::from_code(""), None);
    }

    #[test]
    fn toggle_label_names_the_other_language() {
        assert_eq!(LocaleCode::En.toggled().endonym(), "Español");
        assert_eq!(LocaleCode::Es.toggled().endonym(), "English");
    }
}
