//! Shared UI crate for the La Mejor Figura storefront page: content, page
//! logic and every section component. Platform crates only launch
//! [`Storefront`].

pub mod components;
pub mod content;
pub mod core;
pub mod i18n;
pub mod views;

pub use views::Storefront;
