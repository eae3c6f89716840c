//! Page sections and the root controller that composes them.

mod storefront;
pub use storefront::Storefront;

mod hero;
pub use hero::HeroSection;

mod about;
pub use about::AboutSection;

mod contact;
pub use contact::ContactSection;

mod gallery;
pub use gallery::{image_source, GallerySection, IMAGE_NOT_FOUND};

mod donations;
pub use donations::DonationsSection;

mod social;
pub use social::SocialSection;

mod footer;
pub use footer::SiteFooter;
