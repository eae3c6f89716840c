//! Shared building blocks used by the page sections.

mod site_header;
pub use site_header::SiteHeader;

mod section;
pub use section::{MountHandler, SectionShell};

mod copy_toast;
pub use copy_toast::CopyToast;

mod rich_text;
pub use rich_text::RichTextView;
