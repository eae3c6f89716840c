//! Page logic that does not render anything: locale/notification state, the
//! action reducer, section navigation and clipboard access.

pub mod anchors;
pub mod clipboard;
pub mod notice;
pub mod page;
pub mod platform;
pub mod timing;
