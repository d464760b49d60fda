//! Showcase-specific components.
//!
//! The reusable grid, card and widgets live in `bento-ui`; this module only
//! holds the pieces the example dashboards need on top.

mod icons;
mod notifications;

pub use icons::{Icon, IconGlyph};
pub use notifications::{Notification, NotificationList};
