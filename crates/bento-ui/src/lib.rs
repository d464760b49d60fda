//! Bento Grid UI Components
//!
//! Dioxus components for "bento box" dashboards: a grid container that lays
//! cards out per breakpoint, a glassy card primitive, and a handful of small
//! widgets that live inside cards.
//!
//! ## Composition
//!
//! The page owns the layout. A [`BentoGrid`] receives a [`GridLayout`]
//! (column tracks per breakpoint, row sizing, gap) and each [`BentoCard`]
//! receives a [`Span`] saying how many tracks it occupies. Neither component
//! computes responsive behaviour itself; both only translate their
//! configuration into utility classes.
//!
//! ```rust,ignore
//! rsx! {
//!     BentoGrid { layout: GridLayout::new(Responsive::new(1).md(4)),
//!         BentoCard {
//!             title: "Revenue",
//!             gradient: Gradient::GreenEmerald,
//!             body: rsx! { StatsDisplay { stat: StatEntry::new("This month", "$24.5K").with_trend("+12%") } },
//!         }
//!     }
//! }
//! ```
//!
//! ## Placement
//!
//! [`layout::place`] models the browser's sparse auto-placement so a layout
//! can be checked without a renderer.

pub mod components;
pub mod error;
pub mod layout;
pub mod tokens;

pub use components::*;
pub use error::LayoutError;
pub use layout::{place, Breakpoint, GridLayout, Placement, Responsive, RowSizing, Span};
pub use tokens::{AvatarSize, Gradient, ProgressColor};
