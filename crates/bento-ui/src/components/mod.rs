//! Bento components
//!
//! Every component is a pure function of its props. Hover and press states
//! are left to the host through `hover:` / `group-hover:` classes.

mod action;
mod avatar;
mod card;
mod chart;
mod grid;
mod progress;
mod stats;

pub use action::*;
pub use avatar::*;
pub use card::*;
pub use chart::*;
pub use grid::*;
pub use progress::*;
pub use stats::*;
