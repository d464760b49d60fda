//! Bento Grid Container
//!
//! Arranges cards in document order on the track template of a
//! [`GridLayout`]. Placement is left to the host's grid engine.

use dioxus::prelude::*;

use crate::layout::GridLayout;

/// Properties for the BentoGrid component
#[derive(Clone, PartialEq, Props)]
pub struct BentoGridProps {
    /// Column tracks, row sizing and gap
    #[props(default)]
    pub layout: GridLayout,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
    /// The cards
    pub children: Element,
}

impl BentoGridProps {
    pub fn container_class(&self) -> String {
        match self.class.as_deref() {
            Some(extra) if !extra.is_empty() => format!("bento-grid grid {} {}", self.layout.class(), extra),
            _ => format!("bento-grid grid {}", self.layout.class()),
        }
    }
}

/// Grid container for bento cards
///
/// # Example
///
/// ```rust,ignore
/// let layout = GridLayout::new(Responsive::new(1).md(4).lg(6))
///     .with_rows(RowSizing::Fixed(180));
///
/// rsx! {
///     BentoGrid { layout,
///         BentoCard { title: "Revenue" }
///         BentoCard { title: "Users" }
///     }
/// }
/// ```
#[component]
pub fn BentoGrid(props: BentoGridProps) -> Element {
    let class = props.container_class();

    rsx! {
        div { class: "{class}",
            {props.children}
        }
    }
}
