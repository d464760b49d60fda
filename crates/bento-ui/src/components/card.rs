//! Bento Card Component
//!
//! The glassy tile every dashboard cell is built from:
//! - Rounded, translucent container over a gradient wash
//! - Header with optional icon badge, title and optional description
//! - Optional body filling the remaining height
//! - Soft highlight that fades in on hover

use dioxus::prelude::*;

use crate::layout::Span;
use crate::tokens::Gradient;

/// Duration of the hover fade and scale, in milliseconds
pub const HOVER_TRANSITION_MS: u32 = 500;

const CARD_BASE: &str = "bento-card group relative overflow-hidden rounded-2xl md:rounded-3xl \
     border border-gray-200/20 bg-gradient-to-br backdrop-blur-sm hover:border-gray-200/40 \
     transition-all hover:scale-[1.02] p-4 md:p-6 h-full flex flex-col";
const TITLE_CLASS: &str =
    "bento-card__title text-lg md:text-xl font-semibold text-white leading-tight";
const DESCRIPTION_CLASS: &str = "bento-card__description text-sm text-gray-300 mt-1";

/// What the card header shows next to the icon
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum CardHeading {
    Title(String),
    TitleWithDescription { title: String, description: String },
}

impl CardHeading {
    /// Empty descriptions count as absent
    pub fn new(title: impl Into<String>, description: Option<&str>) -> Self {
        let title = title.into();
        match description.filter(|d| !d.is_empty()) {
            Some(description) => CardHeading::TitleWithDescription {
                title,
                description: description.to_string(),
            },
            None => CardHeading::Title(title),
        }
    }

    pub fn title(&self) -> &str {
        match self {
            CardHeading::Title(title) | CardHeading::TitleWithDescription { title, .. } => title,
        }
    }

    pub fn description(&self) -> Option<&str> {
        match self {
            CardHeading::Title(_) => None,
            CardHeading::TitleWithDescription { description, .. } => Some(description),
        }
    }
}

/// Everything about a card that is decided before rendering
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct CardFrame {
    pub class: String,
    pub heading: CardHeading,
}

impl CardFrame {
    pub fn new(
        heading: CardHeading,
        gradient: Gradient,
        span: &Span,
        clickable: bool,
        extra_class: Option<&str>,
    ) -> Self {
        let duration = format!("duration-{HOVER_TRANSITION_MS}");
        let span_class = span.class();
        let class = [
            CARD_BASE,
            gradient.class(),
            duration.as_str(),
            if clickable { "cursor-pointer" } else { "" },
            span_class.as_str(),
            extra_class.unwrap_or(""),
        ]
        .iter()
        .filter(|part| !part.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ");

        Self { class, heading }
    }
}

/// Classes of the hover highlight layer
pub fn hover_overlay_class() -> String {
    format!(
        "bento-card__glow absolute inset-0 bg-gradient-to-br from-white/5 to-transparent \
         opacity-0 group-hover:opacity-100 transition-opacity duration-{HOVER_TRANSITION_MS} \
         pointer-events-none"
    )
}

/// Properties for the BentoCard component
#[derive(Clone, PartialEq, Props)]
pub struct BentoCardProps {
    /// Card title, always shown
    pub title: String,
    /// Secondary line under the title
    #[props(default)]
    pub description: Option<String>,
    /// Graphic shown in a badge left of the title
    #[props(default)]
    pub icon: Option<Element>,
    /// Background treatment
    #[props(default)]
    pub gradient: Gradient,
    /// Tracks occupied in the surrounding grid
    #[props(default)]
    pub span: Span,
    /// Called when the card is clicked
    #[props(default)]
    pub onclick: Option<EventHandler<()>>,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
    /// Content below the header
    #[props(default)]
    pub body: Option<Element>,
}

impl BentoCardProps {
    pub fn frame(&self) -> CardFrame {
        CardFrame::new(
            CardHeading::new(self.title.clone(), self.description.as_deref()),
            self.gradient,
            &self.span,
            self.onclick.is_some(),
            self.class.as_deref(),
        )
    }
}

/// A single bento tile
///
/// The card does not know about breakpoints; its span classes come straight
/// from the `span` prop chosen by the page.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     BentoCard {
///         title: "Analytics",
///         description: "Weekly overview",
///         gradient: Gradient::OrangeRed,
///         span: Span::cols(Responsive::new(1).sm(2).lg(2)),
///         icon: rsx! { IconGlyph { icon: Icon::BarChart } },
///         body: rsx! { MiniChart {} },
///     }
/// }
/// ```
#[component]
pub fn BentoCard(props: BentoCardProps) -> Element {
    let frame = props.frame();
    let onclick = props.onclick;

    rsx! {
        div {
            class: "{frame.class}",
            onclick: move |_| {
                if let Some(handler) = &onclick {
                    handler.call(());
                }
            },
            div { class: "bento-card__header flex items-start gap-3 mb-4",
                if let Some(icon) = props.icon {
                    div { class: "bento-card__icon p-2 rounded-xl bg-white/10 backdrop-blur-sm flex-shrink-0",
                        {icon}
                    }
                }
                div { class: "min-w-0 flex-1",
                    {heading(&frame.heading)}
                }
            }
            if let Some(body) = props.body {
                div { class: "bento-card__body flex-1",
                    {body}
                }
            }
            div { class: hover_overlay_class() }
        }
    }
}

fn heading(heading: &CardHeading) -> Element {
    match heading {
        CardHeading::Title(title) => rsx! {
            h3 { class: TITLE_CLASS, "{title}" }
        },
        CardHeading::TitleWithDescription { title, description } => rsx! {
            h3 { class: TITLE_CLASS, "{title}" }
            p { class: DESCRIPTION_CLASS, "{description}" }
        },
    }
}
