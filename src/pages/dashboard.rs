//! Dashboard description and renderer.
//!
//! A screen is plain data: heading copy, a background, a grid template and
//! one [`CardSpec`] per tile. [`DashboardView`] turns that data into a bento
//! grid; [`Dashboard::placements`] reports where the tiles land.

use bento_ui::{
    ActionButton, ActionGrid, AvatarGroup, BentoCard, BentoGrid, Breakpoint, Gradient, GridLayout,
    MiniChart, Placement, ProgressBar, ProgressEntry, Span, StatEntry, StatsDisplay,
};
use dioxus::prelude::*;
use serde::Serialize;

use crate::components::{Icon, IconGlyph, Notification, NotificationList};

/// Page backdrop behind the grid
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Background {
    /// Full-bleed photo, centered and cropped
    Image(&'static str),
    /// CSS gradient
    Gradient(&'static str),
}

impl Background {
    pub fn style(&self) -> String {
        match self {
            Background::Image(url) => {
                format!("background: url(\"{url}\") center center; background-size: cover;")
            }
            Background::Gradient(gradient) => format!("background: {gradient};"),
        }
    }
}

/// Content inside one tile
#[derive(Clone, PartialEq, Debug)]
pub enum CardBody {
    /// Greeting with optional progress bars and a call to action
    Welcome {
        summary: String,
        progress: Vec<ProgressEntry>,
        action: String,
    },
    Stat(StatEntry),
    Chart,
    /// Avatar row and an online count
    Team { avatars: Vec<String>, online: usize },
    Actions(Vec<String>),
    Notifications(Vec<Notification>),
}

/// One tile of a dashboard
#[derive(Clone, PartialEq, Debug)]
pub struct CardSpec {
    pub title: String,
    pub description: Option<String>,
    pub icon: Icon,
    pub gradient: Gradient,
    pub span: Span,
    pub body: CardBody,
}

impl CardSpec {
    pub fn new(title: impl Into<String>, icon: Icon, gradient: Gradient, body: CardBody) -> Self {
        Self {
            title: title.into(),
            description: None,
            icon,
            gradient,
            span: Span::default(),
            body,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }
}

/// A complete screen
#[derive(Clone, PartialEq, Debug)]
pub struct Dashboard {
    pub heading: &'static str,
    pub tagline: &'static str,
    pub background: Background,
    pub grid: GridLayout,
    pub cards: Vec<CardSpec>,
}

/// Placement of one titled card
#[derive(Serialize, Debug)]
pub struct CardPlacement {
    pub title: String,
    #[serde(flatten)]
    pub placement: Placement,
}

/// Result of laying a dashboard out at one breakpoint
#[derive(Serialize, Debug)]
pub struct PlacementReport {
    pub heading: &'static str,
    pub breakpoint: Breakpoint,
    pub columns: u8,
    pub cards: Vec<CardPlacement>,
}

impl Dashboard {
    pub fn spans(&self) -> Vec<Span> {
        self.cards.iter().map(|card| card.span).collect()
    }

    pub fn placements(&self, bp: Breakpoint) -> PlacementReport {
        let cards = self
            .grid
            .place(&self.spans(), bp)
            .into_iter()
            .zip(&self.cards)
            .map(|(placement, card)| CardPlacement {
                title: card.title.clone(),
                placement,
            })
            .collect();

        PlacementReport {
            heading: self.heading,
            breakpoint: bp,
            columns: self.grid.columns_at(bp),
            cards,
        }
    }
}

/// Full-page rendering of a dashboard
#[component]
pub fn DashboardView(dashboard: Dashboard) -> Element {
    let background = dashboard.background.style();

    rsx! {
        main {
            class: "bento-page min-h-screen p-4 md:p-8 flex items-center justify-center",
            style: "{background}",
            div { class: "max-w-7xl w-full",
                header { class: "mb-6 md:mb-8 text-center",
                    h1 { class: "text-3xl md:text-4xl font-bold text-white mb-2", "{dashboard.heading}" }
                    p { class: "text-gray-200 text-sm md:text-base", "{dashboard.tagline}" }
                }
                BentoGrid { layout: dashboard.grid,
                    for card in dashboard.cards.iter() {
                        CardView { key: "{card.title}", card: card.clone() }
                    }
                }
            }
        }
    }
}

#[component]
fn CardView(card: CardSpec) -> Element {
    let title = card.title.clone();

    rsx! {
        BentoCard {
            title: card.title,
            description: card.description,
            gradient: card.gradient,
            span: card.span,
            icon: rsx! { IconGlyph { icon: card.icon } },
            onclick: move |_| tracing::debug!(card = %title, "card clicked"),
            body: card_body(card.body),
        }
    }
}

fn card_body(body: CardBody) -> Element {
    match body {
        CardBody::Welcome {
            summary,
            progress,
            action,
        } => rsx! {
            div { class: "space-y-4",
                p { class: "text-gray-300 text-sm md:text-base", "{summary}" }
                if !progress.is_empty() {
                    div { class: "space-y-3",
                        for entry in progress.iter() {
                            ProgressBar { key: "{entry.label}", entry: entry.clone() }
                        }
                    }
                }
                ActionButton {
                    class: "w-full sm:w-auto",
                    onclick: move |_| tracing::info!("schedule requested"),
                    "{action}"
                }
            }
        },
        CardBody::Stat(stat) => rsx! {
            StatsDisplay { stat }
        },
        CardBody::Chart => rsx! {
            MiniChart {}
        },
        CardBody::Team { avatars, online } => rsx! {
            div { class: "space-y-3",
                AvatarGroup { avatars }
                p { class: "text-sm text-gray-300", "{online} members online" }
            }
        },
        CardBody::Actions(labels) => rsx! {
            ActionGrid {
                for label in labels.iter() {
                    ActionButton {
                        key: "{label}",
                        onclick: {
                            let label = label.clone();
                            move |_| tracing::info!(action = %label, "quick action")
                        },
                        "{label}"
                    }
                }
            }
        },
        CardBody::Notifications(items) => rsx! {
            NotificationList { items }
        },
    }
}
