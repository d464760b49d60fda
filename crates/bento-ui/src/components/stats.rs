//! Stats Display Component
//!
//! A headline number with its label and an optional trend annotation.

use dioxus::prelude::*;

/// Direction a trend points in
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TrendDirection {
    Rising,
    Falling,
}

impl TrendDirection {
    pub fn arrow(&self) -> &'static str {
        match self {
            TrendDirection::Rising => "\u{2197}",
            TrendDirection::Falling => "\u{2198}",
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            TrendDirection::Rising => "text-green-400",
            TrendDirection::Falling => "text-red-400",
        }
    }
}

/// Caller-formatted change annotation such as `"+12%"`
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Trend(String);

impl Trend {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn text(&self) -> &str {
        &self.0
    }

    /// Falling when the text starts with a minus sign, rising otherwise
    pub fn direction(&self) -> TrendDirection {
        match self.0.trim_start().chars().next() {
            Some('-') | Some('\u{2212}') => TrendDirection::Falling,
            _ => TrendDirection::Rising,
        }
    }

    /// Arrow followed by the text, e.g. `"↗ +12%"`
    pub fn annotation(&self) -> String {
        format!("{} {}", self.direction().arrow(), self.0)
    }
}

/// One headline statistic
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct StatEntry {
    pub label: String,
    pub value: String,
    pub trend: Option<Trend>,
}

impl StatEntry {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            trend: None,
        }
    }

    /// Attaches a trend; empty text leaves the entry without one
    pub fn with_trend(mut self, trend: impl Into<String>) -> Self {
        let trend = trend.into();
        self.trend = (!trend.is_empty()).then(|| Trend::new(trend));
        self
    }
}

/// Properties for the StatsDisplay component
#[derive(Clone, PartialEq, Props)]
pub struct StatsDisplayProps {
    pub stat: StatEntry,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Centered statistic: value, label, then trend
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     StatsDisplay { stat: StatEntry::new("This month", "$24.5K").with_trend("+12%") }
/// }
/// ```
#[component]
pub fn StatsDisplay(props: StatsDisplayProps) -> Element {
    let StatEntry { label, value, trend } = props.stat;
    let trend = trend.map(|t| (t.annotation(), t.direction().class()));
    let extra = props.class.unwrap_or_default();

    rsx! {
        div { class: "bento-stat text-center {extra}",
            div { class: "bento-stat__value text-xl md:text-2xl font-bold text-white mb-1", "{value}" }
            div { class: "bento-stat__label text-xs md:text-sm text-gray-400", "{label}" }
            if let Some((annotation, tone)) = trend {
                div { class: "bento-stat__trend text-xs mt-1 {tone}", "{annotation}" }
            }
        }
    }
}
