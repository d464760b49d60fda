//! Progress Bar Component
//!
//! Labelled horizontal bar whose fill width is the value in percent.

use std::fmt;

use dioxus::prelude::*;

use crate::error::{LayoutError, Result};
use crate::tokens::ProgressColor;

/// A whole percentage in `0..=100`
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Default)]
pub struct Percent(u8);

impl Percent {
    pub const ZERO: Percent = Percent(0);
    pub const FULL: Percent = Percent(100);

    /// Fails for values above 100
    pub fn new(value: u16) -> Result<Self> {
        if value > 100 {
            return Err(LayoutError::PercentOutOfRange(value));
        }
        Ok(Self(value as u8))
    }

    /// Clamps values above 100
    pub fn saturating(value: u16) -> Self {
        Self(value.min(100) as u8)
    }

    pub fn get(&self) -> u8 {
        self.0
    }

    /// CSS width of the filled portion, e.g. `"75%"`
    pub fn width(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

impl TryFrom<u16> for Percent {
    type Error = LayoutError;

    fn try_from(value: u16) -> Result<Self> {
        Percent::new(value)
    }
}

/// One labelled progress value
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ProgressEntry {
    pub label: String,
    pub value: Percent,
    pub color: ProgressColor,
}

impl ProgressEntry {
    pub fn new(label: impl Into<String>, value: Percent) -> Self {
        Self {
            label: label.into(),
            value,
            color: ProgressColor::default(),
        }
    }

    pub fn with_color(mut self, color: ProgressColor) -> Self {
        self.color = color;
        self
    }
}

/// Properties for the ProgressBar component
#[derive(Clone, PartialEq, Props)]
pub struct ProgressBarProps {
    pub entry: ProgressEntry,
}

/// Label and percentage above a rounded track
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     ProgressBar {
///         entry: ProgressEntry::new("Daily Goal", Percent::new(75)?).with_color(ProgressColor::Green)
///     }
/// }
/// ```
#[component]
pub fn ProgressBar(props: ProgressBarProps) -> Element {
    let ProgressEntry { label, value, color } = props.entry;
    let width = value.width();
    let fill = color.class();

    rsx! {
        div { class: "bento-progress mb-3 last:mb-0",
            div { class: "flex justify-between text-sm mb-1",
                span { class: "bento-progress__label text-gray-300", "{label}" }
                span { class: "bento-progress__value text-white font-medium", "{value}" }
            }
            div { class: "bento-progress__track w-full bg-gray-700/50 rounded-full h-2",
                div {
                    class: "bento-progress__fill {fill} h-2 rounded-full transition-all duration-1000",
                    style: "width: {width};",
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_bounds() {
        assert_eq!(Percent::new(0).map(|p| p.get()), Ok(0));
        assert_eq!(Percent::new(100).map(|p| p.get()), Ok(100));
        assert_eq!(Percent::new(101), Err(LayoutError::PercentOutOfRange(101)));
        assert_eq!(Percent::try_from(250u16), Err(LayoutError::PercentOutOfRange(250)));
    }

    #[test]
    fn saturating_clamps() {
        assert_eq!(Percent::saturating(140), Percent::FULL);
        assert_eq!(Percent::saturating(42).get(), 42);
    }

    #[test]
    fn width_is_proportional() {
        assert_eq!(Percent::saturating(75).width(), "75%");
        assert_eq!(Percent::ZERO.width(), "0%");
        assert_eq!(Percent::FULL.width(), "100%");
    }

    #[test]
    fn entry_defaults_to_blue() {
        let entry = ProgressEntry::new("Weekly Target", Percent::saturating(60));
        assert_eq!(entry.color, ProgressColor::Blue);
        assert_eq!(
            entry.with_color(ProgressColor::Purple).color,
            ProgressColor::Purple
        );
    }
}
