//! Heroicons-style glyphs used in card badges.

use dioxus::prelude::*;

/// One `<path>` of a 20x20 glyph
struct Stroke {
    d: &'static str,
    even_odd: bool,
}

const fn solid(d: &'static str) -> Stroke {
    Stroke { d, even_odd: false }
}

const fn cutout(d: &'static str) -> Stroke {
    Stroke { d, even_odd: true }
}

/// Glyphs available to dashboard cards
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Icon {
    CheckCircle,
    Currency,
    Users,
    PieChart,
    BarChart,
    Team,
    Bolt,
    Bell,
}

const CHECK_CIRCLE: &[Stroke] = &[solid("M9 12l2 2 4-4m6 2a9 9 0 11-18 0 9 9 0 0118 0z")];
const CURRENCY: &[Stroke] = &[
    solid("M8.433 7.418c.155-.103.346-.196.567-.267v1.698a2.305 2.305 0 01-.567-.267C8.07 8.34 8 8.114 8 8c0-.114.07-.34.433-.582zM11 12.849v-1.698c.22.071.412.164.567.267.364.243.433.468.433.582 0 .114-.07.34-.433.582a2.305 2.305 0 01-.567.267z"),
    cutout("M10 18a8 8 0 100-16 8 8 0 000 16zm1-13a1 1 0 10-2 0v.092a4.535 4.535 0 00-1.676.662C6.602 6.234 6 7.009 6 8c0 .99.602 1.765 1.324 2.246.48.32 1.054.545 1.676.662v1.941c-.391-.127-.68-.317-.843-.504a1 1 0 10-1.51 1.31c.562.649 1.413 1.076 2.353 1.253V15a1 1 0 102 0v-.092a4.535 4.535 0 001.676-.662C13.398 13.766 14 12.991 14 12c0-.99-.602-1.765-1.324-2.246A4.535 4.535 0 0011 9.092V7.151c.391.127.68.317.843.504a1 1 0 101.511-1.31c-.563-.649-1.413-1.076-2.354-1.253V5z"),
];
const USERS: &[Stroke] = &[solid("M9 6a3 3 0 11-6 0 3 3 0 016 0zM17 6a3 3 0 11-6 0 3 3 0 016 0zM12.93 17c.046-.327.07-.66.07-1a6.97 6.97 0 00-1.5-4.33A5 5 0 0119 16v1h-6.07zM6 11a5 5 0 015 5v1H1v-1a5 5 0 015-5z")];
const PIE_CHART: &[Stroke] = &[
    solid("M2 10a8 8 0 018-8v8h8a8 8 0 11-16 0z"),
    solid("M12 2.252A8.014 8.014 0 0117.748 8H12V2.252z"),
];
const BAR_CHART: &[Stroke] = &[solid("M2 11a1 1 0 011-1h2a1 1 0 011 1v5a1 1 0 01-1 1H3a1 1 0 01-1-1v-5zM8 7a1 1 0 011-1h2a1 1 0 011 1v9a1 1 0 01-1 1H9a1 1 0 01-1-1V7zM14 4a1 1 0 011-1h2a1 1 0 011 1v12a1 1 0 01-1 1h-2a1 1 0 01-1-1V4z")];
const TEAM: &[Stroke] = &[solid("M13 6a3 3 0 11-6 0 3 3 0 016 0zM18 8a2 2 0 11-4 0 2 2 0 014 0zM14 15a4 4 0 00-8 0v3h8v-3z")];
const BOLT: &[Stroke] = &[cutout("M11.3 1.046A1 1 0 0112 2v5h4a1 1 0 01.82 1.573l-7 10A1 1 0 018 18v-5H4a1 1 0 01-.82-1.573l7-10a1 1 0 011.12-.38z")];
const BELL: &[Stroke] = &[solid("M10 2a6 6 0 00-6 6v3.586l-.707.707A1 1 0 004 14h12a1 1 0 00.707-1.707L16 11.586V8a6 6 0 00-6-6zM10 18a3 3 0 01-3-3h6a3 3 0 01-3 3z")];

impl Icon {
    fn strokes(&self) -> &'static [Stroke] {
        match self {
            Icon::CheckCircle => CHECK_CIRCLE,
            Icon::Currency => CURRENCY,
            Icon::Users => USERS,
            Icon::PieChart => PIE_CHART,
            Icon::BarChart => BAR_CHART,
            Icon::Team => TEAM,
            Icon::Bolt => BOLT,
            Icon::Bell => BELL,
        }
    }
}

/// Solid 20x20 glyph sized for a card badge
#[component]
pub fn IconGlyph(icon: Icon) -> Element {
    rsx! {
        svg {
            class: "w-5 h-5 md:w-6 md:h-6 text-white",
            fill: "currentColor",
            view_box: "0 0 20 20",
            for stroke in icon.strokes() {
                if stroke.even_odd {
                    path { d: stroke.d, fill_rule: "evenodd", clip_rule: "evenodd" }
                } else {
                    path { d: stroke.d }
                }
            }
        }
    }
}
