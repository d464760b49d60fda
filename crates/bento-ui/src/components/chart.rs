//! Mini Chart Component
//!
//! Decorative bar strip. The bar heights are fixed; the component takes no
//! data series.

use dioxus::prelude::*;

/// Relative bar heights in percent, left to right
pub const PLACEHOLDER_BARS: [u8; 9] = [40, 60, 35, 80, 45, 70, 55, 90, 65];

/// Nine gradient bars aligned to the bottom edge
#[component]
pub fn MiniChart() -> Element {
    rsx! {
        div { class: "bento-chart h-16 md:h-20 flex items-end justify-between gap-1",
            for (i, height) in PLACEHOLDER_BARS.iter().enumerate() {
                div {
                    key: "{i}",
                    class: "bento-chart__bar bg-gradient-to-t from-blue-400 to-purple-400 rounded-sm flex-1 min-w-[2px]",
                    style: "height: {height}%;",
                }
            }
        }
    }
}
