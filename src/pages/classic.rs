//! Classic dashboard - fixed-height rows over a photo backdrop.

use bento_ui::{Gradient, GridLayout, Responsive, RowSizing, Span, StatEntry};
use dioxus::prelude::*;

use super::dashboard::{Background, CardBody, CardSpec, Dashboard, DashboardView};
use super::team_avatars;
use crate::components::Icon;

const BACKDROP: &str = "https://images.unsplash.com/photo-1451187580459-43490279c0fa?q=80&w=2072&auto=format&fit=crop";

/// The classic screen: 1 / 4 / 6 columns, 180px rows
pub fn dashboard() -> Dashboard {
    let single = Span::cols(Responsive::new(1).md(1).lg(1));
    let double = Span::cols(Responsive::new(1).md(2).lg(2));

    Dashboard {
        heading: "Dashboard",
        tagline: "Modern bento grid interface",
        background: Background::Image(BACKDROP),
        grid: GridLayout::new(Responsive::new(1).md(4).lg(6)).with_rows(RowSizing::Fixed(180)),
        cards: vec![
            CardSpec::new(
                "Welcome Back!",
                Icon::CheckCircle,
                Gradient::IndigoPurple,
                CardBody::Welcome {
                    summary: "You have 3 tasks pending and 2 meetings scheduled for today."
                        .to_string(),
                    progress: Vec::new(),
                    action: "View Schedule".to_string(),
                },
            )
            .with_description("Ready to start your day")
            .with_span(
                Span::cols(Responsive::new(1).md(2).lg(3)).with_rows(Responsive::new(1).md(2)),
            ),
            CardSpec::new(
                "Revenue",
                Icon::Currency,
                Gradient::GreenEmerald,
                CardBody::Stat(StatEntry::new("This month", "$24.5K").with_trend("+12%")),
            )
            .with_span(single),
            CardSpec::new(
                "Users",
                Icon::Users,
                Gradient::BlueCyan,
                CardBody::Stat(StatEntry::new("Active now", "1.2K").with_trend("+5%")),
            )
            .with_span(single),
            CardSpec::new(
                "Performance",
                Icon::PieChart,
                Gradient::PurplePink,
                CardBody::Stat(StatEntry::new("Uptime", "99.9%").with_trend("+0.1%")),
            )
            .with_span(single),
            CardSpec::new("Analytics", Icon::BarChart, Gradient::OrangeRed, CardBody::Chart)
                .with_description("Weekly overview")
                .with_span(double),
            CardSpec::new(
                "Team",
                Icon::Team,
                Gradient::TealGreen,
                CardBody::Team {
                    avatars: team_avatars(4),
                    online: 12,
                },
            )
            .with_description("Online members")
            .with_span(double),
            CardSpec::new(
                "Quick Actions",
                Icon::Bolt,
                Gradient::PinkRose,
                CardBody::Actions(
                    ["New Project", "Invite Team", "Export Data", "Settings"]
                        .map(String::from)
                        .to_vec(),
                ),
            )
            .with_span(double),
        ],
    }
}

#[component]
pub fn ClassicPage() -> Element {
    rsx! {
        DashboardView { dashboard: dashboard() }
    }
}
