//! Responsive analytics dashboard - content-sized rows, four breakpoints.

use bento_ui::{
    Gradient, GridLayout, Percent, ProgressColor, ProgressEntry, Responsive, RowSizing, Span,
    StatEntry,
};
use dioxus::prelude::*;

use super::dashboard::{Background, CardBody, CardSpec, Dashboard, DashboardView};
use super::team_avatars;
use crate::components::{Icon, Notification};

/// The responsive screen: 1 / 2 / 4 / 6 columns, rows at least 120px
pub fn dashboard() -> Dashboard {
    let stat = Span::cols(Responsive::new(1).lg(1));
    let wide = Span::cols(Responsive::new(1).sm(2).lg(2));
    let avatars = team_avatars(6);
    let online = avatars.len();

    Dashboard {
        heading: "Analytics Dashboard",
        tagline: "Responsive bento grid interface",
        background: Background::Gradient("linear-gradient(135deg, #667eea 0%, #764ba2 100%)"),
        grid: GridLayout::new(Responsive::new(1).sm(2).lg(4).xl(6))
            .with_rows(RowSizing::AtLeast(120))
            .with_gap(Responsive::new(3).md(4)),
        cards: vec![
            CardSpec::new(
                "Welcome Back!",
                Icon::CheckCircle,
                Gradient::IndigoPurple,
                CardBody::Welcome {
                    summary: "You have 3 tasks pending and 2 meetings scheduled for today."
                        .to_string(),
                    progress: vec![
                        ProgressEntry::new("Daily Goal", Percent::saturating(75))
                            .with_color(ProgressColor::Green),
                        ProgressEntry::new("Weekly Target", Percent::saturating(60))
                            .with_color(ProgressColor::Blue),
                        ProgressEntry::new("Monthly Objective", Percent::saturating(85))
                            .with_color(ProgressColor::Purple),
                    ],
                    action: "View Schedule".to_string(),
                },
            )
            .with_description("Ready to start your day")
            .with_span(
                Span::cols(Responsive::new(1).sm(2).lg(3)).with_rows(Responsive::new(1).lg(2)),
            ),
            CardSpec::new(
                "Revenue",
                Icon::Currency,
                Gradient::GreenEmerald,
                CardBody::Stat(StatEntry::new("This month", "$24.5K").with_trend("+12%")),
            )
            .with_span(stat),
            CardSpec::new(
                "Users",
                Icon::Users,
                Gradient::BlueCyan,
                CardBody::Stat(StatEntry::new("Active now", "1.2K").with_trend("+5%")),
            )
            .with_span(stat),
            CardSpec::new(
                "Performance",
                Icon::PieChart,
                Gradient::PurplePink,
                CardBody::Stat(StatEntry::new("Uptime", "99.9%").with_trend("+0.1%")),
            )
            .with_span(stat),
            CardSpec::new("Analytics", Icon::BarChart, Gradient::OrangeRed, CardBody::Chart)
                .with_description("Weekly overview")
                .with_span(wide),
            CardSpec::new(
                "Team",
                Icon::Team,
                Gradient::TealGreen,
                CardBody::Team { avatars, online },
            )
            .with_description("Online members")
            .with_span(wide),
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
            .with_span(wide),
            CardSpec::new(
                "Notifications",
                Icon::Bell,
                Gradient::VioletPurple,
                CardBody::Notifications(vec![
                    Notification::new("New message received", "2m ago"),
                    Notification::new("Task completed", "5m ago"),
                    Notification::new("Meeting reminder", "10m ago"),
                ]),
            )
            .with_span(Span::cols(Responsive::new(1).lg(2))),
        ],
    }
}

#[component]
pub fn ResponsivePage() -> Element {
    rsx! {
        DashboardView { dashboard: dashboard() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bento_ui::Breakpoint;

    fn cells(bp: Breakpoint) -> Vec<(usize, usize)> {
        dashboard()
            .placements(bp)
            .cards
            .iter()
            .map(|c| (c.placement.row, c.placement.col))
            .collect()
    }

    #[test]
    fn responsive_grid_classes() {
        assert_eq!(
            dashboard().grid.class(),
            "gap-3 md:gap-4 grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 xl:grid-cols-6 auto-rows-[minmax(120px,auto)]"
        );
    }

    #[test]
    fn team_counts_every_avatar() {
        let board = dashboard();
        match &board.cards[5].body {
            CardBody::Team { avatars, online } => {
                assert_eq!(avatars.len(), 6);
                assert_eq!(*online, 6);
            }
            other => panic!("expected team card, got {other:?}"),
        }
    }

    #[test]
    fn small_screens_pair_stats() {
        // Welcome fills the first row, stats pair up, wide cards take full rows
        assert_eq!(
            cells(Breakpoint::Sm),
            vec![(0, 0), (1, 0), (1, 1), (2, 0), (3, 0), (4, 0), (5, 0), (6, 0)]
        );
    }

    #[test]
    fn large_screens_wrap_beside_welcome() {
        // Users slots in under Revenue, Performance starts the row below Welcome
        assert_eq!(
            cells(Breakpoint::Lg),
            vec![(0, 0), (0, 3), (1, 3), (2, 0), (2, 1), (3, 0), (3, 2), (4, 0)]
        );
    }

    #[test]
    fn extra_large_screens() {
        assert_eq!(
            cells(Breakpoint::Xl),
            vec![(0, 0), (0, 3), (0, 4), (0, 5), (1, 3), (2, 0), (2, 2), (2, 4)]
        );
    }
}
