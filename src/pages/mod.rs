//! Dashboard screens.

mod classic;
mod dashboard;
mod responsive;

pub use classic::ClassicPage;
pub use dashboard::Dashboard;
pub use responsive::ResponsivePage;

use clap::ValueEnum;

const TEAM_FACES: [&str; 6] = [
    "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=40&h=40&fit=crop&crop=face",
    "https://images.unsplash.com/photo-1494790108755-2616b812c7d4?w=40&h=40&fit=crop&crop=face",
    "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=40&h=40&fit=crop&crop=face",
    "https://images.unsplash.com/photo-1517841905240-472988babdf9?w=40&h=40&fit=crop&crop=face",
    "https://images.unsplash.com/photo-1519345182560-3f2917c472ef?w=40&h=40&fit=crop&crop=face",
    "https://images.unsplash.com/photo-1539571696357-5a69c17a67c6?w=40&h=40&fit=crop&crop=face",
];

/// The first `n` team portraits (at most six)
pub fn team_avatars(n: usize) -> Vec<String> {
    TEAM_FACES.iter().take(n).map(|url| url.to_string()).collect()
}

/// Which dashboard to show
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, ValueEnum)]
pub enum Screen {
    /// Fixed 180px rows over a photo backdrop
    Classic,
    /// Content-sized rows over a purple gradient
    #[default]
    Responsive,
}

impl Screen {
    pub fn dashboard(&self) -> Dashboard {
        match self {
            Screen::Classic => classic::dashboard(),
            Screen::Responsive => responsive::dashboard(),
        }
    }

    /// Command-line name
    pub fn name(&self) -> &'static str {
        match self {
            Screen::Classic => "classic",
            Screen::Responsive => "responsive",
        }
    }

    /// Page heading, also used as the window title
    pub fn title(&self) -> &'static str {
        self.dashboard().heading
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn team_avatars_are_capped() {
        assert_eq!(team_avatars(4).len(), 4);
        assert_eq!(team_avatars(10).len(), 6);
        assert!(team_avatars(0).is_empty());
    }

    #[test]
    fn screen_titles() {
        assert_eq!(Screen::Classic.title(), "Dashboard");
        assert_eq!(Screen::Responsive.title(), "Analytics Dashboard");
        assert_eq!(Screen::default(), Screen::Responsive);
    }

    #[test]
    fn every_screen_has_a_valid_grid() {
        for screen in Screen::value_variants() {
            assert!(screen.dashboard().grid.validate().is_ok(), "{}", screen.name());
        }
    }
}
