use std::sync::OnceLock;

use dioxus::prelude::*;

use crate::pages::{ClassicPage, ResponsivePage, Screen};

static START_SCREEN: OnceLock<Screen> = OnceLock::new();

/// Records the screen the window opens on (first call wins)
pub fn set_start_screen(screen: Screen) {
    if START_SCREEN.set(screen).is_err() {
        tracing::warn!("Start screen already set, ignoring '{}'", screen.name());
    }
}

fn start_screen() -> Screen {
    START_SCREEN.get().copied().unwrap_or_default()
}

/// Application routes.
///
/// - `/` - Responsive analytics dashboard
/// - `/classic` - Classic dashboard with fixed rows
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[layout(Shell)]
    #[route("/")]
    ResponsivePage {},
    #[route("/classic")]
    ClassicPage {},
}

/// Root application component.
///
/// Styles arrive through the window's custom head, so this only mounts the router.
#[component]
pub fn App() -> Element {
    rsx! {
        Router::<Route> {}
    }
}

/// Switcher between the two dashboards, around the active page
#[component]
fn Shell() -> Element {
    let navigator = use_navigator();
    let route: Route = use_route();

    use_effect(move || {
        if start_screen() == Screen::Classic {
            tracing::debug!("Opening on the classic dashboard");
            navigator.replace(Route::ClassicPage {});
        }
    });

    let links = [
        (Route::ResponsivePage {}, Screen::Responsive),
        (Route::ClassicPage {}, Screen::Classic),
    ]
    .map(|(target, screen)| (target, screen.name(), screen.title()));

    rsx! {
        nav { class: "bento-nav",
            for (target, name, title) in links {
                Link {
                    key: "{name}",
                    class: if target == route { "active" } else { "" },
                    to: target.clone(),
                    "{title}"
                }
            }
        }
        Outlet::<Route> {}
    }
}
