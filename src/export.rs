//! Static HTML export of a dashboard.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use dioxus::prelude::*;

use crate::pages::{ClassicPage, ResponsivePage, Screen};
use crate::theme;

fn page(screen: Screen) -> Element {
    match screen {
        Screen::Classic => rsx! { ClassicPage {} },
        Screen::Responsive => rsx! { ResponsivePage {} },
    }
}

/// Server-renders `screen` into a complete HTML document
pub fn render_page(screen: Screen) -> String {
    let mut dom = VirtualDom::new_with_props(page, screen);
    dom.rebuild_in_place();
    let body = dioxus_ssr::render(&dom);

    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<title>{title}</title>\n{head}\n</head>\n<body>\n{body}\n</body>\n</html>\n",
        title = screen.title(),
        head = theme::document_head(),
    )
}

/// Writes the rendered page to `path`, or to stdout when `path` is `-`
pub fn write_page(screen: Screen, path: &Path) -> Result<()> {
    let html = render_page(screen);

    if path == Path::new("-") {
        let mut stdout = std::io::stdout().lock();
        stdout
            .write_all(html.as_bytes())
            .context("Failed to write page to stdout")?;
        return Ok(());
    }

    std::fs::write(path, &html)
        .with_context(|| format!("Failed to write page to {}", path.display()))?;
    tracing::info!(
        "Exported '{}' dashboard ({} bytes) to {}",
        screen.name(),
        html.len(),
        path.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn responsive_page_renders_every_card() {
        let html = render_page(Screen::Responsive);
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Analytics Dashboard</title>"));
        for title in [
            "Welcome Back!",
            "Revenue",
            "Users",
            "Performance",
            "Analytics",
            "Team",
            "Quick Actions",
            "Notifications",
        ] {
            assert!(html.contains(title), "missing {title}");
        }
        assert!(html.contains("Daily Goal"));
        assert!(html.contains("width: 75%;"));
        assert!(html.contains("+2"));
    }

    #[test]
    fn classic_page_has_no_notifications() {
        let html = render_page(Screen::Classic);
        assert!(html.contains("auto-rows-[180px]"));
        assert!(html.contains("12 members online"));
        assert!(!html.contains("Notifications"));
        assert!(!html.contains("Daily Goal"));
    }

    #[test]
    fn write_page_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dash.html");
        write_page(Screen::Classic, &path).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, render_page(Screen::Classic));
    }

    #[test]
    fn write_page_reports_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("dash.html");
        let err = write_page(Screen::Responsive, &path).unwrap_err();
        assert!(err.to_string().contains("Failed to write page"));
    }
}
