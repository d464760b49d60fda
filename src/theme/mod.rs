//! Page styling shared by the desktop window and HTML export.

mod styles;

use styles::{GLOBAL_STYLES, TAILWIND_CDN};

/// Markup for `<head>`: viewport, Tailwind and the global sheet
pub fn document_head() -> String {
    format!(
        r#"<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<script src="{TAILWIND_CDN}"></script>
<style>{GLOBAL_STYLES}</style>"#
    )
}
