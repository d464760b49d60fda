//! Global CSS for the dashboards.
//!
//! Utility classes come from Tailwind; this sheet only covers what the
//! utilities can't express (font stack, scrollbars, reduced motion).

/// Tailwind play CDN, compiles utility classes in the page at load
pub const TAILWIND_CDN: &str = "https://cdn.tailwindcss.com";

pub const GLOBAL_STYLES: &str = r#"
/* === Base === */
*, *::before, *::after {
  box-sizing: border-box;
}

html, body {
  margin: 0;
  padding: 0;
  min-height: 100%;
  background: #0f0f1a;
  font-family: ui-sans-serif, system-ui, -apple-system, 'Segoe UI', Roboto, sans-serif;
  -webkit-font-smoothing: antialiased;
}

/* === Page === */
.bento-page {
  background-attachment: fixed;
}

/* === Cards === */
.bento-card {
  box-shadow: 0 8px 32px rgba(0, 0, 0, 0.25);
  will-change: transform;
}

.bento-card:focus-visible {
  outline: 2px solid rgba(255, 255, 255, 0.6);
  outline-offset: 2px;
}

.bento-card__body {
  min-height: 0;
}

/* === Navigation (desktop shell) === */
.bento-nav {
  position: fixed;
  top: 1rem;
  right: 1rem;
  z-index: 10;
  display: flex;
  gap: 0.5rem;
}

.bento-nav a {
  padding: 0.375rem 0.75rem;
  border-radius: 9999px;
  background: rgba(255, 255, 255, 0.1);
  border: 1px solid rgba(255, 255, 255, 0.2);
  color: #fff;
  font-size: 0.75rem;
  text-decoration: none;
  backdrop-filter: blur(8px);
}

.bento-nav a:hover {
  background: rgba(255, 255, 255, 0.2);
}

/* === Scrollbars === */
::-webkit-scrollbar {
  width: 8px;
  height: 8px;
}

::-webkit-scrollbar-track {
  background: transparent;
}

::-webkit-scrollbar-thumb {
  background: rgba(255, 255, 255, 0.2);
  border-radius: 4px;
}

/* === Reduced motion === */
@media (prefers-reduced-motion: reduce) {
  .bento-card,
  .bento-card * {
    transition: none !important;
    transform: none !important;
  }
}
"#;
