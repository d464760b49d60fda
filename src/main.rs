#![allow(non_snake_case)]

#[cfg(feature = "desktop")]
mod app;
mod components;
mod export;
mod pages;
mod theme;

use std::path::PathBuf;

use anyhow::{Context, Result};
use bento_ui::Breakpoint;
use clap::Parser;

use crate::pages::Screen;

/// Bento Dashboard - glassy card grids for the desktop and the browser
#[derive(Parser, Debug)]
#[command(name = "bento-desktop")]
#[command(version, about = "Bento grid dashboards - desktop window or static HTML export")]
struct Args {
    /// Dashboard to show
    #[arg(short, long, value_enum, default_value_t = Screen::Responsive)]
    screen: Screen,

    /// Write the dashboard as a standalone HTML page ("-" for stdout)
    #[arg(short, long)]
    export: Option<PathBuf>,

    /// Print where every card lands in the grid, as JSON
    #[arg(short, long)]
    placements: bool,

    /// Viewport width in pixels used by --placements
    #[arg(short, long, default_value_t = 1280)]
    width: u32,

    /// Breakpoint used by --placements (takes precedence over --width)
    #[arg(short, long)]
    breakpoint: Option<Breakpoint>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    setup_logging(args.verbose);

    let dashboard = args.screen.dashboard();
    dashboard
        .grid
        .validate()
        .with_context(|| format!("Invalid grid for the {} dashboard", args.screen.name()))?;

    if args.placements {
        let bp = args
            .breakpoint
            .unwrap_or_else(|| Breakpoint::for_width(args.width));
        tracing::info!("Computing placements for '{}' at {}", args.screen.name(), bp);
        let report = dashboard.placements(bp);
        println!("{}", serde_json::to_string_pretty(&report)?);
    }

    if let Some(path) = &args.export {
        export::write_page(args.screen, path)?;
    }

    if args.placements || args.export.is_some() {
        return Ok(());
    }

    launch(args.screen)
}

#[cfg(feature = "desktop")]
fn launch(screen: Screen) -> Result<()> {
    use dioxus::desktop::{Config, LogicalSize, WindowBuilder};

    app::set_start_screen(screen);
    tracing::info!("Opening '{}' dashboard", screen.name());

    let config = Config::new()
        .with_custom_head(theme::document_head())
        .with_window(
            WindowBuilder::new()
                .with_title(format!("Bento Dashboard - {}", screen.title()))
                .with_inner_size(LogicalSize::new(1200.0, 900.0))
                .with_resizable(true),
        );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
    Ok(())
}

#[cfg(not(feature = "desktop"))]
fn launch(_screen: Screen) -> Result<()> {
    anyhow::bail!(
        "built without the `desktop` feature; use --export or --placements, \
         or rebuild with `--features desktop` to open a window"
    )
}
