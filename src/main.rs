#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use clap::Parser;
use dioxus::desktop::tao::window::Fullscreen;
use dioxus::desktop::{Config, WindowBuilder};

/// Mosjid Al Fahad - community mosque desktop app
#[derive(Parser, Debug)]
#[command(name = "alfahad-desktop")]
#[command(about = "Mosjid Al Fahad - prayer times, services, and events")]
struct Args {
    /// Borderless fullscreen for lobby display boards
    #[arg(short, long)]
    kiosk: bool,

    /// Window width in logical pixels
    #[arg(long, default_value_t = 1280.0)]
    width: f64,

    /// Window height in logical pixels
    #[arg(long, default_value_t = 860.0)]
    height: f64,
}

fn main() {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    tracing::info!(
        "Starting Mosjid Al Fahad ({}x{}{})",
        args.width,
        args.height,
        if args.kiosk { ", kiosk" } else { "" }
    );

    // Configure desktop window
    let mut window = WindowBuilder::new()
        .with_title("Mosjid Al Fahad")
        .with_inner_size(dioxus::desktop::LogicalSize::new(args.width, args.height))
        .with_resizable(true);
    if args.kiosk {
        window = window.with_fullscreen(Some(Fullscreen::Borderless(None)));
    }

    let config = Config::new().with_window(window);

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
