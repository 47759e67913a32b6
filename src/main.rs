//! Relay Desktop Client
//!
//! Desktop client for Relay accounts. Built with the iced GUI framework;
//! currently ships the sign-in flow and a signed-in landing screen.

mod app;
mod auth;
mod config;
mod form;
mod messages;
mod screens;
mod session;
mod state;
mod validate;

use iced::{Application, Settings, Size};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> iced::Result {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "relay_desktop=info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Relay Desktop v{}", env!("CARGO_PKG_VERSION"));

    // Get data directory
    let data_dir = dirs::data_local_dir()
        .unwrap_or_else(|| std::path::PathBuf::from("."))
        .join("relay");

    std::fs::create_dir_all(&data_dir).ok();

    // Load config and any previously persisted session
    let config = config::AppConfig::load(&data_dir).unwrap_or_default();
    let session = session::load(&data_dir);

    app::Relay::run(Settings {
        window: iced::window::Settings {
            size: Size::new(900.0, 700.0),
            min_size: Some(Size::new(500.0, 500.0)),
            position: iced::window::Position::Centered,
            ..Default::default()
        },
        default_font: iced::Font::DEFAULT,
        default_text_size: iced::Pixels(config.ui.font_size),
        antialiasing: true,
        flags: app::Flags {
            data_dir,
            config,
            session,
        },
        ..Default::default()
    })
}
