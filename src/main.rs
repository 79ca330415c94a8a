//! Expert Portal: desktop client for the expert search backend
//!
//! Usage:
//!   expert-portal          - Open the search window
//!   expert-portal status   - Check whether the backend is reachable
//!   expert-portal help     - Show help

mod app;
mod ui;
mod backend;
mod native;
mod config;

use app::Portal;
use backend::api::BackendClient;
use config::Config;
use iced::{window, Size};
use std::env;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> iced::Result {
    // Parse CLI arguments
    let args: Vec<String> = env::args().collect();

    if args.len() > 1 {
        return handle_cli_command(&args[1]);
    }

    // No args = open the search window
    launch()
}

fn handle_cli_command(cmd: &str) -> iced::Result {
    // Initialize minimal logging for CLI
    let _ = tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();

    match cmd {
        "status" => {
            let config = Config::from_env();
            let backend = BackendClient::new(&config.origin);
            let rt = tokio::runtime::Runtime::new().expect("Failed to create tokio runtime");

            rt.block_on(async {
                match backend.health().await {
                    Ok(health) => println!("Backend at {} is {}", config.origin, health.status),
                    Err(e) => println!("Backend at {} is unreachable: {}", config.origin, e),
                }
            });
            Ok(())
        }
        "help" | "--help" | "-h" => {
            println!("Expert Portal - search client for the expert database\n");
            println!("Usage: expert-portal [command]\n");
            println!("Commands:");
            println!("  (none)        Open the search window");
            println!("  status        Check whether the backend is reachable");
            println!("  help          Show this help message");
            println!(
                "\nThe backend origin comes from EXPERT_PORTAL_ORIGIN (default {}).",
                config::DEFAULT_ORIGIN
            );
            Ok(())
        }
        _ => {
            eprintln!("Unknown command: {}", cmd);
            eprintln!("Run 'expert-portal help' for usage");
            Ok(())
        }
    }
}

fn launch() -> iced::Result {
    // Initialize logging (use try_init to avoid panic if already initialized by CLI)
    let _ = tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();

    tracing::info!("Starting Expert Portal...");

    iced::application("Expert Portal", Portal::update, Portal::view)
        .theme(Portal::theme)
        .window(window::Settings {
            size: Size::new(960.0, 720.0),
            position: window::Position::Centered,
            ..Default::default()
        })
        .antialiasing(true)
        .run_with(Portal::boot)
}
