#![allow(non_snake_case)]

mod app;
mod components;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use kindclub_core::BackendConfig;

/// Global backend configuration, set from command line
static CONFIG: OnceLock<BackendConfig> = OnceLock::new();

/// Get the backend configuration (set from command line or environment)
pub fn backend_config() -> BackendConfig {
    CONFIG
        .get()
        .cloned()
        .expect("backend config set before launch")
}

/// KindClub marketing site
#[derive(Parser, Debug)]
#[command(name = "kindclub-site")]
#[command(about = "KindClub marketing site")]
struct Args {
    /// Backend base URL (overrides KINDCLUB_BACKEND_URL)
    #[arg(long)]
    backend_url: Option<String>,

    /// Backend public API key (overrides KINDCLUB_ANON_KEY)
    #[arg(long)]
    anon_key: Option<String>,
}

fn main() {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    let data_dir = dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("kindclub-site");

    let config = match BackendConfig::resolve(args.backend_url, args.anon_key, data_dir) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("kindclub-site: {e}");
            std::process::exit(1);
        }
    };
    let _ = CONFIG.set(config);

    let window = WindowBuilder::new()
        .with_title("KindClub")
        .with_inner_size(dioxus::desktop::LogicalSize::new(1100.0, 800.0))
        .with_resizable(true);

    dioxus::LaunchBuilder::desktop()
        .with_cfg(Config::new().with_window(window))
        .launch(app::Site);
}
