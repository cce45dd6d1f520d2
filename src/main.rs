mod app;
mod config;
mod error;
mod matching;
mod utils;

use anyhow::{anyhow, Result};
use app::ResumeMatcher;
use config::MatcherConfig;
use matching::MatchClient;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(format!("{}=info", env!("CARGO_PKG_NAME")))),
        )
        .init();

    let config = MatcherConfig::from_env()?;
    info!(
        "Starting resume matcher v{} against {}",
        env!("CARGO_PKG_VERSION"),
        config.base_url
    );

    let client = Arc::new(MatchClient::new(&config)?);

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([640.0, 640.0])
            .with_min_inner_size([420.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Resume Matcher",
        options,
        Box::new(move |_cc: &eframe::CreationContext<'_>| {
            Box::new(ResumeMatcher::new(client))
        }),
    )
    .map_err(|e| anyhow!("Failed to start window: {}", e))
}
