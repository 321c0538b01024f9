//! EduAI - Main Entry Point

use eduai::app::application::run_app;
use eduai::helpers::is_development;

fn main() {
    let level = if is_development() {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .init();

    tracing::info!("Starting EduAI...");

    run_app();
}
