//! A single-route JSON API, served from AWS Lambda.

mod app;
mod config;
mod error;
mod handlers;
mod serve;

use clap::Parser;
use config::Config;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> ExitCode {
    let config = Config::parse();

    init_tracing(config.is_local());

    let app = app::router();

    let result = match config.address {
        Some(address) => serve::local(app, &address).await,
        None => serve::lambda(app).await,
    };

    if let Err(err) = result {
        tracing::error!(?err, "exiting");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn init_tracing(local: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if local {
        registry.with(tracing_subscriber::fmt::layer()).init();
    } else {
        // CloudWatch timestamps each line and doesn't render colors
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .without_time(),
            )
            .init();
    }
}
