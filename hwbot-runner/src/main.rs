//! Homework Bot Runner
//!
//! A long-running worker that watches the review status of the latest
//! homework submission and relays changes to a Telegram chat.
//!
//! Architecture:
//! - Configuration: Load credentials and tunables from the environment (and `.env`)
//! - Repositories: HTTP communication with the homework API and the Bot API
//! - Services: Best-effort notification delivery
//! - Scheduler: The poll loop, cursor tracking and duplicate suppression
//!
//! The process only exits on its own when required configuration is missing.
//! Every other failure is logged, reported to the chat and retried next cycle.

mod config;
mod repository;
mod scheduler;
mod service;

use anyhow::{Context, Result};
use chrono::Utc;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::repository::{HttpHomeworkRepository, TelegramMessageRepository};
use crate::scheduler::StatusPoller;
use crate::service::StandardNotifier;
use hwbot_client::{PracticumClient, TelegramClient};
use hwbot_core::PollCursor;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hwbot_runner=debug,hwbot_client=debug".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_line_number(true),
        )
        .init();

    info!("Starting Homework Bot");

    let mut poller = init(Config::from_env())?;

    info!("Bot initialized successfully");

    tokio::select! {
        _ = poller.run() => {}
        signal = tokio::signal::ctrl_c() => match signal {
            Ok(()) => info!("Received shutdown signal, stopping"),
            Err(e) => error!("Failed to listen for shutdown signal: {}", e),
        },
    }

    Ok(())
}

/// Validates configuration and wires the poller
///
/// Fails before anything is built when required credentials are missing.
fn init(config: Config) -> Result<StatusPoller> {
    if let Err(e) = config.validate() {
        error!("Invalid configuration, the bot cannot start: {:#}", e);
        return Err(e);
    }

    info!(
        "Loaded configuration: endpoint={}, chat_id={}",
        config.endpoint, config.credentials.telegram_chat_id
    );

    let http = reqwest::Client::builder()
        .timeout(config.request_timeout)
        .build()
        .context("Failed to build HTTP client")?;

    let homeworks = Arc::new(HttpHomeworkRepository::new(PracticumClient::with_client(
        config.endpoint.clone(),
        config.credentials.practicum_token.clone(),
        http.clone(),
    )));

    let messages = Arc::new(TelegramMessageRepository::new(
        TelegramClient::with_client(
            config.telegram_api_url.clone(),
            config.credentials.telegram_token.clone(),
            http,
        ),
        config.credentials.telegram_chat_id.clone(),
    ));
    let notifier = Arc::new(StandardNotifier::new(messages));

    let cursor = PollCursor::backfill(Utc::now(), config.backfill_months);
    Ok(StatusPoller::new(&config, homeworks, notifier, cursor))
}
