//! Room bot - main entry point.

use advent_client::{AdventOfCodeApi, HttpJsonFetcher};
use anyhow::Context;
use chat_client::{ConsoleReceiver, ConsoleSender};
use room_bot::{AppResult, Config, Dispatcher, SystemClock};
use std::sync::Arc;
use tokio::signal;
use tokio_stream::StreamExt;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> AppResult<()> {
    // Load configuration
    let config = Config::load().context("Failed to load configuration")?;

    // Initialize logging
    init_logging(&config.bot.log_level);

    info!("Starting room bot...");

    let leaderboard_ids = config.leaderboard_ids()?;
    info!("{} rooms have a default leaderboard", leaderboard_ids.len());

    let fetcher = HttpJsonFetcher::new(config.advent.session_token.clone(), config.advent.timeout)?;
    let api = AdventOfCodeApi::new(Arc::new(fetcher), config.advent.base_url.as_str());
    info!("Advent of Code endpoint: {}", api.base_url());

    let dispatcher = Dispatcher::with_default_commands(
        api,
        leaderboard_ids,
        Arc::new(SystemClock),
        &config.bot.trigger,
    );
    info!("Registered {} command handlers", dispatcher.registry().len());

    let sender = ConsoleSender::new();
    let receiver = ConsoleReceiver::new(config.bot.default_room, config.bot.user_name.as_str());
    let mut stream = Box::pin(receiver.stream());

    info!(
        "Listening on stdin (default room {}, prefix a line with #<room> to post elsewhere)",
        config.bot.default_room
    );

    // Main message loop
    loop {
        tokio::select! {
            message = stream.next() => {
                let Some(message) = message else {
                    info!("Input closed");
                    break;
                };

                if let Some(outgoing) = dispatcher.handle(&message).await {
                    if let Err(e) = sender.send(outgoing.room_id, &outgoing.text).await {
                        error!("Failed to send reply: {}", e);
                    }
                }
            }
            _ = signal::ctrl_c() => {
                info!("Shutdown signal received");
                break;
            }
        }
    }

    info!("Shutting down...");
    Ok(())
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
