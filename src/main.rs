use std::sync::Arc;

use homework_watcher::config::Config;
use homework_watcher::services::practicum::{PracticumClient, StatusSource};
use homework_watcher::services::telegram::{Notifier, TelegramClient};
use homework_watcher::services::watcher::WatcherEngine;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "homework_watcher=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Missing secrets are fatal; the loop must never start without them.
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            tracing::error!("Configuration error: {}", err);
            std::process::exit(1);
        }
    };

    let source: Arc<dyn StatusSource> = Arc::new(PracticumClient::new(config.practicum_token));
    let notifier: Arc<dyn Notifier> = Arc::new(TelegramClient::new(config.telegram_token));

    let engine = WatcherEngine::new(
        source,
        notifier,
        config.telegram_chat_id,
        config.poll_interval,
    );
    engine.run().await;
}
