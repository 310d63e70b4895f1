mod bot;
mod commands;
mod config;
mod faq;
mod language;
mod platform;
mod responses;

use std::path::PathBuf;

use anyhow::{Context, Result};
use tokio::io::{AsyncWriteExt, BufReader};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::bot::{Dispatcher, Session};
use crate::config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so they don't interleave with the dialogue
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,edubot=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("config.toml"));

    info!("Loading configuration from: {}", config_path.display());
    let config = Config::load_or_default(&config_path)
        .with_context(|| format!("Failed to load config from {}", config_path.display()))?;

    let faq = config.faq_table().context("Failed to load FAQ table")?;
    info!("  Bot name: {}", config.bot.name);
    info!("  Console user: {}", config.bot.user_id);
    info!("  FAQ entries: {}", faq.len());

    let dispatcher = Dispatcher::new(faq, &config.bot.support_phone);
    let mut session = Session::new();

    info!("Bot is starting...");
    let stdin = BufReader::new(tokio::io::stdin());
    let stdout = tokio::io::stdout();

    let interrupted = tokio::select! {
        result = platform::console::run(&dispatcher, &mut session, &config.bot, stdin, stdout) => {
            result?;
            false
        }
        _ = platform::console::wait_for_interrupt(tokio::signal::ctrl_c()) => {
            let mut stdout = tokio::io::stdout();
            stdout.write_all(platform::console::INTERRUPTED.as_bytes()).await?;
            stdout.flush().await?;
            true
        }
    };

    let stats = session.stats();
    info!(
        "Session stats: {} users, {} messages, {} FAQ hits",
        stats.users_count, stats.total_messages, stats.faq_hits
    );

    // A pending stdin read cannot be cancelled and would keep the runtime alive
    if interrupted {
        std::process::exit(0);
    }
    Ok(())
}
