use std::future::Future;

use anyhow::{Context, Result};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{error, info};

use crate::bot::{Dispatcher, Session};
use crate::config::BotConfig;
use crate::platform::is_exit_word;
use crate::responses;

const PROMPT: &str = "\n👤 Вы: ";

pub const GOODBYE: &str = "\n👋 До свидания! Спасибо за использование EduGPT KZ!\n";

pub const INTERRUPTED: &str = "\n\n👋 Демо завершено. До свидания!\n";

fn banner(bot: &BotConfig) -> String {
    let rule = "=".repeat(50);
    format!(
        "\n{rule}\n🎓 {} KZ - AI Assistant Demo\n{rule}\n\
         Добро пожаловать в демонстрационную версию!\n\
         Введите 'quit' для выхода\n",
        bot.name
    )
}

/// Resolve once the interrupt signal fires.
///
/// If the handler cannot be installed the error is logged and this never
/// resolves, leaving the console loop running.
pub async fn wait_for_interrupt<F>(signal: F)
where
    F: Future<Output = std::io::Result<()>>,
{
    match signal.await {
        Ok(()) => info!("Received Ctrl+C, ending session"),
        Err(e) => {
            error!("Failed to listen for Ctrl+C signal: {}", e);
            std::future::pending::<()>().await;
        }
    }
}

/// Run the interactive read loop until an exit word or end of input.
///
/// Every non-empty line is dispatched as a message from `bot.user_id`.
/// A line that is not valid UTF-8 gets a "try again" reply and the loop
/// keeps going; any other I/O failure ends it with an error.
pub async fn run<R, W>(
    dispatcher: &Dispatcher,
    session: &mut Session,
    bot: &BotConfig,
    mut input: R,
    mut output: W,
) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    info!("Starting console session for user {}", bot.user_id);
    output.write_all(banner(bot).as_bytes()).await?;

    loop {
        output.write_all(PROMPT.as_bytes()).await?;
        output.flush().await?;

        let mut buf = Vec::new();
        let read = input
            .read_until(b'\n', &mut buf)
            .await
            .context("Failed to read console input")?;
        if read == 0 {
            output.write_all(GOODBYE.as_bytes()).await?;
            break;
        }

        let line = match String::from_utf8(buf) {
            Ok(line) => line,
            Err(e) => {
                error!("Failed to decode console input: {}", e);
                output
                    .write_all(format!("{}\n", responses::TRY_AGAIN).as_bytes())
                    .await?;
                continue;
            }
        };

        let line = line.trim();
        if is_exit_word(line) {
            output.write_all(GOODBYE.as_bytes()).await?;
            break;
        }
        if line.is_empty() {
            continue;
        }

        let reply = dispatcher.process_message(session, bot.user_id, line);
        output
            .write_all(format!("\n🤖 {}: {}\n", bot.name, reply).as_bytes())
            .await?;
    }

    output.flush().await?;
    info!(
        "Console session ended after {} messages",
        session.stats().total_messages
    );
    Ok(())
}
