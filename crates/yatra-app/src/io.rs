use std::io::BufRead;

use kanal::{AsyncReceiver, AsyncSender};
use tokio_util::sync::CancellationToken;
use yatra_types::{AppEvent, Speaker, TextSource};

/// How plain input lines are interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Every line is text to translate
    Interactive,
    /// Lines are `a: text` or `b: text`
    Conversation,
}

/// Read stdin on a plain thread so a pending read never holds up shutdown
pub fn spawn_stdin_reader() -> AsyncReceiver<String> {
    let (tx, rx) = kanal::unbounded_async();
    let tx = tx.to_sync();

    std::thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            match line {
                Ok(line) => {
                    if tx.send(line).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    tracing::error!("Failed to read stdin: {}", e);
                    break;
                }
            }
        }
        tracing::debug!("stdin closed");
    });

    rx
}

/// Turn input lines into app events until cancelled or input ends
pub async fn watcher_io(
    lines: AsyncReceiver<String>,
    mode: InputMode,
    cancel: CancellationToken,
    event_tx: AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    loop {
        tokio::select! {
            _ = cancel.cancelled() => {
                tracing::info!("Input watcher stopping");
                break;
            }
            line = lines.recv() => match line {
                Ok(line) => {
                    if let Some(event) = parse_line(&line, mode) {
                        event_tx.send(event).await?;
                    }
                }
                Err(_) => {
                    tracing::info!("Input closed");
                    event_tx.send(AppEvent::Shutdown).await?;
                    break;
                }
            }
        }
    }

    Ok(())
}

pub fn parse_line(line: &str, mode: InputMode) -> Option<AppEvent> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    if let Some(command) = line.strip_prefix('/') {
        return parse_command(command);
    }

    match mode {
        InputMode::Interactive => Some(AppEvent::TextInput {
            text: line.to_string(),
            source: TextSource::Manual,
        }),
        InputMode::Conversation => {
            let Some((speaker, text)) = line.split_once(':') else {
                tracing::warn!("Expected 'a: text' or 'b: text', got {:?}", line);
                return None;
            };
            let speaker = match speaker.trim().to_ascii_lowercase().as_str() {
                "a" => Speaker::A,
                "b" => Speaker::B,
                other => {
                    tracing::warn!("Unknown speaker {:?}", other);
                    return None;
                }
            };
            Some(AppEvent::ConversationTurn {
                speaker,
                text: text.trim().to_string(),
            })
        }
    }
}

fn parse_command(command: &str) -> Option<AppEvent> {
    let mut parts = command.split_whitespace();
    match (parts.next(), parts.next()) {
        (Some("swap"), None) => Some(AppEvent::SwapLanguages),
        (Some("ai"), Some("on")) => Some(AppEvent::SetAiEnhancement(true)),
        (Some("ai"), Some("off")) => Some(AppEvent::SetAiEnhancement(false)),
        (Some("quit" | "exit"), None) => Some(AppEvent::Shutdown),
        _ => {
            tracing::warn!("Unknown command /{}", command);
            None
        }
    }
}
