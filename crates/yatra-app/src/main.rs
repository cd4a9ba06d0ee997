use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;
use yatra_core::ConversationSession;
use yatra_core::language::{is_known, supported_languages};
use yatra_types::TextSource;

pub mod controller;
pub mod dictionary;
pub mod display;
pub mod events;
pub mod history;
pub mod io;
pub mod profile;
pub mod service;
pub mod state;

#[cfg(test)]
mod tests;

use self::controller::AppController;
use self::history::{HistoryAction, run_history};
use self::io::{InputMode, spawn_stdin_reader};
use self::service::TranslationService;
use self::state::AppState;

#[derive(Parser)]
#[command(name = "yatra", version, about = "Travel phrase translator with offline fallback")]
struct Cli {
    /// JSON profile to load
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Pretty)]
    log_format: LogFormat,

    /// Never call the remote provider
    #[arg(long, global = true)]
    no_ai: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Copy, ValueEnum)]
enum LogFormat {
    Pretty,
    Json,
}

#[derive(Subcommand)]
enum Command {
    /// Translate one piece of text and exit
    Translate {
        #[arg(long)]
        from: Option<String>,
        #[arg(long)]
        to: Option<String>,
        /// Print the full resolution as JSON
        #[arg(long)]
        json: bool,
        #[arg(required = true)]
        text: Vec<String>,
    },
    /// Translate stdin line by line (/swap, /ai on|off, /quit)
    Interactive {
        #[arg(long)]
        from: Option<String>,
        #[arg(long)]
        to: Option<String>,
    },
    /// Two speakers taking turns: lines are `a: text` or `b: text`
    Converse {
        #[arg(long, default_value = "en")]
        a: String,
        #[arg(long, default_value = "hi")]
        b: String,
    },
    /// List known language codes
    Languages,
    /// Show saved translations, newest first
    History {
        #[arg(long, default_value_t = 20)]
        limit: usize,
        /// Remove every saved translation
        #[arg(long, conflicts_with = "delete")]
        clear: bool,
        /// Remove one saved translation by id
        #[arg(long)]
        delete: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let dotenv = dotenvy::dotenv();
    init_tracing(cli.log_format);

    match dotenv {
        Ok(path) => tracing::debug!("Loaded {}", path.display()),
        Err(e) => tracing::debug!("No .env loaded: {}", e),
    }

    let mut config = profile::load_config(cli.config.as_deref())?;
    if cli.no_ai {
        config.translator.enabled = false;
    }
    tracing::debug!("Translator config: {:?}", config.translator);

    match cli.command {
        Command::Translate {
            from,
            to,
            json,
            text,
        } => {
            let source = from.unwrap_or_else(|| config.source_language.clone());
            let target = to.unwrap_or_else(|| config.target_language.clone());
            warn_if_unknown(&[source.as_str(), target.as_str()]);
            let pipeline_config = config.pipeline()?;
            let service = TranslationService::from_config(&config);

            let text = text.join(" ");
            let result = service
                .translate_and_record(&text, &source, &target, TextSource::Manual, &pipeline_config)
                .await;

            match result {
                Some(result) if json => println!("{}", serde_json::to_string_pretty(&result)?),
                Some(result) => println!("{}", result.translation),
                None => println!(),
            }
        }
        Command::Interactive { from, to } => {
            if let Some(from) = from {
                config.source_language = from;
            }
            if let Some(to) = to {
                config.target_language = to;
            }
            warn_if_unknown(&[config.source_language.as_str(), config.target_language.as_str()]);
            run_line_mode(config, InputMode::Interactive, None).await?;
        }
        Command::Converse { a, b } => {
            warn_if_unknown(&[a.as_str(), b.as_str()]);
            let session = ConversationSession::new(a, b);
            run_line_mode(config, InputMode::Conversation, Some(session)).await?;
        }
        Command::Languages => {
            for (code, name) in supported_languages() {
                println!("{code}\t{name}");
            }
        }
        Command::History {
            limit,
            clear,
            delete,
        } => {
            if !config.history.enabled || config.history.path.is_none() {
                println!("No history file configured (set history.path or YATRA_HISTORY_PATH)");
                return Ok(());
            }

            let action = match (clear, delete) {
                (true, _) => HistoryAction::Clear,
                (false, Some(id)) => HistoryAction::Delete(id),
                (false, None) => HistoryAction::List { limit },
            };
            let store = yatra_history::open_store(&config.history);
            for line in run_history(store.as_ref(), action)? {
                println!("{line}");
            }
        }
    }

    Ok(())
}

/// Unknown codes are still accepted
fn warn_if_unknown(codes: &[&str]) {
    for code in codes {
        if !is_known(code) {
            tracing::warn!("Unknown language code {:?}, see `yatra languages`", code);
        }
    }
}

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    match format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Pretty => builder.with_ansi(atty::is(atty::Stream::Stderr)).init(),
    }
}

async fn run_line_mode(
    config: yatra_config::Config,
    mode: InputMode,
    session: Option<ConversationSession>,
) -> anyhow::Result<()> {
    // Reject bad thresholds before reading any input
    config.pipeline()?;

    let service = Arc::new(TranslationService::from_config(&config));
    let state = Arc::new(AppState::new(config));
    let controller = AppController::new(state, service);
    let tasks = controller.spawn_tasks(spawn_stdin_reader(), mode, session);

    controller
        .supervise(tasks, async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::warn!("Ctrl-C handler unavailable: {e}");
                std::future::pending::<()>().await;
            }
        })
        .await;

    Ok(())
}
