use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use tokio_util::sync::CancellationToken;
use yatra_core::ConversationSession;
use yatra_types::{AppEvent, Speaker};

use crate::service::TranslationService;
use crate::state::AppState;

pub mod conversation_turn;
pub mod text_input;

use conversation_turn::handle_conversation_turn;
use text_input::handle_text_input;

/// App's main loop
pub async fn event_loop(
    state: Arc<AppState>,
    service: Arc<TranslationService>,
    mut session: Option<ConversationSession>,
    input_rx: AsyncReceiver<AppEvent>,
    app_to_display_tx: AsyncSender<AppEvent>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    tracing::info!("[EVENT_LOOP] Starting main loop, waiting for events");
    loop {
        let event = tokio::select! {
            _ = cancel.cancelled() => break,
            event = input_rx.recv() => event?,
        };

        tracing::debug!("[EVENT_LOOP] Event received: {:?}", std::mem::discriminant(&event));

        if matches!(event, AppEvent::Shutdown) {
            let _ = app_to_display_tx.send(AppEvent::Shutdown).await;
            cancel.cancel();
            break;
        }

        handle_events(&state, &service, session.as_mut(), &app_to_display_tx, event).await?;
    }

    tracing::info!("[EVENT_LOOP] Stopped");
    Ok(())
}

async fn handle_events(
    state: &AppState,
    service: &TranslationService,
    session: Option<&mut ConversationSession>,
    app_to_display_tx: &AsyncSender<AppEvent>,
    event: AppEvent,
) -> anyhow::Result<()> {
    match event {
        AppEvent::TextInput { text, source } => {
            handle_text_input(state, service, text, source, app_to_display_tx).await?;
        }
        AppEvent::ConversationTurn { speaker, text } => match session {
            Some(session) => {
                handle_conversation_turn(state, service, session, speaker, text, app_to_display_tx)
                    .await?;
            }
            None => tracing::warn!("Conversation turn outside conversation mode"),
        },
        AppEvent::SwapLanguages => {
            let status = match session {
                Some(session) => {
                    session.swap_languages();
                    format!(
                        "a: {}, b: {}",
                        session.language_of(Speaker::A),
                        session.language_of(Speaker::B)
                    )
                }
                None => {
                    let pair = state.swap_languages().await;
                    format!("Now translating {} -> {}", pair.source, pair.target)
                }
            };
            app_to_display_tx.send(AppEvent::StatusUpdate(status)).await?;
        }
        AppEvent::SetAiEnhancement(enabled) => {
            state.set_ai_enhancement(enabled);
            let status = if enabled && !service.pipeline().has_remote() {
                "AI enhancement on (no API key set, offline results only)".to_string()
            } else {
                format!("AI enhancement {}", if enabled { "on" } else { "off" })
            };
            app_to_display_tx.send(AppEvent::StatusUpdate(status)).await?;
        }
        AppEvent::ShowTranslation { .. } | AppEvent::ShowTurn { .. } | AppEvent::StatusUpdate(_) => {
            // Display-only
        }
        AppEvent::Shutdown => {}
    }

    Ok(())
}
