use kanal::AsyncSender;
use yatra_core::ConversationSession;
use yatra_types::{AppEvent, Speaker, TextSource};

use crate::service::TranslationService;
use crate::state::AppState;

pub async fn handle_conversation_turn(
    state: &AppState,
    service: &TranslationService,
    session: &mut ConversationSession,
    speaker: Speaker,
    text: String,
    app_to_display_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let config = state.pipeline_config().await?;
    let pair = session.pair_for(speaker);

    let Some(turn) = session
        .translate_turn(service.pipeline(), &config, speaker, &text)
        .await
        .cloned()
    else {
        tracing::debug!("Empty turn from {:?}", speaker);
        return Ok(());
    };

    service.record(
        &turn.original,
        &turn.translated,
        &pair.source,
        &pair.target,
        TextSource::Conversation,
        turn.method,
    );

    app_to_display_tx
        .send(AppEvent::ShowTurn {
            speaker,
            original: turn.original,
            translated: turn.translated,
        })
        .await?;

    Ok(())
}
