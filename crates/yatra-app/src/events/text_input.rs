use kanal::AsyncSender;
use yatra_types::{AppEvent, TextSource};

use crate::service::TranslationService;
use crate::state::AppState;

pub async fn handle_text_input(
    state: &AppState,
    service: &TranslationService,
    text: String,
    source: TextSource,
    app_to_display_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    tracing::debug!("TextInput received: {} chars", text.chars().count());

    let pair = state.language_pair().await;
    let config = state.pipeline_config().await?;

    match service
        .translate_and_record(&text, &pair.source, &pair.target, source, &config)
        .await
    {
        Some(result) => {
            app_to_display_tx
                .send(AppEvent::ShowTranslation {
                    original: text,
                    result,
                })
                .await?;
        }
        None => tracing::debug!("Nothing to translate"),
    }

    Ok(())
}
