use std::sync::Arc;
use std::sync::atomic::Ordering;
use std::time::Duration;

use kanal::{AsyncReceiver, AsyncSender};
use tokio::task::JoinHandle;
use tokio::time::timeout;
use tokio_util::sync::CancellationToken;
use yatra_config::Config;
use yatra_core::{ConversationSession, ResolutionPipeline};
use yatra_dictionary::{PairKey, PhraseDictionary};
use yatra_history::MemoryHistory;
use yatra_translator::ChatCompletionTranslator;
use yatra_types::{AppEvent, ResolutionMethod, Speaker, TextSource};

use crate::events::event_loop;
use crate::service::TranslationService;
use crate::state::AppState;

fn service() -> Arc<TranslationService> {
    let mut dict = PhraseDictionary::new();
    dict.insert(&PairKey::new("en", "es"), "hello", "Hola");
    dict.insert(&PairKey::new("es", "en"), "hola", "Hello");
    dict.insert(&PairKey::new("en", "hi"), "thank you", "धन्यवाद");
    dict.insert(&PairKey::new("hi", "en"), "धन्यवाद", "thank you");

    let pipeline = ResolutionPipeline::new(Arc::new(dict));
    Arc::new(TranslationService::new(
        pipeline,
        Some(Box::new(MemoryHistory::new(100))),
    ))
}

fn state() -> Arc<AppState> {
    let mut config = Config::default();
    config.translator.enabled = false;
    Arc::new(AppState::new(config))
}

struct Harness {
    input_tx: AsyncSender<AppEvent>,
    output_rx: AsyncReceiver<AppEvent>,
    cancel: CancellationToken,
    handle: JoinHandle<anyhow::Result<()>>,
}

fn start(
    state: Arc<AppState>,
    service: Arc<TranslationService>,
    session: Option<ConversationSession>,
) -> Harness {
    let (input_tx, input_rx) = kanal::unbounded_async();
    let (output_tx, output_rx) = kanal::unbounded_async();
    let cancel = CancellationToken::new();

    let handle = tokio::spawn(event_loop(
        state,
        service,
        session,
        input_rx,
        output_tx,
        cancel.clone(),
    ));

    Harness {
        input_tx,
        output_rx,
        cancel,
        handle,
    }
}

async fn next_output(rx: &AsyncReceiver<AppEvent>) -> AppEvent {
    match timeout(Duration::from_secs(2), rx.recv()).await {
        Ok(Ok(event)) => event,
        Ok(Err(e)) => panic!("Channel error: {}", e),
        Err(_) => panic!("Timeout - no output from event loop"),
    }
}

fn text(text: &str) -> AppEvent {
    AppEvent::TextInput {
        text: text.to_string(),
        source: TextSource::Manual,
    }
}

#[tokio::test]
async fn test_text_input_is_translated_and_recorded() {
    let service = service();
    let harness = start(state(), service.clone(), None);

    harness.input_tx.send(text("Hello")).await.unwrap();

    match next_output(&harness.output_rx).await {
        AppEvent::ShowTranslation { original, result } => {
            assert_eq!(original, "Hello");
            assert_eq!(result.translation, "Hola");
            assert_eq!(result.method, ResolutionMethod::Exact);
        }
        other => panic!("Wrong event type: {:?}", other),
    }

    let records = service.history().unwrap().recent(10).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].translated_text, "Hola");
    assert_eq!(records[0].source, TextSource::Manual);
    assert_eq!(records[0].source_language, "en");

    harness.input_tx.send(AppEvent::Shutdown).await.unwrap();
    assert!(matches!(
        next_output(&harness.output_rx).await,
        AppEvent::Shutdown
    ));
    harness.handle.await.unwrap().unwrap();
}

#[tokio::test]
async fn test_blank_input_produces_nothing() {
    let service = service();
    let harness = start(state(), service.clone(), None);

    harness.input_tx.send(text("   ")).await.unwrap();
    harness.input_tx.send(text("hello")).await.unwrap();

    match next_output(&harness.output_rx).await {
        AppEvent::ShowTranslation { result, .. } => assert_eq!(result.translation, "Hola"),
        other => panic!("Wrong event type: {:?}", other),
    }
    assert_eq!(service.history().unwrap().recent(10).unwrap().len(), 1);

    harness.cancel.cancel();
    harness.handle.await.unwrap().unwrap();
}

#[tokio::test]
async fn test_swap_languages_changes_direction() {
    let state = state();
    let harness = start(state.clone(), service(), None);

    harness.input_tx.send(AppEvent::SwapLanguages).await.unwrap();
    match next_output(&harness.output_rx).await {
        AppEvent::StatusUpdate(status) => assert_eq!(status, "Now translating es -> en"),
        other => panic!("Wrong event type: {:?}", other),
    }

    harness.input_tx.send(text("Hola")).await.unwrap();
    match next_output(&harness.output_rx).await {
        AppEvent::ShowTranslation { result, .. } => assert_eq!(result.translation, "Hello"),
        other => panic!("Wrong event type: {:?}", other),
    }

    let pair = state.language_pair().await;
    assert_eq!(pair.source, "es");

    harness.cancel.cancel();
    harness.handle.await.unwrap().unwrap();
}

#[tokio::test]
async fn test_ai_toggle_updates_state() {
    let state = state();
    let harness = start(state.clone(), service(), None);
    assert!(!state.ai_enhancement.load(Ordering::Relaxed));

    harness
        .input_tx
        .send(AppEvent::SetAiEnhancement(true))
        .await
        .unwrap();
    match next_output(&harness.output_rx).await {
        AppEvent::StatusUpdate(status) => {
            assert_eq!(status, "AI enhancement on (no API key set, offline results only)")
        }
        other => panic!("Wrong event type: {:?}", other),
    }

    assert!(state.pipeline_config().await.unwrap().ai_enhancement);

    harness
        .input_tx
        .send(AppEvent::SetAiEnhancement(false))
        .await
        .unwrap();
    match next_output(&harness.output_rx).await {
        AppEvent::StatusUpdate(status) => assert_eq!(status, "AI enhancement off"),
        other => panic!("Wrong event type: {:?}", other),
    }

    harness.cancel.cancel();
    harness.handle.await.unwrap().unwrap();
}

#[tokio::test]
async fn test_ai_toggle_with_provider() {
    let translator = ChatCompletionTranslator::new(
        "test-key".to_string(),
        "http://127.0.0.1:9/v1/chat/completions".to_string(),
        "test-model".to_string(),
    );
    let pipeline =
        ResolutionPipeline::new(Arc::new(PhraseDictionary::new())).with_remote(Arc::new(translator));
    let service = Arc::new(TranslationService::new(pipeline, None));
    let harness = start(state(), service, None);

    harness
        .input_tx
        .send(AppEvent::SetAiEnhancement(true))
        .await
        .unwrap();
    match next_output(&harness.output_rx).await {
        AppEvent::StatusUpdate(status) => assert_eq!(status, "AI enhancement on"),
        other => panic!("Wrong event type: {:?}", other),
    }

    harness.cancel.cancel();
    harness.handle.await.unwrap().unwrap();
}

#[tokio::test]
async fn test_conversation_turns() {
    let service = service();
    let session = ConversationSession::new("en", "hi");
    let harness = start(state(), service.clone(), Some(session));

    harness
        .input_tx
        .send(AppEvent::ConversationTurn {
            speaker: Speaker::A,
            text: "Thank you".to_string(),
        })
        .await
        .unwrap();
    match next_output(&harness.output_rx).await {
        AppEvent::ShowTurn {
            speaker,
            translated,
            ..
        } => {
            assert_eq!(speaker, Speaker::A);
            assert_eq!(translated, "धन्यवाद");
        }
        other => panic!("Wrong event type: {:?}", other),
    }

    harness
        .input_tx
        .send(AppEvent::ConversationTurn {
            speaker: Speaker::B,
            text: "धन्यवाद".to_string(),
        })
        .await
        .unwrap();
    match next_output(&harness.output_rx).await {
        AppEvent::ShowTurn { translated, .. } => assert_eq!(translated, "thank you"),
        other => panic!("Wrong event type: {:?}", other),
    }

    let records = service.history().unwrap().recent(10).unwrap();
    assert_eq!(records.len(), 2);
    assert!(records.iter().all(|r| r.source == TextSource::Conversation));
    assert_eq!(records[0].source_language, "hi");

    harness.cancel.cancel();
    harness.handle.await.unwrap().unwrap();
}

#[tokio::test]
async fn test_cancellation_stops_loop() {
    let harness = start(state(), service(), None);

    harness.cancel.cancel();
    let result = timeout(Duration::from_secs(2), harness.handle).await;
    assert!(result.is_ok(), "Event loop ignored cancellation");
}
