use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use yatra_config::Config;
use yatra_config::pipeline::PipelineConfig;
use yatra_core::{ResolutionPipeline, TranslationRequest};
use yatra_history::HistoryStore;
use yatra_translator::{ChatCompletionTranslator, RemoteTranslator};
use yatra_types::{HistoryRecord, ResolutionMethod, ResolutionResult, TextSource};

use crate::dictionary::build_dictionary;

/// Pipeline plus history: every finished translation is recorded
pub struct TranslationService {
    pipeline: ResolutionPipeline,
    history: Option<Box<dyn HistoryStore>>,
}

impl TranslationService {
    pub fn new(pipeline: ResolutionPipeline, history: Option<Box<dyn HistoryStore>>) -> Self {
        Self { pipeline, history }
    }

    /// Dictionary, remote client and history store as configured
    pub fn from_config(config: &Config) -> Self {
        let dictionary = build_dictionary(&config.dictionary);
        let mut pipeline = ResolutionPipeline::new(Arc::new(dictionary));

        if config.translator.has_api_key() {
            let translator = ChatCompletionTranslator::from_config(&config.translator);
            let metadata = translator.metadata();
            tracing::info!("Remote translation via {} ({})", metadata.name, metadata.model);
            pipeline = pipeline.with_remote(Arc::new(translator));
        } else {
            tracing::info!("No API key set, remote translation unavailable");
        }

        let history = if config.history.enabled {
            Some(yatra_history::open_store(&config.history))
        } else {
            None
        };

        Self::new(pipeline, history)
    }

    pub fn pipeline(&self) -> &ResolutionPipeline {
        &self.pipeline
    }

    pub fn history(&self) -> Option<&dyn HistoryStore> {
        self.history.as_deref()
    }

    /// Translate and record. `None` when there is nothing to translate.
    pub async fn translate_and_record(
        &self,
        text: &str,
        source_language: &str,
        target_language: &str,
        text_source: TextSource,
        config: &PipelineConfig,
    ) -> Option<ResolutionResult> {
        let request = match TranslationRequest::new(text, source_language, target_language) {
            Ok(request) => request,
            Err(e) => {
                tracing::debug!("Skipping input: {}", e);
                return None;
            }
        };

        let result = self.pipeline.resolve(&request, config).await;
        tracing::info!(
            "{} -> {} via {} (succeeded: {})",
            request.source_language,
            request.target_language,
            result.method,
            result.succeeded
        );

        self.record(
            &request.text,
            &result.translation,
            &request.source_language,
            &request.target_language,
            text_source,
            result.method,
        );
        Some(result)
    }

    /// Append to history. Failures are logged only.
    pub fn record(
        &self,
        source_text: &str,
        translated_text: &str,
        source_language: &str,
        target_language: &str,
        source: TextSource,
        method: ResolutionMethod,
    ) {
        let Some(history) = &self.history else {
            return;
        };

        let record = HistoryRecord {
            id: uuid::Uuid::new_v4().to_string(),
            source_text: source_text.to_string(),
            translated_text: translated_text.to_string(),
            source_language: source_language.to_string(),
            target_language: target_language.to_string(),
            source,
            method,
            created_at_ms: now_ms(),
        };

        if let Err(e) = history.append(record) {
            tracing::warn!("Failed to write history: {}", e);
        }
    }
}

fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default()
}
