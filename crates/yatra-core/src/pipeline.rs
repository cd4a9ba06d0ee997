use std::sync::Arc;

use yatra_config::pipeline::PipelineConfig;
use yatra_dictionary::{PairKey, PhraseDictionary};
use yatra_translator::RemoteTranslator;
use yatra_types::{LanguagePair, ResolutionMethod, ResolutionResult};

use crate::language::{ENGLISH, normalize};
use crate::remote::remote_translate;
use crate::request::TranslationRequest;
use crate::resolve::{Miss, try_exact, try_phrase_overlap, try_word_by_word};
use crate::synthetic::synthesize;

/// Output of one resolver pass over a single direct pair
struct Hop {
    translation: String,
    method: ResolutionMethod,
    succeeded: bool,
}

/// Tiered resolver: exact -> phrase overlap -> word decomposition -> remote -> synthetic.
///
/// Holds only read-only state, so one instance can serve concurrent requests.
#[derive(Clone)]
pub struct ResolutionPipeline {
    dictionary: Arc<PhraseDictionary>,
    remote: Option<Arc<dyn RemoteTranslator>>,
}

impl ResolutionPipeline {
    pub fn new(dictionary: Arc<PhraseDictionary>) -> Self {
        Self {
            dictionary,
            remote: None,
        }
    }

    pub fn with_remote(mut self, remote: Arc<dyn RemoteTranslator>) -> Self {
        self.remote = Some(remote);
        self
    }

    pub fn has_remote(&self) -> bool {
        self.remote.is_some()
    }

    /// Resolve a validated request. Always yields a non-empty translation.
    pub async fn resolve(
        &self,
        request: &TranslationRequest,
        config: &PipelineConfig,
    ) -> ResolutionResult {
        let normalized = normalize(&request.source_language, &request.target_language);

        if !normalized.routed_via_english {
            let hop = self.resolve_hop(&request.text, &normalized.pair, config).await;
            return ResolutionResult {
                translation: hop.translation,
                method: hop.method,
                succeeded: hop.succeeded,
                routed_via_english: false,
                pair: normalized.pair,
            };
        }

        let to_english = LanguagePair::new(normalized.pair.source.clone(), ENGLISH);
        let from_english = LanguagePair::new(ENGLISH, normalized.pair.target.clone());

        // A failed first hop still hands its placeholder to the second
        let first = self.resolve_hop(&request.text, &to_english, config).await;
        let second = self.resolve_hop(&first.translation, &from_english, config).await;

        ResolutionResult {
            translation: second.translation,
            method: second.method,
            succeeded: first.succeeded && second.succeeded,
            routed_via_english: true,
            pair: from_english,
        }
    }

    /// Translate raw text. Empty input or an unusable language code gives an
    /// empty string; everything else gives a translation.
    pub async fn translate(
        &self,
        text: &str,
        source_language: &str,
        target_language: &str,
        config: &PipelineConfig,
    ) -> String {
        match TranslationRequest::new(text, source_language, target_language) {
            Ok(request) => self.resolve(&request, config).await.translation,
            Err(e) => {
                tracing::debug!("Skipping translation: {}", e);
                String::new()
            }
        }
    }

    async fn resolve_hop(&self, text: &str, pair: &LanguagePair, config: &PipelineConfig) -> Hop {
        let key = PairKey::from(pair);
        let dictionary = self.dictionary.as_ref();

        let local = try_exact(dictionary, text, &key)
            .map(|t| (t, ResolutionMethod::Exact))
            .or_else(|Miss| {
                try_phrase_overlap(dictionary, text, &key, config)
                    .map(|t| (t, ResolutionMethod::PhraseOverlap))
            })
            .or_else(|Miss| {
                try_word_by_word(dictionary, text, &key)
                    .map(|t| (t, ResolutionMethod::WordDecomposition))
            });

        if let Ok((translation, method)) = local {
            tracing::debug!("{} resolved via {}", pair, method);
            return Hop {
                translation,
                method,
                succeeded: true,
            };
        }

        let remote = self.remote.as_ref().filter(|_| config.ai_enhancement);
        if let Some(remote) = remote {
            match remote_translate(remote.as_ref(), text, pair, config.remote_timeout).await {
                Ok(translation) => {
                    tracing::debug!("{} resolved via remote", pair);
                    return Hop {
                        translation,
                        method: ResolutionMethod::Remote,
                        succeeded: true,
                    };
                }
                Err(e) => {
                    tracing::warn!("Remote translation {} failed ({:?}): {}", pair, e.kind(), e);
                }
            }
        }

        tracing::debug!("{} falling back to synthetic output", pair);
        Hop {
            translation: synthesize(text, &pair.target),
            method: ResolutionMethod::Synthetic,
            succeeded: false,
        }
    }
}
