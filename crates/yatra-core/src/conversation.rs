use yatra_config::pipeline::PipelineConfig;
use yatra_types::{LanguageCode, LanguagePair, ResolutionMethod, Speaker};

use crate::pipeline::ResolutionPipeline;
use crate::request::TranslationRequest;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversationTurn {
    pub speaker: Speaker,
    pub original: String,
    pub translated: String,
    pub method: ResolutionMethod,
}

/// Two people, each speaking their own language. Every turn is translated
/// into the other speaker's language.
#[derive(Debug, Clone)]
pub struct ConversationSession {
    speaker_a: LanguageCode,
    speaker_b: LanguageCode,
    turns: Vec<ConversationTurn>,
}

impl ConversationSession {
    pub fn new(speaker_a: impl Into<LanguageCode>, speaker_b: impl Into<LanguageCode>) -> Self {
        Self {
            speaker_a: speaker_a.into(),
            speaker_b: speaker_b.into(),
            turns: Vec::new(),
        }
    }

    pub fn language_of(&self, speaker: Speaker) -> &str {
        match speaker {
            Speaker::A => &self.speaker_a,
            Speaker::B => &self.speaker_b,
        }
    }

    /// Pair a turn by `speaker` is translated along
    pub fn pair_for(&self, speaker: Speaker) -> LanguagePair {
        LanguagePair::new(self.language_of(speaker), self.language_of(speaker.other()))
    }

    /// Translate and record one turn. Blank turns are ignored.
    pub async fn translate_turn(
        &mut self,
        pipeline: &ResolutionPipeline,
        config: &PipelineConfig,
        speaker: Speaker,
        text: &str,
    ) -> Option<&ConversationTurn> {
        let pair = self.pair_for(speaker);
        let request = match TranslationRequest::new(text, &pair.source, &pair.target) {
            Ok(request) => request,
            Err(e) => {
                tracing::debug!("Ignoring turn from {:?}: {}", speaker, e);
                return None;
            }
        };

        let result = pipeline.resolve(&request, config).await;
        self.turns.push(ConversationTurn {
            speaker,
            original: request.text,
            translated: result.translation,
            method: result.method,
        });
        self.turns.last()
    }

    pub fn swap_languages(&mut self) {
        std::mem::swap(&mut self.speaker_a, &mut self.speaker_b);
        tracing::info!("Languages swapped: A={}, B={}", self.speaker_a, self.speaker_b);
    }

    pub fn turns(&self) -> &[ConversationTurn] {
        &self.turns
    }

    pub fn clear(&mut self) {
        self.turns.clear();
    }
}
