use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tokio::sync::RwLock;
use yatra_config::Config;
use yatra_config::pipeline::PipelineConfig;
use yatra_types::LanguagePair;

pub struct AppState {
    pub config: Arc<RwLock<Config>>,
    /// Runtime AI toggle, starts from `translator.enabled`
    pub ai_enhancement: AtomicBool,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let ai_enhancement = AtomicBool::new(config.translator.enabled);
        Self {
            config: Arc::new(RwLock::new(config)),
            ai_enhancement,
        }
    }

    /// Snapshot for one pipeline run
    pub async fn pipeline_config(&self) -> anyhow::Result<PipelineConfig> {
        let config = self.config.read().await;
        let pipeline = config.pipeline()?;
        Ok(pipeline.with_ai_enhancement(self.ai_enhancement.load(Ordering::Relaxed)))
    }

    pub fn set_ai_enhancement(&self, enabled: bool) {
        self.ai_enhancement.store(enabled, Ordering::Relaxed);
        tracing::info!("AI enhancement {}", if enabled { "on" } else { "off" });
    }

    pub async fn language_pair(&self) -> LanguagePair {
        let config = self.config.read().await;
        LanguagePair::new(config.source_language.clone(), config.target_language.clone())
    }

    pub async fn swap_languages(&self) -> LanguagePair {
        let mut config = self.config.write().await;
        let config = &mut *config;
        std::mem::swap(&mut config.source_language, &mut config.target_language);
        tracing::info!(
            "Languages swapped: {} -> {}",
            config.source_language,
            config.target_language
        );
        LanguagePair::new(config.source_language.clone(), config.target_language.clone())
    }
}
