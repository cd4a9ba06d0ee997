use std::time::Duration;

use crate::ConfigError;
use crate::matching::MatchingConfig;

/// Per-run settings handed to every pipeline invocation.
///
/// Read-only for the duration of a run; callers build a fresh value when
/// the user flips AI enhancement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PipelineConfig {
    pub ai_enhancement: bool,
    pub remote_timeout: Duration,
    pub single_phrase_threshold: f64,
    pub composite_threshold: f64,
}

impl PipelineConfig {
    pub fn new(
        ai_enhancement: bool,
        remote_timeout: Duration,
        matching: MatchingConfig,
    ) -> Result<Self, ConfigError> {
        validate_threshold("single_phrase_threshold", matching.single_phrase_threshold)?;
        validate_threshold("composite_threshold", matching.composite_threshold)?;

        Ok(Self {
            ai_enhancement,
            remote_timeout,
            single_phrase_threshold: matching.single_phrase_threshold,
            composite_threshold: matching.composite_threshold,
        })
    }

    pub fn with_ai_enhancement(self, enabled: bool) -> Self {
        Self {
            ai_enhancement: enabled,
            ..self
        }
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        let matching = MatchingConfig::default();
        Self {
            ai_enhancement: true,
            remote_timeout: Duration::from_millis(10_000),
            single_phrase_threshold: matching.single_phrase_threshold,
            composite_threshold: matching.composite_threshold,
        }
    }
}

fn validate_threshold(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value > 0.0 && value <= 1.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidThreshold { name, value })
    }
}
