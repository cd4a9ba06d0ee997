//! Scripted providers for pipeline tests.

use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use yatra_translator::{ProviderMetadata, RemoteRequest, RemoteTranslator, TranslateError};

fn metadata(name: &str) -> ProviderMetadata {
    ProviderMetadata {
        name: name.to_string(),
        model: "stub".to_string(),
        requires_api_key: false,
    }
}

/// Always answers with HTTP 500
pub struct FailingTranslator;

#[async_trait]
impl RemoteTranslator for FailingTranslator {
    async fn translate(&self, _request: &RemoteRequest) -> Result<String, TranslateError> {
        Err(TranslateError::Http {
            status: 500,
            message: "Internal Server Error".to_string(),
        })
    }

    fn metadata(&self) -> ProviderMetadata {
        metadata("failing")
    }
}

/// Always answers with the same reply
pub struct FixedTranslator {
    reply: String,
}

impl FixedTranslator {
    pub fn new(reply: &str) -> Self {
        Self {
            reply: reply.to_string(),
        }
    }
}

#[async_trait]
impl RemoteTranslator for FixedTranslator {
    async fn translate(&self, _request: &RemoteRequest) -> Result<String, TranslateError> {
        Ok(self.reply.clone())
    }

    fn metadata(&self) -> ProviderMetadata {
        metadata("fixed")
    }
}

/// Replies after a delay
pub struct SlowTranslator {
    delay: Duration,
    reply: String,
}

impl SlowTranslator {
    pub fn new(delay: Duration, reply: &str) -> Self {
        Self {
            delay,
            reply: reply.to_string(),
        }
    }
}

#[async_trait]
impl RemoteTranslator for SlowTranslator {
    async fn translate(&self, _request: &RemoteRequest) -> Result<String, TranslateError> {
        tokio::time::sleep(self.delay).await;
        Ok(self.reply.clone())
    }

    fn metadata(&self) -> ProviderMetadata {
        metadata("slow")
    }
}

/// Records every (from, to, text) it is asked for and echoes "<to>:<text>"
#[derive(Default)]
pub struct RecordingTranslator {
    calls: Mutex<Vec<(String, String, String)>>,
}

impl RecordingTranslator {
    pub fn calls(&self) -> Vec<(String, String, String)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn hops(&self) -> Vec<(String, String)> {
        self.calls()
            .into_iter()
            .map(|(from, to, _)| (from, to))
            .collect()
    }
}

#[async_trait]
impl RemoteTranslator for RecordingTranslator {
    async fn translate(&self, request: &RemoteRequest) -> Result<String, TranslateError> {
        self.calls.lock().unwrap().push((
            request.from.clone(),
            request.to.clone(),
            request.text.clone(),
        ));
        Ok(format!("{}:{}", request.to, request.text))
    }

    fn metadata(&self) -> ProviderMetadata {
        metadata("recording")
    }
}
