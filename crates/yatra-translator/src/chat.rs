use async_trait::async_trait;
use serde::Serialize;
use yatra_config::translator::TranslatorConfig;

use crate::{ProviderMetadata, RemoteRequest, RemoteTranslator, TranslateError};

/// OpenAI-compatible chat-completion client (Groq by default)
#[derive(Clone)]
pub struct ChatCompletionTranslator {
    client: reqwest::Client,
    provider: String,
    api_key: String,
    api_url: String,
    model: String,
    temperature: f32,
    max_tokens: u32,
    top_p: f32,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    temperature: f32,
    max_tokens: u32,
    top_p: f32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

impl ChatCompletionTranslator {
    pub fn new(api_key: String, api_url: String, model: String) -> Self {
        let defaults = TranslatorConfig::default();
        Self {
            client: reqwest::Client::new(),
            provider: defaults.provider,
            api_key,
            api_url,
            model,
            temperature: defaults.temperature,
            max_tokens: defaults.max_tokens,
            top_p: defaults.top_p,
        }
    }

    pub fn from_config(config: &TranslatorConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            provider: config.provider.clone(),
            api_key: config.api_key.clone(),
            api_url: config.api_url.clone(),
            model: config.model.clone(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
            top_p: config.top_p,
        }
    }
}

#[async_trait]
impl RemoteTranslator for ChatCompletionTranslator {
    async fn translate(&self, request: &RemoteRequest) -> Result<String, TranslateError> {
        if self.api_key.trim().is_empty() {
            return Err(TranslateError::AuthenticationError);
        }

        let body = ChatRequest {
            model: &self.model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: &request.system_prompt,
                },
                ChatMessage {
                    role: "user",
                    content: &request.user_prompt,
                },
            ],
            temperature: self.temperature,
            max_tokens: self.max_tokens,
            top_p: self.top_p,
        };

        tracing::debug!(
            "Calling {} ({}) for {} -> {}",
            self.provider,
            self.model,
            request.from,
            request.to
        );

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();

        if status == 429 {
            return Err(TranslateError::RateLimitExceeded);
        }

        if status == 401 || status == 403 {
            return Err(TranslateError::AuthenticationError);
        }

        if !status.is_success() {
            let message = response
                .json::<serde_json::Value>()
                .await
                .ok()
                .and_then(|json| json["error"]["message"].as_str().map(str::to_string))
                .unwrap_or_else(|| status.canonical_reason().unwrap_or("unknown").to_string());

            return Err(TranslateError::Http {
                status: status.as_u16(),
                message,
            });
        }

        let json: serde_json::Value = response.json().await.map_err(|e| {
            TranslateError::InvalidResponse(format!("Failed to parse response: {}", e))
        })?;

        extract_content(&json)
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: self.provider.clone(),
            model: self.model.clone(),
            requires_api_key: true,
        }
    }
}

/// Pull `choices[0].message.content` out of a chat-completion body
pub(crate) fn extract_content(json: &serde_json::Value) -> Result<String, TranslateError> {
    json["choices"]
        .get(0)
        .and_then(|choice| choice["message"]["content"].as_str())
        .map(str::to_string)
        .ok_or_else(|| TranslateError::InvalidResponse("No translation in response".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FailureKind;
    use serde_json::json;

    fn request() -> RemoteRequest {
        RemoteRequest {
            text: "Good morning".to_string(),
            from: "en".to_string(),
            to: "es".to_string(),
            target_name: "Spanish".to_string(),
            system_prompt: "Translate.".to_string(),
            user_prompt: "\"Good morning\"".to_string(),
        }
    }

    #[test]
    fn test_extract_content() {
        let body = json!({
            "choices": [{ "message": { "role": "assistant", "content": "Buenos días" } }]
        });
        assert_eq!(extract_content(&body).unwrap(), "Buenos días");
    }

    #[test]
    fn test_extract_content_missing_choices() {
        let body = json!({ "choices": [] });
        assert!(matches!(
            extract_content(&body),
            Err(TranslateError::InvalidResponse(_))
        ));
    }

    #[test]
    fn test_request_body_shape() {
        let body = ChatRequest {
            model: "llama3-8b-8192",
            messages: [
                ChatMessage {
                    role: "system",
                    content: "sys",
                },
                ChatMessage {
                    role: "user",
                    content: "usr",
                },
            ],
            temperature: 0.3,
            max_tokens: 1000,
            top_p: 0.9,
        };
        let value = serde_json::to_value(&body).unwrap();

        assert_eq!(value["model"], "llama3-8b-8192");
        assert_eq!(value["messages"][0]["role"], "system");
        assert_eq!(value["messages"][1]["content"], "usr");
        assert_eq!(value["max_tokens"], 1000);
    }

    #[tokio::test]
    async fn test_empty_api_key_fails_without_request() {
        let translator = ChatCompletionTranslator::new(
            String::new(),
            "http://127.0.0.1:1/v1/chat/completions".to_string(),
            "llama3-8b-8192".to_string(),
        );

        let err = translator.translate(&request()).await.unwrap_err();
        assert!(matches!(err, TranslateError::AuthenticationError));
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_network_failure() {
        let translator = ChatCompletionTranslator::new(
            "test-key".to_string(),
            "http://127.0.0.1:1/v1/chat/completions".to_string(),
            "llama3-8b-8192".to_string(),
        );

        let err = translator.translate(&request()).await.unwrap_err();
        assert_eq!(err.kind(), FailureKind::Network);
    }

    #[test]
    fn test_metadata_from_config() {
        let config = TranslatorConfig::default();
        let translator = ChatCompletionTranslator::from_config(&config);
        let metadata = translator.metadata();

        assert_eq!(metadata.name, "groq");
        assert_eq!(metadata.model, "llama3-8b-8192");
        assert!(metadata.requires_api_key);
    }
}
