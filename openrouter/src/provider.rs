use crate::types::{ChatRequest, ChatResponse, ModelInfo};
use async_trait::async_trait;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CompletionError {
    #[error("API credential missing")]
    MissingCredential,

    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Service unavailable: {message}")]
    ServiceUnavailable { message: String },

    #[error("Authentication failed")]
    Authentication,

    #[error("Rate limit or quota exceeded")]
    RateLimit,

    #[error("API returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Model {model} returned an empty completion")]
    EmptyCompletion { model: String },
}

pub type CompletionResult<T> = Result<T, CompletionError>;

#[async_trait]
pub trait CompletionProvider: Send + Sync {
    async fn chat(&self, request: ChatRequest) -> CompletionResult<ChatResponse>;

    /// One user message against the provider's default model; returns the
    /// first choice's text.
    async fn simple_completion(&self, prompt: &str, max_tokens: u32) -> CompletionResult<String>;

    async fn list_models(&self) -> CompletionResult<Vec<ModelInfo>>;

    async fn health_check(&self) -> CompletionResult<()>;

    fn provider_name(&self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ChatMessage, Choice, FinishReason, MessageRole};

    struct MockProvider;

    #[async_trait]
    impl CompletionProvider for MockProvider {
        async fn chat(&self, _request: ChatRequest) -> CompletionResult<ChatResponse> {
            Ok(ChatResponse {
                id: Some("gen-mock".to_string()),
                model: Some("mock-model".to_string()),
                choices: vec![Choice {
                    message: ChatMessage::assistant("Mock response"),
                    finish_reason: Some(FinishReason::Stop),
                }],
                usage: None,
            })
        }

        async fn simple_completion(
            &self,
            _prompt: &str,
            _max_tokens: u32,
        ) -> CompletionResult<String> {
            Ok("Mock response".to_string())
        }

        async fn list_models(&self) -> CompletionResult<Vec<ModelInfo>> {
            Ok(vec![ModelInfo {
                id: "mock-model".to_string(),
                name: Some("Mock Model".to_string()),
                context_length: Some(8192),
            }])
        }

        async fn health_check(&self) -> CompletionResult<()> {
            Ok(())
        }

        fn provider_name(&self) -> &'static str {
            "mock"
        }
    }

    #[tokio::test]
    async fn test_mock_provider() {
        let provider = MockProvider;

        let request = ChatRequest::new("mock-model", vec![ChatMessage::user("Hello")]);

        let response = provider.chat(request).await.unwrap();
        assert_eq!(response.choices.len(), 1);
        assert_eq!(response.choices[0].message.role, MessageRole::Assistant);

        let models = provider.list_models().await.unwrap();
        assert_eq!(models.len(), 1);
        assert_eq!(models[0].id, "mock-model");

        provider.health_check().await.unwrap();
        assert_eq!(provider.provider_name(), "mock");
    }

    #[test]
    fn test_mock_simple_completion() {
        let text = tokio_test::block_on(MockProvider.simple_completion("Hello", 100)).unwrap();
        assert_eq!(text, "Mock response");
    }
}
