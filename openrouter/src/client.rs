use crate::config::OpenRouterConfig;
use crate::provider::{CompletionError, CompletionProvider, CompletionResult};
use crate::types::{ChatMessage, ChatRequest, ChatResponse, ModelInfo};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::StatusCode;
use serde::Deserialize;
use tracing::{debug, info};

#[derive(Deserialize)]
struct ModelsResponse {
    data: Vec<ModelInfo>,
}

#[derive(Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Deserialize)]
struct ApiErrorDetail {
    message: String,
}

/// OpenRouter chat-completion client. Owns its connection pool, which is
/// released when the client is dropped on any exit path.
pub struct OpenRouterClient {
    http_client: reqwest::Client,
    base_url: String,
    default_model: String,
}

impl OpenRouterClient {
    pub fn new(config: OpenRouterConfig) -> CompletionResult<Self> {
        config
            .validate()
            .map_err(|msg| CompletionError::InvalidConfig { message: msg })?;

        let mut headers = HeaderMap::new();
        let mut auth = HeaderValue::from_str(&format!("Bearer {}", config.api_key)).map_err(
            |_| CompletionError::InvalidConfig {
                message: "API key contains invalid header characters".to_string(),
            },
        )?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);

        if let Some(referer) = &config.referer {
            let value =
                HeaderValue::from_str(referer).map_err(|_| CompletionError::InvalidConfig {
                    message: "Referer contains invalid header characters".to_string(),
                })?;
            headers.insert("HTTP-Referer", value);
        }

        if let Some(title) = &config.title {
            let value =
                HeaderValue::from_str(title).map_err(|_| CompletionError::InvalidConfig {
                    message: "Title contains invalid header characters".to_string(),
                })?;
            headers.insert("X-Title", value);
        }

        let http_client = reqwest::Client::builder()
            .timeout(config.timeout)
            .default_headers(headers)
            .build()
            .map_err(CompletionError::Network)?;

        Ok(Self {
            http_client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            default_model: config.default_model,
        })
    }

    pub fn default_model(&self) -> &str {
        &self.default_model
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    fn map_transport_error(e: reqwest::Error) -> CompletionError {
        if e.is_timeout() {
            CompletionError::ServiceUnavailable {
                message: "Request timeout".to_string(),
            }
        } else if e.is_connect() {
            CompletionError::ServiceUnavailable {
                message: "Cannot connect to OpenRouter".to_string(),
            }
        } else {
            CompletionError::Network(e)
        }
    }

    fn map_error_status(status: StatusCode, body: &str) -> CompletionError {
        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => CompletionError::Authentication,
            StatusCode::PAYMENT_REQUIRED | StatusCode::TOO_MANY_REQUESTS => {
                CompletionError::RateLimit
            }
            _ => CompletionError::Api {
                status: status.as_u16(),
                message: Self::extract_error_message(body),
            },
        }
    }

    fn extract_error_message(body: &str) -> String {
        match serde_json::from_str::<ApiErrorBody>(body) {
            Ok(parsed) => parsed.error.message,
            Err(_) => body.to_string(),
        }
    }
}

#[async_trait]
impl CompletionProvider for OpenRouterClient {
    async fn chat(&self, request: ChatRequest) -> CompletionResult<ChatResponse> {
        debug!("Starting chat request with model: {}", request.model);

        let http_response = self
            .http_client
            .post(self.endpoint("chat/completions"))
            .json(&request)
            .send()
            .await
            .map_err(Self::map_transport_error)?;

        let status = http_response.status();
        if !status.is_success() {
            let body = http_response.text().await.unwrap_or_default();
            return Err(Self::map_error_status(status, &body));
        }

        let chat_response: ChatResponse =
            http_response.json().await.map_err(CompletionError::Network)?;

        info!("Chat request completed successfully");

        Ok(chat_response)
    }

    async fn simple_completion(&self, prompt: &str, max_tokens: u32) -> CompletionResult<String> {
        let request = ChatRequest::new(
            self.default_model.clone(),
            vec![ChatMessage::user(prompt)],
        )
        .with_max_tokens(max_tokens);

        let response = self.chat(request).await?;

        let content = response
            .choices
            .first()
            .and_then(|choice| choice.message.content.clone())
            .unwrap_or_default();

        if content.is_empty() {
            return Err(CompletionError::EmptyCompletion {
                model: self.default_model.clone(),
            });
        }

        Ok(content)
    }

    async fn list_models(&self) -> CompletionResult<Vec<ModelInfo>> {
        debug!("Listing available models");

        let http_response = self
            .http_client
            .get(self.endpoint("models"))
            .send()
            .await
            .map_err(Self::map_transport_error)?;

        let status = http_response.status();
        if !status.is_success() {
            let body = http_response.text().await.unwrap_or_default();
            return Err(Self::map_error_status(status, &body));
        }

        let models: ModelsResponse =
            http_response.json().await.map_err(CompletionError::Network)?;

        Ok(models.data)
    }

    async fn health_check(&self) -> CompletionResult<()> {
        self.list_models().await.map(|_| ())
    }

    fn provider_name(&self) -> &'static str {
        "openrouter"
    }
}
