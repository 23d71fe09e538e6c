//! Live tests against the real OpenRouter endpoint. Ignored by default;
//! run with `cargo test -- --ignored` and OPENROUTER_API_KEY set.

use openrouter::{
    ChatMessage, ChatRequest, CompletionError, CompletionProvider, OpenRouterClient,
    OpenRouterConfig,
};
use std::time::Duration;

const TIMEOUT: Duration = Duration::from_secs(120);

fn make_client() -> OpenRouterClient {
    let api_key = std::env::var("OPENROUTER_API_KEY").expect("OPENROUTER_API_KEY must be set");
    OpenRouterClient::new(OpenRouterConfig::new(api_key).with_timeout(TIMEOUT))
        .expect("client creation")
}

#[tokio::test]
#[ignore]
async fn test_health_check() {
    let client = make_client();

    client.health_check().await.expect("health_check failed");

    let models = client.list_models().await.expect("list_models failed");
    assert!(!models.is_empty(), "model list must not be empty");
    assert!(
        models.iter().all(|m| !m.id.is_empty()),
        "every model must carry an id"
    );
}

#[tokio::test]
#[ignore]
async fn test_simple_completion() {
    let client = make_client();

    let text = client
        .simple_completion("What is 2+2? Answer with a single number.", 100)
        .await
        .expect("simple_completion failed");

    assert!(!text.is_empty(), "completion must not be empty");
}

#[tokio::test]
#[ignore]
async fn test_chat_response_structure() {
    let client = make_client();
    let request = ChatRequest::new(
        client.default_model(),
        vec![ChatMessage::user("Say hello.")],
    )
    .with_max_tokens(50);

    let response = client.chat(request).await.expect("chat failed");

    assert!(!response.choices.is_empty(), "choices must not be empty");
    let usage = response.usage.as_ref().expect("usage must be present");
    assert!(usage.prompt_tokens > 0, "prompt_tokens must be > 0");
}

#[tokio::test]
#[ignore]
async fn test_bad_key_is_authentication_error() {
    let client = OpenRouterClient::new(OpenRouterConfig::new("sk-or-definitely-invalid"))
        .expect("client creation");

    let result = client.simple_completion("Hello", 10).await;
    assert!(
        matches!(result, Err(CompletionError::Authentication)),
        "expected Authentication, got {:?}",
        result
    );
}
