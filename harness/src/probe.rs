use openrouter::{
    CompletionError, CompletionProvider, CompletionResult, OpenRouterClient, OpenRouterConfig,
};
use std::fmt;
use tracing::debug;

/// Prompt mirroring the crisis-analysis request the pipeline sends in
/// production; any non-empty answer proves the credential and route work.
pub const PROBE_PROMPT: &str =
    "Analyze this text for crisis indicators: 'I'm feeling really hopeless today'";
pub const PROBE_MAX_TOKENS: u32 = 100;
pub const PREVIEW_CHARS: usize = 100;

#[derive(Debug)]
pub enum ProbeFailure {
    /// No credential was supplied; no client is built and no request leaves
    /// the process.
    MissingCredential,
    /// The one live request failed, with the client's structured reason.
    Request(CompletionError),
}

impl fmt::Display for ProbeFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProbeFailure::MissingCredential => write!(f, "API credential missing"),
            ProbeFailure::Request(e) => write!(f, "{}", e),
        }
    }
}

#[derive(Debug)]
pub enum ProbeOutcome {
    Passed {
        /// First ~100 characters of the completion.
        preview: String,
    },
    Failed(ProbeFailure),
}

impl ProbeOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, ProbeOutcome::Passed { .. })
    }
}

fn preview(text: &str) -> String {
    text.chars().take(PREVIEW_CHARS).collect()
}

/// Issues the single probe request against an already-built provider.
pub async fn probe_with_provider(provider: &dyn CompletionProvider) -> ProbeOutcome {
    debug!("Probing {} with a simple completion", provider.provider_name());
    match provider.simple_completion(PROBE_PROMPT, PROBE_MAX_TOKENS).await {
        Ok(text) => ProbeOutcome::Passed {
            preview: preview(&text),
        },
        Err(e) => ProbeOutcome::Failed(ProbeFailure::Request(e)),
    }
}

/// Probe entry point with an injectable provider factory. A missing or
/// empty credential fails before the factory runs, so no client is
/// constructed and no network call is attempted.
pub async fn run_probe_with<P, F>(credential: Option<&str>, make_provider: F) -> ProbeOutcome
where
    P: CompletionProvider,
    F: FnOnce(&str) -> CompletionResult<P>,
{
    let Some(key) = credential.filter(|key| !key.is_empty()) else {
        return ProbeOutcome::Failed(ProbeFailure::MissingCredential);
    };

    match make_provider(key) {
        Ok(provider) => probe_with_provider(&provider).await,
        Err(e) => ProbeOutcome::Failed(ProbeFailure::Request(e)),
    }
}

/// Probes the real OpenRouter endpoint. The credential is a parameter;
/// environment lookup belongs to the binary.
pub async fn run_probe(credential: Option<&str>) -> ProbeOutcome {
    run_probe_with(credential, |key| {
        OpenRouterClient::new(OpenRouterConfig::new(key))
    })
    .await
}
