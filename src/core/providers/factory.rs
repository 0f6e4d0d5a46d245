use super::compatible::OpenAiCompatibleExecutor;
use super::http_client::build_http_client;
use super::traits::PromptExecutor;
use crate::config::Config;
use std::time::Duration;

/// Resolve the API key for an executor.
///
/// Resolution order:
/// 1. Explicit key (config file or `--api-key`), trimmed and ignored if empty
/// 2. Provider-specific environment variable (e.g. `OPENROUTER_API_KEY`)
/// 3. Generic fallbacks (`VERIFIED_CARD_API_KEY`, `API_KEY`)
pub fn resolve_api_key(name: &str, explicit_api_key: Option<&str>) -> Option<String> {
    if let Some(key) = explicit_api_key.map(str::trim).filter(|k| !k.is_empty()) {
        return Some(key.to_string());
    }

    let provider_env: &[&str] = match name {
        "openrouter" => &["OPENROUTER_API_KEY"],
        "openai" => &["OPENAI_API_KEY"],
        "groq" => &["GROQ_API_KEY"],
        "mistral" => &["MISTRAL_API_KEY"],
        "deepseek" => &["DEEPSEEK_API_KEY"],
        "together" | "together-ai" => &["TOGETHER_API_KEY"],
        _ => &[],
    };

    provider_env
        .iter()
        .chain(["VERIFIED_CARD_API_KEY", "API_KEY"].iter())
        .filter_map(|var| std::env::var(var).ok())
        .map(|value| value.trim().to_string())
        .find(|value| !value.is_empty())
}

/// `(display name, base URL, default model)` for a known backend.
fn backend_spec(name: &str) -> Option<(&'static str, &'static str, &'static str)> {
    let spec = match name {
        "openrouter" => (
            "OpenRouter",
            "https://openrouter.ai/api/v1",
            "openai/gpt-4o-mini",
        ),
        "openai" => ("OpenAI", "https://api.openai.com/v1", "gpt-4o-mini"),
        "groq" => (
            "Groq",
            "https://api.groq.com/openai/v1",
            "llama-3.3-70b-versatile",
        ),
        "mistral" => (
            "Mistral",
            "https://api.mistral.ai/v1",
            "mistral-small-latest",
        ),
        "deepseek" => ("DeepSeek", "https://api.deepseek.com/v1", "deepseek-chat"),
        "together" | "together-ai" => (
            "Together AI",
            "https://api.together.xyz/v1",
            "meta-llama/Llama-3.3-70B-Instruct-Turbo",
        ),
        "ollama" => ("Ollama", "http://localhost:11434/v1", "llama3.2"),
        _ => return None,
    };
    Some(spec)
}

/// Build the executor selected by `config.provider`.
///
/// Accepts the names above or `custom:<base-url>` for any other
/// OpenAI-compatible endpoint.
pub fn create_executor(config: &Config) -> anyhow::Result<Box<dyn PromptExecutor>> {
    let name = config.provider.trim();
    let client = build_http_client(Duration::from_secs(config.request_timeout_secs));
    let api_key = resolve_api_key(name, config.api_key.as_deref());

    if let Some(base_url) = name.strip_prefix("custom:") {
        if base_url.is_empty() {
            anyhow::bail!("Custom provider requires a URL. Format: custom:https://your-api.com");
        }
        let model = config
            .model
            .as_deref()
            .ok_or_else(|| anyhow::anyhow!("Custom provider requires `model` to be set"))?;
        return Ok(Box::new(OpenAiCompatibleExecutor::new(
            "Custom",
            base_url,
            api_key.as_deref(),
            model,
            config.temperature,
            client,
        )));
    }

    let (display_name, base_url, default_model) =
        backend_spec(name).ok_or_else(|| anyhow::anyhow!("Unknown provider: {name}"))?;
    let model = config.model.as_deref().unwrap_or(default_model);

    let executor = OpenAiCompatibleExecutor::new(
        display_name,
        base_url,
        api_key.as_deref(),
        model,
        config.temperature,
        client,
    );
    tracing::debug!(provider = name, model, "generation executor ready");

    if name == "ollama" {
        Ok(Box::new(executor.without_key_requirement()))
    } else {
        Ok(Box::new(executor))
    }
}
