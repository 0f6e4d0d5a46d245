//! Executor for any backend speaking the OpenAI-compatible
//! `/chat/completions` API (OpenRouter, OpenAI, Groq, Ollama, ...).

use super::traits::{PromptExecutor, ResponseFormat};
use crate::core::verification::RawModelOutput;
use crate::utils::sanitize_api_error;
use anyhow::Context;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::pin::Pin;

pub struct OpenAiCompatibleExecutor {
    pub(crate) name: String,
    pub(crate) base_url: String,
    pub(crate) api_key: Option<String>,
    pub(crate) model: String,
    temperature: f64,
    /// Local backends (Ollama) accept unauthenticated requests.
    requires_key: bool,
    cached_chat_url: String,
    client: Client,
}

impl OpenAiCompatibleExecutor {
    pub fn new(
        name: &str,
        base_url: &str,
        api_key: Option<&str>,
        model: &str,
        temperature: f64,
        client: Client,
    ) -> Self {
        let base_url = base_url.trim_end_matches('/').to_string();
        let cached_chat_url = if base_url.ends_with("chat/completions") {
            base_url.clone()
        } else {
            format!("{base_url}/chat/completions")
        };

        Self {
            name: name.to_string(),
            base_url,
            api_key: api_key.map(ToString::to_string),
            model: model.to_string(),
            temperature,
            requires_key: true,
            cached_chat_url,
            client,
        }
    }

    pub fn without_key_requirement(mut self) -> Self {
        self.requires_key = false;
        self
    }

    fn chat_completions_url(&self) -> &str {
        &self.cached_chat_url
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<Message<'a>>,
    temperature: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_format: Option<ResponseFormatSpec>,
}

#[derive(Debug, Serialize)]
struct Message<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ResponseFormatSpec {
    #[serde(rename = "type")]
    kind: &'static str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    #[serde(default)]
    content: Option<String>,
}

fn extract_content(response: ChatResponse, executor_name: &str) -> anyhow::Result<String> {
    response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .filter(|content| !content.trim().is_empty())
        .ok_or_else(|| anyhow::anyhow!("No response from {executor_name}"))
}

impl OpenAiCompatibleExecutor {
    async fn complete(&self, prompt: &str, format: ResponseFormat) -> anyhow::Result<String> {
        if self.requires_key && self.api_key.is_none() {
            anyhow::bail!(
                "{} API key not set. Set VERIFIED_CARD_API_KEY or api_key in config.toml.",
                self.name
            );
        }

        let request = ChatRequest {
            model: &self.model,
            messages: vec![Message {
                role: "user",
                content: prompt,
            }],
            temperature: self.temperature,
            response_format: (format == ResponseFormat::Json).then_some(ResponseFormatSpec {
                kind: "json_object",
            }),
        };

        let mut builder = self.client.post(self.chat_completions_url()).json(&request);
        if let Some(key) = &self.api_key {
            builder = builder.bearer_auth(key);
        }

        let response = builder
            .send()
            .await
            .with_context(|| format!("{} request failed", self.name))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("{} API error ({status}): {}", self.name, sanitize_api_error(&body));
        }

        let chat: ChatResponse = response
            .json()
            .await
            .with_context(|| format!("{} response decode failed", self.name))?;
        extract_content(chat, &self.name)
    }
}

impl PromptExecutor for OpenAiCompatibleExecutor {
    fn name(&self) -> &str {
        &self.name
    }

    fn exec_prompt<'a>(
        &'a self,
        prompt: &'a str,
        format: ResponseFormat,
    ) -> Pin<Box<dyn Future<Output = anyhow::Result<RawModelOutput>> + Send + 'a>> {
        Box::pin(async move {
            let text = self.complete(prompt, format).await?;
            tracing::debug!(executor = %self.name, chars = text.len(), "generation call returned");
            Ok(RawModelOutput::Text(text))
        })
    }
}
