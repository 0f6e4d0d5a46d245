use crate::core::verification::RawModelOutput;
use std::future::Future;
use std::pin::Pin;

/// Output shape requested from the generation backend.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum ResponseFormat {
    Text,
    #[default]
    Json,
}

/// The one external capability the oracle consumes: run a prompt once.
///
/// Implementations must report failures as `Err` instead of handing back
/// malformed data, and should honor [`ResponseFormat::Json`] when the backend
/// supports a strict-JSON mode.
pub trait PromptExecutor: Send + Sync {
    /// Executor identifier (e.g. "openrouter", "groq").
    fn name(&self) -> &str;

    fn exec_prompt<'a>(
        &'a self,
        prompt: &'a str,
        format: ResponseFormat,
    ) -> Pin<Box<dyn Future<Output = anyhow::Result<RawModelOutput>> + Send + 'a>>;
}
