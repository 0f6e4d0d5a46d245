use super::normalize::{Normalization, normalize_outcome};
use super::prompt::build_verification_prompt;
use super::types::{Submission, VerificationVerdict};
use crate::core::providers::{PromptExecutor, ResponseFormat};
use crate::error::VerificationError;
use std::sync::Arc;

/// Constant liveness answer of [`VerificationOracle::health_check`].
pub const HEALTH_CHECK_MESSAGE: &str = "VerifiedCard contract is live";

/// Stateless verifier: one prompt, one generation call, one canonical verdict.
///
/// Clones share the executor and nothing else, so concurrent calls need no
/// coordination.
#[derive(Clone)]
pub struct VerificationOracle {
    executor: Arc<dyn PromptExecutor>,
}

impl VerificationOracle {
    pub fn new(executor: Arc<dyn PromptExecutor>) -> Self {
        Self { executor }
    }

    pub fn executor_name(&self) -> &str {
        self.executor.name()
    }

    /// Verify one card. Every failure comes back as the fallback verdict.
    pub async fn verify_card(&self, name: &str, role: &str) -> VerificationVerdict {
        self.verify_detailed(name, role).await.into_verdict()
    }

    pub async fn verify_submission(&self, submission: &Submission) -> VerificationVerdict {
        self.verify_card(&submission.name, &submission.role).await
    }

    /// Same as [`Self::verify_card`], keeping track of which terminal state
    /// was reached.
    pub async fn verify_detailed(&self, name: &str, role: &str) -> Normalization {
        let raw = match build_verification_prompt(name, role) {
            Ok(prompt) => {
                self.executor
                    .exec_prompt(&prompt, ResponseFormat::Json)
                    .await
            }
            Err(error) => Err(error),
        }
        .map_err(|error| VerificationError::Backend(format!("{error:#}")));

        if let Err(error) = &raw {
            tracing::warn!(executor = self.executor.name(), %error, "generation call failed");
        }

        let outcome = normalize_outcome(raw);
        match &outcome {
            Normalization::Normalized(verdict) => tracing::info!(
                verified = verdict.verified,
                verdict = %verdict.verdict,
                "card verified by backend"
            ),
            Normalization::Fallback(verdict) => tracing::warn!(
                reason = %verdict.reason,
                "card verification fell back to rejection"
            ),
        }
        outcome
    }

    pub fn health_check(&self) -> &'static str {
        HEALTH_CHECK_MESSAGE
    }
}
