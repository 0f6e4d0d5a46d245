use super::types::{RawModelOutput, Verdict, VerificationVerdict};
use crate::error::VerificationError;
use crate::utils::{scrub_secret_patterns, truncate_chars};
use serde_json::{Map, Value};
use std::fmt::Display;

pub const FALLBACK_REASON_PREFIX: &str = "Verification error: ";
/// Reason used when the backend answered without one.
pub const DEFAULT_REASON: &str = "Verification failed.";
const MAX_ERROR_CHARS: usize = 60;

/// Terminal state of one normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Normalization {
    /// The backend answered with an object; missing fields were defaulted.
    Normalized(VerificationVerdict),
    /// Something failed along the way; the verdict is the safe rejection.
    Fallback(VerificationVerdict),
}

impl Normalization {
    pub fn verdict(&self) -> &VerificationVerdict {
        match self {
            Self::Normalized(verdict) | Self::Fallback(verdict) => verdict,
        }
    }

    pub fn into_verdict(self) -> VerificationVerdict {
        match self {
            Self::Normalized(verdict) | Self::Fallback(verdict) => verdict,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback(_))
    }
}

/// The fixed safe-rejection record for a failed pipeline.
///
/// The error text is scrubbed of credentials and cut to 60 characters.
pub fn fallback_verdict(error: impl Display) -> VerificationVerdict {
    let message = error.to_string();
    let scrubbed = scrub_secret_patterns(&message);
    VerificationVerdict::rejected(format!(
        "{FALLBACK_REASON_PREFIX}{}",
        truncate_chars(&scrubbed, MAX_ERROR_CHARS)
    ))
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn into_object(raw: RawModelOutput) -> Result<Map<String, Value>, VerificationError> {
    let value = match raw {
        RawModelOutput::Text(text) => serde_json::from_str::<Value>(&text)
            .map_err(|e| VerificationError::MalformedResponse(e.to_string()))?,
        RawModelOutput::Structured(value) => value,
    };

    match value {
        Value::Object(map) => Ok(map),
        other => Err(VerificationError::UnexpectedShape(json_kind(&other))),
    }
}

fn verdict_from_fields(fields: &Map<String, Value>) -> VerificationVerdict {
    let mut verified = fields
        .get("verified")
        .and_then(Value::as_bool)
        .unwrap_or(false);
    let mut verdict = fields
        .get("verdict")
        .and_then(Value::as_str)
        .and_then(|s| s.parse::<Verdict>().ok())
        .unwrap_or_default();
    let reason = fields
        .get("reason")
        .and_then(Value::as_str)
        .unwrap_or(DEFAULT_REASON)
        .to_string();
    let mut nickname = fields
        .get("nickname")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();

    // A rejection can never count as verified, and an unverified card can
    // neither claim VERIFIED nor carry a nickname.
    if verdict == Verdict::Rejected {
        verified = false;
    }
    if !verified {
        if verdict == Verdict::Verified {
            verdict = Verdict::Rejected;
        }
        nickname.clear();
    }

    VerificationVerdict {
        verified,
        verdict,
        reason,
        nickname,
    }
}

/// Turn raw backend output into a canonical verdict. Never fails.
pub fn normalize(raw: RawModelOutput) -> Normalization {
    match into_object(raw) {
        Ok(fields) => Normalization::Normalized(verdict_from_fields(&fields)),
        Err(error) => Normalization::Fallback(fallback_verdict(error)),
    }
}

/// Like [`normalize`], but also absorbs a failed generation call.
pub fn normalize_outcome(outcome: Result<RawModelOutput, VerificationError>) -> Normalization {
    match outcome {
        Ok(raw) => normalize(raw),
        Err(error) => Normalization::Fallback(fallback_verdict(error)),
    }
}
