use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A card submission. Both fields are untrusted and only ever embedded into
/// the prompt; the backend decides whether they are acceptable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    pub name: String,
    pub role: String,
}

impl Submission {
    pub fn new(name: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            role: role.into(),
        }
    }
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Verdict {
    /// Accepted.
    Verified,
    /// Accepted, but resembles existing content.
    Similar,
    #[default]
    Rejected,
}

impl Verdict {
    pub fn is_accepting(self) -> bool {
        matches!(self, Self::Verified | Self::Similar)
    }
}

impl FromStr for Verdict {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "VERIFIED" => Ok(Self::Verified),
            "SIMILAR" => Ok(Self::Similar),
            "REJECTED" => Ok(Self::Rejected),
            _ => Err(()),
        }
    }
}

/// The canonical result of a verification call. Every field is always present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationVerdict {
    pub verified: bool,
    pub verdict: Verdict,
    pub reason: String,
    pub nickname: String,
}

impl VerificationVerdict {
    pub fn rejected(reason: impl Into<String>) -> Self {
        Self {
            verified: false,
            verdict: Verdict::Rejected,
            reason: reason.into(),
            nickname: String::new(),
        }
    }

    /// The fixed answer served by the mock JSON-RPC gateway.
    pub fn mocked() -> Self {
        Self {
            verified: true,
            verdict: Verdict::Verified,
            reason: "mocked by local RPC".into(),
            nickname: String::new(),
        }
    }
}

/// Whatever the generation backend handed back, before any validation.
#[derive(Debug, Clone, PartialEq)]
pub enum RawModelOutput {
    /// JSON encoded as text; may be syntactically invalid.
    Text(String),
    /// An already-decoded value; expected to be an object.
    Structured(serde_json::Value),
}

impl From<String> for RawModelOutput {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&str> for RawModelOutput {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<serde_json::Value> for RawModelOutput {
    fn from(value: serde_json::Value) -> Self {
        Self::Structured(value)
    }
}
