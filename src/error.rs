use thiserror::Error;

// ─── Top-level error hierarchy ───────────────────────────────────────────────

/// Structured error hierarchy for `verified-card`.
///
/// Library callers can match on these to decide recovery strategy; internal
/// plumbing (config loading, HTTP setup) keeps using `anyhow::Result` for
/// ad-hoc context chains.
#[derive(Debug, Error)]
pub enum CardError {
    // ── Config ───────────────────────────────────────────────────────────
    #[error("config: {0}")]
    Config(#[from] ConfigError),

    // ── Transport / RPC ─────────────────────────────────────────────────
    #[error("transport: {0}")]
    Transport(#[from] TransportError),

    // ── Generic fallthrough (wraps anyhow for interop) ──────────────────
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// ─── Config errors ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load config: {0}")]
    Load(String),

    #[error("validation failed: {0}")]
    Validation(String),

    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

// ─── Verification errors ─────────────────────────────────────────────────────

/// Failures that collapse a verification call into the fallback verdict.
///
/// The `Display` text is what ends up (truncated) in the fallback `reason`,
/// so variants keep their messages short.
#[derive(Debug, Error)]
pub enum VerificationError {
    /// The generation call itself failed (transport, timeout, missing key).
    #[error("{0}")]
    Backend(String),

    /// The backend answered with text that is not valid JSON.
    #[error("{0}")]
    MalformedResponse(String),

    /// Valid JSON, but not an object.
    #[error("expected a JSON object, got {0}")]
    UnexpectedShape(&'static str),
}

// ─── Transport errors ────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("rpc request to {url} failed: {message}")]
    Request { url: String, message: String },

    #[error("rpc error {code}: {message}")]
    Rpc { code: i64, message: String },

    #[error("rpc response missing result")]
    MissingResult,
}

/// Shorthand result type for the crate.
pub type Result<T> = std::result::Result<T, CardError>;
