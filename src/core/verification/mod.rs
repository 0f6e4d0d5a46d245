//! Card verification: prompt construction, the single generation call, and
//! normalization of whatever comes back into a canonical verdict.

pub mod normalize;
pub mod offline;
pub mod oracle;
pub mod prompt;
pub mod types;

pub use normalize::{
    DEFAULT_REASON, FALLBACK_REASON_PREFIX, Normalization, fallback_verdict, normalize,
    normalize_outcome,
};
pub use offline::verify_offline;
pub use oracle::{HEALTH_CHECK_MESSAGE, VerificationOracle};
pub use prompt::{ALLOWED_ROLES, NICKNAME_VOCABULARY, build_verification_prompt};
pub use types::{RawModelOutput, Submission, Verdict, VerificationVerdict};
