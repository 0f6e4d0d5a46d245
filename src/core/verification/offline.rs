//! Local verifier for when no generation backend is configured.
//!
//! Only structural checks happen here (non-empty name, known role); content
//! moderation needs the backend.

use super::prompt::ALLOWED_ROLES;
use super::types::{Verdict, VerificationVerdict};

const INVALID_SUBMISSION_REASON: &str = "Invalid name or role provided.";

const REASON_PATTERNS: [&str; 4] = [
    "is original and appropriate",
    "looks good",
    "verified successfully",
    "seems legitimate",
];

fn nicknames_for(role: &str) -> &'static [&'static str] {
    match role {
        "neuron" => &[
            "Neural Ninja",
            "Net Navigator",
            "Neuron Knight",
            "Signal Sender",
            "Brain Cell Boss",
        ],
        "synapse intern" => &[
            "Synapse Starter",
            "Connection Cadet",
            "Link Learner",
            "Junction Junior",
            "Gap Guru",
        ],
        "synapse" => &[
            "Synapse Surfer",
            "Connection Commander",
            "Bridge Builder",
            "Gap Guardian",
            "Link Legend",
        ],
        "brain intern" => &[
            "Brain Buddy",
            "Cortex Cadet",
            "Think Tank Trainee",
            "Mind Mender",
            "Neuron Newbie",
        ],
        "brain" => &[
            "Brain Boss",
            "Cortex Captain",
            "Mind Master",
            "Think Tank",
            "Neural Network",
        ],
        "singularity" => &[
            "Singularity Sage",
            "AI Architect",
            "Future Fusion",
            "Ultimate Unified",
            "Omega Operator",
        ],
        _ => &["Card Champion"],
    }
}

/// FNV-1a; stable across runs and platforms.
fn stable_hash(s: &str) -> u64 {
    s.bytes().fold(0xcbf2_9ce4_8422_2325, |hash, byte| {
        (hash ^ u64::from(byte)).wrapping_mul(0x0100_0000_01b3)
    })
}

fn pick<'a>(items: &[&'a str], seed: u64) -> &'a str {
    // Lists are tiny, the modulo always fits in usize.
    #[allow(clippy::cast_possible_truncation)]
    let idx = (seed % items.len() as u64) as usize;
    items[idx]
}

/// Verify a card without calling any backend.
///
/// Rejects an empty name or a role outside the closed set; otherwise accepts
/// and derives a role-themed nickname. The same input always yields the same
/// verdict.
pub fn verify_offline(name: &str, role: &str) -> VerificationVerdict {
    let name = name.trim();
    let role = role.trim();

    if name.is_empty() || !ALLOWED_ROLES.contains(&role) {
        return VerificationVerdict::rejected(INVALID_SUBMISSION_REASON);
    }

    let seed = stable_hash(&name.to_lowercase());
    VerificationVerdict {
        verified: true,
        verdict: Verdict::Verified,
        reason: format!("{name} {}.", pick(&REASON_PATTERNS, seed >> 32)),
        nickname: pick(nicknames_for(role), seed).to_string(),
    }
}
