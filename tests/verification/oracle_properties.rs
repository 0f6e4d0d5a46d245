use serde_json::{Value, json};
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use verified_card::core::providers::{PromptExecutor, ResponseFormat};
use verified_card::core::verification::{
    HEALTH_CHECK_MESSAGE, RawModelOutput, Verdict, VerificationOracle, VerificationVerdict,
};

/// Answers every prompt with the same canned output, or fails.
struct CannedExecutor(Result<RawModelOutput, &'static str>);

impl PromptExecutor for CannedExecutor {
    fn name(&self) -> &str {
        "canned"
    }

    fn exec_prompt<'a>(
        &'a self,
        _prompt: &'a str,
        _format: ResponseFormat,
    ) -> Pin<Box<dyn Future<Output = anyhow::Result<RawModelOutput>> + Send + 'a>> {
        let answer = self.0.clone().map_err(|message| anyhow::anyhow!(message));
        Box::pin(async move { answer })
    }
}

fn oracle_answering(answer: impl Into<RawModelOutput>) -> VerificationOracle {
    VerificationOracle::new(Arc::new(CannedExecutor(Ok(answer.into()))))
}

fn oracle_failing(message: &'static str) -> VerificationOracle {
    VerificationOracle::new(Arc::new(CannedExecutor(Err(message))))
}

fn assert_consistent(verdict: &VerificationVerdict) {
    if !verdict.verified {
        assert_ne!(verdict.verdict, Verdict::Verified, "{verdict:?}");
        assert!(verdict.nickname.is_empty(), "{verdict:?}");
    }
    if verdict.verdict == Verdict::Rejected {
        assert!(!verdict.verified, "{verdict:?}");
    }

    let value = serde_json::to_value(verdict).expect("verdict should serialize");
    let fields = value.as_object().expect("verdict should be an object");
    assert_eq!(fields.len(), 4);
    assert!(fields["verified"].is_boolean());
    assert!(fields["verdict"].is_string());
    assert!(fields["reason"].is_string());
    assert!(fields["nickname"].is_string());
}

#[tokio::test]
async fn well_formed_answer_is_returned_unchanged() {
    let oracle = oracle_answering(json!({
        "verified": true,
        "verdict": "VERIFIED",
        "reason": "Original and appropriate.",
        "nickname": "Neural Navigator"
    }));

    let verdict = oracle.verify_card("Alice", "synapse").await;

    assert_eq!(
        serde_json::to_value(&verdict).unwrap(),
        json!({
            "verified": true,
            "verdict": "VERIFIED",
            "reason": "Original and appropriate.",
            "nickname": "Neural Navigator"
        })
    );
}

#[tokio::test]
async fn backend_failure_yields_safe_rejection() {
    let verdict = oracle_failing("connection refused")
        .verify_card("Alice", "neuron")
        .await;

    assert!(!verdict.verified);
    assert_eq!(verdict.verdict, Verdict::Rejected);
    assert!(verdict.reason.starts_with("Verification error:"));
    assert_eq!(verdict.nickname, "");
}

#[tokio::test]
async fn long_backend_error_is_truncated() {
    let message = "x".repeat(500).leak();
    let verdict = oracle_failing(message).verify_card("Alice", "neuron").await;

    assert_eq!(
        verdict.reason.chars().count(),
        "Verification error: ".len() + 60
    );
}

#[tokio::test]
async fn invalid_json_text_yields_fallback() {
    let verdict = oracle_answering("not json at all")
        .verify_card("Alice", "neuron")
        .await;

    assert_eq!(verdict.verdict, Verdict::Rejected);
    assert!(verdict.reason.starts_with("Verification error:"));
}

#[tokio::test]
async fn verified_answer_without_nickname_gets_empty_nickname() {
    let verdict = oracle_answering(r#"{"verified": true, "verdict": "VERIFIED", "reason": "Fine."}"#)
        .verify_card("Bo", "brain")
        .await;

    assert!(verdict.verified);
    assert_eq!(verdict.nickname, "");
}

#[tokio::test]
async fn every_answer_shape_yields_a_consistent_verdict() {
    let answers: Vec<RawModelOutput> = vec![
        json!({}).into(),
        json!([]).into(),
        json!(null).into(),
        json!("VERIFIED").into(),
        json!({"verified": false, "verdict": "VERIFIED", "nickname": "Token Titan"}).into(),
        json!({"verified": true, "verdict": "REJECTED", "nickname": "Chain Champ"}).into(),
        json!({"verified": 1, "verdict": 7, "reason": false, "nickname": 3}).into(),
        json!({"verified": true, "verdict": "similar", "reason": "Close match.", "nickname": "Node Nomad"}).into(),
        "```json\n{\"verified\": true}\n```".into(),
        "".into(),
        "42".into(),
    ];

    for answer in answers {
        let verdict = oracle_answering(answer).verify_card("Alice", "neuron").await;
        assert_consistent(&verdict);
    }
}

#[tokio::test]
async fn concurrent_verifications_do_not_interfere() {
    let oracle = oracle_answering(json!({
        "verified": true,
        "verdict": "VERIFIED",
        "reason": "ok",
        "nickname": "Layer Legend"
    }));

    let handles: Vec<_> = (0..16)
        .map(|i| {
            let oracle = oracle.clone();
            tokio::spawn(async move { oracle.verify_card(&format!("User {i}"), "brain").await })
        })
        .collect();

    for handle in handles {
        let verdict = handle.await.expect("task should not panic");
        assert_eq!(verdict.nickname, "Layer Legend");
    }
}

#[tokio::test]
async fn health_check_is_stable_and_non_empty() {
    let oracle = oracle_failing("down");
    let first = oracle.health_check();
    let _ = oracle.verify_card("Alice", "neuron").await;
    assert_eq!(first, oracle.health_check());
    assert_eq!(first, HEALTH_CHECK_MESSAGE);
    assert!(!first.is_empty());
}

#[test]
fn verdict_decodes_from_wire_shape() {
    let value: Value = json!({
        "verified": false,
        "verdict": "REJECTED",
        "reason": "Spam-like name.",
        "nickname": ""
    });
    let verdict: VerificationVerdict = serde_json::from_value(value).unwrap();
    assert_eq!(verdict, VerificationVerdict::rejected("Spam-like name."));
}
