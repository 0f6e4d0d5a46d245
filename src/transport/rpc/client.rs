use super::envelope::{RpcRequest, RpcResponse};
use crate::config::Config;
use crate::core::providers::build_http_client;
use crate::core::verification::{RawModelOutput, VerificationVerdict, fallback_verdict, normalize};
use crate::error::{Result, TransportError};
use reqwest::Client;
use serde_json::Value;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

const DEFAULT_CONTRACT_ADDRESS: &str = "0x0";
const VERIFY_METHOD: &str = "verify_card";

/// Sends `verify_card` envelopes to a JSON-RPC endpoint (the mock gateway or
/// a real node) and normalizes whatever comes back.
pub struct RpcClient {
    url: String,
    contract_address: String,
    client: Client,
    next_id: AtomicU64,
}

impl RpcClient {
    pub fn new(url: &str, contract_address: Option<&str>, client: Client) -> Self {
        Self {
            url: url.trim().to_string(),
            contract_address: contract_address
                .map(str::trim)
                .filter(|address| !address.is_empty())
                .unwrap_or(DEFAULT_CONTRACT_ADDRESS)
                .to_string(),
            client,
            next_id: AtomicU64::new(1),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            &config.rpc.url,
            config.rpc.contract_address.as_deref(),
            build_http_client(Duration::from_secs(config.request_timeout_secs)),
        )
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    fn next_request(&self, name: &str, role: &str) -> RpcRequest {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        RpcRequest::gl_call(id, &self.contract_address, VERIFY_METHOD, &[name, role])
    }

    /// Send one envelope and return the raw `result` value.
    pub async fn call_verify_card(&self, name: &str, role: &str) -> Result<Value> {
        let request = self.next_request(name, role);
        tracing::debug!(url = %self.url, id = ?request.id, "sending gl_call");

        let request_error = |error: reqwest::Error| TransportError::Request {
            url: self.url.clone(),
            message: error.to_string(),
        };

        let response = self
            .client
            .post(&self.url)
            .json(&request)
            .send()
            .await
            .map_err(request_error)?
            .error_for_status()
            .map_err(request_error)?;

        let envelope: RpcResponse<Value> = response.json().await.map_err(request_error)?;

        if let Some(error) = envelope.error {
            return Err(TransportError::Rpc {
                code: error.code,
                message: error.message,
            }
            .into());
        }

        envelope
            .result
            .filter(|result| !result.is_null())
            .ok_or_else(|| TransportError::MissingResult.into())
    }

    /// Like [`Self::call_verify_card`], but always yields a canonical verdict.
    pub async fn verify_card(&self, name: &str, role: &str) -> VerificationVerdict {
        match self.call_verify_card(name, role).await {
            Ok(Value::String(text)) => normalize(RawModelOutput::Text(text)).into_verdict(),
            Ok(value) => normalize(RawModelOutput::Structured(value)).into_verdict(),
            Err(error) => {
                tracing::warn!(url = %self.url, %error, "rpc verification failed");
                fallback_verdict(error)
            }
        }
    }
}
