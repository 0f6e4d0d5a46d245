use crate::core::verification::VerificationVerdict;
use crate::transport::rpc::{RpcRequest, RpcResponse};
use axum::{body::Bytes, response::Json};

/// Best-effort look at what the caller asked for. Only logs; never fails.
fn inspect_call(request: &RpcRequest) {
    match request.method_name() {
        Some(method) if method.to_ascii_lowercase().starts_with("gl") => {
            tracing::debug!(
                method,
                target_method = request.target_method().unwrap_or("<unknown>"),
                "mock gateway received gl-style call"
            );
        }
        _ => {
            if let Some(params) = request.params.as_ref().and_then(|p| p.as_array())
                && !params.is_empty()
            {
                tracing::debug!(params = params.len(), "mock gateway received direct call");
            }
        }
    }
}

/// POST /: answer any envelope with the fixed mocked verdict
pub(super) async fn handle_rpc(body: Bytes) -> Json<RpcResponse<VerificationVerdict>> {
    let request = RpcRequest::from_body(&body);
    inspect_call(&request);
    Json(RpcResponse::echoing(&request, VerificationVerdict::mocked()))
}
