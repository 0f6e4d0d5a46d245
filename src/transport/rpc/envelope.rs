use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

pub const JSONRPC_VERSION: &str = "2.0";

/// A JSON-RPC request as received from an arbitrary client.
///
/// Every field is optional and untyped: the gateway echoes `jsonrpc` and `id`
/// back verbatim and never validates `method` or `params`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RpcRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jsonrpc: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<Value>,
}

impl RpcRequest {
    /// Decode a request body leniently. Anything that is not a JSON object,
    /// including an empty or garbled body, is treated as `{}`.
    pub fn from_body(body: &[u8]) -> Self {
        let fields = match serde_json::from_slice::<Value>(body) {
            Ok(Value::Object(fields)) => fields,
            _ => Map::new(),
        };

        Self {
            jsonrpc: fields.get("jsonrpc").cloned(),
            id: fields.get("id").cloned(),
            method: fields.get("method").cloned(),
            params: fields.get("params").cloned(),
        }
    }

    /// A `gl_call` envelope invoking `method(args...)` on `to`.
    pub fn gl_call(id: u64, to: &str, method: &str, args: &[&str]) -> Self {
        Self {
            jsonrpc: Some(json!(JSONRPC_VERSION)),
            id: Some(json!(id)),
            method: Some(json!("gl_call")),
            params: Some(json!([{
                "to": to,
                "data": {"method": method, "args": args},
            }])),
        }
    }

    pub fn method_name(&self) -> Option<&str> {
        self.method.as_ref().and_then(Value::as_str)
    }

    /// The contract method named inside `gl_call` params, if the shape allows.
    pub fn target_method(&self) -> Option<&str> {
        self.params
            .as_ref()?
            .as_array()?
            .first()?
            .get("data")?
            .get("method")?
            .as_str()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RpcErrorObject {
    pub code: i64,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RpcResponse<T> {
    #[serde(default = "default_jsonrpc")]
    pub jsonrpc: Value,
    #[serde(default)]
    pub id: Value,
    #[serde(default = "Option::default", skip_serializing_if = "Option::is_none")]
    pub result: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<RpcErrorObject>,
}

fn default_jsonrpc() -> Value {
    json!(JSONRPC_VERSION)
}

impl<T> RpcResponse<T> {
    /// Successful reply echoing the caller's `jsonrpc` and `id`
    /// (`"2.0"` and `1` when the caller sent none).
    pub fn echoing(request: &RpcRequest, result: T) -> Self {
        Self {
            jsonrpc: request.jsonrpc.clone().unwrap_or_else(default_jsonrpc),
            id: request.id.clone().unwrap_or_else(|| json!(1)),
            result: Some(result),
            error: None,
        }
    }
}
