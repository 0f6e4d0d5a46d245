use reqwest::StatusCode;
use serde_json::{Value, json};
use std::time::Duration;
use verified_card::transport::gateway::run_gateway_with_listener;
use verified_card::transport::rpc::RpcClient;
use verified_card::{VerificationVerdict, Verdict};

struct GatewayTestServer {
    port: u16,
    handle: tokio::task::JoinHandle<anyhow::Result<()>>,
}

impl GatewayTestServer {
    async fn start() -> Self {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("ephemeral gateway listener should bind");
        let port = listener
            .local_addr()
            .expect("ephemeral gateway listener should expose local address")
            .port();

        let handle = tokio::spawn(run_gateway_with_listener(listener));
        wait_until_gateway_ready(port).await;

        Self { port, handle }
    }

    fn url(&self) -> String {
        format!("http://127.0.0.1:{}/", self.port)
    }
}

impl Drop for GatewayTestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn wait_until_gateway_ready(port: u16) {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_millis(200))
        .build()
        .expect("reqwest client should be built");

    for _ in 0..80 {
        let probe = client
            .post(format!("http://127.0.0.1:{port}/"))
            .body("{}")
            .send()
            .await;
        if matches!(probe, Ok(resp) if resp.status() == StatusCode::OK) {
            return;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }

    panic!("gateway did not become ready on port {port}");
}

#[tokio::test]
async fn gl_call_envelope_gets_fixed_result() {
    let server = GatewayTestServer::start().await;

    let response = reqwest::Client::new()
        .post(server.url())
        .json(&json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": "gl_call",
            "params": [{"to": "0x0", "data": {"method": "verify_card", "args": ["Alice", "molecule"]}}]
        }))
        .send()
        .await
        .expect("gateway request should succeed");

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.expect("body should be JSON");
    assert_eq!(
        body,
        json!({
            "jsonrpc": "2.0",
            "id": 1,
            "result": {
                "verified": true,
                "verdict": "VERIFIED",
                "reason": "mocked by local RPC",
                "nickname": ""
            }
        })
    );
}

#[tokio::test]
async fn garbled_body_still_gets_ok() {
    let server = GatewayTestServer::start().await;

    let response = reqwest::Client::new()
        .post(server.url())
        .header("content-type", "application/json")
        .body("this is not json")
        .send()
        .await
        .expect("gateway request should succeed");

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.expect("body should be JSON");
    assert_eq!(body["jsonrpc"], json!("2.0"));
    assert_eq!(body["id"], json!(1));
    assert_eq!(body["result"]["verdict"], json!("VERIFIED"));
}

#[tokio::test]
async fn only_post_root_is_served() {
    let server = GatewayTestServer::start().await;
    let client = reqwest::Client::new();

    let get = client.get(server.url()).send().await.expect("GET should complete");
    assert_eq!(get.status(), StatusCode::METHOD_NOT_ALLOWED);

    let other = client
        .post(format!("http://127.0.0.1:{}/rpc", server.port))
        .body("{}")
        .send()
        .await
        .expect("POST should complete");
    assert_eq!(other.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn oversized_body_is_rejected() {
    let server = GatewayTestServer::start().await;

    let response = reqwest::Client::new()
        .post(server.url())
        .body(vec![b' '; 70_000])
        .send()
        .await
        .expect("request should complete");

    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
}

#[tokio::test]
async fn rpc_client_round_trips_through_gateway() {
    let server = GatewayTestServer::start().await;
    let client = RpcClient::new(&server.url(), None, reqwest::Client::new());

    let first = client.verify_card("Alice", "molecule").await;
    let second = client.verify_card("Bob", "neuron").await;

    assert_eq!(first, VerificationVerdict::mocked());
    assert_eq!(second.verdict, Verdict::Verified);
    assert!(second.verified);
}

#[tokio::test]
async fn concurrent_requests_are_served_independently() {
    let server = GatewayTestServer::start().await;
    let url = server.url();

    let calls: Vec<_> = (0..8)
        .map(|id| {
            let url = url.clone();
            tokio::spawn(async move {
                reqwest::Client::new()
                    .post(url)
                    .json(&json!({"jsonrpc": "2.0", "id": id}))
                    .send()
                    .await
                    .expect("request should succeed")
                    .json::<Value>()
                    .await
                    .expect("body should be JSON")
            })
        })
        .collect();

    for (id, call) in calls.into_iter().enumerate() {
        let body = call.await.expect("task should not panic");
        assert_eq!(body["id"], json!(id));
    }
}
