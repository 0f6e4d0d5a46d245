use reqwest::Client;
use std::time::Duration;

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Shared client for generation backends and the RPC caller.
///
/// `request_timeout` bounds the whole exchange; a timeout surfaces as an
/// ordinary request error and therefore as a fallback verdict.
pub fn build_http_client(request_timeout: Duration) -> Client {
    Client::builder()
        .timeout(request_timeout)
        .connect_timeout(CONNECT_TIMEOUT.min(request_timeout))
        .pool_max_idle_per_host(4)
        .build()
        .unwrap_or_else(|error| {
            tracing::warn!(%error, "falling back to default HTTP client");
            Client::new()
        })
}
