use std::time::Duration;

/// Creates an HTTP client for a single call to the provider.
///
/// - `timeout` bounds the whole request, so a stalled provider surfaces as an
///   error instead of holding the request open.
/// - `pool_max_idle_per_host` is zero because the client is dropped right
///   after the call it was built for.
pub(super) fn get_client(timeout: Duration) -> Result<reqwest::Client, reqwest::Error> {
    reqwest::Client::builder()
        .timeout(timeout)
        .pool_max_idle_per_host(0)
        .build()
}
