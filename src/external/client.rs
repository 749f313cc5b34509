use std::time::Duration;

use crate::config::UpstreamConfig;
use crate::error::AppResult;

/// Builds the HTTP client used to reach the upstream data API.
///
/// One client is built at startup and shared by every request, so TCP
/// connections are pooled across requests.
///
/// # Features
/// - **Timeouts**: request and connect timeouts from [`UpstreamConfig`]
/// - **Compression**: gzip, deflate, brotli and zstd
/// - **HTTP/2**: adaptive window sizing and keep-alive
/// - **Security**: Rustls for TLS (no OpenSSL dependency)
/// - **User-Agent**: `soa-data-rs/<version>`
pub fn build_http_client(config: &UpstreamConfig) -> AppResult<reqwest::Client> {
    let client = reqwest::Client::builder()
        // Timeouts
        .timeout(Duration::from_secs(config.request_timeout))
        .connect_timeout(Duration::from_secs(config.connect_timeout))
        // Connection pooling
        .pool_max_idle_per_host(10)
        .pool_idle_timeout(Duration::from_secs(90))
        // HTTP/2 settings
        .http2_adaptive_window(true)
        .http2_keep_alive_interval(Duration::from_secs(10))
        .http2_keep_alive_timeout(Duration::from_secs(20))
        // Enable compression (gzip, deflate, brotli, zstd)
        .gzip(true)
        .deflate(true)
        .brotli(true)
        .zstd(true)
        .user_agent(user_agent())
        .build()?;

    Ok(client)
}

fn user_agent() -> String {
    format!("soa-data-rs/{}", crate::pkg_version())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_builds_from_defaults() {
        assert!(build_http_client(&UpstreamConfig::default()).is_ok());
    }

    #[test]
    fn test_user_agent_carries_version() {
        let ua = user_agent();
        assert!(ua.starts_with("soa-data-rs/"));
        assert!(ua.ends_with(crate::pkg_version()));
    }
}
