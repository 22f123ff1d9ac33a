use crate::constants::DEFAULT_TIMEOUT;

/// The HTTP client used when the caller does not bring one.
pub fn default_http_client() -> Result<reqwest::Client, reqwest::Error> {
    reqwest::Client::builder()
        .gzip(true)
        .brotli(true)
        .timeout(DEFAULT_TIMEOUT)
        .build()
}
