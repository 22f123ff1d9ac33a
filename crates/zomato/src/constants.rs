use std::time::Duration;

/// The default base URL of the Zomato API server
pub const DEFAULT_BASE_URL: &str = "https://developers.zomato.com/api";

/// Version prefix appended to the base URL path for every endpoint
pub const API_VERSION_PREFIX: &str = "/v2.1";

/// The default user agent sent with every request
pub const DEFAULT_USER_AGENT: &str = "zomato-rs";

/// The header to use to send API keys in requests
pub const API_KEY_HEADER: &str = "user-key";

/// Timeout applied by the default HTTP client
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// Bytes of a non-200 response body kept for diagnostics
pub const ERROR_BODY_LIMIT: usize = 64 * 1024;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_base_url_has_no_trailing_slash() {
        assert!(!DEFAULT_BASE_URL.ends_with('/'));
        assert!(API_VERSION_PREFIX.starts_with('/'));
    }
}
