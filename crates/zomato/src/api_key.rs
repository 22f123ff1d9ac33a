use std::fmt;

/// Environment variable read by [`ApiKey::from_env`].
pub const API_KEY_ENV: &str = "ZOMATO_API_KEY";

/// The static credential sent with every request.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey {
    key: String,
}

impl ApiKey {
    /// From a raw API key string.
    pub fn from_raw(key: &str) -> Self {
        Self {
            key: key.trim().to_owned(),
        }
    }

    /// Read the API key from `ZOMATO_API_KEY`.
    /// Returns `None` when the variable is unset or blank.
    pub fn from_env() -> Option<Self> {
        Self::from_env_var(API_KEY_ENV)
    }

    pub fn from_env_var(name: &str) -> Option<Self> {
        std::env::var(name)
            .ok()
            .map(|key| Self::from_raw(&key))
            .filter(|key| !key.is_blank())
    }

    pub fn get(&self) -> &str {
        &self.key
    }

    pub(crate) fn is_blank(&self) -> bool {
        self.key.is_empty()
    }
}

// Keeps the key out of logs and panic messages.
impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let preview: String = self.key.chars().take(4).collect();
        f.debug_struct("ApiKey")
            .field("key", &format_args!("{preview}..."))
            .finish()
    }
}
