/// Environment variable holding the backend base url
pub const API_URL_VAR: &str = "JOB_API_URL";
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Reads [`API_URL_VAR`], falling back to [`DEFAULT_API_URL`] when unset or empty.
    /// Loading a `.env` file is left to the binary.
    pub fn from_env() -> Self {
        match std::env::var(API_URL_VAR) {
            Ok(url) if !url.trim().is_empty() => Self::new(url.trim()),
            _ => Self::default(),
        }
    }
}
