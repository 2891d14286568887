//! Client configuration.
//!
//! The only setting is where the collection resource lives. It comes from
//! `TODO_API_URL`, falling back to the local development backend.

/// Environment variable holding the API base URL.
pub const API_URL_ENV: &str = "TODO_API_URL";

/// Base URL used when nothing else is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:3000/api";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
        }
    }
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Read `TODO_API_URL`; unset or blank means the default.
    pub fn from_env() -> Self {
        Self::from_value(std::env::var(API_URL_ENV).ok())
    }

    fn from_value(value: Option<String>) -> Self {
        match value {
            Some(url) if !url.trim().is_empty() => Self::new(url.trim()),
            _ => Self::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_falls_back_to_default() {
        assert_eq!(ClientConfig::from_value(None).base_url, DEFAULT_API_URL);
    }

    #[test]
    fn blank_falls_back_to_default() {
        let config = ClientConfig::from_value(Some("  ".to_string()));
        assert_eq!(config, ClientConfig::default());
    }

    #[test]
    fn explicit_value_is_trimmed() {
        let config = ClientConfig::from_value(Some(" https://todos.example.com/api \n".to_string()));
        assert_eq!(config.base_url, "https://todos.example.com/api");
    }
}
