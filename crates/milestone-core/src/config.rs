//! API Configuration
//!
//! Base URL of the milestones service. Baked in at build time from
//! `MILESTONES_API_URL`; a browser bundle has no runtime environment.

use crate::upsert::resource_path;

pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Collection segment appended to the base URL
pub const COLLECTION: &str = "milestones";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// Explicit base URL; trailing slashes are dropped, blank means default
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        let trimmed = base_url.trim().trim_end_matches('/');
        let base_url = if trimmed.is_empty() {
            DEFAULT_API_URL.to_string()
        } else {
            trimmed.to_string()
        };
        Self { base_url }
    }

    pub fn from_env() -> Self {
        Self::from_value(option_env!("MILESTONES_API_URL"))
    }

    fn from_value(value: Option<&str>) -> Self {
        Self::new(value.unwrap_or(DEFAULT_API_URL))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn collection_url(&self) -> String {
        format!("{}/{}", self.base_url, COLLECTION)
    }

    pub fn resource_url(&self, id: &str) -> String {
        resource_path(&self.collection_url(), id)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_base() {
        let config = ApiConfig::from_value(None);
        assert_eq!(config.base_url(), "http://localhost:8000");
        assert_eq!(config.collection_url(), "http://localhost:8000/milestones");
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let config = ApiConfig::new("https://api.example.com/v1/");
        assert_eq!(config.collection_url(), "https://api.example.com/v1/milestones");
        assert_eq!(config.resource_url("7"), "https://api.example.com/v1/milestones/7");
    }

    #[test]
    fn test_blank_falls_back_to_default() {
        assert_eq!(ApiConfig::new("  ").base_url(), DEFAULT_API_URL);
        assert_eq!(ApiConfig::from_value(Some("")).base_url(), DEFAULT_API_URL);
    }
}
