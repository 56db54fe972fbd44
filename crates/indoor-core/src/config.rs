//! API configuration
//!
//! Values are baked in at build time (`INDOOR_API_URL`, `INDOOR_DATA_SOURCE`)
//! since a WASM bundle has no process environment to read at runtime.

/// Hosted REST API used when nothing else is configured
pub const DEFAULT_BASE_URL: &str = "https://indoor-api.onrender.com/api";

/// Where page data comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DataSourceKind {
    /// Remote REST API
    #[default]
    Remote,
    /// In-memory repositories seeded with demo records
    Demo,
}

impl DataSourceKind {
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "demo" | "mock" | "memory" => DataSourceKind::Demo,
            _ => DataSourceKind::Remote,
        }
    }
}

/// Configuration for the API client and repositories
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    /// Base URL including the `/api` prefix
    pub base_url: String,
    /// Remote API or demo data
    pub data_source: DataSourceKind,
    /// Request timeout in seconds (host builds only)
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            data_source: DataSourceKind::Remote,
            timeout_secs: 30,
        }
    }
}

impl ApiConfig {
    /// Build configuration from compile-time environment
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(url) = option_env!("INDOOR_API_URL") {
            config = config.with_base_url(url);
        }
        if let Some(source) = option_env!("INDOOR_DATA_SOURCE") {
            config = config.with_data_source(DataSourceKind::parse(source));
        }
        config
    }

    /// Set the base URL; trailing slashes are dropped
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        let url = url.into();
        self.base_url = url.trim().trim_end_matches('/').to_string();
        self
    }

    pub fn with_data_source(mut self, data_source: DataSourceKind) -> Self {
        self.data_source = data_source;
        self
    }

    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout_secs = seconds;
        self
    }

    pub fn is_demo(&self) -> bool {
        self.data_source == DataSourceKind::Demo
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_points_at_hosted_api() {
        let config = ApiConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert!(!config.is_demo());
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let config = ApiConfig::default().with_base_url("http://localhost:3000/api/");
        assert_eq!(config.base_url, "http://localhost:3000/api");
    }

    #[test]
    fn test_data_source_parse() {
        assert_eq!(DataSourceKind::parse("Demo"), DataSourceKind::Demo);
        assert_eq!(DataSourceKind::parse(" mock "), DataSourceKind::Demo);
        assert_eq!(DataSourceKind::parse("remote"), DataSourceKind::Remote);
        assert_eq!(DataSourceKind::parse("anything"), DataSourceKind::Remote);
    }
}
