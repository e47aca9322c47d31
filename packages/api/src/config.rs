//! Backend configuration from `glidemate.toml` and environment variables.

use std::path::Path;
use std::time::Duration;

use store::GlideMateConfig;

use crate::error::ApiError;

/// Overrides `[api] base_url`.
pub const ENV_BASE_URL: &str = "GLIDEMATE_API_URL";
/// Overrides `[api] timeout_secs`.
pub const ENV_TIMEOUT_SECS: &str = "GLIDEMATE_API_TIMEOUT_SECS";

/// Connection settings for [`crate::ApiClient`].
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    /// Scheme, host and port, without a trailing slash.
    pub base_url: String,
    pub timeout: Option<Duration>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_config(&GlideMateConfig::default())
    }
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            ..Self::default()
        }
    }

    pub fn from_config(config: &GlideMateConfig) -> Self {
        Self {
            base_url: config.api.base_url.trim_end_matches('/').to_string(),
            timeout: timeout_from_secs(config.api.timeout_secs),
        }
    }

    /// Read `glidemate.toml` from `data_dir`, then apply `.env` and environment overrides.
    pub fn load(data_dir: &Path) -> Self {
        dotenvy::dotenv().ok();

        let config = Self::from_config(&GlideMateConfig::load_from_dir(data_dir));
        config.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply `GLIDEMATE_*` overrides looked up through `lookup`.
    /// Unparseable values are ignored.
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(url) = lookup(ENV_BASE_URL).filter(|u| !u.trim().is_empty()) {
            self.base_url = url.trim().trim_end_matches('/').to_string();
        }
        if let Some(raw) = lookup(ENV_TIMEOUT_SECS) {
            match raw.trim().parse::<u64>() {
                Ok(secs) => self.timeout = timeout_from_secs(secs),
                Err(_) => tracing::warn!("{} is not a number: {:?}", ENV_TIMEOUT_SECS, raw),
            }
        }
        self
    }

    /// Check that the base URL is an absolute http(s) URL.
    pub fn validate(&self) -> Result<(), ApiError> {
        let url = reqwest::Url::parse(&self.base_url)
            .map_err(|e| ApiError::Config(format!("base_url {:?}: {}", self.base_url, e)))?;
        match url.scheme() {
            "http" | "https" => Ok(()),
            other => Err(ApiError::Config(format!(
                "base_url must use http or https, got {other}"
            ))),
        }
    }
}

fn timeout_from_secs(secs: u64) -> Option<Duration> {
    (secs > 0).then(|| Duration::from_secs(secs))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_from_file_config() {
        let config = ApiConfig::default();
        assert_eq!(config.base_url, "http://121.127.165.28:5000");
        assert_eq!(config.timeout, Some(Duration::from_secs(15)));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_environment_overrides() {
        let config = ApiConfig::default().with_overrides(env(&[
            (ENV_BASE_URL, "http://10.0.2.2:5000/"),
            (ENV_TIMEOUT_SECS, "0"),
        ]));
        assert_eq!(config.base_url, "http://10.0.2.2:5000");
        assert_eq!(config.timeout, None);
    }

    #[test]
    fn test_bad_overrides_are_ignored() {
        let config = ApiConfig::default().with_overrides(env(&[
            (ENV_BASE_URL, "  "),
            (ENV_TIMEOUT_SECS, "soon"),
        ]));
        assert_eq!(config, ApiConfig::default());
    }

    #[test]
    fn test_validate_rejects_non_http() {
        assert!(ApiConfig::new("ftp://example.com").validate().is_err());
        assert!(ApiConfig::new("not a url").validate().is_err());
        assert!(ApiConfig::new("https://glidemate.example/").validate().is_ok());
        assert_eq!(ApiConfig::new("https://glidemate.example/").base_url, "https://glidemate.example");
    }

    #[test]
    fn test_load_reads_file_in_data_dir() {
        let dir = std::env::temp_dir().join(format!("glidemate_api_cfg_{}", std::process::id()));
        let _ = std::fs::create_dir_all(&dir);
        std::fs::write(
            dir.join(GlideMateConfig::filename()),
            "[api]\nbase_url = \"http://127.0.0.1:5999\"\ntimeout_secs = 3\n",
        )
        .unwrap();

        let config = ApiConfig::from_config(&GlideMateConfig::load_from_dir(&dir));
        assert_eq!(config.base_url, "http://127.0.0.1:5999");
        assert_eq!(config.timeout, Some(Duration::from_secs(3)));

        let _ = std::fs::remove_dir_all(&dir);
    }
}
