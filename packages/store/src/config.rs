//! # App configuration: `glidemate.toml`
//!
//! Defines the TOML configuration file GlideMate reads from its data directory
//! (filename: [`GlideMateConfig::filename`] = `"glidemate.toml"`). The backend host
//! differs between deployments, so it is configured here instead of at call sites.
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! base_url = "http://121.127.165.28:5000"
//! timeout_secs = 15               # 0 disables the request timeout
//!
//! [assets]
//! site_image_dir = "/assets/sites"
//! ```
//!
//! Every struct derives `Default`, so a missing or empty config file is the same as
//! the default configuration.

use serde::{Deserialize, Serialize};

/// Top-level configuration stored in `glidemate.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GlideMateConfig {
    #[serde(default)]
    pub api: ApiSection,
    #[serde(default)]
    pub assets: AssetsSection,
}

/// Backend connection settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiSection {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in seconds. 0 disables the timeout.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "http://121.127.165.28:5000".to_string()
}

fn default_timeout_secs() -> u64 {
    15
}

impl Default for ApiSection {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Where bundled images are served from inside the app bundle.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AssetsSection {
    #[serde(default = "default_site_image_dir")]
    pub site_image_dir: String,
}

fn default_site_image_dir() -> String {
    "/assets/sites".to_string()
}

impl Default for AssetsSection {
    fn default() -> Self {
        Self {
            site_image_dir: default_site_image_dir(),
        }
    }
}

impl AssetsSection {
    /// Path of a bundled site image, e.g. `/assets/sites/default.png`.
    pub fn site_image_path(&self, file: &str) -> String {
        format!("{}/{}", self.site_image_dir.trim_end_matches('/'), file)
    }
}

impl GlideMateConfig {
    /// Builder method to point at a different backend.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.api.base_url = base_url.into();
        self
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "glidemate.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Read `glidemate.toml` from `dir`. A missing or malformed file yields the defaults.
    pub fn load_from_dir(dir: &std::path::Path) -> Self {
        let path = dir.join(Self::filename());
        let Ok(raw) = std::fs::read_to_string(&path) else {
            return Self::default();
        };
        match Self::from_toml(&raw) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Ignoring invalid {}: {}", path.display(), e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_is_default() {
        let config = GlideMateConfig::from_toml("").unwrap();
        assert_eq!(config, GlideMateConfig::default());
        assert_eq!(config.api.base_url, "http://121.127.165.28:5000");
        assert_eq!(config.api.timeout_secs, 15);
    }

    #[test]
    fn test_partial_section_keeps_other_defaults() {
        let config = GlideMateConfig::from_toml("[api]\nbase_url = \"http://localhost:5000\"\n").unwrap();
        assert_eq!(config.api.base_url, "http://localhost:5000");
        assert_eq!(config.api.timeout_secs, 15);
        assert_eq!(config.assets.site_image_dir, "/assets/sites");
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = GlideMateConfig::default().with_base_url("https://glidemate.example");
        let text = config.to_toml().unwrap();
        assert_eq!(GlideMateConfig::from_toml(&text).unwrap(), config);
    }

    #[test]
    fn test_site_image_path() {
        let mut assets = AssetsSection::default();
        assert_eq!(assets.site_image_path("a.png"), "/assets/sites/a.png");
        assets.site_image_dir = "/img/".to_string();
        assert_eq!(assets.site_image_path("a.png"), "/img/a.png");
    }

    #[test]
    fn test_load_from_dir() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(GlideMateConfig::load_from_dir(dir.path()), GlideMateConfig::default());

        std::fs::write(dir.path().join("glidemate.toml"), "[api]\ntimeout_secs = 0\n").unwrap();
        assert_eq!(GlideMateConfig::load_from_dir(dir.path()).api.timeout_secs, 0);

        std::fs::write(dir.path().join("glidemate.toml"), "not = [valid").unwrap();
        assert_eq!(GlideMateConfig::load_from_dir(dir.path()), GlideMateConfig::default());
    }
}
