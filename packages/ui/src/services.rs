//! App-wide services provided through context: the API client and the site image table.
//!
//! [`ServicesProvider`] reads `glidemate.toml` from [`data_dir`] once when it mounts and
//! provides:
//! - [`ApiContext`], the configured [`api::ApiClient`]
//! - [`SiteGallery`], the name → image lookup for takeoff sites

use std::path::PathBuf;

use api::{ApiClient, ApiConfig, ApiError};
use dioxus::prelude::*;
use store::config::AssetsSection;
use store::{GlideMateConfig, SiteImages};

/// Platform data directory for GlideMate (`<data_dir>/glidemate`).
pub fn data_dir() -> PathBuf {
    #[cfg(not(target_arch = "wasm32"))]
    {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("glidemate")
    }
    #[cfg(target_arch = "wasm32")]
    {
        PathBuf::from(".")
    }
}

/// The configured API client, if one could be built.
#[derive(Clone, Debug)]
pub struct ApiContext {
    client: Option<ApiClient>,
}

impl ApiContext {
    pub fn from_config(config: &ApiConfig) -> Self {
        match ApiClient::new(config) {
            Ok(client) => {
                tracing::info!("Using backend {}", client.base_url());
                Self {
                    client: Some(client),
                }
            }
            Err(e) => {
                tracing::error!("Cannot build API client: {}", e);
                Self { client: None }
            }
        }
    }

    pub fn client(&self) -> Result<ApiClient, ApiError> {
        self.client
            .clone()
            .ok_or_else(|| ApiError::Config("API client is not configured".to_string()))
    }

    /// Absolute URL for a media path returned by the backend.
    pub fn media_url(&self, path: &str) -> String {
        match &self.client {
            Some(client) => client.media_url(path),
            None => path.to_string(),
        }
    }
}

/// Name → image lookup resolved to bundled asset paths.
#[derive(Clone, Debug, PartialEq)]
pub struct SiteGallery {
    images: SiteImages,
    assets: AssetsSection,
}

impl SiteGallery {
    pub fn new(images: SiteImages, assets: AssetsSection) -> Self {
        Self { images, assets }
    }

    /// Asset path of the photo for `site_name`, falling back to the default photo.
    pub fn image_src(&self, site_name: &str) -> String {
        self.assets.site_image_path(self.images.image_for(site_name))
    }
}

impl Default for SiteGallery {
    fn default() -> Self {
        Self::new(SiteImages::builtin(), AssetsSection::default())
    }
}

pub fn use_api() -> ApiContext {
    use_context::<ApiContext>()
}

pub fn use_site_gallery() -> SiteGallery {
    use_context::<SiteGallery>()
}

/// Provider component for [`ApiContext`] and [`SiteGallery`].
#[component]
pub fn ServicesProvider(children: Element) -> Element {
    use_context_provider(|| {
        let dir = data_dir();
        ApiContext::from_config(&ApiConfig::load(&dir))
    });
    use_context_provider(|| {
        let config = GlideMateConfig::load_from_dir(&data_dir());
        SiteGallery::new(SiteImages::builtin(), config.assets)
    });

    rsx! {
        {children}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gallery_resolves_bundled_paths() {
        let gallery = SiteGallery::default();
        assert_eq!(gallery.image_src("각산이륙장"), "/assets/sites/GakSanTakeOff.png");
        assert_eq!(gallery.image_src("미지의 언덕"), "/assets/sites/default.png");
    }

    #[test]
    fn test_api_context_without_client() {
        let ctx = ApiContext::from_config(&ApiConfig::new("not-a-url"));
        assert!(matches!(ctx.client(), Err(ApiError::Config(_))));
        assert_eq!(ctx.media_url("/uploads/a.jpg"), "/uploads/a.jpg");
    }

    #[test]
    fn test_api_context_media_url() {
        let ctx = ApiContext::from_config(&ApiConfig::new("http://127.0.0.1:5000"));
        assert_eq!(ctx.media_url("/uploads/a.jpg"), "http://127.0.0.1:5000/uploads/a.jpg");
        assert_eq!(ctx.media_url("https://cdn.example/b.jpg"), "https://cdn.example/b.jpg");
    }
}
