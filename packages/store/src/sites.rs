//! # Takeoff-site image table
//!
//! Every known takeoff site has a bundled photo. The name → file mapping lives in
//! `assets/sites.toml`, embedded at build time and parsed once at init:
//!
//! ```toml
//! default = "default.png"
//!
//! [images]
//! "각산이륙장" = "GakSanTakeOff.png"
//! ```
//!
//! Names with no entry resolve to the `default` file.

use std::collections::HashMap;

use serde::Deserialize;

const BUILTIN_TABLE: &str = include_str!("../assets/sites.toml");

/// Fallback file used when the table itself has no `default` entry.
pub const DEFAULT_IMAGE: &str = "default.png";

/// Keyed lookup from site name to image file name.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct SiteImages {
    #[serde(default = "default_image")]
    default: String,
    #[serde(default)]
    images: HashMap<String, String>,
}

fn default_image() -> String {
    DEFAULT_IMAGE.to_string()
}

impl Default for SiteImages {
    fn default() -> Self {
        Self {
            default: default_image(),
            images: HashMap::new(),
        }
    }
}

impl SiteImages {
    /// The table bundled with the app.
    pub fn builtin() -> Self {
        match Self::from_toml(BUILTIN_TABLE) {
            Ok(table) => table,
            Err(e) => {
                tracing::error!("Bundled site image table is invalid: {}", e);
                Self::default()
            }
        }
    }

    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Image file for `site_name`, or the default file when unmapped.
    pub fn image_for(&self, site_name: &str) -> &str {
        self.images
            .get(site_name.trim())
            .map(String::as_str)
            .unwrap_or(&self.default)
    }

    pub fn default_image(&self) -> &str {
        &self.default
    }

    pub fn is_mapped(&self, site_name: &str) -> bool {
        self.images.contains_key(site_name.trim())
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_table_parses() {
        let table = SiteImages::from_toml(BUILTIN_TABLE).expect("bundled table parses");
        assert!(table.len() > 90);
        assert_eq!(table.default_image(), "default.png");
    }

    #[test]
    fn test_mapped_site_resolves_to_its_image() {
        let table = SiteImages::builtin();
        assert_eq!(table.image_for("각산이륙장"), "GakSanTakeOff.png");
        assert_eq!(table.image_for("문경활공랜드"), "MunGyeongTakeOff.png");
        assert_eq!(table.image_for("고헌산(곰돌이)이륙장"), "GoHeonSanGomDoliTakeOff.png");
    }

    #[test]
    fn test_unmapped_site_falls_back_to_default() {
        let table = SiteImages::builtin();
        assert!(!table.is_mapped("없는이륙장"));
        assert_eq!(table.image_for("없는이륙장"), "default.png");
        assert_eq!(table.image_for(""), "default.png");
    }

    #[test]
    fn test_table_without_default_entry() {
        let table = SiteImages::from_toml("[images]\n\"a\" = \"a.png\"\n").unwrap();
        assert_eq!(table.image_for("a"), "a.png");
        assert_eq!(table.image_for("b"), DEFAULT_IMAGE);
    }
}
