use std::fs;
use std::path::Path;

use log::{info, warn};
use serde::{Deserialize, Serialize};

pub const DEFAULT_CARD_TYPE: &str = "summary_large_image";

/// Site-wide SEO defaults, read from the `[seo]` table of a site TOML file:
///
/// ```toml
/// [seo]
/// site_name = "Velvet Records"
/// title_suffix = " | Velvet Records"
/// card_type = "summary"
/// default_description = "Independent label from Leeds"
/// default_image_url = "https://velvet.example/og.png"
/// canonical_base = "https://velvet.example"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeoConfig {
    pub site_name: Option<String>,
    pub title_suffix: Option<String>,
    pub card_type: Option<String>,
    pub default_description: Option<String>,
    pub default_image_url: Option<String>,
    pub canonical_base: Option<String>,
}

impl Default for SeoConfig {
    fn default() -> Self {
        SeoConfig {
            site_name: None,
            title_suffix: None,
            card_type: Some(DEFAULT_CARD_TYPE.to_string()),
            default_description: None,
            default_image_url: None,
            canonical_base: None,
        }
    }
}

#[derive(Deserialize)]
struct ConfigFile {
    #[serde(default)]
    seo: SeoConfig,
}

impl SeoConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, String> {
        toml::from_str::<ConfigFile>(s)
            .map(|file| file.seo)
            .map_err(|e| e.to_string())
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, String> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
        Self::from_toml_str(&raw).map_err(|e| format!("Invalid SEO config {}: {}", path.display(), e))
    }

    /// Load the config, falling back to defaults when the file is missing or
    /// cannot be parsed.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            info!("{} not found — using default SEO settings", path.display());
            return Self::default();
        }
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                warn!("{} — using default SEO settings", e);
                Self::default()
            }
        }
    }

    /// Canonical URL for a page path under `canonical_base`.
    pub fn canonical_for(&self, path: &str) -> Option<String> {
        let base = self.canonical_base.as_deref()?.trim();
        if base.is_empty() {
            return None;
        }
        let base = base.trim_end_matches('/');
        let path = path.trim().trim_start_matches('/');
        if path.is_empty() {
            Some(base.to_string())
        } else {
            Some(format!("{}/{}", base, path))
        }
    }
}
