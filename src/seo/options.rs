use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::candidates::Candidates;
use super::meta::SeoMetaBuilder;
use super::render::TagRenderer;
use crate::config::SeoConfig;

/// Every SEO field of one page. Text fields hold a single value or a list of
/// candidates, so they are kept as JSON values and resolved at render time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeoOptions {
    pub title: Option<Value>,
    pub title_suffix: Option<String>,
    pub description: Option<Value>,
    pub image_url: Option<Value>,
    pub canonical_url: Option<Value>,
    pub iframe_video_url: Option<Value>,
    pub stream_video_url: Option<Value>,
    pub site_name: Option<Value>,
    pub card_type: Option<Value>,
    pub video_size: Option<[f64; 2]>,
    /// Page path, joined onto `canonical_base` when falling back to site defaults.
    pub path: Option<String>,
}

impl SeoOptions {
    /// Append the site defaults as last-resort candidates behind the page's
    /// own values. A blank page title falls back to the bare site name; the
    /// site's title suffix is only added to a real page title.
    pub fn with_defaults(mut self, config: &SeoConfig) -> Self {
        let canonical = self
            .path
            .as_deref()
            .and_then(|path| config.canonical_for(path));
        let has_page_title = self
            .title
            .as_ref()
            .and_then(|t| t.first_present())
            .is_some();

        self.title = with_fallback(self.title, config.site_name.as_deref());
        if self.title_suffix.is_none() && has_page_title {
            self.title_suffix = config.title_suffix.clone();
        }
        self.description = with_fallback(self.description, config.default_description.as_deref());
        self.image_url = with_fallback(self.image_url, config.default_image_url.as_deref());
        self.canonical_url = with_fallback(self.canonical_url, canonical.as_deref());
        self.site_name = with_fallback(self.site_name, config.site_name.as_deref());
        self.card_type = with_fallback(self.card_type, config.card_type.as_deref());
        self
    }
}

fn with_fallback(value: Option<Value>, default: Option<&str>) -> Option<Value> {
    let Some(default) = default else {
        return value;
    };
    let mut candidates = match value {
        Some(Value::Array(items)) => items,
        Some(v) => vec![v],
        None => Vec::new(),
    };
    candidates.push(Value::String(default.to_string()));
    Some(Value::Array(candidates))
}

impl<R: TagRenderer> SeoMetaBuilder<R> {
    /// Render every field set in `options` as one head fragment.
    ///
    /// The fixed `og:video:type` tag only appears when a video URL field was
    /// supplied at all.
    pub fn render(&self, options: &SeoOptions) -> String {
        let mut tags = Vec::new();

        if let Some(title) = &options.title {
            let suffix = options.title_suffix.as_deref().unwrap_or("");
            tags.push(self.title_with_suffix(title, suffix));
        }
        if let Some(description) = &options.description {
            tags.push(self.description(description));
        }
        if let Some(site_name) = &options.site_name {
            tags.push(self.site_name(site_name));
        }
        if let Some(card_type) = &options.card_type {
            tags.push(self.card_type(card_type));
        }
        if let Some(url) = &options.canonical_url {
            tags.push(self.canonical_url(url));
        }
        if let Some(url) = &options.image_url {
            tags.push(self.image_url(url));
        }
        if let Some(url) = &options.iframe_video_url {
            tags.push(self.iframe_video_url(url));
        }
        if let Some(url) = &options.stream_video_url {
            tags.push(self.stream_video_url(url));
        }
        if let Some(size) = options.video_size {
            tags.push(self.video_size(size));
        }

        tags.retain(|t| !t.is_empty());
        tags.join("\n")
    }
}
