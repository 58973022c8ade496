use std::borrow::Cow;

use log::{debug, warn};

use super::candidates::Candidates;
use super::render::{HtmlRenderer, TagRenderer};

/// Builds head tags for a page, one SEO field at a time.
///
/// Every field method takes a single value or an ordered list of candidates
/// and renders the first non-blank one. When nothing qualifies the method
/// returns an empty string, except for the fixed `og:video:type` tags.
/// Multiple tags are separated by newlines.
#[derive(Debug, Clone, Default)]
pub struct SeoMetaBuilder<R = HtmlRenderer> {
    renderer: R,
}

impl SeoMetaBuilder {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<R: TagRenderer> SeoMetaBuilder<R> {
    pub fn with_renderer(renderer: R) -> Self {
        SeoMetaBuilder { renderer }
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// `<title>`, `og:title` and `twitter:title`
    pub fn title<C: Candidates + ?Sized>(&self, value: &C) -> String {
        self.title_with_suffix(value, "")
    }

    /// Like [`title`](Self::title), with `suffix` appended to the `<title>`
    /// element only. The meta variants keep the bare title.
    pub fn title_with_suffix<C: Candidates + ?Sized>(&self, value: &C, suffix: &str) -> String {
        let Some(title) = pick("title", value) else {
            return String::new();
        };
        let r = &self.renderer;
        join(vec![
            r.content_tag("title", &format!("{}{}", title, suffix)),
            r.meta_property("og:title", &title),
            r.meta_name("twitter:title", &title),
        ])
    }

    pub fn description<C: Candidates + ?Sized>(&self, value: &C) -> String {
        let Some(description) = pick("description", value) else {
            return String::new();
        };
        let r = &self.renderer;
        join(vec![
            r.meta_name("description", &description),
            r.meta_property("og:description", &description),
            r.meta_name("twitter:description", &description),
        ])
    }

    pub fn image_url<C: Candidates + ?Sized>(&self, value: &C) -> String {
        let Some(url) = pick("image_url", value) else {
            return String::new();
        };
        let r = &self.renderer;
        join(vec![
            r.meta_property("og:image", &url),
            r.meta_name("twitter:image", &url),
        ])
    }

    /// `og:url`, `twitter:url` and `<link rel="canonical">`
    pub fn canonical_url<C: Candidates + ?Sized>(&self, value: &C) -> String {
        let Some(url) = pick("canonical_url", value) else {
            return String::new();
        };
        let r = &self.renderer;
        join(vec![
            r.meta_property("og:url", &url),
            r.meta_name("twitter:url", &url),
            r.link("canonical", &url),
        ])
    }

    /// A player page meant for an iframe. `og:video:type` is always `text/html`.
    pub fn iframe_video_url<C: Candidates + ?Sized>(&self, value: &C) -> String {
        self.video_url("iframe_video_url", value, "twitter:player", "text/html")
    }

    /// A raw video file. `og:video:type` is always `video/mp4`.
    pub fn stream_video_url<C: Candidates + ?Sized>(&self, value: &C) -> String {
        self.video_url("stream_video_url", value, "twitter:player:stream", "video/mp4")
    }

    fn video_url<C: Candidates + ?Sized>(
        &self,
        field: &str,
        value: &C,
        twitter_name: &str,
        video_type: &str,
    ) -> String {
        let r = &self.renderer;
        let mut tags = Vec::with_capacity(3);
        if let Some(url) = pick(field, value) {
            tags.push(r.meta_property("og:video:url", &url));
            tags.push(r.meta_name(twitter_name, &url));
        }
        tags.push(r.meta_property("og:video:type", video_type));
        join(tags)
    }

    pub fn site_name<C: Candidates + ?Sized>(&self, value: &C) -> String {
        match pick("site_name", value) {
            Some(name) => self.renderer.meta_property("og:site_name", &name),
            None => String::new(),
        }
    }

    /// `twitter:card`, e.g. `summary`, `summary_large_image` or `player`
    pub fn card_type<C: Candidates + ?Sized>(&self, value: &C) -> String {
        match pick("card_type", value) {
            Some(card) => self.renderer.meta_name("twitter:card", &card),
            None => String::new(),
        }
    }

    /// Player dimensions as `[width, height]`, written as whole numbers in
    /// both the `twitter:player:*` and `og:video:*` namespaces.
    pub fn video_size<N: Dimension>(&self, size: [N; 2]) -> String {
        let width = dimension("width", size[0].to_f64());
        let height = dimension("height", size[1].to_f64());
        let r = &self.renderer;
        let mut tags = Vec::with_capacity(4);
        if let Some(w) = &width {
            tags.push(r.meta_name("twitter:player:width", w));
        }
        if let Some(h) = &height {
            tags.push(r.meta_name("twitter:player:height", h));
        }
        if let Some(w) = &width {
            tags.push(r.meta_property("og:video:width", w));
        }
        if let Some(h) = &height {
            tags.push(r.meta_property("og:video:height", h));
        }
        join(tags)
    }
}

/// A numeric video dimension. Implemented for the primitive integer and
/// float types so pixel sizes can be passed without casting.
pub trait Dimension: Copy {
    fn to_f64(self) -> f64;
}

macro_rules! impl_dimension {
    ($($t:ty),*) => {
        $(impl Dimension for $t {
            fn to_f64(self) -> f64 {
                self as f64
            }
        })*
    };
}

impl_dimension!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize, f32, f64);

fn pick<'a, C: Candidates + ?Sized>(field: &str, value: &'a C) -> Option<Cow<'a, str>> {
    let picked = value.first_present();
    if picked.is_none() {
        debug!("seo: no usable {} value, tag skipped", field);
    }
    picked
}

fn dimension(axis: &str, value: f64) -> Option<String> {
    if !value.is_finite() {
        warn!("seo: ignoring non-finite video {} ({})", axis, value);
        return None;
    }
    Some((value.trunc() as i64).to_string())
}

fn join(tags: Vec<String>) -> String {
    tags.join("\n")
}
