//! Head tags for SEO and social sharing: `<title>`, description, Open Graph,
//! Twitter Card and canonical links, rendered from values that may be blank
//! or given as ordered lists of fallbacks.

pub mod config;
pub mod seo;
pub mod templates;


pub use config::SeoConfig;
pub use seo::{Candidates, Dimension, HtmlRenderer, SeoMetaBuilder, SeoOptions, TagRenderer};
pub use templates::register_functions;
