pub mod candidates;
pub mod meta;
pub mod options;
pub mod render;

// Re-export commonly used types
pub use candidates::Candidates;
pub use meta::{Dimension, SeoMetaBuilder};
pub use options::SeoOptions;
pub use render::{HtmlRenderer, TagRenderer};

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
