use super::html_escape;

/// The tag-emitting context a builder renders through.
///
/// Implement this to change how markup is produced (attribute quoting,
/// self-closing void elements, a host framework's own tag helper).
pub trait TagRenderer {
    /// A void element such as `meta` or `link`.
    fn tag(&self, name: &str, attrs: &[(&str, &str)]) -> String;

    /// An element wrapping escaped text, such as `title`.
    fn content_tag(&self, name: &str, text: &str) -> String;

    /// Open Graph style `<meta property=.. content=..>`
    fn meta_property(&self, property: &str, content: &str) -> String {
        self.tag("meta", &[("property", property), ("content", content)])
    }

    /// `<meta name=.. content=..>`, used by `description` and Twitter cards
    fn meta_name(&self, name: &str, content: &str) -> String {
        self.tag("meta", &[("name", name), ("content", content)])
    }

    fn link(&self, rel: &str, href: &str) -> String {
        self.tag("link", &[("rel", rel), ("href", href)])
    }
}

/// Plain HTML output. Void elements are left open (`<meta ...>`) unless
/// built with [`HtmlRenderer::xhtml`], which closes them (`<meta ... />`).
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlRenderer {
    self_closing: bool,
}

impl HtmlRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn xhtml() -> Self {
        HtmlRenderer { self_closing: true }
    }
}

impl TagRenderer for HtmlRenderer {
    fn tag(&self, name: &str, attrs: &[(&str, &str)]) -> String {
        let mut out = format!("<{}", name);
        for (key, value) in attrs {
            out.push_str(&format!(r#" {}="{}""#, key, html_escape(value)));
        }
        out.push_str(if self.self_closing { " />" } else { ">" });
        out
    }

    fn content_tag(&self, name: &str, text: &str) -> String {
        format!("<{}>{}</{}>", name, html_escape(text), name)
    }
}
