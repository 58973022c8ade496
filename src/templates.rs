use std::collections::HashMap;
use std::sync::Arc;

use tera::{Error, Function, Tera, Value};

use crate::config::SeoConfig;
use crate::seo::{SeoMetaBuilder, SeoOptions, TagRenderer};

type Args = HashMap<String, Value>;
type FieldRenderer<R> = fn(&Shared<R>, &Args) -> tera::Result<String>;

struct Shared<R> {
    builder: SeoMetaBuilder<R>,
    defaults: SeoConfig,
}

struct SeoFunction<R> {
    shared: Arc<Shared<R>>,
    render: FieldRenderer<R>,
}

impl<R: TagRenderer + Send + Sync> Function for SeoFunction<R> {
    fn call(&self, args: &Args) -> tera::Result<Value> {
        (self.render)(&self.shared, args).map(Value::String)
    }

    // Output is markup built from escaped values.
    fn is_safe(&self) -> bool {
        true
    }
}

/// Register the SEO template functions on `tera`:
///
/// ```text
/// {{ seo_title(value=[page.title, section.title], suffix=" | Velvet") }}
/// {{ seo_description(value=page.summary) }}
/// {{ seo_image_url(value=page.cover) }}
/// {{ seo_canonical_url(value=page.permalink) }}
/// {{ seo_iframe_video_url(value=page.player) }}
/// {{ seo_stream_video_url(value=page.mp4) }}
/// {{ seo_site_name(value=config.name) }}
/// {{ seo_card_type(value="player") }}
/// {{ seo_video_size(width=1280, height=720) }}
/// {{ seo_tags(title=page.title, description=page.summary, path=page.path) }}
/// ```
///
/// `seo_tags` falls back to `defaults` for every field the page leaves blank.
pub fn register_functions<R>(tera: &mut Tera, builder: SeoMetaBuilder<R>, defaults: SeoConfig)
where
    R: TagRenderer + Send + Sync + 'static,
{
    let shared = Arc::new(Shared { builder, defaults });
    let functions: [(&str, FieldRenderer<R>); 10] = [
        ("seo_title", render_title),
        ("seo_description", render_description),
        ("seo_image_url", render_image_url),
        ("seo_canonical_url", render_canonical_url),
        ("seo_iframe_video_url", render_iframe_video_url),
        ("seo_stream_video_url", render_stream_video_url),
        ("seo_site_name", render_site_name),
        ("seo_card_type", render_card_type),
        ("seo_video_size", render_video_size),
        ("seo_tags", render_tags),
    ];
    for (name, render) in functions {
        tera.register_function(
            name,
            SeoFunction {
                shared: Arc::clone(&shared),
                render,
            },
        );
    }
}

fn required<'a>(args: &'a Args, function: &str, name: &str) -> tera::Result<&'a Value> {
    args.get(name).ok_or_else(|| {
        Error::msg(format!(
            "Function `{}` requires a `{}` argument",
            function, name
        ))
    })
}

fn required_number(args: &Args, function: &str, name: &str) -> tera::Result<f64> {
    required(args, function, name)?.as_f64().ok_or_else(|| {
        Error::msg(format!(
            "Function `{}` expects `{}` to be a number",
            function, name
        ))
    })
}

fn render_title<R: TagRenderer>(s: &Shared<R>, args: &Args) -> tera::Result<String> {
    let value = required(args, "seo_title", "value")?;
    let suffix = args.get("suffix").and_then(Value::as_str).unwrap_or("");
    Ok(s.builder.title_with_suffix(value, suffix))
}

fn render_description<R: TagRenderer>(s: &Shared<R>, args: &Args) -> tera::Result<String> {
    Ok(s.builder.description(required(args, "seo_description", "value")?))
}

fn render_image_url<R: TagRenderer>(s: &Shared<R>, args: &Args) -> tera::Result<String> {
    Ok(s.builder.image_url(required(args, "seo_image_url", "value")?))
}

fn render_canonical_url<R: TagRenderer>(s: &Shared<R>, args: &Args) -> tera::Result<String> {
    Ok(s.builder.canonical_url(required(args, "seo_canonical_url", "value")?))
}

fn render_iframe_video_url<R: TagRenderer>(s: &Shared<R>, args: &Args) -> tera::Result<String> {
    Ok(s.builder.iframe_video_url(required(args, "seo_iframe_video_url", "value")?))
}

fn render_stream_video_url<R: TagRenderer>(s: &Shared<R>, args: &Args) -> tera::Result<String> {
    Ok(s.builder.stream_video_url(required(args, "seo_stream_video_url", "value")?))
}

fn render_site_name<R: TagRenderer>(s: &Shared<R>, args: &Args) -> tera::Result<String> {
    Ok(s.builder.site_name(required(args, "seo_site_name", "value")?))
}

fn render_card_type<R: TagRenderer>(s: &Shared<R>, args: &Args) -> tera::Result<String> {
    Ok(s.builder.card_type(required(args, "seo_card_type", "value")?))
}

fn render_video_size<R: TagRenderer>(s: &Shared<R>, args: &Args) -> tera::Result<String> {
    let width = required_number(args, "seo_video_size", "width")?;
    let height = required_number(args, "seo_video_size", "height")?;
    Ok(s.builder.video_size([width, height]))
}

fn render_tags<R: TagRenderer>(s: &Shared<R>, args: &Args) -> tera::Result<String> {
    let map: serde_json::Map<String, Value> = args.clone().into_iter().collect();
    let options: SeoOptions = serde_json::from_value(Value::Object(map))
        .map_err(|e| Error::msg(format!("Function `seo_tags` got invalid arguments: {}", e)))?;
    Ok(s.builder.render(&options.with_defaults(&s.defaults)))
}
