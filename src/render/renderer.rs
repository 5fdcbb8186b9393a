//! Pre-compiled link tag renderer.

use minijinja::{context, AutoEscape, Environment};

use super::filters::register_filters;
use super::tags::{link_tags, LinkOptions};
use crate::error::FaviconError;
use crate::set::FaviconSet;
use crate::theme::ThemeChoice;

const TEMPLATE_NAME: &str = "favicon_links.html";

/// The built-in template: one `<link>` per line, no trailing newline.
///
/// Templates receive `links`, a list of [`LinkTag`](super::LinkTag)s.
pub const DEFAULT_LINKS_TEMPLATE: &str = r#"{% for link in links -%}
<link rel="icon" href="{{ link.href | html_attr }}" sizes="{{ link.sizes | html_attr }}"
{%- if link.mime %} type="{{ link.mime | html_attr }}"{% endif %}
{%- if link.media %} media="{{ link.media | html_attr }}"{% endif %}>
{%- if not loop.last %}
{% endif %}
{%- endfor %}"#;

/// Renders favicon sets into `<link>` markup.
///
/// The template is compiled once and reused across renders.
///
/// # Example
///
/// ```rust
/// use favicons::{FaviconSet, LinkRenderer, Theme, ThemeChoice};
///
/// let renderer = LinkRenderer::new().unwrap();
/// let html = renderer
///     .render(&FaviconSet::defaults(), ThemeChoice::Fixed(Theme::Dark))
///     .unwrap();
/// assert_eq!(html.lines().count(), 6);
/// assert!(html.contains(r#"media="(prefers-color-scheme: dark)""#));
/// ```
pub struct LinkRenderer {
    env: Environment<'static>,
    options: LinkOptions,
}

impl LinkRenderer {
    /// Creates a renderer with the built-in template and default options.
    pub fn new() -> Result<Self, FaviconError> {
        Self::with_options(LinkOptions::default())
    }

    /// Creates a renderer with the built-in template and explicit options.
    pub fn with_options(options: LinkOptions) -> Result<Self, FaviconError> {
        let mut env = Environment::new();
        // Attribute escaping is done by the `html_attr` filter so paths keep their slashes.
        env.set_auto_escape_callback(|_| AutoEscape::None);
        register_filters(&mut env);
        env.add_template(TEMPLATE_NAME, DEFAULT_LINKS_TEMPLATE)?;
        Ok(Self { env, options })
    }

    /// Replaces the link template.
    ///
    /// The template is compiled immediately; errors are returned if syntax is invalid.
    pub fn with_template(mut self, source: &str) -> Result<Self, FaviconError> {
        self.env
            .add_template_owned(TEMPLATE_NAME.to_string(), source.to_string())?;
        Ok(self)
    }

    pub fn options(&self) -> &LinkOptions {
        &self.options
    }

    /// Renders the tags for the themes selected by `choice`.
    pub fn render(&self, set: &FaviconSet, choice: ThemeChoice) -> Result<String, FaviconError> {
        let links = link_tags(set, choice, &self.options);
        tracing::debug!(links = links.len(), ?choice, "rendering favicon links");
        let tmpl = self.env.get_template(TEMPLATE_NAME)?;
        Ok(tmpl.render(context! { links => links })?)
    }
}

/// Renders link tags with the built-in template and default options.
pub fn render_links(set: &FaviconSet, choice: ThemeChoice) -> Result<String, FaviconError> {
    LinkRenderer::new()?.render(set, choice)
}
