//! Rendering `<link rel="icon">` tags for an HTML head.
//!
//! - [`LinkTag`] / [`link_tags`]: the serializable view model, for callers
//!   that bring their own templating
//! - [`LinkRenderer`]: a pre-compiled minijinja template producing markup
//! - [`render_links`]: one-shot convenience wrapper

mod filters;
mod renderer;
mod tags;

pub use renderer::{render_links, LinkRenderer, DEFAULT_LINKS_TEMPLATE};
pub use tags::{link_tags, LinkOptions, LinkTag};
