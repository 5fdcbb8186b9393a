//! MiniJinja filter registration.

use minijinja::{Environment, Value};

use crate::theme::Theme;

/// Registers the filters available to link templates.
pub(crate) fn register_filters(env: &mut Environment<'static>) {
    // Escapes a value for use inside a double-quoted HTML attribute.
    // Usage: href="{{ link.href | html_attr }}"
    env.add_filter("html_attr", |value: Value| -> String { escape_attr(&value.to_string()) });

    // Maps a theme name to its prefers-color-scheme query; unknown names pass through.
    // Usage: media="{{ link.theme | media }}"
    env.add_filter("media", |value: Value| -> String {
        let name = value.to_string();
        match name.parse::<Theme>() {
            Ok(theme) => theme.media_query().to_string(),
            Err(_) => name,
        }
    });
}

pub(crate) fn escape_attr(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}
