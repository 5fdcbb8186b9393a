//! Tabular output for `favicons list`.

use console::Style;
use serde::Serialize;
use unicode_width::UnicodeWidthStr;

use crate::{FaviconDescriptor, Theme};

const HEADERS: [&str; 4] = ["#", "THEME", "SIZES", "SRC"];

fn theme_style(theme: Theme) -> Style {
    match theme {
        Theme::Light => Style::new().yellow(),
        Theme::Dark => Style::new().blue(),
    }
}

/// Pads `text` to `width` display columns, styling only the visible text.
fn pad(text: &str, width: usize, style: &Style) -> String {
    let fill = width.saturating_sub(text.width());
    format!("{}{}", style.apply_to(text), " ".repeat(fill))
}

/// Renders aligned columns. Colors follow `console`'s terminal detection.
pub(super) fn text(entries: &[(usize, &FaviconDescriptor)]) -> String {
    let rows: Vec<[String; 4]> = entries
        .iter()
        .map(|(index, d)| {
            [
                index.to_string(),
                d.theme().to_string(),
                d.sizes().to_string(),
                d.src().to_string(),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(|h| h.width());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.width());
        }
    }

    let header = Style::new().bold();
    let plain = Style::new();
    let mut out = String::new();
    let line = |cells: [String; 4], styles: [&Style; 4]| -> String {
        let mut parts = Vec::with_capacity(4);
        for (i, cell) in cells.iter().enumerate() {
            if i == cells.len() - 1 {
                parts.push(styles[i].apply_to(cell).to_string());
            } else {
                parts.push(pad(cell, widths[i], styles[i]));
            }
        }
        parts.join("  ")
    };

    out.push_str(&line(HEADERS.map(String::from), [&header; 4]));
    out.push('\n');
    for (row, (_, d)) in rows.into_iter().zip(entries) {
        let tone = theme_style(d.theme());
        out.push_str(&line(row, [&plain, &tone, &plain, &plain]));
        out.push('\n');
    }
    out
}

#[derive(Serialize)]
struct CsvRow<'a> {
    index: usize,
    theme: Theme,
    sizes: String,
    src: &'a str,
    #[serde(rename = "type")]
    mime: Option<&'static str>,
}

pub(super) fn csv(entries: &[(usize, &FaviconDescriptor)]) -> anyhow::Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for (index, d) in entries {
        writer.serialize(CsvRow {
            index: *index,
            theme: d.theme(),
            sizes: d.sizes().to_string(),
            src: d.src(),
            mime: d.mime_type(),
        })?;
    }
    let bytes = writer.into_inner()?;
    Ok(String::from_utf8(bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FaviconSet;

    #[test]
    fn test_text_table_aligns_columns() {
        console::set_colors_enabled(false);
        let set = FaviconSet::defaults();
        let entries: Vec<_> = set.iter().enumerate().take(2).collect();
        let out = text(&entries);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "#  THEME  SIZES    SRC");
        assert_eq!(lines[1], "0  light  192x192  /favicon/android-chrome-192x192.png");
        assert_eq!(lines[2], "1  light  180x180  /favicon/apple-touch-icon.png");
    }

    #[test]
    fn test_csv_rows() {
        let set = FaviconSet::defaults();
        let entries: Vec<_> = set.iter().enumerate().skip(11).collect();
        let out = csv(&entries).unwrap();
        assert_eq!(
            out,
            "index,theme,sizes,src,type\n11,dark,any,/favicon/favicon.ico,image/x-icon\n"
        );
    }
}
