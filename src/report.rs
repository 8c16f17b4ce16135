//! Plain-text rendering for `jwtview --print`.

use std::fmt::Write;

use serde_json::Value;
use unicode_width::UnicodeWidthStr;

use crate::config::{DisplayConfig, ViewTab};
use crate::token::{claim_rows, format_json, signature_algorithm, ClaimRow, DecodedToken};

/// Render a decoded token as text. `tab` picks JSON or the claims table.
pub fn render_report(decoded: &DecodedToken, config: &DisplayConfig, tab: ViewTab) -> String {
    let mut out = String::new();

    section(&mut out, "ENCODED");
    let _ = writeln!(out, "header:    {}", decoded.raw.header);
    let _ = writeln!(out, "payload:   {}", decoded.raw.payload);
    let _ = writeln!(out, "signature: {}", decoded.raw.signature);

    for (title, value) in [("HEADER", &decoded.header), ("PAYLOAD", &decoded.payload)] {
        out.push('\n');
        section(&mut out, title);
        match tab {
            ViewTab::Json => {
                out.push_str(&format_json(value, config.json_indent));
                out.push('\n');
            }
            ViewTab::Table => out.push_str(&render_table(value)),
        }
    }

    out.push('\n');
    section(&mut out, "SIGNATURE");
    let _ = writeln!(out, "algorithm: {}", signature_algorithm(&decoded.header));
    out.push_str("not verified: verifying the signature needs the key\n");

    out
}

fn section(out: &mut String, title: &str) {
    let _ = writeln!(out, "== {title}");
}

/// Claims as aligned columns: key, description, value.
pub fn render_table(value: &Value) -> String {
    let rows = claim_rows(value);
    if rows.is_empty() {
        return format!("{}\n", value);
    }

    let key_width = column_width(&rows, |r| r.key.as_str(), "Claim");
    let desc_width = column_width(&rows, |r| r.description, "Description");

    let mut out = String::new();
    push_row(&mut out, ["Claim", "Description", "Value"], key_width, desc_width);
    for row in &rows {
        push_row(
            &mut out,
            [row.key.as_str(), row.description, row.value.to_string().as_str()],
            key_width,
            desc_width,
        );
    }
    out
}

fn column_width(rows: &[ClaimRow], cell: impl Fn(&ClaimRow) -> &str, heading: &str) -> usize {
    rows.iter()
        .map(|r| cell(r).width())
        .chain(std::iter::once(heading.width()))
        .max()
        .unwrap_or_default()
}

fn push_row(out: &mut String, cells: [&str; 3], key_width: usize, desc_width: usize) {
    let [key, description, value] = cells;
    out.push_str(key);
    out.push_str(&" ".repeat(key_width - key.width() + 2));
    out.push_str(description);
    out.push_str(&" ".repeat(desc_width - description.width() + 2));
    out.push_str(value);
    out.push('\n');
}
