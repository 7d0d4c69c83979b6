//! Record tables.

use html_escape::encode_text;

/// Placeholder shown in place of rows for an empty collection.
pub const EMPTY_PLACEHOLDER: &str = "No records found.";

/// One table cell.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    /// Escaped text
    Text(String),
    /// Muted stand-in for a missing value
    Muted(&'static str),
    /// Trusted markup built by the views
    Markup(String),
}

impl Cell {
    pub fn text(value: impl Into<String>) -> Self {
        Cell::Text(value.into())
    }

    /// Text, or an em-dash when missing or empty.
    pub fn or_dash(value: Option<&str>) -> Self {
        match value {
            Some(v) if !v.is_empty() => Cell::text(v),
            _ => Cell::Muted("—"),
        }
    }

    fn render(&self) -> String {
        match self {
            Cell::Text(text) => format!("<td>{}</td>", encode_text(text)),
            Cell::Muted(text) => format!(r#"<td><span class="text-muted">{}</span></td>"#, text),
            Cell::Markup(html) => format!("<td>{}</td>", html),
        }
    }
}

/// A table row keyed like the record it shows.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub key: String,
    pub cells: Vec<Cell>,
}

/// Striped table with a dark header.
#[derive(Debug, Clone)]
pub struct Table {
    headers: Vec<&'static str>,
    rows: Vec<Row>,
}

impl Table {
    pub fn new(headers: &[&'static str]) -> Self {
        Self {
            headers: headers.to_vec(),
            rows: Vec::new(),
        }
    }

    pub fn push(&mut self, key: String, cells: Vec<Cell>) {
        self.rows.push(Row { key, cells });
    }

    pub fn render(&self) -> String {
        let mut html = String::from(
            r#"<table class="table table-striped table-bordered"><thead class="table-dark"><tr>"#,
        );
        for header in &self.headers {
            html.push_str(&format!("<th>{}</th>", header));
        }
        html.push_str("</tr></thead><tbody>");

        if self.rows.is_empty() {
            html.push_str(&format!(
                r#"<tr><td colspan="{}" class="text-center">{}</td></tr>"#,
                self.headers.len(),
                EMPTY_PLACEHOLDER
            ));
        }

        for row in &self.rows {
            html.push_str(&format!(
                r#"<tr data-key="{}">"#,
                super::layout::attr(&row.key)
            ));
            for cell in &row.cells {
                html.push_str(&cell.render());
            }
            html.push_str("</tr>");
        }

        html.push_str("</tbody></table>");
        html
    }
}
