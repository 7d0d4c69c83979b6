//! Server-rendered HTML for the dashboard screens.
//!
//! Record text is always escaped; only markup produced here is trusted.

pub mod layout;
pub mod screens;
pub mod table;
pub mod users;

use crate::services::LoadStatus;
use layout::{alert, spinner};
use serde_json::Value;
use table::Table;

/// Render a screen's body for its load status.
pub fn status_body(
    title: &str,
    status: &LoadStatus,
    table: impl FnOnce(&[Value]) -> Table,
) -> String {
    match status {
        LoadStatus::Loading => spinner(),
        LoadStatus::Error(message) => alert(message),
        LoadStatus::Ready(records) => format!(
            r#"<div class="container"><h2>{}</h2>{}</div>"#,
            html_escape::encode_text(title),
            table(records).render()
        ),
    }
}
