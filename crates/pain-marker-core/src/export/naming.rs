//! Export artifact names and the SVG data URL

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use chrono::NaiveDate;

use crate::config::Labels;
use crate::domain::BodyView;

pub const PNG_MIME: &str = "image/png";

/// `<label>_<view label>_<YYYY-MM-DD>.png`
pub fn download_file_name(labels: &Labels, view: BodyView, date: NaiveDate) -> String {
    format!(
        "{}_{}_{}.png",
        labels.artifact,
        labels.view_label(view),
        date.format("%Y-%m-%d")
    )
}

/// `<label>_<view label>.png`, used for the shared file
pub fn share_file_name(labels: &Labels, view: BodyView) -> String {
    format!("{}_{}.png", labels.artifact, labels.view_label(view))
}

/// Base64 `data:` URL for serialized SVG markup (UTF-8)
pub fn svg_data_url(svg: &str) -> String {
    format!("data:image/svg+xml;base64,{}", STANDARD.encode(svg.as_bytes()))
}
