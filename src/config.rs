//! Page Configuration
//!
//! Reads an optional JSON block from the host page:
//! `<script id="pain-marker-config" type="application/json">{...}</script>`

use pain_marker_core::AppConfig;

pub const CONFIG_ELEMENT_ID: &str = "pain-marker-config";

/// Configuration from the page, or defaults when absent or invalid
pub fn load_page_config() -> AppConfig {
    let text = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|element| element.text_content());
    parse_page_config(text.as_deref())
}

fn parse_page_config(text: Option<&str>) -> AppConfig {
    match text.map(str::trim) {
        None | Some("") => AppConfig::default(),
        Some(json) => AppConfig::from_json(json).unwrap_or_else(|e| {
            log::warn!("[Config] Ignoring page configuration: {}", e);
            AppConfig::default()
        }),
    }
}
