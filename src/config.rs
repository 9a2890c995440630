//! Application Config
//!
//! Defaults are compiled in; a page may override any of them with an
//! inline `<script id="app-config" type="application/json">` block.

use serde::Deserialize;

/// Element id of the inline JSON override
pub const CONFIG_ELEMENT_ID: &str = "app-config";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Prefix for place searches; the encoded query is appended
    pub maps_search_url: String,
    /// Target of the footer MAPS button
    pub maps_home_url: String,
    /// Appended to every stop title when building a map query
    pub locality: String,
    /// Pointer travel in pixels before a press becomes a drag
    pub drag_activation_px: i32,
    /// How long status notices stay visible
    pub notice_ms: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            maps_search_url: "https://www.google.com/maps/search/".to_string(),
            maps_home_url: "https://www.google.com/maps".to_string(),
            locality: "Delhi India".to_string(),
            drag_activation_px: 8,
            notice_ms: 2000,
        }
    }
}

impl AppConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Read the inline override if the page has one
    pub fn load() -> Self {
        let raw = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());

        match raw {
            Some(json) if !json.trim().is_empty() => Self::from_json(&json).unwrap_or_else(|e| {
                tracing::warn!(error = %e, "invalid app config, using defaults");
                Self::default()
            }),
            _ => Self::default(),
        }
    }
}
