//! Map Links
//!
//! Builds place-search URLs and hands them to the browser
//! (new tab or clipboard).

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use wasm_bindgen::prelude::*;

use crate::config::AppConfig;
use crate::error::{js_error_text, EffectError};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["navigator", "clipboard"], js_name = writeText, catch)]
    async fn write_text(text: &str) -> Result<JsValue, JsValue>;
}

/// Characters `encodeURIComponent` leaves alone
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Search text for a stop, e.g. "Red Fort Delhi India"
pub fn place_query(title: &str, config: &AppConfig) -> String {
    if config.locality.is_empty() {
        title.to_string()
    } else {
        format!("{} {}", title, config.locality)
    }
}

pub fn maps_search_url(title: &str, config: &AppConfig) -> String {
    let query = place_query(title, config);
    format!("{}{}", config.maps_search_url, utf8_percent_encode(&query, URI_COMPONENT))
}

pub fn open_in_new_tab(url: &str) -> Result<(), EffectError> {
    let window = web_sys::window().ok_or(EffectError::NoWindow)?;
    match window.open_with_url_and_target(url, "_blank")? {
        Some(_) => Ok(()),
        None => Err(EffectError::PopupBlocked(url.to_string())),
    }
}

pub async fn copy_to_clipboard(text: &str) -> Result<(), EffectError> {
    write_text(text)
        .await
        .map(|_| ())
        .map_err(|e| EffectError::Clipboard(js_error_text(&e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_url_encodes_spaces() {
        let url = maps_search_url("India Gate", &AppConfig::default());
        assert_eq!(url, "https://www.google.com/maps/search/India%20Gate%20Delhi%20India");
    }

    #[test]
    fn test_search_url_matches_uri_component_rules() {
        let url = maps_search_url("St. John's (Old) & Co/Café", &AppConfig::default());
        assert_eq!(
            url,
            "https://www.google.com/maps/search/St.%20John's%20(Old)%20%26%20Co%2FCaf%C3%A9%20Delhi%20India"
        );
    }

    #[test]
    fn test_query_without_locality() {
        let config = AppConfig { locality: String::new(), ..AppConfig::default() };
        assert_eq!(place_query("Red Fort", &config), "Red Fort");
        assert_eq!(place_query("Red Fort", &AppConfig::default()), "Red Fort Delhi India");
    }
}
