//! URL state encoding/decoding for shareable URLs.
//!
//! Encodes the current catalog page in the URL query string so reloading
//! restores the same page.

/// Parsed URL parameters.
#[derive(Debug, Default, PartialEq)]
pub struct UrlParams {
    pub page: Option<u32>,
}

/// Parses a query string such as `?page=4&foo=bar`.
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
pub fn parse_query(query: &str) -> UrlParams {
    let mut params = UrlParams::default();

    for pair in query.trim_start_matches('?').split('&') {
        let mut kv = pair.splitn(2, '=');
        let key = kv.next().unwrap_or("");
        let value = kv.next().unwrap_or("");
        if key == "page" {
            params.page = value.parse().ok().filter(|page| *page > 0);
        }
    }

    params
}

/// Parse URL query parameters from the current browser URL.
#[cfg(target_arch = "wasm32")]
pub fn parse_from_url() -> UrlParams {
    let Some(window) = web_sys::window() else {
        return UrlParams::default();
    };
    match window.location().search() {
        Ok(search) => parse_query(&search),
        Err(_) => UrlParams::default(),
    }
}

/// No-op stub for native builds.
#[cfg(not(target_arch = "wasm32"))]
pub fn parse_from_url() -> UrlParams {
    UrlParams::default()
}

/// Push the current page to the URL query string using `replaceState`.
#[cfg(target_arch = "wasm32")]
pub fn push_to_url(page: u32) {
    let Some(history) = web_sys::window().and_then(|w| w.history().ok()) else {
        return;
    };
    let query = format!("?page={}", page);
    if let Err(e) =
        history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&query))
    {
        log::warn!("Failed to update URL: {:?}", e);
    }
}

/// No-op stub for native builds.
#[cfg(not(target_arch = "wasm32"))]
pub fn push_to_url(_page: u32) {}
