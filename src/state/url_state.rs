//! URL query input and mirroring.
//!
//! The `layer` query field names the initially active layer; the active id
//! is mirrored back via `replaceState` so reloading restores the view and
//! URLs can be shared. Parsing is split from the browser read so it can be
//! tested against an explicit query string.

/// Parsed URL parameters.
#[derive(Default)]
pub struct UrlParams {
    pub layer: Option<String>,
}

/// Parse a raw query string (with or without the leading `?`).
///
/// Unknown keys and malformed pairs are skipped; there is no error path.
pub fn parse_query(search: &str) -> UrlParams {
    let mut params = UrlParams::default();

    let query = search.trim_start_matches('?');
    if query.is_empty() {
        return params;
    }

    for pair in query.split('&') {
        let mut kv = pair.splitn(2, '=');
        let key = kv.next().unwrap_or("");
        let value = kv.next().unwrap_or("");
        if key == "layer" && !value.is_empty() {
            params.layer = Some(value.to_string());
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

/// Mirror the active layer into the URL query string using `replaceState`.
#[cfg(target_arch = "wasm32")]
pub fn push_to_url(layer_id: &str) {
    let query = format!("?layer={}", layer_id);

    let Some(window) = web_sys::window() else {
        return;
    };
    let Ok(history) = window.history() else {
        return;
    };
    let _ = history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&query));
}

/// No-op stub for native builds.
#[cfg(not(target_arch = "wasm32"))]
pub fn push_to_url(_layer_id: &str) {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_layer_field() {
        assert_eq!(parse_query("?layer=rainfall").layer.as_deref(), Some("rainfall"));
        assert_eq!(parse_query("layer=meanNDVI").layer.as_deref(), Some("meanNDVI"));
    }

    #[test]
    fn test_parse_ignores_other_keys() {
        let params = parse_query("?zoom=14&layer=teaHealth&debug=1");
        assert_eq!(params.layer.as_deref(), Some("teaHealth"));
    }

    #[test]
    fn test_parse_empty_and_malformed() {
        assert!(parse_query("").layer.is_none());
        assert!(parse_query("?").layer.is_none());
        assert!(parse_query("?layer=").layer.is_none());
        assert!(parse_query("?layer").layer.is_none());
        assert!(parse_query("?=rainfall").layer.is_none());
    }
}
