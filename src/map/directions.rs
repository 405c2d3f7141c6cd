//! Click-to-set-destination helper.
//!
//! A pointer click in destination mode becomes a lon/lat pair, which is
//! reformatted into a third-party directions URL and opened in a new
//! browsing context. Routing itself happens in the external service.

/// Directions-service URL for walking to the given point.
/// The destination field takes `latitude,longitude` order.
pub fn walking_directions_url(lat: f64, lon: f64) -> String {
    format!(
        "https://www.google.com/maps/dir/?api=1&destination={:.6},{:.6}&travelmode=walking",
        lat, lon
    )
}

/// Opens the URL in a new browsing context.
#[cfg(target_arch = "wasm32")]
pub fn open_in_new_tab(url: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };

    if let Err(e) = window.open_with_url_and_target(url, "_blank") {
        log::warn!("Failed to open directions tab: {:?}", e);
    }
}

/// Native builds have no browsing context; the URL is logged and surfaced in
/// the side panel instead.
#[cfg(not(target_arch = "wasm32"))]
pub fn open_in_new_tab(url: &str) {
    log::info!("Directions: {}", url);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directions_url_format() {
        let url = walking_directions_url(6.870512, 81.049943);
        assert_eq!(
            url,
            "https://www.google.com/maps/dir/?api=1&destination=6.870512,81.049943&travelmode=walking"
        );
    }

    #[test]
    fn test_latitude_comes_first() {
        let url = walking_directions_url(-1.25, 36.75);
        assert!(url.contains("destination=-1.250000,36.750000"));
        assert!(url.ends_with("travelmode=walking"));
    }
}
