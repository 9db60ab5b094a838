use contracts::shared::error::MapError;
use gloo_timers::future::TimeoutFuture;
use js_sys::Reflect;
use wasm_bindgen::JsValue;

const POLL_INTERVAL_MS: u32 = 50;

/// Whether the global `L` namespace is available
pub fn is_loaded() -> bool {
    web_sys::window()
        .and_then(|w| Reflect::get(&w, &JsValue::from_str("L")).ok())
        .map(|l| l.is_object())
        .unwrap_or(false)
}

/// Wait for the Leaflet script, giving up after `timeout_ms`.
///
/// The script tag normally runs before the wasm module starts, so the first
/// check usually succeeds; the poll covers deferred or slow CDN loads.
pub async fn wait_until_loaded(timeout_ms: u32) -> Result<(), MapError> {
    let mut polls = 0;
    while !is_loaded() {
        if polls >= poll_limit(timeout_ms) {
            return Err(MapError::LibraryUnavailable(timeout_ms));
        }
        TimeoutFuture::new(POLL_INTERVAL_MS).await;
        polls += 1;
    }
    Ok(())
}

/// Number of polls covering `timeout_ms`
fn poll_limit(timeout_ms: u32) -> u32 {
    timeout_ms.div_ceil(POLL_INTERVAL_MS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_poll_limit() {
        assert_eq!(poll_limit(0), 0);
        assert_eq!(poll_limit(5000), 100);
        assert_eq!(poll_limit(5001), 101);
        assert_eq!(poll_limit(1), 1);
    }

    #[test]
    fn test_poll_limit_near_max_timeout() {
        let limit = poll_limit(u32::MAX);
        assert_eq!(limit, u32::MAX / POLL_INTERVAL_MS + 1);
        // the counter stays far below overflow for any configured timeout
        assert!(limit.checked_add(1).is_some());
    }
}
