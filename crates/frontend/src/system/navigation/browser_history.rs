use contracts::routing::History;
use wasm_bindgen::JsValue;
use web_sys::window;

/// `History` over `window.history` / `window.location`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserHistory;

impl History for BrowserHistory {
    fn location(&self) -> String {
        window()
            .and_then(|w| w.location().pathname().ok())
            .unwrap_or_else(|| "/".to_string())
    }

    fn push(&mut self, path: &str) {
        let Some(history) = window().and_then(|w| w.history().ok()) else {
            return;
        };
        if let Err(e) = history.push_state_with_url(&JsValue::NULL, "", Some(path)) {
            log::warn!("history.pushState failed for {}: {:?}", path, e);
        }
    }

    fn scroll_to_top(&mut self) {
        if let Some(w) = window() {
            w.scroll_to_with_x_and_y(0.0, 0.0);
        }
    }
}
