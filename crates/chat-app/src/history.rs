//! Browser address bar: reading the current path and recording navigations.

use wasm_bindgen::JsValue;
use chat_types::route::Route;

/// `window.location.pathname`, if there is a window.
pub fn current_path() -> Option<String> {
    let window = web_sys::window()?;
    match window.location().pathname() {
        Ok(path) => Some(path),
        Err(e) => {
            log::warn!("Failed to read location: {:?}", e);
            None
        }
    }
}

/// Add a history entry for `route`.
pub fn push(route: Route) {
    with_history(route, |history, url| {
        history.push_state_with_url(&JsValue::NULL, "", Some(url))
    });
}

/// Rewrite the current entry, used for redirects.
pub fn replace(route: Route) {
    with_history(route, |history, url| {
        history.replace_state_with_url(&JsValue::NULL, "", Some(url))
    });
}

fn with_history(
    route: Route,
    op: impl FnOnce(&web_sys::History, &str) -> Result<(), JsValue>,
) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let result = window
        .history()
        .and_then(|history| op(&history, route.path()));
    if let Err(e) = result {
        log::warn!("Failed to update history for {}: {:?}", route.path(), e);
    }
}
