// Console logging helpers

use std::cell::Cell;

thread_local! {
    static DEBUG_LOG: Cell<bool> = const { Cell::new(false) };
}

pub fn set_debug_logging(on: bool) {
    DEBUG_LOG.with(|f| f.set(on));
}

pub fn debug_logging() -> bool {
    DEBUG_LOG.with(|f| f.get())
}

/// Log to the browser console when debug logging is on.
/// No-op off wasm so the model and controller run under host tests.
pub fn clog(msg: &str) {
    if !debug_logging() {
        return;
    }
    #[cfg(target_arch = "wasm32")]
    {
        let line = format!("[{:.0}] {}", js_sys::Date::now(), msg);
        web_sys::console::log_1(&wasm_bindgen::JsValue::from_str(&line));
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = msg;
    }
}

/// Always logged; used for things that went wrong talking to the browser.
pub fn cwarn(msg: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::console::warn_1(&wasm_bindgen::JsValue::from_str(msg));
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = msg;
    }
}
