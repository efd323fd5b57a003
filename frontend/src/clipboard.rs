//! Async clipboard access.

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::window;

/// Write `text` to the system clipboard.
///
/// Goes through `navigator.clipboard.writeText`, probed dynamically so a
/// missing API (insecure context, older browser) surfaces as a normal
/// rejection the caller can show feedback for, instead of a panic.
pub async fn write_text(text: &str) -> Result<(), JsValue> {
    let win = window().ok_or_else(|| JsValue::from_str("no window"))?;
    let navigator = win.navigator();

    let clipboard = js_sys::Reflect::get(&navigator, &JsValue::from_str("clipboard"))?;
    if clipboard.is_undefined() || clipboard.is_null() {
        return Err(JsValue::from_str("clipboard API unavailable"));
    }

    let write_text = js_sys::Reflect::get(&clipboard, &JsValue::from_str("writeText"))?;
    let write_fn = write_text
        .dyn_ref::<js_sys::Function>()
        .ok_or_else(|| JsValue::from_str("clipboard.writeText is not callable"))?;

    let promise: js_sys::Promise = write_fn
        .call1(&clipboard, &JsValue::from_str(text))?
        .dyn_into()?;
    JsFuture::from(promise).await.map(|_| ())
}
