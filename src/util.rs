// Glue between browser error values and anyhow.

/// Browser APIs report failures as opaque `JsValue`s; fold them into anyhow.
pub fn js_err(err: wasm_bindgen::JsValue) -> anyhow::Error {
    let text = err
        .as_string()
        .or_else(|| {
            js_sys::Reflect::get(&err, &"message".into())
                .ok()
                .and_then(|m| m.as_string())
        })
        .unwrap_or_else(|| format!("{err:?}"));
    anyhow::anyhow!(text)
}
