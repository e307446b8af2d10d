//! Browser glue: URL access, history replacement, fetching, downloads.
//!
//! Everything here is behind a wasm/native split so the engine and its
//! tests stay runnable off-wasm; the native side returns inert defaults
//! or an error string.

/// The current page's query string, including the leading `?` (empty
/// when there is none).
#[cfg(target_arch = "wasm32")]
pub fn location_query() -> String {
    web_sys::window()
        .and_then(|window| window.location().search().ok())
        .unwrap_or_default()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn location_query() -> String {
    String::new()
}

/// Replace (not push) the current history entry with the given query
/// string, so filter edits don't pollute back/forward navigation.
#[cfg(target_arch = "wasm32")]
pub fn replace_url_query(query: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(query));
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn replace_url_query(_query: &str) {}

/// Fetch a document body as text.
#[cfg(target_arch = "wasm32")]
pub async fn fetch_text(url: &str) -> Result<String, String> {
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;

    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|_| format!("request to {url} failed"))?;
    let response: web_sys::Response = response
        .dyn_into()
        .map_err(|_| "unexpected fetch result".to_string())?;
    if !response.ok() {
        return Err(format!("request to {url} returned {}", response.status()));
    }
    let body = response
        .text()
        .map_err(|_| "couldn't read response body".to_string())?;
    JsFuture::from(body)
        .await
        .map_err(|_| "couldn't read response body".to_string())?
        .as_string()
        .ok_or_else(|| "response body was not text".to_string())
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn fetch_text(url: &str) -> Result<String, String> {
    Err(format!("fetching {url} requires the web runtime"))
}

/// Offer a text document as a browser download.
#[cfg(target_arch = "wasm32")]
pub fn download_text(filename: &str, mime: &str, content: &str) -> Result<(), String> {
    use wasm_bindgen::JsCast;

    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| "no document".to_string())?;

    let parts = js_sys::Array::new();
    parts.push(&wasm_bindgen::JsValue::from_str(content));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type(mime);
    let blob = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options)
        .map_err(|_| "couldn't build blob".to_string())?;
    let url = web_sys::Url::create_object_url_with_blob(&blob)
        .map_err(|_| "couldn't create object URL".to_string())?;

    let anchor: web_sys::HtmlAnchorElement = document
        .create_element("a")
        .map_err(|_| "couldn't create anchor".to_string())?
        .dyn_into()
        .map_err(|_| "couldn't create anchor".to_string())?;
    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor.click();

    let _ = web_sys::Url::revoke_object_url(&url);
    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
pub fn download_text(_filename: &str, _mime: &str, _content: &str) -> Result<(), String> {
    Err("downloads require the web runtime".to_string())
}
