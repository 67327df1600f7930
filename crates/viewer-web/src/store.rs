//! Fetches the mock database JSON over HTTP; parsing and validation live
//! in the core crate.

use viewer_core::MockDb;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

pub async fn fetch_db(url: &str) -> anyhow::Result<MockDb> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let resp_value = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| anyhow::anyhow!(format!("fetch {url}: {:?}", e)))?;
    let resp: web::Response = resp_value
        .dyn_into()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    if !resp.ok() {
        anyhow::bail!("fetch {url}: http {}", resp.status());
    }
    let text_promise = resp
        .text()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    let text = JsFuture::from(text_promise)
        .await
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    let json = text
        .as_string()
        .ok_or_else(|| anyhow::anyhow!("response body was not text"))?;
    Ok(MockDb::from_json(&json)?)
}
