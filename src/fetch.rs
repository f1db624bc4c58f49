use tagsphere_core::{items_or_fallback, parse_items, LabelItem};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

pub async fn fetch_text(url: &str) -> anyhow::Result<String> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let opts = web::RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(web::RequestMode::SameOrigin);
    let request = web::Request::new_with_str_and_init(url, &opts)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;

    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let resp: web::Response = resp_value
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    if !resp.ok() {
        anyhow::bail!("HTTP {} for {}", resp.status(), url);
    }

    let text = JsFuture::from(resp.text().map_err(|e| anyhow::anyhow!("{:?}", e))?)
        .await
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    text.as_string()
        .ok_or_else(|| anyhow::anyhow!("response body is not text"))
}

/// Items from `url`, or the built-in fallback set if the fetch or parse
/// fails. Never fails.
pub async fn load_items(url: &str) -> Vec<LabelItem> {
    let loaded = match fetch_text(url).await {
        Ok(body) => parse_items(&body).map_err(anyhow::Error::from),
        Err(e) => Err(e),
    };
    items_or_fallback(loaded)
}
