//! Geospatial Embeddings Platform API呼び出し
//!
//! fetchの薄いラッパー。失敗の扱い（空状態へのフォールバック）は
//! 呼び出し側に任せる

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use geo_embed_common::{
    parse_feature_collection, EmbedRequest, EmbedResponse, Feature, PlatformStats, SearchRequest,
    SearchResultItem,
};

/// ベースURLとパスを連結する
fn join_url(api_base: &str, path: &str) -> String {
    format!("{}{}", api_base.trim_end_matches('/'), path)
}

/// JSONリクエストを組み立てる
fn build_request(method: &str, url: &str, body: Option<&str>) -> Result<Request, JsValue> {
    let opts = RequestInit::new();
    opts.set_method(method);
    opts.set_mode(RequestMode::Cors);
    if let Some(body) = body {
        opts.set_body(&JsValue::from_str(body));
    }

    let request = Request::new_with_str_and_init(url, &opts)?;
    if body.is_some() {
        request.headers().set("Content-Type", "application/json")?;
    }
    Ok(request)
}

/// リクエストを送り、2xx以外はエラーにする
async fn send(request: &Request) -> Result<Response, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let resp_value = JsFuture::from(window.fetch_with_request(request)).await?;
    let resp: Response = resp_value.dyn_into()?;

    if !resp.ok() {
        return Err(JsValue::from_str(&format!("API error: {}", resp.status())));
    }
    Ok(resp)
}

/// レスポンスボディをJSONとして読む
async fn read_json(resp: &Response) -> Result<JsValue, JsValue> {
    JsFuture::from(resp.json()?).await
}

/// モデル一覧エンドポイントの死活確認。ボディは読み捨てる
pub async fn probe_models(api_base: &str) -> Result<(), JsValue> {
    let request = build_request("GET", &join_url(api_base, "/embed/vector/models"), None)?;
    send(&request).await?;
    Ok(())
}

/// セマンティック検索
pub async fn semantic_search(
    api_base: &str,
    search: &SearchRequest,
) -> Result<Vec<SearchResultItem>, JsValue> {
    let body = serde_json::to_string(search).map_err(|e| JsValue::from_str(&e.to_string()))?;
    let request = build_request("POST", &join_url(api_base, "/search/semantic"), Some(&body))?;
    let resp = send(&request).await?;
    let json = read_json(&resp).await?;
    let items: Vec<SearchResultItem> = serde_wasm_bindgen::from_value(json)?;
    Ok(items)
}

/// GeoJSONフィーチャを埋め込みエンドポイントへ登録する
pub async fn embed_features(
    api_base: &str,
    features: Vec<Feature>,
) -> Result<EmbedResponse, JsValue> {
    let payload = EmbedRequest { features };
    let body = serde_json::to_string(&payload).map_err(|e| JsValue::from_str(&e.to_string()))?;
    let request = build_request("POST", &join_url(api_base, "/embed/vector/"), Some(&body))?;
    let resp = send(&request).await?;
    let json = read_json(&resp).await?;
    let response: EmbedResponse = serde_wasm_bindgen::from_value(json)?;
    Ok(response)
}

/// プラットフォーム統計を取得する
pub async fn fetch_stats(api_base: &str) -> Result<PlatformStats, JsValue> {
    let request = build_request("GET", &join_url(api_base, "/stats"), None)?;
    let resp = send(&request).await?;
    let json = read_json(&resp).await?;
    let stats: PlatformStats = serde_wasm_bindgen::from_value(json)?;
    Ok(stats)
}

/// 同梱の都市データセットを読み込む
pub async fn fetch_local_features(path: &str) -> Result<Vec<Feature>, JsValue> {
    let request = build_request("GET", path, None)?;
    let resp = send(&request).await?;
    let text = JsFuture::from(resp.text()?).await?;
    let text = text
        .as_string()
        .ok_or_else(|| JsValue::from_str("text decode failed"))?;
    let collection =
        parse_feature_collection(&text).map_err(|e| JsValue::from_str(&e.to_string()))?;
    Ok(collection.features)
}
