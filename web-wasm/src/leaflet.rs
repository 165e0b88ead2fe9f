//! Leaflet（グローバルLオブジェクト）へのバインディング
//!
//! 地図本体・タイルレイヤ・マーカーレイヤの操作に必要な最小限だけを束ねる。
//! Leaflet本体はindex.htmlでCDNから読み込む

use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    /// 地図インスタンス
    pub type Map;

    #[wasm_bindgen(js_namespace = L, js_name = map)]
    pub fn new_map(container_id: &str) -> Map;

    #[wasm_bindgen(method, js_name = setView)]
    pub fn set_view(this: &Map, center: &JsValue, zoom: f64) -> Map;

    /// 地図を破棄してDOMから切り離す
    #[wasm_bindgen(method)]
    pub fn remove(this: &Map);

    /// 全レイヤ共通の基底型
    pub type Layer;

    #[wasm_bindgen(method, js_name = addTo)]
    pub fn add_to(this: &Layer, map: &Map) -> Layer;

    #[wasm_bindgen(method, js_name = bindPopup)]
    pub fn bind_popup(this: &Layer, content: &str) -> Layer;

    #[wasm_bindgen(extends = Layer)]
    pub type TileLayer;

    #[wasm_bindgen(js_namespace = L, js_name = tileLayer)]
    pub fn tile_layer(url_template: &str, options: &JsValue) -> TileLayer;

    #[wasm_bindgen(extends = Layer)]
    pub type Marker;

    #[wasm_bindgen(js_namespace = L, js_name = marker)]
    pub fn marker(latlng: &JsValue) -> Marker;

    #[wasm_bindgen(extends = Layer)]
    pub type CircleMarker;

    #[wasm_bindgen(js_namespace = L, js_name = circleMarker)]
    pub fn circle_marker(latlng: &JsValue, options: &JsValue) -> CircleMarker;

    /// マーカーをまとめて消すためのレイヤグループ
    #[wasm_bindgen(extends = Layer)]
    pub type LayerGroup;

    #[wasm_bindgen(js_namespace = L, js_name = layerGroup)]
    pub fn layer_group() -> LayerGroup;

    #[wasm_bindgen(method, js_name = addLayer)]
    pub fn add_layer(this: &LayerGroup, layer: &Layer) -> LayerGroup;

    #[wasm_bindgen(method, js_name = clearLayers)]
    pub fn clear_layers(this: &LayerGroup) -> LayerGroup;
}

/// (緯度, 経度)をLeafletのLatLng配列に変換する
pub fn lat_lng(lat: f64, lon: f64) -> JsValue {
    let pair = js_sys::Array::new();
    pair.push(&JsValue::from_f64(lat));
    pair.push(&JsValue::from_f64(lon));
    pair.into()
}

/// タイルレイヤのオプション
#[derive(Serialize)]
pub struct TileLayerOptions {
    pub attribution: &'static str,
    #[serde(rename = "maxZoom")]
    pub max_zoom: u32,
}

/// circleMarkerのオプション
#[derive(Serialize)]
pub struct CircleMarkerOptions {
    pub radius: f64,
    #[serde(rename = "fillColor")]
    pub fill_color: &'static str,
    pub color: &'static str,
    pub weight: f64,
    #[serde(rename = "fillOpacity")]
    pub fill_opacity: f64,
}
