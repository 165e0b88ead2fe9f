//! 地図表示コンポーネント
//!
//! Leaflet地図を一度だけ初期化し、都市・検索結果の変化ごとに
//! マーカーレイヤを全消去して描き直す。タイルレイヤには触らない

use leptos::prelude::*;
use wasm_bindgen::JsValue;

use geo_embed_common::{format_similarity, Feature, SearchResultItem};

use crate::leaflet;

/// 初期表示の中心(緯度, 経度)とズーム
const DEFAULT_CENTER: (f64, f64) = (36.0, 138.0);
const DEFAULT_ZOOM: f64 = 5.0;

const TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
const TILE_ATTRIBUTION: &str = "&copy; OpenStreetMap contributors";
const TILE_MAX_ZOOM: u32 = 19;

/// 検索結果マーカーの配色
const RESULT_FILL_COLOR: &str = "#e74c3c";
const RESULT_STROKE_COLOR: &str = "#ffffff";

/// 地図本体とマーカーレイヤの組
struct MapHandles {
    map: leaflet::Map,
    markers: leaflet::LayerGroup,
}

#[component]
pub fn MapView(
    cities: ReadSignal<Vec<Feature>>,
    results: ReadSignal<Vec<SearchResultItem>>,
) -> impl IntoView {
    let map_handles = StoredValue::new_local(None::<MapHandles>);

    Effect::new(move |_| {
        let cities = cities.get();
        let results = results.get();
        map_handles.update_value(|handles| {
            // 初回だけ初期化。以降の再実行ではマーカーの描き直しのみ
            let handles = handles.get_or_insert_with(init_map);
            redraw_markers(handles, &cities, &results);
        });
    });

    on_cleanup(move || {
        map_handles.update_value(|handles| {
            if let Some(handles) = handles.take() {
                handles.map.remove();
            }
        });
    });

    view! { <div id="map" class="map-view"></div> }
}

fn init_map() -> MapHandles {
    let map = leaflet::new_map("map");
    map.set_view(
        &leaflet::lat_lng(DEFAULT_CENTER.0, DEFAULT_CENTER.1),
        DEFAULT_ZOOM,
    );

    let options = serde_wasm_bindgen::to_value(&leaflet::TileLayerOptions {
        attribution: TILE_ATTRIBUTION,
        max_zoom: TILE_MAX_ZOOM,
    })
    .unwrap_or(JsValue::UNDEFINED);
    leaflet::tile_layer(TILE_URL, &options).add_to(&map);

    let markers = leaflet::layer_group();
    markers.add_to(&map);
    MapHandles { map, markers }
}

fn redraw_markers(handles: &MapHandles, cities: &[Feature], results: &[SearchResultItem]) {
    handles.markers.clear_layers();

    for ((lon, lat), popup) in city_markers(cities) {
        let pin = leaflet::marker(&leaflet::lat_lng(lat, lon));
        pin.bind_popup(&popup);
        handles.markers.add_layer(&pin);
    }

    let options = serde_wasm_bindgen::to_value(&result_marker_options())
        .unwrap_or(JsValue::UNDEFINED);
    for ((lon, lat), popup) in result_markers(results) {
        let pin = leaflet::circle_marker(&leaflet::lat_lng(lat, lon), &options);
        pin.bind_popup(&popup);
        handles.markers.add_layer(&pin);
    }
}

fn result_marker_options() -> leaflet::CircleMarkerOptions {
    leaflet::CircleMarkerOptions {
        radius: 8.0,
        fill_color: RESULT_FILL_COLOR,
        color: RESULT_STROKE_COLOR,
        weight: 2.0,
        fill_opacity: 0.85,
    }
}

/// 都市マーカーの((経度, 緯度), ポップアップHTML)。Pointを持つものだけ
fn city_markers(cities: &[Feature]) -> Vec<((f64, f64), String)> {
    cities
        .iter()
        .filter_map(|city| {
            city.point_coordinates()
                .map(|coords| (coords, city_popup_html(city)))
        })
        .collect()
}

/// 検索結果マーカーの((経度, 緯度), ポップアップHTML)。Pointを持つものだけ
fn result_markers(results: &[SearchResultItem]) -> Vec<((f64, f64), String)> {
    results
        .iter()
        .filter_map(|item| {
            item.point_coordinates()
                .map(|coords| (coords, result_popup_html(item)))
        })
        .collect()
}

fn city_popup_html(city: &Feature) -> String {
    match city.description() {
        Some(description) => format!("<strong>{}</strong><br>{}", city.name(), description),
        None => format!("<strong>{}</strong>", city.name()),
    }
}

fn result_popup_html(item: &SearchResultItem) -> String {
    format!(
        "<strong>{}</strong><br>類似度: {}",
        item.name,
        format_similarity(item.similarity)
    )
}
