//! セマンティック検索の型

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::geojson::Geometry;

/// 検索件数のデフォルト値
pub const DEFAULT_TOP_K: u32 = 5;

/// 検索リクエスト
///
/// source_typeが未指定のときはボディに含めない
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SearchRequest {
    pub query_text: String,
    pub k: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_type: Option<String>,
}

impl SearchRequest {
    /// デフォルト件数の検索リクエストを作る
    pub fn new(query_text: impl Into<String>, source_type: Option<String>) -> Self {
        Self {
            query_text: query_text.into(),
            k: DEFAULT_TOP_K,
            source_type,
        }
    }
}

/// 検索結果1件
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SearchResultItem {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub source_type: Option<String>,
    pub similarity: f64,
    #[serde(default)]
    pub geometry: Option<Geometry>,
    #[serde(default)]
    pub geometry_json: Option<String>,
    #[serde(default)]
    pub properties: Map<String, Value>,
}

impl SearchResultItem {
    /// マーカー描画用の(経度, 緯度)
    ///
    /// geometryを優先し、無ければgeometry_jsonをパースして使う。
    /// Point以外はNone
    pub fn point_coordinates(&self) -> Option<(f64, f64)> {
        match &self.geometry {
            Some(geometry) => geometry.point_coordinates(),
            None => self
                .geometry_json
                .as_deref()
                .and_then(|raw| serde_json::from_str::<Geometry>(raw).ok())
                .and_then(|geometry| geometry.point_coordinates()),
        }
    }

    /// properties.description
    pub fn description(&self) -> Option<&str> {
        self.properties.get("description").and_then(Value::as_str)
    }
}

/// 類似度を百分率表示にする（小数1桁、クランプなし）
pub fn format_similarity(similarity: f64) -> String {
    format!("{:.1}%", similarity * 100.0)
}
