//! GeoJSONサブセット型
//!
//! バックエンドのGeoJSONFeatureモデルに合わせた最小限の型。
//! 座標は任意のネスト構造を許すため生のJSON値のまま保持する。

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{Error, Result};

/// GeoJSONジオメトリ
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Geometry {
    #[serde(rename = "type")]
    pub geometry_type: String,
    #[serde(default)]
    pub coordinates: Value,
}

impl Geometry {
    /// Pointジオメトリの(経度, 緯度)を取り出す
    ///
    /// Point以外、または座標が数値2要素に満たない場合はNone
    pub fn point_coordinates(&self) -> Option<(f64, f64)> {
        if self.geometry_type != "Point" {
            return None;
        }
        let coords = self.coordinates.as_array()?;
        let lon = coords.first()?.as_f64()?;
        let lat = coords.get(1)?.as_f64()?;
        Some((lon, lat))
    }
}

/// GeoJSONフィーチャ
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Feature {
    #[serde(rename = "type")]
    pub feature_type: String,
    pub geometry: Option<Geometry>,
    #[serde(default)]
    pub properties: Map<String, Value>,
}

impl Feature {
    /// properties.name（無ければ"Unknown"）
    pub fn name(&self) -> &str {
        self.properties
            .get("name")
            .and_then(Value::as_str)
            .unwrap_or("Unknown")
    }

    /// properties.description
    pub fn description(&self) -> Option<&str> {
        self.properties.get("description").and_then(Value::as_str)
    }

    /// Pointジオメトリの(経度, 緯度)
    pub fn point_coordinates(&self) -> Option<(f64, f64)> {
        self.geometry.as_ref()?.point_coordinates()
    }
}

/// GeoJSONフィーチャコレクション
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct FeatureCollection {
    #[serde(rename = "type", default)]
    pub collection_type: Option<String>,
    pub features: Vec<Feature>,
}

/// テキストをフィーチャコレクションとしてパースする
///
/// JSONとして不正、features配列が無い、typeがFeatureCollection以外、の
/// いずれもエラーを返す
pub fn parse_feature_collection(text: &str) -> Result<FeatureCollection> {
    let collection: FeatureCollection = serde_json::from_str(text)?;
    if let Some(collection_type) = &collection.collection_type {
        if collection_type != "FeatureCollection" {
            return Err(Error::GeoJson(format!(
                "FeatureCollectionではありません: {}",
                collection_type
            )));
        }
    }
    Ok(collection)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn point_feature_json() -> &'static str {
        r#"{
            "type": "FeatureCollection",
            "features": [
                {
                    "type": "Feature",
                    "geometry": {"type": "Point", "coordinates": [10.0, 20.0]},
                    "properties": {"name": "X", "description": "テスト地点"}
                }
            ]
        }"#
    }

    #[test]
    fn test_parse_feature_collection() {
        let collection = parse_feature_collection(point_feature_json()).expect("パース失敗");
        assert_eq!(collection.features.len(), 1);

        let feature = &collection.features[0];
        assert_eq!(feature.name(), "X");
        assert_eq!(feature.description(), Some("テスト地点"));
        assert_eq!(feature.point_coordinates(), Some((10.0, 20.0)));
    }

    #[test]
    fn test_parse_invalid_json() {
        let result = parse_feature_collection("not a json");
        assert!(matches!(result, Err(Error::Json(_))));
    }

    #[test]
    fn test_parse_missing_features() {
        let result = parse_feature_collection(r#"{"type": "FeatureCollection"}"#);
        assert!(matches!(result, Err(Error::Json(_))));
    }

    #[test]
    fn test_parse_wrong_collection_type() {
        let result = parse_feature_collection(r#"{"type": "Feature", "features": []}"#);
        assert!(matches!(result, Err(Error::GeoJson(_))));
    }

    #[test]
    fn test_parse_without_type_field() {
        // typeフィールドが無くてもfeaturesがあれば受け付ける
        let collection =
            parse_feature_collection(r#"{"features": []}"#).expect("パース失敗");
        assert!(collection.features.is_empty());
    }

    #[test]
    fn test_point_coordinates_non_point() {
        let geometry = Geometry {
            geometry_type: "Polygon".to_string(),
            coordinates: json!([[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 0.0]]]),
        };
        assert_eq!(geometry.point_coordinates(), None);
    }

    #[test]
    fn test_point_coordinates_too_short() {
        let geometry = Geometry {
            geometry_type: "Point".to_string(),
            coordinates: json!([10.0]),
        };
        assert_eq!(geometry.point_coordinates(), None);
    }

    #[test]
    fn test_point_coordinates_non_numeric() {
        let geometry = Geometry {
            geometry_type: "Point".to_string(),
            coordinates: json!(["10", "20"]),
        };
        assert_eq!(geometry.point_coordinates(), None);
    }

    #[test]
    fn test_feature_name_fallback() {
        let feature = Feature {
            feature_type: "Feature".to_string(),
            geometry: None,
            properties: Map::new(),
        };
        assert_eq!(feature.name(), "Unknown");
        assert_eq!(feature.description(), None);
        assert_eq!(feature.point_coordinates(), None);
    }

    #[test]
    fn test_feature_roundtrip() {
        // パースして再シリアライズしても内容が変わらないこと
        let original: Value =
            serde_json::from_str(point_feature_json()).expect("デシリアライズ失敗");
        let collection = parse_feature_collection(point_feature_json()).expect("パース失敗");
        let reserialized = serde_json::to_value(&collection.features).expect("シリアライズ失敗");
        assert_eq!(reserialized, original["features"]);
    }
}
