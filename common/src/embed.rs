//! ベクタ埋め込み登録の型

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::geojson::Feature;

/// 埋め込み登録リクエスト
///
/// アップロードされたファイルのfeatures配列をそのまま送る
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct EmbedRequest {
    pub features: Vec<Feature>,
}

/// 埋め込み登録レスポンス
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct EmbedResponse {
    pub feature_count: usize,
    #[serde(default)]
    pub embedding_ids: Vec<String>,
    #[serde(default)]
    pub model_info: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geojson::parse_feature_collection;
    use serde_json::Value;

    #[test]
    fn test_embed_request_body_matches_upload() {
        // アップロードファイルのfeatures配列がボディにそのまま現れること
        let uploaded = r#"{
            "type": "FeatureCollection",
            "features": [
                {
                    "type": "Feature",
                    "geometry": {"type": "Point", "coordinates": [139.69, 35.69]},
                    "properties": {"name": "新宿", "description": "東京都庁の所在地"}
                },
                {
                    "type": "Feature",
                    "geometry": {"type": "Point", "coordinates": [135.5, 34.69]},
                    "properties": {"name": "大阪"}
                }
            ]
        }"#;

        let collection = parse_feature_collection(uploaded).expect("パース失敗");
        let request = EmbedRequest {
            features: collection.features,
        };

        let body: Value = serde_json::to_value(&request).expect("シリアライズ失敗");
        let original: Value = serde_json::from_str(uploaded).expect("デシリアライズ失敗");
        assert_eq!(body["features"], original["features"]);
        assert_eq!(body.as_object().map(|o| o.len()), Some(1));
    }

    #[test]
    fn test_embed_response_deserialize() {
        let json = r#"{
            "feature_count": 2,
            "embedding_ids": ["id-1", "id-2"],
            "model_info": {"model": "context-lang", "embedding_dim": 384}
        }"#;

        let response: EmbedResponse = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert_eq!(response.feature_count, 2);
        assert_eq!(response.embedding_ids.len(), 2);
        assert_eq!(response.model_info["embedding_dim"], 384);
    }

    #[test]
    fn test_embed_response_minimal() {
        // feature_count以外は省略可能
        let response: EmbedResponse =
            serde_json::from_str(r#"{"feature_count": 0}"#).expect("デシリアライズ失敗");
        assert_eq!(response.feature_count, 0);
        assert!(response.embedding_ids.is_empty());
    }
}
