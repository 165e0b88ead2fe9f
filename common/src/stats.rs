//! プラットフォーム統計の型

use serde::{Deserialize, Serialize};

/// /statsエンドポイントのレスポンス
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlatformStats {
    pub total_embeddings: u64,
    pub source_types: u64,
    pub models: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_stats_deserialize() {
        let json = r#"{"total_embeddings": 128, "source_types": 2, "models": 1}"#;
        let stats: PlatformStats = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert_eq!(stats.total_embeddings, 128);
        assert_eq!(stats.source_types, 2);
        assert_eq!(stats.models, 1);
    }
}
