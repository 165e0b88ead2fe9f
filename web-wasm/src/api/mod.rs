//! バックエンドAPI連携

mod platform;

pub use platform::{
    embed_features, fetch_local_features, fetch_stats, probe_models, semantic_search,
};
