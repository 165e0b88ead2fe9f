//! Geo Embeddings Common Library
//!
//! Web(WASM)クライアントで使う共有型とユーティリティ

pub mod embed;
pub mod error;
pub mod geojson;
pub mod search;
pub mod stats;

pub use embed::{EmbedRequest, EmbedResponse};
pub use error::{Error, Result};
pub use geojson::{parse_feature_collection, Feature, FeatureCollection, Geometry};
pub use search::{format_similarity, SearchRequest, SearchResultItem, DEFAULT_TOP_K};
pub use stats::PlatformStats;
