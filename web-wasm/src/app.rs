//! メインアプリケーションコンポーネント
//!
//! 共有状態（都市データ・検索結果・ローディング・統計）はすべてここが持ち、
//! 子コンポーネントへはシグナルとコールバックだけを渡す

use leptos::prelude::*;
use leptos::task::spawn_local;

use geo_embed_common::{Feature, PlatformStats, SearchRequest, SearchResultItem};

use crate::api;
use crate::components::{
    header::Header, map_view::MapView, results_list::ResultsList, search_box::SearchBox,
    upload_panel::UploadPanel,
};

/// APIベースURL（ビルド時にGEO_EMBED_API_URLで差し替え可能）
pub const API_BASE: &str = match option_env!("GEO_EMBED_API_URL") {
    Some(url) => url,
    None => "http://localhost:8000",
};

/// 初期表示用の都市データセット（同梱の静的ファイル）
const CITIES_PATH: &str = "data/cities.geojson";

#[component]
pub fn App() -> impl IntoView {
    let (cities, set_cities) = signal(Vec::<Feature>::new());
    let (results, set_results) = signal(Vec::<SearchResultItem>::new());
    let (loading, set_loading) = signal(false);
    let (stats, set_stats) = signal(None::<PlatformStats>);

    // 検索リクエストの通し番号。最新のレスポンスだけを状態に反映する
    let search_seq = StoredValue::new(0u64);

    // 初期ロード: 死活確認・都市データ・統計
    spawn_local(async move {
        let (_, cities, stats) = futures::join!(
            api::probe_models(API_BASE),
            api::fetch_local_features(CITIES_PATH),
            api::fetch_stats(API_BASE),
        );
        match cities {
            Ok(features) => set_cities.set(features),
            Err(err) => {
                gloo::console::warn!("都市データの読み込みに失敗:", err);
                set_cities.set(Vec::new());
            }
        }
        set_stats.set(stats.ok());
    });

    // アップロード成功後に統計を取り直す
    let refresh_stats = move |_| {
        spawn_local(async move {
            if let Ok(stats) = api::fetch_stats(API_BASE).await {
                set_stats.set(Some(stats));
            }
        });
    };

    let on_search = move |query: String, source_type: Option<String>| {
        // 空クエリは通信せず結果をクリアするだけ
        if query.is_empty() {
            set_results.set(Vec::new());
            return;
        }

        let request_id = search_seq.with_value(|seq| seq + 1);
        search_seq.set_value(request_id);
        set_loading.set(true);

        spawn_local(async move {
            let request = SearchRequest::new(query, source_type);
            let outcome = api::semantic_search(API_BASE, &request).await;

            // 追い越されたリクエストのレスポンスは捨てる
            if search_seq.with_value(|seq| *seq) != request_id {
                return;
            }

            match outcome {
                Ok(items) => set_results.set(items),
                Err(err) => {
                    gloo::console::warn!("検索に失敗:", err);
                    set_results.set(Vec::new());
                }
            }
            set_loading.set(false);
        });
    };

    view! {
        <div class="container">
            <Header />
            <SearchBox loading=loading on_search=on_search />
            <div class="content">
                <MapView cities=cities results=results />
                <div class="sidebar">
                    <ResultsList results=results />
                    <UploadPanel api_base=API_BASE on_uploaded=refresh_stats />
                    <div class="stats-line">
                        {move || {
                            stats
                                .get()
                                .map(|s| format!("登録済み埋め込み: {}件", s.total_embeddings))
                        }}
                    </div>
                </div>
            </div>
        </div>
    }
}
