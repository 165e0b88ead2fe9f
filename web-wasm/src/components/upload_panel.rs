//! アップロードパネルコンポーネント
//!
//! ローカルのGeoJSONファイルを読み込み、features配列を
//! 埋め込みエンドポイントへ登録する

use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::HtmlInputElement;

use geo_embed_common::parse_feature_collection;

use crate::api;

const MSG_INVALID_FILE: &str = "無効なGeoJSONファイルです";
const MSG_UPLOAD_FAILED: &str = "アップロードに失敗しました";

#[component]
pub fn UploadPanel<F>(api_base: &'static str, on_uploaded: F) -> impl IntoView
where
    F: Fn(()) + 'static + Clone,
{
    let selected_file = StoredValue::new_local(None::<web_sys::File>);
    let (file_name, set_file_name) = signal(None::<String>);
    let (status, set_status) = signal(String::new());
    let (uploading, set_uploading) = signal(false);

    let on_file_change = move |ev| {
        let input: HtmlInputElement = event_target(&ev);
        let file = input.files().and_then(|files| files.get(0));
        set_file_name.set(file.as_ref().map(|f| f.name()));
        selected_file.set_value(file);
    };

    let on_upload = {
        let on_uploaded = on_uploaded.clone();
        move |_| {
            let Some(file) = selected_file.get_value() else {
                return;
            };
            // 多重アップロードはしない
            if uploading.get() {
                return;
            }
            set_uploading.set(true);
            set_status.set(String::new());

            let on_uploaded = on_uploaded.clone();
            spawn_local(async move {
                let file = gloo::file::File::from(file);
                match gloo::file::futures::read_as_text(&file).await {
                    Err(_) => set_status.set(MSG_INVALID_FILE.to_string()),
                    Ok(text) => match parse_feature_collection(&text) {
                        Err(_) => set_status.set(MSG_INVALID_FILE.to_string()),
                        Ok(collection) => {
                            match api::embed_features(api_base, collection.features).await {
                                Ok(response) => {
                                    set_status.set(format!(
                                        "登録完了: {}件の地物を埋め込みました",
                                        response.feature_count
                                    ));
                                    on_uploaded(());
                                }
                                Err(err) => {
                                    gloo::console::warn!("アップロード失敗:", err);
                                    set_status.set(MSG_UPLOAD_FAILED.to_string());
                                }
                            }
                        }
                    },
                }
                set_uploading.set(false);
            });
        }
    };

    view! {
        <div class="upload-panel">
            <h3>"GeoJSONアップロード"</h3>
            <input
                type="file"
                accept=".json,.geojson,application/json"
                on:change=on_file_change
            />
            <button
                class="btn btn-primary"
                disabled=move || file_name.get().is_none() || uploading.get()
                on:click=on_upload
            >
                {move || if uploading.get() { "登録中..." } else { "埋め込み登録" }}
            </button>
            <p class="upload-status">{move || status.get()}</p>
        </div>
    }
}
