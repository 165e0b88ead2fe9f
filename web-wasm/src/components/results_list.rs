//! 検索結果リストコンポーネント

use leptos::prelude::*;

use geo_embed_common::{format_similarity, SearchResultItem};

#[component]
pub fn ResultsList(results: ReadSignal<Vec<SearchResultItem>>) -> impl IntoView {
    view! {
        <div class="results-list">
            <For
                each=move || results.get()
                key=|item| item.id.clone()
                children=move |item| {
                    let similarity = format_similarity(item.similarity);
                    let description = item.description().map(str::to_string);
                    view! {
                        <div class="result-item">
                            <div class="result-head">
                                <span class="result-name">{item.name.clone()}</span>
                                <span class="result-similarity">{similarity}</span>
                            </div>
                            {description
                                .map(|text| view! { <p class="result-description">{text}</p> })}
                        </div>
                    }
                }
            />
        </div>
    }
}
