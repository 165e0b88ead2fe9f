//! ヘッダーコンポーネント

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <h1>"Geo Embeddings - 地理空間セマンティック検索"</h1>
        </header>
    }
}
