//! 検索ボックスコンポーネント

use leptos::ev::SubmitEvent;
use leptos::prelude::*;

#[component]
pub fn SearchBox<F>(loading: ReadSignal<bool>, on_search: F) -> impl IntoView
where
    F: Fn(String, Option<String>) + 'static + Clone,
{
    let (query, set_query) = signal(String::new());
    let (source_type, set_source_type) = signal(String::new());

    let on_submit = {
        let on_search = on_search.clone();
        move |ev: SubmitEvent| {
            ev.prevent_default();

            // ボタンは無効化済みだがEnter送信も同じ扱いにする
            if loading.get() {
                return;
            }

            let source = source_type.get();
            let source = (!source.is_empty()).then_some(source);
            on_search(query.get(), source);
        }
    };

    view! {
        <form class="search-box" on:submit=on_submit>
            <input
                type="text"
                placeholder="例: 川沿いの港町"
                prop:value=move || query.get()
                on:input=move |ev| {
                    set_query.set(event_target_value(&ev));
                }
            />
            <select on:change=move |ev| {
                set_source_type.set(event_target_value(&ev));
            }>
                <option value="">"すべてのソース"</option>
                <option value="vector">"ベクタ"</option>
            </select>
            <button type="submit" disabled=move || loading.get()>
                {move || if loading.get() { "検索中..." } else { "検索" }}
            </button>
        </form>
    }
}
