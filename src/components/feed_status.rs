//! Feed Status Component
//!
//! Loading, error and end-of-list messages shown under the grid.

use leptos::prelude::*;

#[component]
pub fn FeedStatus(
    loading: Signal<bool>,
    has_more: Signal<bool>,
    error: Signal<Option<String>>,
    /// Products loaded so far
    item_count: Signal<usize>,
    #[prop(into)] on_retry: Callback<()>,
) -> impl IntoView {
    view! {
        <Show when=move || loading.get()>
            <p class="feed-loading">"Loading more products..."</p>
        </Show>

        {move || error.get().map(|message| view! {
            <div class="feed-error" role="alert">
                <p>{message}</p>
                <Show when=move || !loading.get()>
                    <button class="retry-btn" on:click=move |_| on_retry.run(())>
                        "Try again"
                    </button>
                </Show>
            </div>
        })}

        <Show when=move || (!has_more.get() && item_count.get() > 0)>
            <p class="feed-end">"You've reached the end of the catalog."</p>
        </Show>
    }
}
