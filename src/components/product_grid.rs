//! Product Grid Component
//!
//! Cards in fetch order, followed by the scroll sentinel and feed status.

use infinite_scroll::config::DEFAULT_FADE_IN_DELAY_MS;
use infinite_scroll::FeedConfig;
use leptos::prelude::*;

use crate::components::{FeedStatus, ProductCard};
use crate::hooks::use_infinite_products;

#[component]
pub fn ProductGrid(
    /// Stop loading further pages on scroll
    #[prop(into, default = Signal::stored(false))]
    disabled: Signal<bool>,
) -> impl IntoView {
    let feed = use_infinite_products(disabled);
    let fade_in_delay_ms = use_context::<FeedConfig>()
        .map(|config| config.fade_in_delay_ms)
        .unwrap_or(DEFAULT_FADE_IN_DELAY_MS);
    let item_count = Signal::derive(move || feed.products.with(Vec::len));

    view! {
        <section class="product-feed">
            <div class="product-grid">
                // Keyed by position too: the server may repeat a product
                <For
                    each=move || feed.products.get().into_iter().enumerate()
                    key=|(index, product)| (*index, product.id)
                    children=move |(_, product)| {
                        view! { <ProductCard product=product fade_in_delay_ms=fade_in_delay_ms /> }
                    }
                />
            </div>

            <div node_ref=feed.loader_ref class="feed-sentinel" aria-hidden="true"></div>

            <FeedStatus
                loading=feed.loading
                has_more=feed.has_more
                error=feed.error
                item_count=item_count
                on_retry=feed.retry
            />
        </section>
    }
}
