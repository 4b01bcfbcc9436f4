//! Product Feed App
//!
//! Page shell around the infinite product grid.

use leptos::prelude::*;

use crate::components::ProductGrid;
use crate::config;

#[component]
pub fn App() -> impl IntoView {
    let config = config::load();
    let disabled = Signal::stored(config.disabled);

    // Provide config to the feed hook and cards
    provide_context(config);

    view! {
        <main class="feed-page">
            <header class="feed-header">
                <h1>"Product Catalog"</h1>
                <p class="feed-subtitle">"Scroll to load more"</p>
            </header>

            <ProductGrid disabled=disabled />
        </main>
    }
}
