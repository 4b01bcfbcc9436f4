//! Product Card Component
//!
//! One catalog entry. Fades in shortly after mounting.

use gloo_timers::callback::Timeout;
use infinite_scroll::config::DEFAULT_FADE_IN_DELAY_MS;
use infinite_scroll::{CardModel, Product};
use leptos::prelude::*;

#[component]
pub fn ProductCard(
    product: Product,
    /// Delay before the fade-in starts, so the transition runs after first paint
    #[prop(default = DEFAULT_FADE_IN_DELAY_MS)]
    fade_in_delay_ms: u32,
) -> impl IntoView {
    let (is_visible, set_is_visible) = signal(false);

    // Dropped (and so cancelled) when the card unmounts
    let _fade_in = StoredValue::new_local(Timeout::new(fade_in_delay_ms, move || {
        set_is_visible.set(true);
    }));

    let CardModel {
        title,
        thumbnail,
        brand_line,
        rating,
        original_price,
        discounted_price,
        discount,
        availability,
        stock,
        tags,
        dimensions,
        description,
        review,
    } = CardModel::from(&product);

    view! {
        <article class=move || if is_visible.get() { "product-card visible" } else { "product-card" }>
            <div class="product-thumb">
                <img src=thumbnail alt=title.clone() loading="lazy" />
            </div>

            <div class="product-heading">
                <h2 class="product-title">{title}</h2>
                {brand_line.map(|line| view! { <p class="product-brand">{line}</p> })}
            </div>

            <div class="product-rating">"⭐ " {rating}</div>

            <div class="product-price">
                <span class="price-discounted">{discounted_price}</span>
                " "
                <span class="price-original">{original_price}</span>
                " "
                <span class="price-discount">{discount}</span>
            </div>

            <p class="product-stock">
                <strong>"Status:"</strong> " " {availability} " | "
                <strong>"In stock:"</strong> " " {stock}
            </p>

            <div class="product-tags">
                {tags.into_iter().map(|tag| view! { <span class="product-tag">{tag}</span> }).collect_view()}
            </div>

            <p class="product-dimensions">
                <strong>"Dimensions:"</strong> " " {dimensions}
            </p>

            <p class="product-description">{description}</p>

            {review.map(|review| view! {
                <div class="product-review">
                    <p class="review-heading">"Recent Review:"</p>
                    <blockquote class="review-comment">"“" {review.comment} "”"</blockquote>
                    <p class="review-author">"– " {review.reviewer}</p>
                </div>
            })}
        </article>
    }
}
