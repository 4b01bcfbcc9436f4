//! UI Components
//!
//! Leptos components for the product feed.

mod feed_status;
mod product_card;
mod product_grid;

pub use feed_status::FeedStatus;
pub use product_card::ProductCard;
pub use product_grid::ProductGrid;
