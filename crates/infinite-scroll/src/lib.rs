//! Infinite Scroll
//!
//! Offset-paginated product feed, independent of any UI framework:
//! - controller: accumulates pages, tracks loading/error/has-more
//! - sentinel: turns anchor visibility into fetch triggers
//! - client: HTTP source for the catalog API
//! - card: display strings for one product

pub mod card;
pub mod client;
pub mod config;
pub mod controller;
pub mod error;
pub mod lifecycle;
pub mod product;
pub mod sentinel;
pub mod source;
pub mod state;

#[cfg(test)]
mod testing;

pub use card::{CardModel, ReviewSummary};
pub use client::CatalogClient;
pub use config::FeedConfig;
pub use controller::{FeedController, Spawner, Subscription};
pub use error::{ConfigError, FetchError};
pub use product::{Dimensions, Product, ProductPage, Review};
pub use sentinel::{SentinelBinding, SentinelDeps, VisibilityObserver};
pub use source::{PageRequest, PageSource};
pub use state::FetchState;
