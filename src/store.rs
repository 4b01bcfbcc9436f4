//! Feed View Store
//!
//! Uses Leptos reactive_stores so each view reads only the field it needs.

use infinite_scroll::{FetchState, Product};
use leptos::prelude::*;
use reactive_stores::Store;

/// Reactive mirror of the controller's state
#[derive(Clone, Debug, Default, Store)]
pub struct FeedView {
    /// Every product loaded so far, in fetch order
    pub products: Vec<Product>,
    /// A page request is in flight
    pub loading: bool,
    /// Another page may exist
    pub has_more: bool,
    /// Message from the last failed fetch, cleared when the next one starts
    pub error: Option<String>,
}

impl FeedView {
    pub fn new() -> Self {
        Self {
            has_more: true,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type FeedStore = Store<FeedView>;

// ========================
// Store Helper Functions
// ========================

/// Copy controller state into the store, writing only fields that changed
pub fn store_sync(store: &FeedStore, state: &FetchState) {
    // The list only ever grows, so its length identifies it
    if store.products().with_untracked(Vec::len) != state.products.len() {
        *store.products().write() = state.products.clone();
    }
    if store.loading().get_untracked() != state.loading {
        *store.loading().write() = state.loading;
    }
    if store.has_more().get_untracked() != state.has_more {
        *store.has_more().write() = state.has_more;
    }
    if store.error().with_untracked(|error| *error != state.error) {
        *store.error().write() = state.error.clone();
    }
}
