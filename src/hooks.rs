//! Infinite Products Hook
//!
//! Wires a `FeedController` and its sentinel into the Leptos lifecycle.

use std::rc::Rc;

use futures::future::LocalBoxFuture;
use infinite_scroll::{
    CatalogClient, FeedConfig, FeedController, Product, SentinelBinding, Spawner, Subscription,
};
use leptos::html::Div;
use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;
use wasm_bindgen::JsCast;

use crate::dom_observer::DomVisibilityObserver;
use crate::store::{store_sync, FeedStore, FeedView, FeedViewStoreFields};

/// Everything the hook creates, released together when the owner is disposed
struct FeedSession {
    controller: FeedController<CatalogClient>,
    binding: SentinelBinding<CatalogClient, DomVisibilityObserver>,
    _subscription: Subscription,
}

impl Drop for FeedSession {
    fn drop(&mut self) {
        self.binding.teardown();
        self.controller.dispose();
        log::debug!(target: "feed", "Feed session closed");
    }
}

/// Read-only feed state plus the anchor for the sentinel element
#[derive(Clone, Copy)]
pub struct InfiniteProducts {
    pub products: Signal<Vec<Product>>,
    pub loading: Signal<bool>,
    pub has_more: Signal<bool>,
    pub error: Signal<Option<String>>,
    /// Attach to the element rendered after the last card
    pub loader_ref: NodeRef<Div>,
    /// Re-request the current offset after a failure
    pub retry: Callback<()>,
}

/// Load the catalog page by page as the user scrolls.
///
/// The first page is requested on mount even when `disabled` is true;
/// `disabled` only stops scroll-triggered fetches.
pub fn use_infinite_products(disabled: Signal<bool>) -> InfiniteProducts {
    let config = use_context::<FeedConfig>().unwrap_or_default();
    let store: FeedStore = Store::new(FeedView::new());

    let spawner: Spawner = Rc::new(|task: LocalBoxFuture<'static, ()>| spawn_local(task));
    let controller = FeedController::new(
        CatalogClient::from_config(&config),
        config.page_size,
        spawner,
    );
    let subscription = controller.subscribe(move |state| store_sync(&store, state));
    let binding = SentinelBinding::new(
        controller.clone(),
        DomVisibilityObserver::default(),
        config.threshold,
    );
    let session = StoredValue::new_local(FeedSession {
        controller,
        binding,
        _subscription: subscription,
    });

    let loader_ref = NodeRef::<Div>::new();

    // Initial load on mount
    Effect::new(move |_| {
        session.with_value(|s| s.controller.on_create());
    });

    // Rebind the sentinel when disabled/loading/has_more change
    Effect::new(move |_| {
        let disabled = disabled.get();
        let _ = (store.loading().get(), store.has_more().get());
        let anchor = loader_ref
            .get()
            .map(|el| el.unchecked_into::<web_sys::Element>());

        session.with_value(|s| s.binding.refresh(disabled, anchor));
    });

    let retry = Callback::new(move |_: ()| {
        session.with_value(|s| {
            if !s.controller.with_state(|state| state.loading) {
                s.controller.trigger();
            }
        });
    });

    InfiniteProducts {
        products: Signal::derive(move || store.products().get()),
        loading: Signal::derive(move || store.loading().get()),
        has_more: Signal::derive(move || store.has_more().get()),
        error: Signal::derive(move || store.error().get()),
        loader_ref,
        retry,
    }
}
