//! Pagination Fetch Controller
//!
//! Owns the accumulated product list and the offset cursor, and publishes
//! every state change to its subscribers.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use futures::future::LocalBoxFuture;
use log::{debug, error};

use crate::lifecycle::OnceFlag;
use crate::source::{PageRequest, PageSource};
use crate::state::FetchState;

/// Runs a future on the host's single-threaded executor.
pub type Spawner = Rc<dyn Fn(LocalBoxFuture<'static, ()>)>;

type Listener = Rc<dyn Fn(&FetchState)>;

#[derive(Default)]
struct Listeners {
    next_id: Cell<u64>,
    entries: RefCell<Vec<(u64, Listener)>>,
}

/// Keeps a listener registered until dropped.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    id: u64,
    listeners: Weak<Listeners>,
}

impl Subscription {
    pub fn unsubscribe(self) {}
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(listeners) = self.listeners.upgrade() {
            listeners.entries.borrow_mut().retain(|(id, _)| *id != self.id);
        }
    }
}

struct Inner<S> {
    source: S,
    page_size: usize,
    spawner: Spawner,
    state: RefCell<FetchState>,
    listeners: Rc<Listeners>,
    created: OnceFlag,
    disposed: Cell<bool>,
}

/// Cheap to clone; clones share the same state.
pub struct FeedController<S> {
    inner: Rc<Inner<S>>,
}

impl<S> Clone for FeedController<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<S: PageSource + 'static> FeedController<S> {
    pub fn new(source: S, page_size: usize, spawner: Spawner) -> Self {
        Self {
            inner: Rc::new(Inner {
                source,
                page_size,
                spawner,
                state: RefCell::new(FetchState::default()),
                listeners: Rc::new(Listeners::default()),
                created: OnceFlag::default(),
                disposed: Cell::new(false),
            }),
        }
    }

    pub fn page_size(&self) -> usize {
        self.inner.page_size
    }

    pub fn snapshot(&self) -> FetchState {
        self.inner.state.borrow().clone()
    }

    pub fn with_state<R>(&self, f: impl FnOnce(&FetchState) -> R) -> R {
        f(&self.inner.state.borrow())
    }

    /// Register a listener, called after every state change.
    pub fn subscribe(&self, listener: impl Fn(&FetchState) + 'static) -> Subscription {
        let listeners = &self.inner.listeners;
        let id = listeners.next_id.get();
        listeners.next_id.set(id + 1);
        listeners.entries.borrow_mut().push((id, Rc::new(listener)));
        Subscription {
            id,
            listeners: Rc::downgrade(listeners),
        }
    }

    /// Mount hook: issues the initial fetch. Later calls do nothing.
    ///
    /// Runs whether or not scroll-triggered fetching is disabled.
    pub fn on_create(&self) {
        if self.inner.created.first() {
            self.trigger();
        }
    }

    /// Spawn [`FeedController::fetch_next_page`] on the injected executor.
    pub fn trigger(&self) {
        let controller = self.clone();
        (self.inner.spawner)(Box::pin(async move {
            controller.fetch_next_page().await;
        }));
    }

    /// Fetch one page at the current offset.
    ///
    /// Does not check `loading`: callers that overlap invocations get
    /// overlapping requests for the same offset.
    pub async fn fetch_next_page(&self) {
        if self.is_disposed() {
            return;
        }

        let request = {
            let mut state = self.inner.state.borrow_mut();
            state.begin_fetch();
            PageRequest {
                limit: self.inner.page_size,
                skip: state.skip,
            }
        };
        self.notify();
        debug!(target: "feed", "Fetching page limit={} skip={}", request.limit, request.skip);

        let result = self.inner.source.fetch_page(request).await;

        if self.is_disposed() {
            debug!(target: "feed", "Dropping page at skip={} after dispose", request.skip);
            return;
        }

        match result {
            Ok(page) => {
                let received = page.products.len();
                let mut state = self.inner.state.borrow_mut();
                state.apply_page(page.products, self.inner.page_size);
                debug!(
                    target: "feed",
                    "Loaded {} products (total {}, has_more={})",
                    received,
                    state.products.len(),
                    state.has_more
                );
            }
            Err(err) => {
                error!(target: "feed", "Fetch Error: {err}");
                self.inner.state.borrow_mut().apply_failure(err.user_message());
            }
        }
        self.notify();
    }

    /// Teardown. Results of fetches still in flight are ignored.
    pub fn dispose(&self) {
        self.inner.disposed.set(true);
    }

    pub fn is_disposed(&self) -> bool {
        self.inner.disposed.get()
    }

    fn notify(&self) {
        let snapshot = self.snapshot();
        let listeners: Vec<Listener> = self
            .inner
            .listeners
            .entries
            .borrow()
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect();
        for listener in listeners {
            listener(&snapshot);
        }
    }
}
