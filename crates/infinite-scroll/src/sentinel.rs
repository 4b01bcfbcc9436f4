//! Visibility Sentinel Binding
//!
//! Watches a single anchor placed after the last card and asks the
//! controller for the next page when the anchor scrolls fully into view.

use std::cell::RefCell;
use std::rc::Rc;

use log::trace;

use crate::controller::FeedController;
use crate::lifecycle::DependencyGate;
use crate::source::PageSource;
use crate::state::FetchState;

/// Viewport intersection capability, e.g. a browser `IntersectionObserver`.
pub trait VisibilityObserver {
    type Anchor: Clone;

    /// Start watching `anchor`; `callback` runs each time at least
    /// `threshold` of it is inside the viewport.
    fn observe(&self, anchor: &Self::Anchor, callback: Rc<dyn Fn()>, threshold: f64);

    fn unobserve(&self, anchor: &Self::Anchor);
}

/// Inputs the binding re-evaluates on.
///
/// `has_fetched_once` is included so the first completed page re-binds
/// even if the host never saw the intermediate `loading = true` state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SentinelDeps {
    pub disabled: bool,
    pub loading: bool,
    pub has_more: bool,
    pub has_fetched_once: bool,
}

impl SentinelDeps {
    pub fn from_state(state: &FetchState, disabled: bool) -> Self {
        Self {
            disabled,
            loading: state.loading,
            has_more: state.has_more,
            has_fetched_once: state.has_fetched_once,
        }
    }
}

pub struct SentinelBinding<S, O: VisibilityObserver> {
    controller: FeedController<S>,
    observer: O,
    threshold: f64,
    gate: DependencyGate<SentinelDeps>,
    bound: RefCell<Option<O::Anchor>>,
}

impl<S: PageSource + 'static, O: VisibilityObserver> SentinelBinding<S, O> {
    pub fn new(controller: FeedController<S>, observer: O, threshold: f64) -> Self {
        Self {
            controller,
            observer,
            threshold,
            gate: DependencyGate::default(),
            bound: RefCell::new(None),
        }
    }

    /// Re-bind after `deps` changed. Identical deps are a no-op.
    ///
    /// The previous anchor is always released first. A new one is observed
    /// only when fetching is enabled, the first page has arrived and no
    /// fetch is in flight.
    pub fn on_dependencies_changed(&self, deps: SentinelDeps, anchor: Option<O::Anchor>) {
        if !self.gate.changed(&deps) {
            return;
        }
        self.unbind();

        if deps.disabled || deps.loading || !deps.has_fetched_once {
            return;
        }
        let Some(anchor) = anchor else {
            return;
        };

        let controller = self.controller.clone();
        let callback: Rc<dyn Fn()> = Rc::new(move || {
            let ready = controller.with_state(|state| state.has_more && !state.loading);
            if ready {
                controller.trigger();
            }
        });

        trace!(target: "sentinel", "Observing anchor ({:?})", deps);
        self.observer.observe(&anchor, callback, self.threshold);
        *self.bound.borrow_mut() = Some(anchor);
    }

    /// Recompute deps from the controller's current state and re-bind if
    /// they changed. This is what a host effect calls on every reactive run.
    pub fn refresh(&self, disabled: bool, anchor: Option<O::Anchor>) {
        let deps = self
            .controller
            .with_state(|state| SentinelDeps::from_state(state, disabled));
        self.on_dependencies_changed(deps, anchor);
    }

    pub fn is_bound(&self) -> bool {
        self.bound.borrow().is_some()
    }

    /// Release the anchor and forget the last deps.
    pub fn teardown(&self) {
        self.unbind();
        self.gate.reset();
    }

    fn unbind(&self) {
        let previous = self.bound.borrow_mut().take();
        if let Some(anchor) = previous {
            trace!(target: "sentinel", "Unobserving anchor");
            self.observer.unobserve(&anchor);
        }
    }
}
