//! Lifecycle Helpers
//!
//! Small guards behind `on_create` and `on_dependencies_changed`.

use std::cell::{Cell, RefCell};

/// Fires once, on the first call to [`OnceFlag::first`].
#[derive(Debug, Default)]
pub struct OnceFlag(Cell<bool>);

impl OnceFlag {
    pub fn first(&self) -> bool {
        !self.0.replace(true)
    }
}

/// Remembers the last dependency tuple a hook ran with.
#[derive(Debug)]
pub struct DependencyGate<D> {
    last: RefCell<Option<D>>,
}

impl<D> Default for DependencyGate<D> {
    fn default() -> Self {
        Self {
            last: RefCell::new(None),
        }
    }
}

impl<D: PartialEq + Clone> DependencyGate<D> {
    /// Records `deps`; true if they differ from the previous call.
    /// The first call always reports a change.
    pub fn changed(&self, deps: &D) -> bool {
        let mut last = self.last.borrow_mut();
        if last.as_ref() == Some(deps) {
            return false;
        }
        *last = Some(deps.clone());
        true
    }

    pub fn reset(&self) {
        self.last.borrow_mut().take();
    }
}
