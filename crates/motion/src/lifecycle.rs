// =============================================================================
// Folio Motion - Listener Lifecycle
// =============================================================================
// Everything `start()` registers is pushed into a `Disposers` list and
// released together by `stop()`.
// =============================================================================

/// Handle to a registered listener. Disposing or dropping it detaches it.
#[must_use = "dropping a subscription detaches its listener"]
pub struct Subscription {
    dispose: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(dispose: impl FnOnce() + 'static) -> Self {
        Self { dispose: Some(Box::new(dispose)) }
    }

    /// A subscription with nothing to release.
    pub fn noop() -> Self {
        Self { dispose: None }
    }

    pub fn dispose(mut self) {
        if let Some(dispose) = self.dispose.take() {
            dispose();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(dispose) = self.dispose.take() {
            dispose();
        }
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.dispose.is_some())
            .finish()
    }
}

/// Ordered list of subscriptions owned by a started component.
#[derive(Debug, Default)]
pub struct Disposers {
    subscriptions: Vec<Subscription>,
}

impl Disposers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, subscription: Subscription) {
        self.subscriptions.push(subscription);
    }

    pub fn len(&self) -> usize {
        self.subscriptions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subscriptions.is_empty()
    }

    /// Take every subscription out, leaving the list empty.
    ///
    /// Callers dispose the returned list after releasing any borrow on the
    /// owner, since disposers may call back into the environment.
    pub fn take(&mut self) -> Disposers {
        Disposers { subscriptions: std::mem::take(&mut self.subscriptions) }
    }

    /// Dispose in reverse registration order.
    pub fn release_all(self) {
        for subscription in self.subscriptions.into_iter().rev() {
            subscription.dispose();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    #[test]
    fn test_release_all_reverse_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut disposers = Disposers::new();
        for name in ["scroll", "resize", "pointer"] {
            let log = log.clone();
            disposers.push(Subscription::new(move || log.borrow_mut().push(name)));
        }
        assert_eq!(disposers.len(), 3);

        disposers.take().release_all();

        assert_eq!(*log.borrow(), vec!["pointer", "resize", "scroll"]);
        assert!(disposers.is_empty());
    }

    #[test]
    fn test_drop_disposes_once() {
        let hits = Rc::new(Cell::new(0));
        let counter = hits.clone();
        let subscription = Subscription::new(move || counter.set(counter.get() + 1));
        drop(subscription);
        assert_eq!(hits.get(), 1);

        let counter = hits.clone();
        Subscription::new(move || counter.set(counter.get() + 1)).dispose();
        assert_eq!(hits.get(), 2);

        let mut disposers = Disposers::new();
        let counter = hits.clone();
        disposers.push(Subscription::new(move || counter.set(counter.get() + 1)));
        drop(disposers);
        assert_eq!(hits.get(), 3);
    }

    #[test]
    fn test_noop_subscription() {
        Subscription::noop().dispose();
    }
}
