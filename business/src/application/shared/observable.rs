use std::sync::Arc;

use tokio::sync::watch;

/// Reactive state container shared by the stores.
///
/// Mutations run under the channel's write lock, so readers never see a
/// half-applied change. Subscribers are woken only when a mutation reports
/// that it changed something.
///
/// `Clone` is cheap and every clone points at the same state.
#[derive(Debug)]
pub struct Observable<S> {
    sender: Arc<watch::Sender<S>>,
}

impl<S> Clone for Observable<S> {
    fn clone(&self) -> Self {
        Self {
            sender: Arc::clone(&self.sender),
        }
    }
}

impl<S: Clone> Observable<S> {
    pub fn new(initial: S) -> Self {
        let (sender, _) = watch::channel(initial);
        Self {
            sender: Arc::new(sender),
        }
    }

    /// Owned copy of the current state.
    pub fn snapshot(&self) -> S {
        self.sender.borrow().clone()
    }

    /// Reads the current state without cloning it.
    pub fn read<R>(&self, f: impl FnOnce(&S) -> R) -> R {
        f(&self.sender.borrow())
    }

    /// Applies `f` and notifies subscribers when it returns `true`.
    pub fn update(&self, f: impl FnOnce(&mut S) -> bool) -> bool {
        self.sender.send_if_modified(f)
    }

    pub fn subscribe(&self) -> watch::Receiver<S> {
        self.sender.subscribe()
    }
}
