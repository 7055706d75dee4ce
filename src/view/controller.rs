//! Request state machine: `RequestController`.
//!
//! One controller per view instance. It owns the view's [`RequestState`],
//! drives `Idle → Loading → Success | Failure`, and applies a resolved fetch
//! only if no newer fetch was started and the controller was not disposed in
//! the meantime (last request wins).
//!
//! Staleness is tracked with a generation token: every `refresh()` takes the
//! next generation, and a result is applied only if its generation is still
//! the current one when it resolves. There is no transport-level cancellation;
//! a superseded request runs to completion and its result is dropped.
//!
//! Observers either register a synchronous listener ([`subscribe`]) that sees
//! every transition in order, or take a [`watch`] receiver that always holds
//! the latest snapshot.
//!
//! [`subscribe`]: RequestController::subscribe
//! [`watch`]: RequestController::watch

use super::state::RequestState;
use crate::error::FetchError;

use std::sync::{Arc, Mutex, MutexGuard};
use tokio::sync::watch;

/// Future returned by a controller's fetch function.
#[cfg(not(target_arch = "wasm32"))]
pub type FetchFuture<T> = futures_util::future::BoxFuture<'static, Result<T, FetchError>>;

/// Future returned by a controller's fetch function.
#[cfg(target_arch = "wasm32")]
pub type FetchFuture<T> = futures_util::future::LocalBoxFuture<'static, Result<T, FetchError>>;

type Fetcher<T> = Arc<dyn Fn() -> FetchFuture<T> + Send + Sync>;
type Listener<T> = Arc<dyn Fn(&RequestState<T>) + Send + Sync>;

/// Handle returned by [`RequestController::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// What happened to the result of one `refresh()` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// The result became the current state.
    Applied,
    /// A newer refresh started before this one resolved; result dropped.
    Superseded,
    /// The controller was disposed; nothing was fetched or applied.
    Disposed,
}

struct Control {
    generation: u64,
    disposed: bool,
}

struct Listeners<T> {
    next_id: u64,
    entries: Vec<(u64, Listener<T>)>,
}

struct Inner<T> {
    fetcher: Fetcher<T>,
    control: Mutex<Control>,
    state: watch::Sender<RequestState<T>>,
    listeners: Mutex<Listeners<T>>,
}

/// Per-view request state machine. Clones share the same state.
pub struct RequestController<T> {
    inner: Arc<Inner<T>>,
}

impl<T> Clone for RequestController<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

fn lock<G>(m: &Mutex<G>) -> MutexGuard<'_, G> {
    m.lock().unwrap_or_else(|e| e.into_inner())
}

impl<T> RequestController<T>
where
    T: Clone + Send + Sync + 'static,
{
    /// Create an idle controller around a fetch function.
    ///
    /// `fetch` is invoked exactly once per `refresh()`.
    pub fn new<F>(fetch: F) -> Self
    where
        F: Fn() -> FetchFuture<T> + Send + Sync + 'static,
    {
        let (state, _) = watch::channel(RequestState::Idle);
        Self {
            inner: Arc::new(Inner {
                fetcher: Arc::new(fetch),
                control: Mutex::new(Control {
                    generation: 0,
                    disposed: false,
                }),
                state,
                listeners: Mutex::new(Listeners {
                    next_id: 0,
                    entries: Vec::new(),
                }),
            }),
        }
    }

    /// Current state.
    pub fn snapshot(&self) -> RequestState<T> {
        self.inner.state.borrow().clone()
    }

    /// Start a fresh fetch cycle and wait for it to resolve.
    ///
    /// Moves to `Loading`, invokes the fetch function once, then applies the
    /// result unless a newer `refresh()` started or the controller was
    /// disposed while it was in flight. Fetch failures end up in
    /// `RequestState::Failure`; this method never returns an error.
    pub async fn refresh(&self) -> RefreshOutcome {
        let Some(generation) = self.begin() else {
            tracing::debug!("refresh() on disposed controller ignored");
            return RefreshOutcome::Disposed;
        };

        let result = (self.inner.fetcher)().await;
        self.resolve(generation, result)
    }

    /// Tear the controller down. Results still in flight are dropped and
    /// later `refresh()` calls do nothing. Listeners are released.
    pub fn dispose(&self) {
        {
            let mut control = lock(&self.inner.control);
            if control.disposed {
                return;
            }
            control.disposed = true;
            control.generation += 1;
        }
        lock(&self.inner.listeners).entries.clear();
        tracing::debug!("Request controller disposed");
    }

    pub fn is_disposed(&self) -> bool {
        lock(&self.inner.control).disposed
    }

    /// Register a listener. It is called immediately with the current
    /// snapshot, then once per transition, in order.
    pub fn subscribe<F>(&self, listener: F) -> SubscriptionId
    where
        F: Fn(&RequestState<T>) + Send + Sync + 'static,
    {
        let listener: Listener<T> = Arc::new(listener);
        let id = {
            let mut listeners = lock(&self.inner.listeners);
            let id = listeners.next_id;
            listeners.next_id += 1;
            listeners.entries.push((id, listener.clone()));
            id
        };
        listener(&self.snapshot());
        SubscriptionId(id)
    }

    /// Remove a listener. Returns `false` if it was not registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut listeners = lock(&self.inner.listeners);
        let before = listeners.entries.len();
        listeners.entries.retain(|(i, _)| *i != id.0);
        listeners.entries.len() != before
    }

    /// Receiver that always holds the latest snapshot. Dropping it unsubscribes.
    pub fn watch(&self) -> watch::Receiver<RequestState<T>> {
        self.inner.state.subscribe()
    }

    // ── Transitions ──────────────────────────────────────────────────────

    /// Claim the next generation and enter `Loading`.
    fn begin(&self) -> Option<u64> {
        let generation = {
            let mut control = lock(&self.inner.control);
            if control.disposed {
                return None;
            }
            control.generation += 1;
            let generation = control.generation;
            if self.inner.state.borrow().is_loading() {
                return Some(generation);
            }
            self.inner.state.send_replace(RequestState::Loading);
            generation
        };
        self.notify();
        Some(generation)
    }

    fn resolve(&self, generation: u64, result: Result<T, FetchError>) -> RefreshOutcome {
        {
            let control = lock(&self.inner.control);
            if control.disposed {
                tracing::debug!(generation, "Dropping result: controller disposed");
                return RefreshOutcome::Disposed;
            }
            if control.generation != generation {
                tracing::debug!(
                    generation,
                    current = control.generation,
                    "Dropping result: superseded by newer request"
                );
                return RefreshOutcome::Superseded;
            }
            if let Err(e) = &result {
                tracing::warn!(kind = %e.kind(), error = %e, "Fetch failed");
            }
            self.inner.state.send_replace(RequestState::from_result(result));
        }
        self.notify();
        RefreshOutcome::Applied
    }

    fn notify(&self) {
        let listeners: Vec<Listener<T>> = lock(&self.inner.listeners)
            .entries
            .iter()
            .map(|(_, l)| l.clone())
            .collect();
        if listeners.is_empty() {
            return;
        }
        let snapshot = self.snapshot();
        for listener in listeners {
            listener(&snapshot);
        }
    }
}
