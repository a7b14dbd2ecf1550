//! # Studio Runtime
//!
//! Runtime implementation for the studio state engine.
//!
//! This crate provides the [`Store`] that coordinates reducer execution and
//! effect handling for one entity store.
//!
//! ## Core Components
//!
//! - **Store**: manages state and executes effects
//! - **Effect Executor**: runs effect descriptions and feeds resulting
//!   actions back into the reducer
//! - **`EffectHandle`**: lets a dispatcher wait for the effects of one
//!   action to settle
//!
//! ## Example
//!
//! ```ignore
//! use studio_runtime::Store;
//!
//! let store = Store::new(EntityState::default(), EntityReducer::new(), environment);
//!
//! // Dispatch an action; the handle resolves once its effects settle.
//! let mut handle = store.send(EntityAction::FetchList { query }).await?;
//! handle.wait().await;
//!
//! // Read state.
//! let loading = store.state(|s| s.loading).await;
//! ```

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;
use studio_core::{effect::Effect, reducer::Reducer};
use tokio::sync::{RwLock, broadcast, watch};

/// Error types for the Store runtime.
pub mod error {
    use thiserror::Error;

    /// Errors that can occur during Store operations.
    #[derive(Error, Debug)]
    pub enum StoreError {
        /// Store is shutting down and not accepting new actions.
        #[error("Store is shutting down")]
        ShutdownInProgress,

        /// Shutdown timed out waiting for effects to complete.
        ///
        /// Some effects were still running when the timeout elapsed.
        #[error("Shutdown timed out with {0} effects still running")]
        ShutdownTimeout(usize),

        /// Timeout waiting for a terminal action.
        ///
        /// Returned by [`super::Store::send_and_wait_for`] when the timeout
        /// expires before a matching action is received.
        #[error("Timeout waiting for action")]
        Timeout,

        /// Action broadcast channel closed, typically because the store is
        /// shutting down.
        #[error("Action broadcast channel closed")]
        ChannelClosed,
    }
}

pub use error::StoreError;

/// Handle for tracking effect completion.
///
/// Returned by [`Store::send()`] so a dispatcher can attach continuation
/// logic once the action's effects have settled (e.g. navigate away after a
/// create resolves). The handle resolving says nothing about success or
/// failure of the operation - outcomes are observed through store state and
/// the notification sink.
#[derive(Clone)]
pub struct EffectHandle {
    effects: Arc<AtomicUsize>,
    completion: watch::Receiver<()>,
}

impl EffectHandle {
    fn new() -> (Self, EffectTracking) {
        let counter = Arc::new(AtomicUsize::new(0));
        let (tx, rx) = watch::channel(());

        let handle = Self {
            effects: Arc::clone(&counter),
            completion: rx,
        };

        let tracking = EffectTracking {
            counter,
            notifier: tx,
        };

        (handle, tracking)
    }

    /// Create a handle that's already complete.
    ///
    /// Useful for initialization in loops where you need a `last_handle`.
    #[must_use]
    pub fn completed() -> Self {
        let (tx, rx) = watch::channel(());
        let _ = tx.send(());

        Self {
            effects: Arc::new(AtomicUsize::new(0)),
            completion: rx,
        }
    }

    /// Wait for all effects of the originating action to complete.
    pub async fn wait(&mut self) {
        while self.effects.load(Ordering::SeqCst) > 0 {
            let _ = self.completion.changed().await;
        }
    }

    /// Wait for all effects to complete, up to `timeout`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Timeout`] if the timeout expires before all
    /// effects complete.
    pub async fn wait_with_timeout(&mut self, timeout: Duration) -> Result<(), StoreError> {
        tokio::time::timeout(timeout, self.wait())
            .await
            .map_err(|_| StoreError::Timeout)
    }
}

impl std::fmt::Debug for EffectHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EffectHandle")
            .field("pending_effects", &self.effects.load(Ordering::SeqCst))
            .finish_non_exhaustive()
    }
}

/// Internal: tracking context threaded through effect execution.
#[derive(Clone)]
struct EffectTracking {
    counter: Arc<AtomicUsize>,
    notifier: watch::Sender<()>,
}

impl EffectTracking {
    fn increment(&self) {
        self.counter.fetch_add(1, Ordering::SeqCst);
    }

    fn decrement(&self) {
        if self.counter.fetch_sub(1, Ordering::SeqCst) == 1 {
            // Counter reached zero, notify waiters.
            let _ = self.notifier.send(());
        }
    }
}

/// Internal: RAII guard that decrements the effect counter on drop.
///
/// Ensures the counter is always decremented, even if the effect panics.
struct DecrementGuard(EffectTracking);

impl Drop for DecrementGuard {
    fn drop(&mut self) {
        self.0.decrement();
    }
}

/// Guard that decrements an atomic counter on drop (for shutdown tracking).
struct AtomicCounterGuard(Arc<AtomicUsize>);

impl Drop for AtomicCounterGuard {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

/// The Store - runtime coordinator for one reducer.
///
/// The Store manages:
/// 1. State (behind `RwLock` for concurrent access)
/// 2. Reducer (state-transition logic)
/// 3. Environment (injected dependencies)
/// 4. Effect execution (with action feedback loop)
///
/// The store is created at process start and lives for the process
/// lifetime; dropping every clone tears it down implicitly.
///
/// # Type Parameters
///
/// - `S`: state type
/// - `A`: action type
/// - `E`: environment type
/// - `R`: reducer implementation
pub struct Store<S, A, E, R>
where
    R: Reducer<State = S, Action = A, Environment = E>,
{
    state: Arc<RwLock<S>>,
    reducer: R,
    environment: E,
    shutdown: Arc<AtomicBool>,
    pending_effects: Arc<AtomicUsize>,
    /// Action broadcast channel for observing actions produced by effects.
    ///
    /// Every action an effect feeds back is also broadcast to observers,
    /// which is what makes request/response waiting possible
    /// ([`Store::send_and_wait_for`]).
    action_broadcast: broadcast::Sender<A>,
}

impl<S, A, E, R> Store<S, A, E, R>
where
    R: Reducer<State = S, Action = A, Environment = E> + Send + Sync + 'static,
    A: Send + Clone + 'static,
    S: Send + Sync + 'static,
    E: Send + Sync + 'static,
{
    /// Create a new store with initial state, reducer, and environment.
    ///
    /// The action broadcast capacity defaults to 16; use
    /// [`Store::with_broadcast_capacity`] when many slow observers are
    /// expected.
    #[must_use]
    pub fn new(initial_state: S, reducer: R, environment: E) -> Self {
        Self::with_broadcast_capacity(initial_state, reducer, environment, 16)
    }

    /// Create a new store with a custom action broadcast capacity.
    #[must_use]
    pub fn with_broadcast_capacity(
        initial_state: S,
        reducer: R,
        environment: E,
        capacity: usize,
    ) -> Self {
        let (action_broadcast, _) = broadcast::channel(capacity);

        Self {
            state: Arc::new(RwLock::new(initial_state)),
            reducer,
            environment,
            shutdown: Arc::new(AtomicBool::new(false)),
            pending_effects: Arc::new(AtomicUsize::new(0)),
            action_broadcast,
        }
    }

    /// Send an action to the store.
    ///
    /// 1. Acquires the write lock on state
    /// 2. Calls the reducer with (state, action, environment)
    /// 3. Executes returned effects asynchronously
    /// 4. Effects may produce more actions (feedback loop)
    ///
    /// `send()` returns after *starting* effect execution, not completion;
    /// wait on the returned [`EffectHandle`] to observe settlement.
    /// Concurrent `send()` calls serialize at the reducer, and effects may
    /// complete in non-deterministic order.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::ShutdownInProgress`] if the store is shutting
    /// down.
    #[tracing::instrument(skip(self, action), name = "store_send")]
    pub async fn send(&self, action: A) -> Result<EffectHandle, StoreError>
    where
        R: Clone,
        E: Clone,
    {
        // Check if store is shutting down.
        if self.shutdown.load(Ordering::Acquire) {
            tracing::warn!("Rejected action: store is shutting down");
            return Err(StoreError::ShutdownInProgress);
        }

        let (handle, tracking) = EffectHandle::new();

        let effects = {
            let mut state = self.state.write().await;
            self.reducer.reduce(&mut state, action, &self.environment)
        };

        tracing::trace!("Reducer returned {} effects", effects.len());
        for effect in effects {
            self.execute_effect(effect, tracking.clone());
        }

        Ok(handle)
    }

    /// Send an action and wait for a matching result action.
    ///
    /// Designed for request/response flows: subscribe to the action
    /// broadcast *before* sending (avoiding the race), send the initial
    /// action, then return the first effect-produced action matching the
    /// predicate.
    ///
    /// # Errors
    ///
    /// - [`StoreError::Timeout`]: no matching action within `timeout`
    /// - [`StoreError::ChannelClosed`]: broadcast channel closed
    /// - [`StoreError::ShutdownInProgress`]: store is shutting down
    pub async fn send_and_wait_for<F>(
        &self,
        action: A,
        predicate: F,
        timeout: Duration,
    ) -> Result<A, StoreError>
    where
        R: Clone,
        E: Clone,
        F: Fn(&A) -> bool,
    {
        let mut rx = self.action_broadcast.subscribe();
        self.send(action).await?;

        tokio::time::timeout(timeout, async move {
            loop {
                match rx.recv().await {
                    Ok(action) if predicate(&action) => return Ok(action),
                    Ok(_) => {} // Not the action we want, keep waiting.
                    Err(broadcast::error::RecvError::Lagged(skipped)) => {
                        // Slow consumer; if the terminal action was dropped
                        // the timeout catches it.
                        tracing::warn!(skipped, "Action observer lagged");
                    },
                    Err(broadcast::error::RecvError::Closed) => {
                        return Err(StoreError::ChannelClosed);
                    },
                }
            }
        })
        .await
        .map_err(|_| StoreError::Timeout)?
    }

    /// Subscribe to all actions produced by effects.
    ///
    /// Only effect-produced actions are broadcast, not the initial actions
    /// passed to [`Store::send`].
    #[must_use]
    pub fn subscribe_actions(&self) -> broadcast::Receiver<A> {
        self.action_broadcast.subscribe()
    }

    /// Read current state via a closure.
    ///
    /// ```ignore
    /// let total = store.state(|s| s.req.last().map(|r| r.total)).await;
    /// ```
    pub async fn state<F, T>(&self, f: F) -> T
    where
        F: FnOnce(&S) -> T,
    {
        let state = self.state.read().await;
        f(&state)
    }

    /// Initiate graceful shutdown of the store.
    ///
    /// Sets the shutdown flag (rejecting new actions), then waits for
    /// pending effects to complete.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::ShutdownTimeout`] if the timeout expires with
    /// effects still running.
    pub async fn shutdown(&self, timeout: Duration) -> Result<(), StoreError> {
        tracing::info!("Initiating graceful shutdown");
        self.shutdown.store(true, Ordering::Release);

        let start = std::time::Instant::now();
        let poll_interval = Duration::from_millis(100);

        loop {
            let pending = self.pending_effects.load(Ordering::Acquire);

            if pending == 0 {
                tracing::info!("All effects completed, shutdown successful");
                return Ok(());
            }

            if start.elapsed() >= timeout {
                tracing::error!(pending_effects = pending, "Shutdown timed out");
                return Err(StoreError::ShutdownTimeout(pending));
            }

            tokio::time::sleep(poll_interval).await;
        }
    }

    /// Execute an effect with completion tracking.
    ///
    /// Effect failures are fire-and-forget: a panicking effect task is
    /// isolated in its spawned task and the [`DecrementGuard`] still settles
    /// the counter. Reducer panics, in contrast, propagate and halt the
    /// store.
    fn execute_effect(&self, effect: Effect<A>, tracking: EffectTracking)
    where
        R: Clone,
        E: Clone,
    {
        match effect {
            Effect::None => {
                tracing::trace!("Executing Effect::None (no-op)");
            },
            Effect::Future(fut) => {
                tracing::trace!("Executing Effect::Future");
                tracking.increment();

                self.pending_effects.fetch_add(1, Ordering::SeqCst);
                let pending_guard = AtomicCounterGuard(Arc::clone(&self.pending_effects));

                let tracking_clone = tracking.clone();
                let store = self.clone();

                tokio::spawn(async move {
                    let _guard = DecrementGuard(tracking_clone);
                    let _pending_guard = pending_guard;

                    if let Some(action) = fut.await {
                        // Broadcast to observers, then feed back into the
                        // reducer.
                        let _ = store.action_broadcast.send(action.clone());
                        let _ = store.send(action).await;
                    }
                });
            },
            Effect::Delay { duration, action } => {
                tracing::trace!(?duration, "Executing Effect::Delay");
                tracking.increment();

                self.pending_effects.fetch_add(1, Ordering::SeqCst);
                let pending_guard = AtomicCounterGuard(Arc::clone(&self.pending_effects));

                let tracking_clone = tracking.clone();
                let store = self.clone();

                tokio::spawn(async move {
                    let _guard = DecrementGuard(tracking_clone);
                    let _pending_guard = pending_guard;

                    tokio::time::sleep(duration).await;

                    let _ = store.action_broadcast.send((*action).clone());
                    let _ = store.send(*action).await;
                });
            },
            Effect::Parallel(effects) => {
                tracing::trace!("Executing Effect::Parallel with {} effects", effects.len());
                for effect in effects {
                    self.execute_effect(effect, tracking.clone());
                }
            },
            Effect::Sequential(effects) => {
                let effect_count = effects.len();
                tracing::trace!("Executing Effect::Sequential with {effect_count} effects");
                tracking.increment();

                self.pending_effects.fetch_add(1, Ordering::SeqCst);
                let pending_guard = AtomicCounterGuard(Arc::clone(&self.pending_effects));

                let tracking_clone = tracking.clone();
                let store = self.clone();

                tokio::spawn(async move {
                    let _guard = DecrementGuard(tracking_clone);
                    let _pending_guard = pending_guard;

                    for effect in effects {
                        // Sub-tracking so each step can be awaited before
                        // the next starts.
                        let (sub_tx, mut sub_rx) = watch::channel(());
                        let sub_tracking = EffectTracking {
                            counter: Arc::new(AtomicUsize::new(0)),
                            notifier: sub_tx,
                        };

                        store.execute_effect(effect, sub_tracking.clone());

                        if sub_tracking.counter.load(Ordering::SeqCst) > 0 {
                            let _ = sub_rx.changed().await;
                        }
                    }
                });
            },
        }
    }
}

impl<S, A, E, R> Clone for Store<S, A, E, R>
where
    R: Reducer<State = S, Action = A, Environment = E> + Clone,
    E: Clone,
{
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            reducer: self.reducer.clone(),
            environment: self.environment.clone(),
            shutdown: Arc::clone(&self.shutdown),
            pending_effects: Arc::clone(&self.pending_effects),
            action_broadcast: self.action_broadcast.clone(),
        }
    }
}
