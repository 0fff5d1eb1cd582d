//! Query-bound fetch state shared by every view.
//!
//! A [`QueryBinding`] owns the lifecycle of one remote dataset. Each fetch is
//! a spawned tokio task tagged with a request generation. Starting a new fetch
//! bumps the generation and aborts the previous task, and a finished task only
//! commits its result if its generation is still the current one. A slow
//! response to an old filter can therefore never overwrite the result of a
//! newer one.
//!
//! Bindings must be driven from inside a tokio runtime.

use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::task::JoinHandle;

use crate::error::Result;

/// Lifecycle of one remote dataset.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum FetchState<T> {
    /// Nothing requested yet.
    #[default]
    Idle,
    Loading,
    Loaded(T),
    /// The request failed; holds the user-facing message.
    Failed(String),
}

impl<T> FetchState<T> {
    pub fn is_idle(&self) -> bool {
        matches!(self, FetchState::Idle)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            FetchState::Loaded(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            FetchState::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn map<U, F: FnOnce(&T) -> U>(&self, f: F) -> FetchState<U> {
        match self {
            FetchState::Idle => FetchState::Idle,
            FetchState::Loading => FetchState::Loading,
            FetchState::Loaded(data) => FetchState::Loaded(f(data)),
            FetchState::Failed(message) => FetchState::Failed(message.clone()),
        }
    }
}

#[derive(Debug)]
struct Slot<T> {
    generation: u64,
    state: FetchState<T>,
}

fn lock<T>(slot: &Mutex<Slot<T>>) -> MutexGuard<'_, Slot<T>> {
    // A panicking fetch task cannot leave the slot half-written.
    slot.lock().unwrap_or_else(PoisonError::into_inner)
}

fn commit_to<T>(slot: &Mutex<Slot<T>>, generation: u64, outcome: FetchState<T>) -> bool {
    let mut slot = lock(slot);
    if slot.generation != generation {
        tracing::debug!(
            stale = generation,
            current = slot.generation,
            "discarding stale response"
        );
        return false;
    }
    slot.state = outcome;
    true
}

/// Generation-tagged fetch state with at most one live request.
pub struct QueryBinding<T> {
    slot: Arc<Mutex<Slot<T>>>,
    task: Option<JoinHandle<()>>,
}

impl<T> Default for QueryBinding<T> {
    fn default() -> Self {
        Self {
            slot: Arc::new(Mutex::new(Slot {
                generation: 0,
                state: FetchState::Idle,
            })),
            task: None,
        }
    }
}

impl<T: Send + 'static> QueryBinding<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current request generation. Starts at 0 and only ever grows.
    pub fn generation(&self) -> u64 {
        lock(&self.slot).generation
    }

    /// Start a new request: bump the generation and enter `Loading`.
    ///
    /// Returns the generation the eventual result must be committed under.
    pub fn begin(&self) -> u64 {
        let mut slot = lock(&self.slot);
        slot.generation += 1;
        slot.state = FetchState::Loading;
        slot.generation
    }

    /// Commit `outcome` if `generation` is still current.
    ///
    /// Returns `false` (and leaves the state untouched) for a stale generation.
    pub fn commit(&self, generation: u64, outcome: FetchState<T>) -> bool {
        commit_to(&self.slot, generation, outcome)
    }

    /// Run `fetch` as the binding's only live request.
    ///
    /// Any previous request is aborted. On success the data is committed as
    /// `Loaded`; on failure the error is logged and `failure` becomes the
    /// user-facing message.
    pub fn run<F>(&mut self, failure: &'static str, fetch: F)
    where
        F: Future<Output = Result<T>> + Send + 'static,
    {
        self.abort();
        let generation = self.begin();
        let slot = Arc::clone(&self.slot);

        self.task = Some(tokio::spawn(async move {
            let outcome = match fetch.await {
                Ok(data) => FetchState::Loaded(data),
                Err(e) => {
                    tracing::error!(error = %e, generation, "{}", failure);
                    FetchState::Failed(failure.to_string())
                }
            };
            commit_to(&slot, generation, outcome);
        }));
    }

    /// Fail immediately without a request, superseding anything in flight.
    pub fn reject(&mut self, message: impl Into<String>) {
        self.abort();
        let generation = self.begin();
        self.commit(generation, FetchState::Failed(message.into()));
    }

    /// Wait for the live request, if any, to finish and commit.
    pub async fn settle(&mut self) {
        if let Some(task) = self.task.take() {
            if let Err(e) = task.await {
                if e.is_panic() {
                    tracing::error!(error = %e, "fetch task panicked");
                }
            }
        }
    }

    /// True while a request is still running.
    pub fn in_flight(&self) -> bool {
        self.task.as_ref().is_some_and(|t| !t.is_finished())
    }

    /// Cancel the live request. The state is left as it was.
    pub fn abort(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

impl<T: Clone> QueryBinding<T> {
    /// Snapshot of the current state.
    pub fn state(&self) -> FetchState<T> {
        lock(&self.slot).state.clone()
    }
}

impl<T> QueryBinding<T> {
    /// Inspect the current state without cloning it.
    pub fn with_state<R>(&self, f: impl FnOnce(&FetchState<T>) -> R) -> R {
        f(&lock(&self.slot).state)
    }
}

impl<T> Drop for QueryBinding<T> {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}
