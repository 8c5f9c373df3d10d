//! Per-page view binders.
//!
//! A page mount starts its fetches immediately and settles into `Ready` with
//! whatever the data access layer returned. Read faults have already been
//! collapsed to empty results by then, so there is no error state. Dropping a
//! mount tears it down: the fetch task is aborted and a result that races the
//! teardown is discarded.

mod contact;
mod gallery;
mod home;
mod rotation;
mod services;

pub use contact::*;
pub use gallery::*;
pub use home::*;
pub use rotation::*;
pub use services::*;

use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use serde::Serialize;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::errors::AppError;

/// Render state of a page section.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "state", content = "data", rename_all = "lowercase")]
pub enum ViewState<T> {
    Loading,
    Ready(T),
}

#[cfg(test)]
impl<T> ViewState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            ViewState::Ready(data) => Some(data),
            ViewState::Loading => None,
        }
    }
}

struct Slot<T> {
    state: ViewState<T>,
    disposed: bool,
}

fn lock<T>(slot: &Mutex<Slot<T>>) -> MutexGuard<'_, Slot<T>> {
    slot.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Store a fetch result unless the owning view is gone. Returns whether it was stored.
fn settle<T>(slot: &Mutex<Slot<T>>, data: T) -> bool {
    let mut slot = lock(slot);
    if slot.disposed {
        return false;
    }
    slot.state = ViewState::Ready(data);
    true
}

/// A mounted page: one fetch task and the state it settles into.
pub struct PageMount<T> {
    slot: Arc<Mutex<Slot<T>>>,
    settled: watch::Receiver<bool>,
    task: JoinHandle<()>,
}

impl<T: Clone + Send + 'static> PageMount<T> {
    /// Enter `Loading` and start `fetch` on the runtime.
    pub fn mount<F>(page: &'static str, fetch: F) -> Self
    where
        F: Future<Output = T> + Send + 'static,
    {
        let slot = Arc::new(Mutex::new(Slot {
            state: ViewState::Loading,
            disposed: false,
        }));
        let (settled_tx, settled) = watch::channel(false);

        let task = tokio::spawn({
            let slot = Arc::clone(&slot);
            async move {
                let data = fetch.await;
                if settle(&slot, data) {
                    let _ = settled_tx.send(true);
                } else {
                    tracing::debug!(page, "Discarding fetch result for unmounted view");
                }
            }
        });

        Self {
            slot,
            settled,
            task,
        }
    }

    pub fn state(&self) -> ViewState<T> {
        lock(&self.slot).state.clone()
    }

    /// Wait until the fetch has settled and return the data.
    pub async fn wait_ready(&mut self) -> Result<T, AppError> {
        self.settled
            .wait_for(|settled| *settled)
            .await
            .map_err(|_| AppError::Internal("page fetch did not complete".to_string()))?;

        match self.state() {
            ViewState::Ready(data) => Ok(data),
            ViewState::Loading => Err(AppError::Internal(
                "page settled without data".to_string(),
            )),
        }
    }
}

impl<T> Drop for PageMount<T> {
    fn drop(&mut self) {
        lock(&self.slot).disposed = true;
        self.task.abort();
    }
}
