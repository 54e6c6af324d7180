//! # Remote Collection Hook
//!
//! The three entity screens share one fetch-and-refresh shape: load the
//! whole collection on mount, show a loading flag while a request is in
//! flight, and re-fetch wholesale after every mutation. This hook is that
//! shape, parameterised over the fetch operation.
//!
//! Failure handling follows the backend-as-source-of-truth model: a failed
//! fetch is logged and the items are left as they were. A view whose initial
//! fetch fails therefore renders its empty state — empty and failed are
//! deliberately indistinguishable in the UI.

use dioxus::prelude::*;
use std::future::Future;

use cinedesk_api::ClientError;

// ============================================================================
// Remote Collection Handle
// ============================================================================

/// Handle to a remotely fetched collection owned by one view
///
/// Copyable like the signals it wraps, so it can be captured by any event
/// handler that needs to trigger a refresh.
pub struct RemoteCollection<T: 'static> {
    items: Signal<Vec<T>>,
    loading: Signal<bool>,
    epoch: Signal<u32>,
}

impl<T: 'static> Clone for RemoteCollection<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for RemoteCollection<T> {}

impl<T: Clone + 'static> RemoteCollection<T> {
    /// The current items, in fetch order
    pub fn items(&self) -> Vec<T> {
        self.items.read().clone()
    }

    /// Whether a fetch is in flight
    pub fn loading(&self) -> bool {
        *self.loading.read()
    }

    /// Whether the collection has zero elements
    pub fn is_empty(&self) -> bool {
        self.items.read().is_empty()
    }

    /// Re-fetch the whole collection
    ///
    /// This is the only consistency mechanism after a mutation; nothing
    /// patches the local items directly.
    pub fn refresh(&self) {
        let mut epoch = self.epoch;
        let next = epoch.peek().wrapping_add(1);
        epoch.set(next);
    }
}

// ============================================================================
// Hook
// ============================================================================

/// Fetch a collection on mount and on every [`RemoteCollection::refresh`]
///
/// `label` names the collection in diagnostics. The loading flag is set
/// before each fetch and cleared after it, regardless of outcome.
pub fn use_remote_collection<T, F, Fut>(label: &'static str, fetch: F) -> RemoteCollection<T>
where
    T: Clone + 'static,
    F: Fn() -> Fut + Clone + 'static,
    Fut: Future<Output = Result<Vec<T>, ClientError>> + 'static,
{
    let items = use_signal(Vec::<T>::new);
    let loading = use_signal(|| true);
    let epoch = use_signal(|| 0u32);

    use_effect(move || {
        // reading the epoch subscribes this effect to refresh() calls
        let _ = *epoch.read();

        let fetch = fetch.clone();
        let mut items = items;
        let mut loading = loading;

        spawn(async move {
            loading.set(true);
            match fetch().await {
                Ok(list) => {
                    tracing::debug!(count = list.len(), "fetched {label}");
                    items.set(list);
                }
                Err(e) => {
                    tracing::warn!("failed to fetch {label}: {e}");
                }
            }
            loading.set(false);
        });
    });

    RemoteCollection {
        items,
        loading,
        epoch,
    }
}
