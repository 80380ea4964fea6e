//! # Store Handle
//!
//! Shared, cloneable access to the [`RootState`].
//!
//! ## Dispatch Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  dispatch(event)                                                        │
//! │     │                                                                   │
//! │     ▼                                                                   │
//! │  write lock ──► RootState::apply(&event) ──► Err? return, no plugins   │
//! │     │                                                                   │
//! │     ▼                                                                   │
//! │  downgrade to read lock ──► every plugin.after_event(&event, &state)   │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Mutation happens only inside `dispatch`, one event at a time. Concurrent
//! fetch completions each write their own collection slot, so ordering
//! between them does not matter.

use std::sync::Arc;

use parking_lot::{RwLock, RwLockWriteGuard};
use tracing::{debug, trace};

use pizza_core::CoreResult;

use crate::state::{RootState, StoreEvent};

/// Observer attached at store construction.
pub trait StorePlugin: Send + Sync {
    fn name(&self) -> &'static str;

    /// Called after `event` has been applied to `state`.
    fn after_event(&self, event: &StoreEvent, state: &RootState);
}

/// Logs every applied event.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingPlugin;

impl StorePlugin for TracingPlugin {
    fn name(&self) -> &'static str {
        "tracing"
    }

    fn after_event(&self, event: &StoreEvent, state: &RootState) {
        match event {
            StoreEvent::ReplaceEntity { kind, items } => {
                debug!(event = event.name(), %kind, count = items.len(), "Store event applied");
            }
            _ => {
                debug!(event = event.name(), "Store event applied");
            }
        }
        trace!(
            authenticated = state.auth.is_authenticated,
            cart_pizzas = state.cart.pizzas.len(),
            "Store state after event"
        );
    }
}

#[derive(Clone)]
pub struct Store {
    state: Arc<RwLock<RootState>>,
    plugins: Arc<Vec<Arc<dyn StorePlugin>>>,
}

impl Store {
    pub fn new(initial: RootState) -> Self {
        Store {
            state: Arc::new(RwLock::new(initial)),
            plugins: Arc::new(Vec::new()),
        }
    }

    /// Builds a store with plugins attached.
    pub fn with_plugins(initial: RootState, plugins: Vec<Arc<dyn StorePlugin>>) -> Self {
        Store {
            state: Arc::new(RwLock::new(initial)),
            plugins: Arc::new(plugins),
        }
    }

    /// Applies an event and notifies plugins.
    pub fn dispatch(&self, event: StoreEvent) -> CoreResult<()> {
        let mut state = self.state.write();
        state.apply(&event)?;

        let state = RwLockWriteGuard::downgrade(state);
        for plugin in self.plugins.iter() {
            plugin.after_event(&event, &state);
        }
        Ok(())
    }

    /// Runs `f` with read access to the state.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let total = store.read(|state| state.cart_total())?;
    /// ```
    pub fn read<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&RootState) -> R,
    {
        let state = self.state.read();
        f(&state)
    }

    /// Clones the whole state.
    pub fn snapshot(&self) -> RootState {
        self.state.read().clone()
    }

    pub fn plugin_names(&self) -> Vec<&'static str> {
        self.plugins.iter().map(|p| p.name()).collect()
    }
}

impl Default for Store {
    fn default() -> Self {
        Store::new(RootState::default())
    }
}

impl std::fmt::Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("plugins", &self.plugin_names())
            .finish_non_exhaustive()
    }
}
