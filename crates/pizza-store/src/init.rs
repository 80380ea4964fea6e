//! # Initialization Sequence
//!
//! Loads the catalog on application start.
//!
//! ## Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          init()                                         │
//! │                                                                         │
//! │   read auth.is_authenticated                                            │
//! │        │                                                                │
//! │        ▼            (all started together, tokio::join!)                │
//! │   ┌────────┬────────┬────────┬─────────────┬──────┬───────────────┐    │
//! │   │ dough  │ sizes  │ sauces │ ingredients │ misc │ user data *   │    │
//! │   └───┬────┴───┬────┴───┬────┴──────┬──────┴──┬───┴───────┬───────┘    │
//! │       │        │        │           │         │           │            │
//! │   each completion on its own:                 │           │            │
//! │     ReplaceEntity(kind)                        │   SetAddresses        │
//! │     + Builder/UPDATE_*_VALUE(first id)        │   SetOrders           │
//! │       (dough, sizes, sauces only)             │                       │
//! │                                                                         │
//! │   * only when the session is authenticated                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Failure Semantics
//! A failed fetch does not cancel the others. Whatever completed is
//! committed; the first error (in fetch order) is returned once everything
//! has settled, and the committed counts are logged. No retries, no
//! timeouts.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info, warn};

use pizza_core::EntityKind;

use crate::api::{into_collection, CatalogApi, OrdersApi};
use crate::error::{StoreError, StoreResult};
use crate::state::{BuilderEvent, OrdersEvent, StoreEvent};
use crate::store::Store;

/// What an initialization run committed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InitReport {
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    /// Item count per collection, for every collection that was replaced.
    pub collections: Vec<(EntityKind, usize)>,
    /// Whether user addresses and orders were requested.
    pub user_data_requested: bool,
}

/// Runs the initialization sequence against `store`.
///
/// Returns the first error once every fetch has settled. Use
/// [`init_with_report`] to also see what was committed on failure.
pub async fn init(
    store: &Store,
    catalog_api: &dyn CatalogApi,
    orders_api: &dyn OrdersApi,
) -> StoreResult<InitReport> {
    match init_with_report(store, catalog_api, orders_api).await {
        (report, None) => Ok(report),
        (_, Some(err)) => Err(err),
    }
}

/// Runs the initialization sequence and always returns the report of what
/// was committed, together with the first error if any fetch failed.
pub async fn init_with_report(
    store: &Store,
    catalog_api: &dyn CatalogApi,
    orders_api: &dyn OrdersApi,
) -> (InitReport, Option<StoreError>) {
    let started_at = Utc::now();
    let authenticated = store.read(|state| state.auth.is_authenticated);

    info!(authenticated, "Initializing store");

    let (dough, sizes, sauces, ingredients, misc, user_data) = tokio::join!(
        fetch_entity(store, catalog_api, EntityKind::Dough),
        fetch_entity(store, catalog_api, EntityKind::Sizes),
        fetch_entity(store, catalog_api, EntityKind::Sauces),
        fetch_entity(store, catalog_api, EntityKind::Ingredients),
        fetch_entity(store, catalog_api, EntityKind::Misc),
        fetch_user_data(store, orders_api, authenticated),
    );

    let mut collections = Vec::new();
    let mut first_error = None;

    for (kind, result) in EntityKind::ALL
        .into_iter()
        .zip([dough, sizes, sauces, ingredients, misc])
    {
        match result {
            Ok(count) => collections.push((kind, count)),
            Err(StoreError::EmptyCollection(kind)) => {
                // The empty collection was still committed
                collections.push((kind, 0));
                warn!(%kind, "Fetched collection is empty");
                first_error.get_or_insert(StoreError::EmptyCollection(kind));
            }
            Err(err) => {
                warn!(%kind, error = %err, "Fetching collection failed");
                first_error.get_or_insert(err);
            }
        }
    }

    if let Err(err) = user_data {
        warn!(error = %err, "Fetching user data failed");
        first_error.get_or_insert(err);
    }

    let report = InitReport {
        started_at,
        finished_at: Utc::now(),
        collections,
        user_data_requested: authenticated,
    };

    match first_error {
        None => info!(collections = report.collections.len(), "Store initialized"),
        Some(ref err) => warn!(
            committed = ?report.collections,
            error = %err,
            "Store partially initialized"
        ),
    }

    (report, first_error)
}

/// Fetches one collection, commits it, and preselects its first item in
/// the builder when the builder tracks that collection.
///
/// Returns the number of items committed.
pub async fn fetch_entity(
    store: &Store,
    api: &dyn CatalogApi,
    kind: EntityKind,
) -> StoreResult<usize> {
    let payload = api
        .query(kind)
        .await
        .map_err(|source| StoreError::fetch(kind.collection_name(), source))?;

    let items = into_collection(kind, payload)?;
    let first_id = items.first().map(|item| item.id);
    let count = items.len();

    store.dispatch(StoreEvent::ReplaceEntity { kind, items })?;
    debug!(%kind, count, "Collection replaced");

    if BuilderEvent::tracks(kind) {
        let id = first_id.ok_or(StoreError::EmptyCollection(kind))?;
        if let Some(select) = BuilderEvent::select_first(kind, id) {
            store.dispatch(StoreEvent::Builder(select))?;
        }
    }

    Ok(count)
}

/// Fetches and commits user addresses and orders, if authenticated.
async fn fetch_user_data(
    store: &Store,
    api: &dyn OrdersApi,
    authenticated: bool,
) -> StoreResult<()> {
    if !authenticated {
        return Ok(());
    }

    let (addresses, orders) = tokio::join!(api.fetch_user_addresses(), api.fetch_user_orders());

    let addresses = addresses
        .map_err(|source| StoreError::fetch("addresses", source))
        .and_then(|addresses| {
            debug!(count = addresses.len(), "User addresses fetched");
            store
                .dispatch(StoreEvent::Orders(OrdersEvent::SetAddresses(addresses)))
                .map_err(StoreError::from)
        });
    let orders = orders
        .map_err(|source| StoreError::fetch("orders", source))
        .and_then(|orders| {
            debug!(count = orders.len(), "User orders fetched");
            store
                .dispatch(StoreEvent::Orders(OrdersEvent::SetOrders(orders)))
                .map_err(StoreError::from)
        });

    addresses.and(orders)
}
