//! # JSON Fixture API
//!
//! Serves the catalog and user data from a JSON document instead of a
//! backend. Used by the `pizza-catalog` binary and by integration tests.
//!
//! ```json
//! {
//!   "dough":       [{ "id": 1, "name": "Тонкое", "price": 300 }],
//!   "sizes":       [{ "id": 1, "name": "23 см", "multiplier": 1 }],
//!   "sauces":      [...],
//!   "ingredients": [...],
//!   "misc":        [...],
//!   "addresses":   [...],
//!   "orders":      [...]
//! }
//! ```

use std::path::Path;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use pizza_core::EntityKind;

use crate::api::{Address, CatalogApi, CatalogItemDto, Order, OrdersApi};
use crate::error::{ApiResult, StoreError, StoreResult};

/// Catalog and user data held in memory.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JsonFixtureApi {
    #[serde(default)]
    pub dough: Vec<CatalogItemDto>,
    #[serde(default)]
    pub sizes: Vec<CatalogItemDto>,
    #[serde(default)]
    pub sauces: Vec<CatalogItemDto>,
    #[serde(default)]
    pub ingredients: Vec<CatalogItemDto>,
    #[serde(default)]
    pub misc: Vec<CatalogItemDto>,
    #[serde(default)]
    pub addresses: Vec<Address>,
    #[serde(default)]
    pub orders: Vec<Order>,
}

impl JsonFixtureApi {
    pub fn from_json_str(json: &str) -> StoreResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads a fixture file.
    pub fn from_path(path: impl AsRef<Path>) -> StoreResult<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .map_err(|e| StoreError::FixtureLoadFailed(format!("{}: {}", path.display(), e)))?;
        debug!(?path, bytes = contents.len(), "Fixture read");
        Self::from_json_str(&contents)
    }

    fn collection(&self, kind: EntityKind) -> &[CatalogItemDto] {
        match kind {
            EntityKind::Dough => &self.dough,
            EntityKind::Sizes => &self.sizes,
            EntityKind::Sauces => &self.sauces,
            EntityKind::Ingredients => &self.ingredients,
            EntityKind::Misc => &self.misc,
        }
    }
}

#[async_trait]
impl CatalogApi for JsonFixtureApi {
    async fn query(&self, kind: EntityKind) -> ApiResult<Vec<CatalogItemDto>> {
        Ok(self.collection(kind).to_vec())
    }
}

#[async_trait]
impl OrdersApi for JsonFixtureApi {
    async fn fetch_user_addresses(&self) -> ApiResult<Vec<Address>> {
        Ok(self.addresses.clone())
    }

    async fn fetch_user_orders(&self) -> ApiResult<Vec<Order>> {
        Ok(self.orders.clone())
    }
}
