//! # API Collaborators
//!
//! The backend is reached through two traits. This workspace ships no HTTP
//! client: the UI shell provides one, tests provide fakes, and the catalog
//! binary uses [`JsonFixtureApi`](crate::fixture::JsonFixtureApi).
//!
//! ## Wire Units
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Backend JSON                         Store                             │
//! │  ────────────                         ─────                             │
//! │  price: 33.5       (rubles)       ──► Money::from_kopecks(3350)        │
//! │  multiplier: 1.125 (factor)       ──► Multiplier::from_bps(11250)      │
//! │                                                                         │
//! │  Values that do not fit are rejected as OutOfRange. Every converted    │
//! │  collection is validated before it may replace the stored one.        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use pizza_core::validation::{price_out_of_range, validate_collection};
use pizza_core::{
    CoreError, CoreResult, EntityKind, ItemId, MiscSelection, Money, Multiplier,
    PizzaConfiguration, ReferenceItem, ValidationError,
};

use crate::error::ApiResult;

// =============================================================================
// DTOs
// =============================================================================

/// A reference item as the backend sends it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItemDto {
    pub id: ItemId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    /// Price in rubles; fractions are rounded to the kopeck.
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub multiplier: Option<f64>,
}

impl TryFrom<CatalogItemDto> for ReferenceItem {
    type Error = CoreError;

    fn try_from(dto: CatalogItemDto) -> CoreResult<Self> {
        let price = dto
            .price
            .map(|rubles| Money::from_ruble_amount(rubles).ok_or_else(price_out_of_range))
            .transpose()?;

        let multiplier = dto
            .multiplier
            .map(|factor| {
                Multiplier::from_factor(factor).ok_or_else(|| ValidationError::OutOfRange {
                    field: "multiplier".to_string(),
                    min: 0,
                    max: Multiplier::MAX_FACTOR as i64,
                })
            })
            .transpose()?;

        Ok(ReferenceItem {
            id: dto.id,
            name: dto.name,
            price,
            multiplier,
            image: dto.image,
            description: dto.description,
        })
    }
}

/// Converts a fetched payload into a validated collection.
pub fn into_collection(kind: EntityKind, dtos: Vec<CatalogItemDto>) -> CoreResult<Vec<ReferenceItem>> {
    let items = dtos
        .into_iter()
        .map(ReferenceItem::try_from)
        .collect::<CoreResult<Vec<_>>>()?;
    validate_collection(kind, &items)?;
    Ok(items)
}

/// Authenticated user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

/// A delivery address saved by the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub id: ItemId,
    pub name: String,
    pub street: String,
    pub building: String,
    #[serde(default)]
    pub flat: Option<String>,
    #[serde(default)]
    pub comment: Option<String>,
}

/// A past order of the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: ItemId,
    #[serde(default)]
    pub address_id: Option<ItemId>,
    #[serde(default)]
    pub order_pizzas: Vec<PizzaConfiguration>,
    #[serde(default)]
    pub order_misc: Vec<MiscSelection>,
}

// =============================================================================
// Collaborator Traits
// =============================================================================

/// Reference data endpoints, one per collection.
#[async_trait]
pub trait CatalogApi: Send + Sync {
    /// Fetches the full contents of one collection.
    async fn query(&self, kind: EntityKind) -> ApiResult<Vec<CatalogItemDto>>;
}

/// User-scoped endpoints; only called for an authenticated session.
#[async_trait]
pub trait OrdersApi: Send + Sync {
    async fn fetch_user_addresses(&self) -> ApiResult<Vec<Address>>;

    async fn fetch_user_orders(&self) -> ApiResult<Vec<Order>>;
}
