//! # Domain Types
//!
//! Reference data and selections the pricing and display functions run over.
//!
//! ## Type Map
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────────┐   ┌──────────────────┐  │
//! │  │  ReferenceItem  │   │ IngredientSelection │   │  MiscSelection   │  │
//! │  │  ─────────────  │   │  ─────────────────  │   │  ──────────────  │  │
//! │  │  id             │◄──│  ingredient_id      │   │  misc_id ───────►│  │
//! │  │  name           │   │  quantity           │   │  quantity        │  │
//! │  │  price?         │   └─────────────────────┘   └──────────────────┘  │
//! │  │  multiplier?    │                                                    │
//! │  └─────────────────┘   ┌─────────────────────┐                         │
//! │                        │   EntityKind        │  dough | sizes | sauces │
//! │                        │                     │  ingredients | misc     │
//! │                        └─────────────────────┘                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity
//! Ids are unique only inside their own collection: dough `1` and sauce `1`
//! are different items. Every lookup therefore names the collection.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::{Money, Multiplier};

/// Identifier of a reference item within its collection.
pub type ItemId = u64;

// =============================================================================
// Entity Kind
// =============================================================================

/// The five reference collections of the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Dough,
    Sizes,
    Sauces,
    Ingredients,
    Misc,
}

impl EntityKind {
    /// Every collection, in the order the initialization sequence fetches them.
    pub const ALL: [EntityKind; 5] = [
        EntityKind::Dough,
        EntityKind::Sizes,
        EntityKind::Sauces,
        EntityKind::Ingredients,
        EntityKind::Misc,
    ];

    /// Collection name as used by the backend and the UI.
    pub const fn collection_name(&self) -> &'static str {
        match self {
            EntityKind::Dough => "dough",
            EntityKind::Sizes => "sizes",
            EntityKind::Sauces => "sauces",
            EntityKind::Ingredients => "ingredients",
            EntityKind::Misc => "misc",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.collection_name())
    }
}

impl FromStr for EntityKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EntityKind::ALL
            .into_iter()
            .find(|kind| kind.collection_name() == s)
            .ok_or_else(|| {
                ValidationError::NotAllowed {
                    field: "collection".to_string(),
                    allowed: EntityKind::ALL
                        .iter()
                        .map(|kind| kind.collection_name().to_string())
                        .collect(),
                }
                .into()
            })
    }
}

// =============================================================================
// Reference Item
// =============================================================================

/// A dough, size, sauce, ingredient or misc item from the catalog.
///
/// Which optional attributes are present depends on the collection: sizes
/// carry a `multiplier`, everything else carries a `price`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ReferenceItem {
    pub id: ItemId,
    pub name: String,
    #[serde(default)]
    pub price: Option<Money>,
    #[serde(default)]
    pub multiplier: Option<Multiplier>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl ReferenceItem {
    /// Creates an item with a price (dough, sauce, ingredient, misc).
    pub fn priced(id: ItemId, name: impl Into<String>, price: Money) -> Self {
        ReferenceItem {
            id,
            name: name.into(),
            price: Some(price),
            multiplier: None,
            image: None,
            description: None,
        }
    }

    /// Creates a size item with a multiplier.
    pub fn sized(id: ItemId, name: impl Into<String>, multiplier: Multiplier) -> Self {
        ReferenceItem {
            id,
            name: name.into(),
            price: None,
            multiplier: Some(multiplier),
            image: None,
            description: None,
        }
    }

    /// Returns the price or fails with `MissingAttribute`.
    pub fn require_price(&self, kind: EntityKind) -> CoreResult<Money> {
        self.price.ok_or(CoreError::MissingAttribute {
            kind,
            id: self.id,
            attribute: "price",
        })
    }

    /// Returns the multiplier or fails with `MissingAttribute`.
    pub fn require_multiplier(&self, kind: EntityKind) -> CoreResult<Multiplier> {
        self.multiplier.ok_or(CoreError::MissingAttribute {
            kind,
            id: self.id,
            attribute: "multiplier",
        })
    }
}

// =============================================================================
// Selections
// =============================================================================

/// A cart-line style entry: an item reference plus a quantity.
pub trait Selection {
    /// Id of the referenced reference item.
    fn item_id(&self) -> ItemId;

    /// How many portions are selected.
    fn quantity(&self) -> u32;
}

/// An ingredient placed on a pizza.
///
/// Duplicates are allowed; every entry is priced on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct IngredientSelection {
    pub ingredient_id: ItemId,
    pub quantity: u32,
}

impl IngredientSelection {
    pub const fn new(ingredient_id: ItemId, quantity: u32) -> Self {
        IngredientSelection {
            ingredient_id,
            quantity,
        }
    }
}

impl Selection for IngredientSelection {
    fn item_id(&self) -> ItemId {
        self.ingredient_id
    }

    fn quantity(&self) -> u32 {
        self.quantity
    }
}

/// An extra (drink, sauce dip, side) added to the cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct MiscSelection {
    pub misc_id: ItemId,
    pub quantity: u32,
}

impl MiscSelection {
    pub const fn new(misc_id: ItemId, quantity: u32) -> Self {
        MiscSelection { misc_id, quantity }
    }
}

impl Selection for MiscSelection {
    fn item_id(&self) -> ItemId {
        self.misc_id
    }

    fn quantity(&self) -> u32 {
        self.quantity
    }
}

// =============================================================================
// Pizza Configuration
// =============================================================================

/// A fully specified pizza as it sits in the cart or in a past order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PizzaConfiguration {
    pub name: String,
    pub dough_id: ItemId,
    pub size_id: ItemId,
    pub sauce_id: ItemId,
    #[serde(default)]
    pub ingredients: Vec<IngredientSelection>,
    pub quantity: u32,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_kind_round_trips_through_name() {
        for kind in EntityKind::ALL {
            assert_eq!(kind.collection_name().parse::<EntityKind>().unwrap(), kind);
        }
        assert!("pizzas".parse::<EntityKind>().is_err());
    }

    #[test]
    fn test_entity_kind_serializes_as_collection_name() {
        let json = serde_json::to_string(&EntityKind::Ingredients).unwrap();
        assert_eq!(json, "\"ingredients\"");
    }

    #[test]
    fn test_require_attributes() {
        let dough = ReferenceItem::priced(1, "Тонкое", Money::from_rubles(300));
        assert_eq!(
            dough.require_price(EntityKind::Dough).unwrap(),
            Money::from_rubles(300)
        );
        assert_eq!(
            dough.require_multiplier(EntityKind::Dough),
            Err(CoreError::MissingAttribute {
                kind: EntityKind::Dough,
                id: 1,
                attribute: "multiplier",
            })
        );
    }

    #[test]
    fn test_selection_wire_shape() {
        let selection: IngredientSelection =
            serde_json::from_str(r#"{"ingredientId": 4, "quantity": 2}"#).unwrap();
        assert_eq!(selection, IngredientSelection::new(4, 2));
        assert_eq!(selection.item_id(), 4);

        let misc: MiscSelection = serde_json::from_str(r#"{"miscId": 1, "quantity": 3}"#).unwrap();
        assert_eq!(misc.item_id(), 1);
        assert_eq!(misc.quantity(), 3);
    }

    #[test]
    fn test_reference_item_optional_fields_default() {
        let item: ReferenceItem = serde_json::from_str(r#"{"id": 2, "name": "32 см"}"#).unwrap();
        assert_eq!(item.price, None);
        assert_eq!(item.multiplier, None);
        assert_eq!(item.image, None);
    }
}
