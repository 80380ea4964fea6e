//! # pizza-core: Pure Pricing & Display Logic for the Pizza Builder
//!
//! This crate holds every derivation the UI asks for (pizza price, extras
//! subtotal, descriptive text, small formatting helpers) as pure functions
//! with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Pizza Builder Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                        UI components                            │   │
//! │  │     Builder ──► Cart ──► Checkout ──► Orders history            │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ derived values                         │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 pizza-store (state + init)                      │   │
//! │  │     RootState, StoreEvent reducer, CatalogApi, init()           │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ pizza-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌──────────┐ ┌──────────┐ ┌──────────┐ ┌──────────┐          │   │
//! │  │   │  types   │ │  lookup  │ │ pricing  │ │ display  │          │   │
//! │  │   │ Selection│ │ Catalog  │ │  totals  │ │  texts   │          │   │
//! │  │   └──────────┘ └──────────┘ └──────────┘ └──────────┘          │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • PURE FUNCTIONS                          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Reference items, selections, entity kinds
//! - [`money`] - Money (integer kopecks) and size multipliers
//! - [`lookup`] - The `EntityLookup` capability, `Catalog` and `ItemList`
//! - [`pricing`] - Pizza totals, extras subtotals, order totals
//! - [`display`] - Descriptive strings and formatting helpers
//! - [`spelling`] - Dough name inflection table
//! - [`validation`] - Reference data and builder input checks
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use pizza_core::{pricing, Catalog, EntityKind, IngredientSelection, Money, Multiplier, ReferenceItem};
//!
//! let mut catalog = Catalog::default();
//! catalog.replace(EntityKind::Sizes, vec![ReferenceItem::sized(1, "32 см", Multiplier::from_percent(150))]);
//! catalog.replace(EntityKind::Dough, vec![ReferenceItem::priced(1, "Тонкое", Money::from_rubles(100))]);
//! catalog.replace(EntityKind::Sauces, vec![ReferenceItem::priced(1, "Томатный", Money::from_rubles(50))]);
//! catalog.replace(EntityKind::Ingredients, vec![ReferenceItem::priced(7, "Грибы", Money::from_rubles(30))]);
//!
//! let ingredients = [IngredientSelection::new(7, 2)];
//! let total = pricing::total_pizza_price(1, 1, 1, &ingredients, &catalog).unwrap();
//!
//! // 1.5 × (100 + 50 + 30 × 2)
//! assert_eq!(total, Money::from_rubles(315));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod display;
pub mod error;
pub mod lookup;
pub mod money;
pub mod pricing;
pub mod spelling;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use lookup::{Catalog, EntityLookup, ItemList};
pub use money::{Money, Multiplier};
pub use spelling::DoughSpelling;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum portions of a single ingredient on one pizza.
pub const MAX_INGREDIENT_QUANTITY: u32 = 3;

/// Maximum length of a user-given pizza name.
pub const MAX_PIZZA_NAME_LEN: usize = 100;

/// Maximum length of a reference item name coming from the backend.
pub const MAX_ITEM_NAME_LEN: usize = 200;

/// Maximum price of a single reference item, in rubles.
pub const MAX_ITEM_PRICE_RUBLES: i64 = 1_000_000;
