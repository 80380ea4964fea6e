//! # Validation Module
//!
//! Checks applied at the edges of the core: reference data arriving from the
//! backend and values the customer types into the builder.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Backend API                                                  │
//! │  └── Owns the catalog; trusted but not blindly                         │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: pizza-store DTO conversion                                   │
//! │  └── THIS MODULE: names, prices, multipliers                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Pricing / display                                            │
//! │  └── Assumes validated data; unresolved ids still fail loudly          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use pizza_core::validation::{validate_ingredient_quantity, validate_pizza_name};
//!
//! validate_pizza_name("Маргарита").unwrap();
//! validate_ingredient_quantity(2).unwrap();
//! assert!(validate_ingredient_quantity(4).is_err());
//! ```

use crate::error::{CoreResult, ValidationError};
use crate::money::Money;
use crate::types::{EntityKind, PizzaConfiguration, ReferenceItem};
use crate::{
    MAX_INGREDIENT_QUANTITY, MAX_ITEM_NAME_LEN, MAX_ITEM_PRICE_RUBLES, MAX_PIZZA_NAME_LEN,
};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

fn validate_name(field: &str, name: &str, max: usize) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if name.chars().count() > max {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max,
        });
    }

    Ok(())
}

/// Validates the name the customer gives a pizza.
///
/// ## Rules
/// - Must not be empty (whitespace only counts as empty)
/// - At most `MAX_PIZZA_NAME_LEN` characters
pub fn validate_pizza_name(name: &str) -> ValidationResult<()> {
    validate_name("pizza name", name, MAX_PIZZA_NAME_LEN)
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates the portion count of one ingredient.
///
/// ## Rules
/// - 0 is allowed (the counter at rest)
/// - Must not exceed `MAX_INGREDIENT_QUANTITY`
pub fn validate_ingredient_quantity(quantity: u32) -> ValidationResult<()> {
    if quantity > MAX_INGREDIENT_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "ingredient quantity".to_string(),
            min: 0,
            max: MAX_INGREDIENT_QUANTITY as i64,
        });
    }

    Ok(())
}

/// Validates the number of identical pizzas on one line.
///
/// ## Rules
/// - Must be at least 1
pub fn validate_pizza_quantity(quantity: u32) -> ValidationResult<()> {
    if quantity == 0 {
        return Err(ValidationError::MustBePositive {
            field: "pizza quantity".to_string(),
        });
    }

    Ok(())
}

/// Error for a price outside `0..=MAX_ITEM_PRICE_RUBLES` rubles.
pub fn price_out_of_range() -> ValidationError {
    ValidationError::OutOfRange {
        field: "price".to_string(),
        min: 0,
        max: MAX_ITEM_PRICE_RUBLES,
    }
}

/// Validates a price.
///
/// ## Rules
/// - Zero is allowed (a free dip)
/// - Must not be negative
/// - At most `MAX_ITEM_PRICE_RUBLES` rubles
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() || price > Money::from_rubles(MAX_ITEM_PRICE_RUBLES) {
        return Err(price_out_of_range());
    }

    Ok(())
}

/// Validates a finished pizza before it goes into the cart.
///
/// Applies the same rules the builder enforces while it is being assembled.
pub fn validate_pizza_configuration(pizza: &PizzaConfiguration) -> ValidationResult<()> {
    validate_pizza_name(&pizza.name)?;
    validate_pizza_quantity(pizza.quantity)?;
    for selection in &pizza.ingredients {
        validate_ingredient_quantity(selection.quantity)?;
    }
    Ok(())
}

// =============================================================================
// Reference Data Validators
// =============================================================================

/// Validates one reference item for its collection.
///
/// ## Rules
/// - Name required, at most `MAX_ITEM_NAME_LEN` characters
/// - Sizes need a positive multiplier
/// - Every other collection needs a non-negative price
pub fn validate_reference_item(kind: EntityKind, item: &ReferenceItem) -> ValidationResult<()> {
    validate_name("name", &item.name, MAX_ITEM_NAME_LEN)?;

    match kind {
        EntityKind::Sizes => match item.multiplier {
            Some(multiplier) if !multiplier.is_zero() => Ok(()),
            Some(_) => Err(ValidationError::MustBePositive {
                field: "multiplier".to_string(),
            }),
            None => Err(ValidationError::Required {
                field: "multiplier".to_string(),
            }),
        },
        _ => match item.price {
            Some(price) => validate_price(price),
            None => Err(ValidationError::Required {
                field: "price".to_string(),
            }),
        },
    }
}

/// Validates a whole collection before it replaces the stored one.
pub fn validate_collection(kind: EntityKind, items: &[ReferenceItem]) -> CoreResult<()> {
    for item in items {
        validate_reference_item(kind, item)?;
    }
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
