//! # Pricing
//!
//! Pizza totals, extras subtotals and order totals.
//!
//! ## Pizza Price Formula
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   total = size.multiplier × ( dough.price                               │
//! │                             + sauce.price                               │
//! │                             + Σ ingredient.price × quantity )           │
//! │                                                                         │
//! │   Example: ×1.5 × (100 + 50 + 30 × 2) = 315 ₽                           │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Empty Input
//! `selection_subtotal` accepts an absent selection list and returns zero.
//! `total_pizza_price` takes a slice, so "no ingredients" is simply an
//! empty slice and contributes zero; ids it is given must still resolve.

use crate::error::{CoreError, CoreResult};
use crate::lookup::{Catalog, EntityLookup, ItemList};
use crate::money::Money;
use crate::types::{EntityKind, IngredientSelection, ItemId, MiscSelection, PizzaConfiguration, Selection};

/// Computes the price of one pizza.
///
/// Every id must resolve: an unknown size, dough, sauce or ingredient is an
/// `UnresolvedReference`, never a zero-priced default. Duplicate ingredient
/// entries are each priced.
///
/// ```rust
/// use pizza_core::{pricing, Catalog, EntityKind, IngredientSelection, Money, Multiplier, ReferenceItem};
///
/// let mut catalog = Catalog::default();
/// catalog.replace(EntityKind::Sizes, vec![ReferenceItem::sized(1, "23 см", Multiplier::ONE)]);
/// catalog.replace(EntityKind::Dough, vec![ReferenceItem::priced(1, "Тонкое", Money::from_rubles(300))]);
/// catalog.replace(EntityKind::Sauces, vec![ReferenceItem::priced(1, "Томатный", Money::from_rubles(50))]);
///
/// let price = pricing::total_pizza_price(1, 1, 1, &[], &catalog).unwrap();
/// assert_eq!(price, Money::from_rubles(350));
///
/// let missing = [IngredientSelection::new(99, 1)];
/// assert!(pricing::total_pizza_price(1, 1, 1, &missing, &catalog).is_err());
/// ```
pub fn total_pizza_price<L>(
    size_id: ItemId,
    dough_id: ItemId,
    sauce_id: ItemId,
    ingredients: &[IngredientSelection],
    lookup: &L,
) -> CoreResult<Money>
where
    L: EntityLookup + ?Sized,
{
    let multiplier = lookup
        .resolve(EntityKind::Sizes, size_id)?
        .require_multiplier(EntityKind::Sizes)?;
    let dough_price = lookup
        .resolve(EntityKind::Dough, dough_id)?
        .require_price(EntityKind::Dough)?;
    let sauce_price = lookup
        .resolve(EntityKind::Sauces, sauce_id)?
        .require_price(EntityKind::Sauces)?;

    let mut base = dough_price
        .checked_add(sauce_price)
        .ok_or(CoreError::AmountOverflow)?;
    for selection in ingredients {
        let price = lookup
            .resolve(EntityKind::Ingredients, selection.item_id())?
            .require_price(EntityKind::Ingredients)?;
        base = add_line(base, price, selection.quantity())?;
    }

    base.checked_apply_multiplier(multiplier)
        .ok_or(CoreError::AmountOverflow)
}

/// `total + price × quantity`, failing on overflow.
fn add_line(total: Money, price: Money, quantity: u32) -> CoreResult<Money> {
    price
        .checked_multiply_quantity(quantity)
        .and_then(|line| total.checked_add(line))
        .ok_or(CoreError::AmountOverflow)
}

/// Sums `quantity × price` over selections resolved in `items`.
///
/// An absent or empty selection list is zero. Any selection whose id is
/// not in `items` fails the whole sum.
///
/// ```rust
/// use pizza_core::{pricing, EntityKind, ItemList, MiscSelection, Money, ReferenceItem};
///
/// let misc = vec![ReferenceItem::priced(1, "Cola", Money::from_rubles(10))];
/// let list = ItemList::new(EntityKind::Misc, &misc);
///
/// let selections = [MiscSelection::new(1, 3)];
/// assert_eq!(pricing::selection_subtotal(Some(&selections[..]), list).unwrap(), Money::from_rubles(30));
/// assert!(pricing::selection_subtotal::<MiscSelection>(None, list).unwrap().is_zero());
/// ```
pub fn selection_subtotal<S: Selection>(
    selections: Option<&[S]>,
    items: ItemList<'_>,
) -> CoreResult<Money> {
    let Some(selections) = selections else {
        return Ok(Money::zero());
    };

    let mut subtotal = Money::zero();
    for selection in selections {
        let price = items.get(selection.item_id())?.require_price(items.kind())?;
        subtotal = add_line(subtotal, price, selection.quantity())?;
    }
    Ok(subtotal)
}

/// Price of one cart or order line: pizza price × line quantity.
pub fn pizza_line_total<L>(pizza: &PizzaConfiguration, lookup: &L) -> CoreResult<Money>
where
    L: EntityLookup + ?Sized,
{
    let unit = total_pizza_price(
        pizza.size_id,
        pizza.dough_id,
        pizza.sauce_id,
        &pizza.ingredients,
        lookup,
    )?;
    unit.checked_multiply_quantity(pizza.quantity)
        .ok_or(CoreError::AmountOverflow)
}

/// Total of a cart or an order: every pizza line plus the extras.
pub fn order_total(
    pizzas: &[PizzaConfiguration],
    misc: &[MiscSelection],
    catalog: &Catalog,
) -> CoreResult<Money> {
    let mut total = Money::zero();
    for pizza in pizzas {
        total = total
            .checked_add(pizza_line_total(pizza, catalog)?)
            .ok_or(CoreError::AmountOverflow)?;
    }
    total
        .checked_add(selection_subtotal(Some(misc), catalog.list(EntityKind::Misc))?)
        .ok_or(CoreError::AmountOverflow)
}

// =============================================================================
// Unit Tests
// =============================================================================
