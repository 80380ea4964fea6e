//! # Display Text
//!
//! Customer-facing descriptions of a pizza plus the small string helpers
//! the UI uses for CSS modifiers, image variants and counters.
//!
//! ## Output Shapes
//! ```text
//! describe_dough_and_size  →  "32 см, на тонком тесте"
//! describe_ingredients     →  "Начинка: грибы, чеддер"
//! describe_sauce           →  "Соус: томатный"
//! size_modifier_class      →  "counter--small"
//! image_variant_url        →  "/img/pizza.webp"
//! ```

use crate::error::CoreResult;
use crate::lookup::{EntityLookup, ItemList};
use crate::spelling::DoughSpelling;
use crate::types::{EntityKind, IngredientSelection, ItemId, Selection};

/// `"<size>, на <inflected dough> тесте"`.
///
/// ```rust
/// use pizza_core::{display, Catalog, DoughSpelling, EntityKind, Money, Multiplier, ReferenceItem};
///
/// let mut catalog = Catalog::default();
/// catalog.replace(EntityKind::Sizes, vec![ReferenceItem::sized(2, "32 см", Multiplier::from_percent(200))]);
/// catalog.replace(EntityKind::Dough, vec![ReferenceItem::priced(1, "Тонкое", Money::from_rubles(300))]);
///
/// let text = display::describe_dough_and_size(2, 1, &catalog, &DoughSpelling::default()).unwrap();
/// assert_eq!(text, "32 см, на тонком тесте");
/// ```
pub fn describe_dough_and_size<L>(
    size_id: ItemId,
    dough_id: ItemId,
    lookup: &L,
    spelling: &DoughSpelling,
) -> CoreResult<String>
where
    L: EntityLookup + ?Sized,
{
    let size = lookup.resolve(EntityKind::Sizes, size_id)?;
    let dough = lookup.resolve(EntityKind::Dough, dough_id)?;
    let dough_form = spelling.inflect(&dough.name)?;

    Ok(format!("{}, на {} тесте", size.name, dough_form))
}

/// `"Начинка: "` followed by the lower-cased ingredient names, in selection
/// order, joined with `", "`.
pub fn describe_ingredients(
    selections: &[IngredientSelection],
    ingredients: ItemList<'_>,
) -> CoreResult<String> {
    let names = selections
        .iter()
        .map(|selection| {
            ingredients
                .get(selection.item_id())
                .map(|item| item.name.to_lowercase())
        })
        .collect::<CoreResult<Vec<_>>>()?;

    Ok(format!("Начинка: {}", names.join(", ")))
}

/// `"Соус: <sauce name lower-cased>"`.
pub fn describe_sauce<L>(sauce_id: ItemId, lookup: &L) -> CoreResult<String>
where
    L: EntityLookup + ?Sized,
{
    let sauce = lookup.resolve(EntityKind::Sauces, sauce_id)?;
    Ok(format!("Соус: {}", sauce.name.to_lowercase()))
}

/// BEM size modifier: `"<base>--<token>"`, or `""` for an empty token.
///
/// ```rust
/// use pizza_core::display::size_modifier_class;
///
/// assert_eq!(size_modifier_class("btn", ""), "");
/// assert_eq!(size_modifier_class("btn", "lg"), "btn--lg");
/// ```
pub fn size_modifier_class(base_class: &str, size_token: &str) -> String {
    if size_token.is_empty() {
        return String::new();
    }
    format!("{}--{}", base_class, size_token)
}

/// Swaps the extension of an image URL.
///
/// Everything from the FIRST `.` on is dropped, so `"a.b.jpg"` becomes
/// `"a"` + extension. A URL without a dot is kept whole.
///
/// ```rust
/// use pizza_core::display::image_variant_url;
///
/// assert_eq!(image_variant_url("pizza.jpg", ".webp"), "pizza.webp");
/// assert_eq!(image_variant_url("a.b.jpg", ".webp"), "a.webp");
/// ```
pub fn image_variant_url(base_url: &str, extension: &str) -> String {
    let stem = base_url
        .split_once('.')
        .map_or(base_url, |(stem, _)| stem);
    format!("{}{}", stem, extension)
}

/// Quantity of the first selection whose key equals `target_id`, else 0.
///
/// The key function picks which id field to compare, so the same helper
/// serves ingredient counters and misc counters.
///
/// ```rust
/// use pizza_core::display::lookup_quantity;
/// use pizza_core::MiscSelection;
///
/// let misc = [MiscSelection::new(5, 2)];
/// assert_eq!(lookup_quantity(&misc, 5, |s| s.misc_id), 2);
/// assert_eq!(lookup_quantity(&misc[..0], 5, |s| s.misc_id), 0);
/// ```
pub fn lookup_quantity<S, K>(selections: &[S], target_id: ItemId, key: K) -> u32
where
    S: Selection,
    K: Fn(&S) -> ItemId,
{
    selections
        .iter()
        .find(|selection| key(*selection) == target_id)
        .map_or(0, |selection| selection.quantity())
}
