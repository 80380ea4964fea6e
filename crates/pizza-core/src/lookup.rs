//! # Entity Lookup
//!
//! The one capability every pricing and display function resolves ids
//! through.
//!
//! ## Two Callable Forms, One Capability
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        EntityLookup                                     │
//! │                                                                         │
//! │   lookup(kind, id) -> Option<&ReferenceItem>     (required)            │
//! │   resolve(kind, id) -> CoreResult<&ReferenceItem> (provided)           │
//! │                                                                         │
//! │   ┌──────────────────────┐          ┌──────────────────────────┐       │
//! │   │       Catalog        │          │       ItemList<'a>        │       │
//! │   │  by collection name  │          │  by explicit slice        │       │
//! │   │  dough / sizes / ... │          │  (kind only labels errors)│       │
//! │   └──────────────────────┘          └──────────────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Callers that hold the whole catalog pass a [`Catalog`]; callers that
//! only hold one collection wrap it in an [`ItemList`].

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::types::{EntityKind, ItemId, ReferenceItem};

/// Resolves reference items by collection and id.
pub trait EntityLookup {
    /// Returns the item with `id` in collection `kind`, if any.
    fn lookup(&self, kind: EntityKind, id: ItemId) -> Option<&ReferenceItem>;

    /// Like [`lookup`](Self::lookup) but a miss is an `UnresolvedReference`.
    fn resolve(&self, kind: EntityKind, id: ItemId) -> CoreResult<&ReferenceItem> {
        self.lookup(kind, id)
            .ok_or(CoreError::UnresolvedReference { kind, id })
    }
}

impl<T: EntityLookup + ?Sized> EntityLookup for &T {
    fn lookup(&self, kind: EntityKind, id: ItemId) -> Option<&ReferenceItem> {
        (**self).lookup(kind, id)
    }
}

// =============================================================================
// Catalog
// =============================================================================

/// The five reference collections.
///
/// Collections are replaced wholesale; there is no incremental merge.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub dough: Vec<ReferenceItem>,
    #[serde(default)]
    pub sizes: Vec<ReferenceItem>,
    #[serde(default)]
    pub sauces: Vec<ReferenceItem>,
    #[serde(default)]
    pub ingredients: Vec<ReferenceItem>,
    #[serde(default)]
    pub misc: Vec<ReferenceItem>,
}

impl Catalog {
    /// Returns one collection.
    pub fn collection(&self, kind: EntityKind) -> &[ReferenceItem] {
        match kind {
            EntityKind::Dough => &self.dough,
            EntityKind::Sizes => &self.sizes,
            EntityKind::Sauces => &self.sauces,
            EntityKind::Ingredients => &self.ingredients,
            EntityKind::Misc => &self.misc,
        }
    }

    /// Overwrites one collection, returning the previous contents.
    pub fn replace(&mut self, kind: EntityKind, items: Vec<ReferenceItem>) -> Vec<ReferenceItem> {
        let slot = match kind {
            EntityKind::Dough => &mut self.dough,
            EntityKind::Sizes => &mut self.sizes,
            EntityKind::Sauces => &mut self.sauces,
            EntityKind::Ingredients => &mut self.ingredients,
            EntityKind::Misc => &mut self.misc,
        };
        std::mem::replace(slot, items)
    }

    /// Wraps one collection as an [`ItemList`].
    pub fn list(&self, kind: EntityKind) -> ItemList<'_> {
        ItemList::new(kind, self.collection(kind))
    }

    /// True when no collection has been loaded.
    pub fn is_empty(&self) -> bool {
        EntityKind::ALL
            .iter()
            .all(|kind| self.collection(*kind).is_empty())
    }
}

impl EntityLookup for Catalog {
    fn lookup(&self, kind: EntityKind, id: ItemId) -> Option<&ReferenceItem> {
        self.collection(kind).iter().find(|item| item.id == id)
    }
}

// =============================================================================
// Item List
// =============================================================================

/// A single collection passed by reference.
///
/// Lookups ignore the requested kind and search the slice; the stored kind
/// only labels `UnresolvedReference` errors.
#[derive(Debug, Clone, Copy)]
pub struct ItemList<'a> {
    kind: EntityKind,
    items: &'a [ReferenceItem],
}

impl<'a> ItemList<'a> {
    pub fn new(kind: EntityKind, items: &'a [ReferenceItem]) -> Self {
        ItemList { kind, items }
    }

    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    /// Resolves `id` in this list, labelling a miss with the list's kind.
    pub fn get(&self, id: ItemId) -> CoreResult<&'a ReferenceItem> {
        self.items
            .iter()
            .find(|item| item.id == id)
            .ok_or(CoreError::UnresolvedReference {
                kind: self.kind,
                id,
            })
    }
}

impl EntityLookup for ItemList<'_> {
    fn lookup(&self, _kind: EntityKind, id: ItemId) -> Option<&ReferenceItem> {
        self.items.iter().find(|item| item.id == id)
    }

    fn resolve(&self, _kind: EntityKind, id: ItemId) -> CoreResult<&ReferenceItem> {
        self.get(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    fn catalog() -> Catalog {
        let mut catalog = Catalog::default();
        catalog.replace(
            EntityKind::Dough,
            vec![ReferenceItem::priced(1, "Тонкое", Money::from_rubles(300))],
        );
        catalog.replace(
            EntityKind::Sauces,
            vec![ReferenceItem::priced(1, "Томатный", Money::from_rubles(50))],
        );
        catalog
    }

    #[test]
    fn test_ids_are_scoped_to_collection() {
        let catalog = catalog();
        assert_eq!(catalog.lookup(EntityKind::Dough, 1).unwrap().name, "Тонкое");
        assert_eq!(catalog.lookup(EntityKind::Sauces, 1).unwrap().name, "Томатный");
        assert!(catalog.lookup(EntityKind::Sizes, 1).is_none());
    }

    #[test]
    fn test_resolve_reports_unresolved_reference() {
        let catalog = catalog();
        assert_eq!(
            catalog.resolve(EntityKind::Dough, 9),
            Err(CoreError::UnresolvedReference {
                kind: EntityKind::Dough,
                id: 9,
            })
        );
    }

    #[test]
    fn test_replace_is_wholesale() {
        let mut catalog = catalog();
        let previous = catalog.replace(
            EntityKind::Dough,
            vec![ReferenceItem::priced(2, "Толстое", Money::from_rubles(300))],
        );
        assert_eq!(previous.len(), 1);
        assert!(catalog.lookup(EntityKind::Dough, 1).is_none());
        assert!(catalog.lookup(EntityKind::Dough, 2).is_some());
    }

    #[test]
    fn test_item_list_labels_misses_with_its_kind() {
        let items = vec![ReferenceItem::priced(1, "Cola", Money::from_rubles(56))];
        let list = ItemList::new(EntityKind::Misc, &items);

        assert_eq!(list.get(1).unwrap().name, "Cola");
        // The requested kind is irrelevant for a plain list
        assert!(list.lookup(EntityKind::Dough, 1).is_some());
        assert_eq!(
            list.resolve(EntityKind::Dough, 2),
            Err(CoreError::UnresolvedReference {
                kind: EntityKind::Misc,
                id: 2,
            })
        );
    }

    #[test]
    fn test_is_empty() {
        assert!(Catalog::default().is_empty());
        assert!(!catalog().is_empty());
    }
}
