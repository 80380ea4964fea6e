//! # Root State
//!
//! The catalog plus the four sub-states, and the reducer that moves them.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                            RootState                                    │
//! │                                                                         │
//! │  catalog ─ dough, sizes, sauces, ingredients, misc   (ReplaceEntity)   │
//! │                                                                         │
//! │  ┌──────────┐  ┌──────────────┐  ┌──────────┐  ┌──────────────┐        │
//! │  │   auth   │  │   builder    │  │   cart   │  │   orders     │        │
//! │  │ session  │  │ dough/size/  │  │ pizzas + │  │ addresses +  │        │
//! │  │          │  │ sauce/ingr.  │  │ extras   │  │ past orders  │        │
//! │  └──────────┘  └──────────────┘  └──────────┘  └──────────────┘        │
//! │        ▲               ▲                ▲               ▲               │
//! │        └───────────────┴── ResetStore ──┴───────────────┘               │
//! │                  (catalog is left untouched)                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};

use pizza_core::validation::{validate_ingredient_quantity, validate_pizza_configuration};
use pizza_core::{
    display, pricing, Catalog, CoreResult, DoughSpelling, EntityKind, EntityLookup,
    IngredientSelection, ItemId, MiscSelection, Money, PizzaConfiguration, ReferenceItem,
};

use crate::api::{Address, Order, User};

// =============================================================================
// Sub-states
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthState {
    pub is_authenticated: bool,
    pub user: Option<User>,
}

impl AuthState {
    pub fn default_state() -> Self {
        Self::default()
    }
}

/// The pizza currently being assembled.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuilderState {
    pub dough_id: Option<ItemId>,
    pub size_id: Option<ItemId>,
    pub sauce_id: Option<ItemId>,
    pub ingredients: Vec<IngredientSelection>,
    pub pizza_name: String,
}

impl BuilderState {
    pub fn default_state() -> Self {
        Self::default()
    }

    /// The builder as a single pizza, once dough, size and sauce are chosen.
    pub fn to_pizza(&self) -> Option<PizzaConfiguration> {
        Some(PizzaConfiguration {
            name: self.pizza_name.clone(),
            dough_id: self.dough_id?,
            size_id: self.size_id?,
            sauce_id: self.sauce_id?,
            ingredients: self.ingredients.clone(),
            quantity: 1,
        })
    }

    /// Portions of one ingredient currently on the pizza.
    pub fn ingredient_quantity(&self, ingredient_id: ItemId) -> u32 {
        display::lookup_quantity(&self.ingredients, ingredient_id, |s| s.ingredient_id)
    }

    fn set_ingredient_quantity(&mut self, ingredient_id: ItemId, quantity: u32) {
        let position = self
            .ingredients
            .iter()
            .position(|s| s.ingredient_id == ingredient_id);

        match (position, quantity) {
            (Some(index), 0) => {
                self.ingredients.remove(index);
            }
            (Some(index), _) => self.ingredients[index].quantity = quantity,
            (None, 0) => {}
            (None, _) => self
                .ingredients
                .push(IngredientSelection::new(ingredient_id, quantity)),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartState {
    pub pizzas: Vec<PizzaConfiguration>,
    pub misc: Vec<MiscSelection>,
}

impl CartState {
    pub fn default_state() -> Self {
        Self::default()
    }

    fn set_misc_quantity(&mut self, misc_id: ItemId, quantity: u32) {
        self.misc.retain(|s| s.misc_id != misc_id);
        if quantity > 0 {
            self.misc.push(MiscSelection::new(misc_id, quantity));
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrdersState {
    pub addresses: Vec<Address>,
    pub orders: Vec<Order>,
}

impl OrdersState {
    pub fn default_state() -> Self {
        Self::default()
    }
}

// =============================================================================
// Events
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthEvent {
    SetSession(User),
    ClearSession,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuilderEvent {
    UpdateDough(ItemId),
    UpdateSize(ItemId),
    UpdateSauce(ItemId),
    /// Sets the portion count of one ingredient; 0 removes it.
    SetIngredientQuantity { ingredient_id: ItemId, quantity: u32 },
    SetPizzaName(String),
}

impl BuilderEvent {
    /// True for the collections the builder keeps a selected id for.
    pub fn tracks(kind: EntityKind) -> bool {
        matches!(
            kind,
            EntityKind::Dough | EntityKind::Sizes | EntityKind::Sauces
        )
    }

    /// The event that preselects `id` for a collection the builder tracks.
    pub fn select_first(kind: EntityKind, id: ItemId) -> Option<Self> {
        match kind {
            EntityKind::Dough => Some(BuilderEvent::UpdateDough(id)),
            EntityKind::Sizes => Some(BuilderEvent::UpdateSize(id)),
            EntityKind::Sauces => Some(BuilderEvent::UpdateSauce(id)),
            EntityKind::Ingredients | EntityKind::Misc => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartEvent {
    AddPizza(PizzaConfiguration),
    /// Sets the count of one extra; 0 removes it.
    SetMiscQuantity { misc_id: ItemId, quantity: u32 },
    Clear,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrdersEvent {
    SetAddresses(Vec<Address>),
    SetOrders(Vec<Order>),
}

/// Every state transition the store knows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    /// Restores auth, builder, cart and orders to their defaults.
    ResetStore,
    /// Overwrites one catalog collection wholesale.
    ReplaceEntity {
        kind: EntityKind,
        items: Vec<ReferenceItem>,
    },
    Auth(AuthEvent),
    Builder(BuilderEvent),
    Cart(CartEvent),
    Orders(OrdersEvent),
}

impl StoreEvent {
    /// Short name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            StoreEvent::ResetStore => "RESET_STORE",
            StoreEvent::ReplaceEntity { .. } => "FETCH_ENTITY",
            StoreEvent::Auth(AuthEvent::SetSession(_)) => "Auth/SET_SESSION",
            StoreEvent::Auth(AuthEvent::ClearSession) => "Auth/CLEAR_SESSION",
            StoreEvent::Builder(BuilderEvent::UpdateDough(_)) => "Builder/UPDATE_DOUGH_VALUE",
            StoreEvent::Builder(BuilderEvent::UpdateSize(_)) => "Builder/UPDATE_SIZE_VALUE",
            StoreEvent::Builder(BuilderEvent::UpdateSauce(_)) => "Builder/UPDATE_SAUCE_VALUE",
            StoreEvent::Builder(BuilderEvent::SetIngredientQuantity { .. }) => {
                "Builder/SET_INGREDIENT_QUANTITY"
            }
            StoreEvent::Builder(BuilderEvent::SetPizzaName(_)) => "Builder/SET_PIZZA_NAME",
            StoreEvent::Cart(CartEvent::AddPizza(_)) => "Cart/ADD_PIZZA",
            StoreEvent::Cart(CartEvent::SetMiscQuantity { .. }) => "Cart/SET_MISC_QUANTITY",
            StoreEvent::Cart(CartEvent::Clear) => "Cart/CLEAR",
            StoreEvent::Orders(OrdersEvent::SetAddresses(_)) => "Orders/SET_ADDRESSES",
            StoreEvent::Orders(OrdersEvent::SetOrders(_)) => "Orders/SET_ORDERS",
        }
    }
}

// =============================================================================
// Root State
// =============================================================================

/// Description lines of one pizza, as shown in the cart and order history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PizzaDescription {
    pub dough_and_size: String,
    pub sauce: String,
    pub ingredients: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RootState {
    #[serde(flatten)]
    pub catalog: Catalog,
    #[serde(rename = "Auth")]
    pub auth: AuthState,
    #[serde(rename = "Builder")]
    pub builder: BuilderState,
    #[serde(rename = "Cart")]
    pub cart: CartState,
    #[serde(rename = "Orders")]
    pub orders: OrdersState,
}

impl RootState {
    /// Applies one event.
    ///
    /// Builder input is validated first; a rejected event leaves the state
    /// unchanged.
    pub fn apply(&mut self, event: &StoreEvent) -> CoreResult<()> {
        match event {
            StoreEvent::ResetStore => {
                self.auth = AuthState::default_state();
                self.builder = BuilderState::default_state();
                self.cart = CartState::default_state();
                self.orders = OrdersState::default_state();
            }
            StoreEvent::ReplaceEntity { kind, items } => {
                self.catalog.replace(*kind, items.clone());
            }
            StoreEvent::Auth(AuthEvent::SetSession(user)) => {
                self.auth.is_authenticated = true;
                self.auth.user = Some(user.clone());
            }
            StoreEvent::Auth(AuthEvent::ClearSession) => {
                self.auth = AuthState::default_state();
            }
            StoreEvent::Builder(event) => self.apply_builder(event)?,
            StoreEvent::Cart(CartEvent::AddPizza(pizza)) => {
                validate_pizza_configuration(pizza)?;
                self.cart.pizzas.push(pizza.clone());
            }
            StoreEvent::Cart(CartEvent::SetMiscQuantity { misc_id, quantity }) => {
                self.cart.set_misc_quantity(*misc_id, *quantity);
            }
            StoreEvent::Cart(CartEvent::Clear) => {
                self.cart = CartState::default_state();
            }
            StoreEvent::Orders(OrdersEvent::SetAddresses(addresses)) => {
                self.orders.addresses = addresses.clone();
            }
            StoreEvent::Orders(OrdersEvent::SetOrders(orders)) => {
                self.orders.orders = orders.clone();
            }
        }
        Ok(())
    }

    fn apply_builder(&mut self, event: &BuilderEvent) -> CoreResult<()> {
        match event {
            BuilderEvent::UpdateDough(id) => self.builder.dough_id = Some(*id),
            BuilderEvent::UpdateSize(id) => self.builder.size_id = Some(*id),
            BuilderEvent::UpdateSauce(id) => self.builder.sauce_id = Some(*id),
            BuilderEvent::SetIngredientQuantity {
                ingredient_id,
                quantity,
            } => {
                validate_ingredient_quantity(*quantity)?;
                self.builder
                    .set_ingredient_quantity(*ingredient_id, *quantity);
            }
            BuilderEvent::SetPizzaName(name) => self.builder.pizza_name = name.clone(),
        }
        Ok(())
    }

    // =========================================================================
    // Getters
    // =========================================================================

    pub fn entity_by_id(&self, kind: EntityKind, id: ItemId) -> Option<&ReferenceItem> {
        self.catalog.lookup(kind, id)
    }

    /// Price of the pizza in the builder; `None` until dough, size and sauce
    /// are all chosen.
    pub fn builder_price(&self) -> CoreResult<Option<Money>> {
        self.builder
            .to_pizza()
            .map(|pizza| pricing::pizza_line_total(&pizza, &self.catalog))
            .transpose()
    }

    /// Description of the pizza in the builder; `None` until it is complete.
    pub fn builder_description(&self, spelling: &DoughSpelling) -> CoreResult<Option<PizzaDescription>> {
        self.builder
            .to_pizza()
            .map(|pizza| self.describe_pizza(&pizza, spelling))
            .transpose()
    }

    pub fn describe_pizza(
        &self,
        pizza: &PizzaConfiguration,
        spelling: &DoughSpelling,
    ) -> CoreResult<PizzaDescription> {
        Ok(PizzaDescription {
            dough_and_size: display::describe_dough_and_size(
                pizza.size_id,
                pizza.dough_id,
                &self.catalog,
                spelling,
            )?,
            sauce: display::describe_sauce(pizza.sauce_id, &self.catalog)?,
            ingredients: display::describe_ingredients(
                &pizza.ingredients,
                self.catalog.list(EntityKind::Ingredients),
            )?,
        })
    }

    /// Total of everything in the cart.
    pub fn cart_total(&self) -> CoreResult<Money> {
        pricing::order_total(&self.cart.pizzas, &self.cart.misc, &self.catalog)
    }

    /// Total of a past order, priced against the current catalog.
    pub fn order_total(&self, order: &Order) -> CoreResult<Money> {
        pricing::order_total(&order.order_pizzas, &order.order_misc, &self.catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pizza_core::{CoreError, Multiplier, ValidationError};

    fn loaded_state() -> RootState {
        let mut state = RootState::default();
        let events = [
            StoreEvent::ReplaceEntity {
                kind: EntityKind::Dough,
                items: vec![ReferenceItem::priced(1, "Тонкое", Money::from_rubles(300))],
            },
            StoreEvent::ReplaceEntity {
                kind: EntityKind::Sizes,
                items: vec![ReferenceItem::sized(1, "23 см", Multiplier::ONE)],
            },
            StoreEvent::ReplaceEntity {
                kind: EntityKind::Sauces,
                items: vec![ReferenceItem::priced(1, "Томатный", Money::from_rubles(50))],
            },
            StoreEvent::ReplaceEntity {
                kind: EntityKind::Ingredients,
                items: vec![ReferenceItem::priced(1, "Грибы", Money::from_rubles(33))],
            },
            StoreEvent::ReplaceEntity {
                kind: EntityKind::Misc,
                items: vec![ReferenceItem::priced(1, "Cola-Cola 0,5 литра", Money::from_rubles(56))],
            },
        ];
        for event in &events {
            state.apply(event).unwrap();
        }
        state
    }

    fn user() -> User {
        User {
            id: "u-1".into(),
            name: "Василий Ложкин".into(),
            email: "user@example.com".into(),
            avatar: None,
            phone: None,
        }
    }

    #[test]
    fn test_builder_incomplete_has_no_price() {
        let state = loaded_state();
        assert_eq!(state.builder_price().unwrap(), None);
        assert_eq!(
            state.builder_description(&DoughSpelling::default()).unwrap(),
            None
        );
    }

    #[test]
    fn test_builder_price_and_description() {
        let mut state = loaded_state();
        for event in [
            BuilderEvent::UpdateDough(1),
            BuilderEvent::UpdateSize(1),
            BuilderEvent::UpdateSauce(1),
            BuilderEvent::SetIngredientQuantity {
                ingredient_id: 1,
                quantity: 2,
            },
        ] {
            state.apply(&StoreEvent::Builder(event)).unwrap();
        }

        assert_eq!(state.builder_price().unwrap(), Some(Money::from_rubles(416)));
        assert_eq!(state.builder.ingredient_quantity(1), 2);

        let description = state
            .builder_description(&DoughSpelling::default())
            .unwrap()
            .unwrap();
        assert_eq!(description.dough_and_size, "23 см, на тонком тесте");
        assert_eq!(description.sauce, "Соус: томатный");
        assert_eq!(description.ingredients, "Начинка: грибы");
    }

    #[test]
    fn test_ingredient_quantity_updates_and_removes() {
        let mut state = loaded_state();
        let set = |quantity| {
            StoreEvent::Builder(BuilderEvent::SetIngredientQuantity {
                ingredient_id: 1,
                quantity,
            })
        };

        state.apply(&set(1)).unwrap();
        state.apply(&set(3)).unwrap();
        assert_eq!(state.builder.ingredients, vec![IngredientSelection::new(1, 3)]);

        // Over the limit is rejected and changes nothing
        assert!(matches!(
            state.apply(&set(4)),
            Err(CoreError::Validation(ValidationError::OutOfRange { .. }))
        ));
        assert_eq!(state.builder.ingredient_quantity(1), 3);

        state.apply(&set(0)).unwrap();
        assert!(state.builder.ingredients.is_empty());
    }

    #[test]
    fn test_reset_keeps_catalog() {
        let mut state = loaded_state();
        state
            .apply(&StoreEvent::Auth(AuthEvent::SetSession(user())))
            .unwrap();
        state
            .apply(&StoreEvent::Builder(BuilderEvent::UpdateDough(1)))
            .unwrap();
        state
            .apply(&StoreEvent::Cart(CartEvent::SetMiscQuantity {
                misc_id: 1,
                quantity: 2,
            }))
            .unwrap();

        state.apply(&StoreEvent::ResetStore).unwrap();

        assert_eq!(state.auth, AuthState::default_state());
        assert_eq!(state.builder, BuilderState::default_state());
        assert_eq!(state.cart, CartState::default_state());
        assert_eq!(state.orders, OrdersState::default_state());
        assert_eq!(state.catalog.dough.len(), 1);
    }

    #[test]
    fn test_cart_total() {
        let mut state = loaded_state();
        let pizza = PizzaConfiguration {
            name: "Грибная".into(),
            dough_id: 1,
            size_id: 1,
            sauce_id: 1,
            ingredients: vec![IngredientSelection::new(1, 1)],
            quantity: 2,
        };
        state
            .apply(&StoreEvent::Cart(CartEvent::AddPizza(pizza)))
            .unwrap();
        state
            .apply(&StoreEvent::Cart(CartEvent::SetMiscQuantity {
                misc_id: 1,
                quantity: 2,
            }))
            .unwrap();

        // (300 + 50 + 33) × 2 + 56 × 2
        assert_eq!(state.cart_total().unwrap(), Money::from_rubles(878));

        state
            .apply(&StoreEvent::Cart(CartEvent::SetMiscQuantity {
                misc_id: 1,
                quantity: 0,
            }))
            .unwrap();
        assert_eq!(state.cart_total().unwrap(), Money::from_rubles(766));
    }

    #[test]
    fn test_unnamed_pizza_is_not_added_to_cart() {
        let mut state = loaded_state();
        let pizza = PizzaConfiguration {
            name: "  ".into(),
            dough_id: 1,
            size_id: 1,
            sauce_id: 1,
            ingredients: vec![],
            quantity: 1,
        };
        assert!(state
            .apply(&StoreEvent::Cart(CartEvent::AddPizza(pizza)))
            .is_err());
        assert!(state.cart.pizzas.is_empty());
    }

    #[test]
    fn test_cart_rejects_what_the_builder_would() {
        let mut state = loaded_state();
        let pizza = PizzaConfiguration {
            name: "Моя пицца".into(),
            dough_id: 1,
            size_id: 1,
            sauce_id: 1,
            ingredients: vec![],
            quantity: 0,
        };
        assert_eq!(
            state.apply(&StoreEvent::Cart(CartEvent::AddPizza(pizza.clone()))),
            Err(CoreError::Validation(ValidationError::MustBePositive {
                field: "pizza quantity".into()
            }))
        );

        let overloaded = PizzaConfiguration {
            ingredients: vec![IngredientSelection::new(1, 4)],
            quantity: 1,
            ..pizza
        };
        assert_eq!(
            state.apply(&StoreEvent::Cart(CartEvent::AddPizza(overloaded))),
            Err(CoreError::Validation(ValidationError::OutOfRange {
                field: "ingredient quantity".into(),
                min: 0,
                max: 3,
            }))
        );
        assert!(state.cart.pizzas.is_empty());
    }

    #[test]
    fn test_order_total_fails_on_items_gone_from_catalog() {
        let state = loaded_state();
        let order = Order {
            id: 1,
            address_id: None,
            order_pizzas: vec![],
            order_misc: vec![MiscSelection::new(9, 1)],
        };
        assert_eq!(
            state.order_total(&order),
            Err(CoreError::UnresolvedReference {
                kind: EntityKind::Misc,
                id: 9,
            })
        );
    }

    #[test]
    fn test_select_first_only_for_builder_collections() {
        assert_eq!(
            BuilderEvent::select_first(EntityKind::Sizes, 3),
            Some(BuilderEvent::UpdateSize(3))
        );
        assert_eq!(BuilderEvent::select_first(EntityKind::Misc, 3), None);
        assert!(BuilderEvent::tracks(EntityKind::Dough));
        assert!(!BuilderEvent::tracks(EntityKind::Ingredients));
    }

    #[test]
    fn test_entity_by_id() {
        let state = loaded_state();
        assert_eq!(state.entity_by_id(EntityKind::Misc, 1).unwrap().name, "Cola-Cola 0,5 литра");
        assert!(state.entity_by_id(EntityKind::Misc, 2).is_none());
    }
}
