//! Initialization sequence against in-memory collaborators.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Barrier;

use pizza_core::{DoughSpelling, EntityKind, Money};
use pizza_store::{
    init, init_with_report, Address, ApiError, ApiResult, AuthEvent, CatalogApi, CatalogItemDto,
    JsonFixtureApi, Order, OrdersApi, Store, StoreError, StoreEvent, User,
};

// =============================================================================
// Fakes
// =============================================================================

fn priced(id: u64, name: &str, rubles: i64) -> CatalogItemDto {
    CatalogItemDto {
        id,
        name: name.to_string(),
        description: None,
        image: None,
        price: Some(rubles as f64),
        multiplier: None,
    }
}

fn sized(id: u64, name: &str, factor: f64) -> CatalogItemDto {
    CatalogItemDto {
        id,
        name: name.to_string(),
        description: None,
        image: None,
        price: None,
        multiplier: Some(factor),
    }
}

/// Answers each collection from a table; kinds without an entry fail.
struct ScriptedCatalog {
    responses: HashMap<EntityKind, Vec<CatalogItemDto>>,
    barrier: Option<Arc<Barrier>>,
}

impl ScriptedCatalog {
    fn menu() -> Self {
        let mut responses = HashMap::new();
        responses.insert(
            EntityKind::Dough,
            vec![priced(1, "Тонкое", 300), priced(2, "Толстое", 300)],
        );
        responses.insert(
            EntityKind::Sizes,
            vec![sized(1, "23 см", 1.0), sized(2, "32 см", 2.0)],
        );
        responses.insert(
            EntityKind::Sauces,
            vec![priced(1, "Томатный", 50), priced(2, "Сливочный", 50)],
        );
        responses.insert(
            EntityKind::Ingredients,
            vec![priced(1, "Грибы", 33), priced(2, "Чеддер", 42)],
        );
        responses.insert(
            EntityKind::Misc,
            vec![priced(1, "Coca-Cola 0,5 литра", 56)],
        );
        ScriptedCatalog {
            responses,
            barrier: None,
        }
    }

    fn without(mut self, kind: EntityKind) -> Self {
        self.responses.remove(&kind);
        self
    }
}

#[async_trait]
impl CatalogApi for ScriptedCatalog {
    async fn query(&self, kind: EntityKind) -> ApiResult<Vec<CatalogItemDto>> {
        if let Some(ref barrier) = self.barrier {
            barrier.wait().await;
        }
        self.responses
            .get(&kind)
            .cloned()
            .ok_or_else(|| ApiError::Request(format!("{} endpoint is down", kind)))
    }
}

struct StaticOrders {
    addresses: Vec<Address>,
    orders: Vec<Order>,
}

impl StaticOrders {
    fn empty() -> Self {
        StaticOrders {
            addresses: Vec::new(),
            orders: Vec::new(),
        }
    }
}

#[async_trait]
impl OrdersApi for StaticOrders {
    async fn fetch_user_addresses(&self) -> ApiResult<Vec<Address>> {
        Ok(self.addresses.clone())
    }

    async fn fetch_user_orders(&self) -> ApiResult<Vec<Order>> {
        Ok(self.orders.clone())
    }
}

/// Fails the test if anything asks for user data.
struct ForbiddenOrders;

#[async_trait]
impl OrdersApi for ForbiddenOrders {
    async fn fetch_user_addresses(&self) -> ApiResult<Vec<Address>> {
        panic!("addresses requested for an anonymous session");
    }

    async fn fetch_user_orders(&self) -> ApiResult<Vec<Order>> {
        panic!("orders requested for an anonymous session");
    }
}

fn signed_in_store() -> Store {
    let store = Store::default();
    store
        .dispatch(StoreEvent::Auth(AuthEvent::SetSession(User {
            id: "u-1".into(),
            name: "Вася".into(),
            email: "vasya@example.com".into(),
            avatar: None,
            phone: None,
        })))
        .unwrap();
    store
}

// =============================================================================
// Tests
// =============================================================================

#[tokio::test]
async fn test_anonymous_init_loads_catalog_and_seeds_builder() {
    let store = Store::default();

    let report = init(&store, &ScriptedCatalog::menu(), &ForbiddenOrders)
        .await
        .unwrap();

    assert!(!report.user_data_requested);
    assert_eq!(
        report.collections,
        vec![
            (EntityKind::Dough, 2),
            (EntityKind::Sizes, 2),
            (EntityKind::Sauces, 2),
            (EntityKind::Ingredients, 2),
            (EntityKind::Misc, 1),
        ]
    );
    assert!(report.finished_at >= report.started_at);

    let state = store.snapshot();
    assert_eq!(state.builder.dough_id, Some(1));
    assert_eq!(state.builder.size_id, Some(1));
    assert_eq!(state.builder.sauce_id, Some(1));
    assert!(state.builder.ingredients.is_empty());

    // 1 × (300 + 50)
    assert_eq!(state.builder_price().unwrap(), Some(Money::from_rubles(350)));
    let description = state
        .builder_description(&DoughSpelling::default())
        .unwrap()
        .unwrap();
    assert_eq!(description.dough_and_size, "23 см, на тонком тесте");
    assert_eq!(description.sauce, "Соус: томатный");
}

#[tokio::test]
async fn test_authenticated_init_loads_user_data() {
    let store = signed_in_store();
    let orders = StaticOrders {
        addresses: vec![Address {
            id: 1,
            name: "Дом".into(),
            street: "Невский проспект".into(),
            building: "22".into(),
            flat: Some("46".into()),
            comment: None,
        }],
        orders: vec![Order {
            id: 9,
            address_id: Some(1),
            order_pizzas: vec![],
            order_misc: vec![pizza_core::MiscSelection::new(1, 3)],
        }],
    };

    let report = init(&store, &ScriptedCatalog::menu(), &orders).await.unwrap();

    assert!(report.user_data_requested);
    let state = store.snapshot();
    assert_eq!(state.orders.addresses.len(), 1);
    assert_eq!(state.orders.orders.len(), 1);
    assert_eq!(
        state.order_total(&state.orders.orders[0]).unwrap(),
        Money::from_rubles(168)
    );
}

#[tokio::test]
async fn test_failed_fetch_does_not_block_the_others() {
    let store = Store::default();
    let catalog = ScriptedCatalog::menu().without(EntityKind::Sizes);

    let err = init(&store, &catalog, &StaticOrders::empty())
        .await
        .unwrap_err();

    match err {
        StoreError::Fetch { ref resource, .. } => assert_eq!(resource, "sizes"),
        other => panic!("unexpected error: {}", other),
    }

    let state = store.snapshot();
    assert_eq!(state.catalog.dough.len(), 2);
    assert_eq!(state.catalog.sauces.len(), 2);
    assert_eq!(state.catalog.ingredients.len(), 2);
    assert_eq!(state.catalog.misc.len(), 1);
    assert!(state.catalog.sizes.is_empty());

    assert_eq!(state.builder.dough_id, Some(1));
    assert_eq!(state.builder.size_id, None);
    assert_eq!(state.builder_price().unwrap(), None);
}

#[tokio::test]
async fn test_partial_init_reports_what_was_committed() {
    let store = Store::default();
    let catalog = ScriptedCatalog::menu().without(EntityKind::Sizes);

    let (report, err) = init_with_report(&store, &catalog, &StaticOrders::empty()).await;

    assert!(matches!(err, Some(StoreError::Fetch { ref resource, .. }) if resource == "sizes"));
    assert_eq!(
        report.collections,
        vec![
            (EntityKind::Dough, 2),
            (EntityKind::Sauces, 2),
            (EntityKind::Ingredients, 2),
            (EntityKind::Misc, 1),
        ]
    );
    assert!(!report.user_data_requested);
}

#[tokio::test]
async fn test_first_error_in_fetch_order_wins() {
    let store = Store::default();
    let catalog = ScriptedCatalog::menu()
        .without(EntityKind::Misc)
        .without(EntityKind::Sauces);

    let err = init(&store, &catalog, &StaticOrders::empty())
        .await
        .unwrap_err();

    assert!(err.is_fetch_error());
    assert!(err.to_string().starts_with("Fetching sauces failed"));
}

#[tokio::test]
async fn test_empty_dough_is_reported_after_commit() {
    let store = Store::default();
    let mut catalog = ScriptedCatalog::menu();
    catalog.responses.insert(EntityKind::Dough, Vec::new());

    let err = init(&store, &catalog, &StaticOrders::empty())
        .await
        .unwrap_err();

    assert!(matches!(err, StoreError::EmptyCollection(EntityKind::Dough)));
    let state = store.snapshot();
    assert!(state.catalog.dough.is_empty());
    assert_eq!(state.builder.dough_id, None);
    assert_eq!(state.builder.sauce_id, Some(1));
}

#[tokio::test]
async fn test_catalog_fetches_run_concurrently() {
    let store = Store::default();
    let mut catalog = ScriptedCatalog::menu();
    // Every query waits until all five are in flight
    catalog.barrier = Some(Arc::new(Barrier::new(5)));

    let report = tokio::time::timeout(
        Duration::from_secs(5),
        init(&store, &catalog, &StaticOrders::empty()),
    )
    .await
    .expect("fetches were not started together")
    .unwrap();

    assert_eq!(report.collections.len(), 5);
}

#[tokio::test]
async fn test_bundled_fixture_loads() {
    let api = JsonFixtureApi::from_json_str(include_str!("../fixtures/catalog.json")).unwrap();
    let store = signed_in_store();

    let report = init(&store, &api, &api).await.unwrap();

    assert_eq!(report.collections[3], (EntityKind::Ingredients, 15));
    let state = store.snapshot();
    assert_eq!(state.orders.orders.len(), 1);

    // 2 × 2 × (300 + 50 + 33 + 42 × 2) + 56 × 2 + 170
    assert_eq!(
        state.order_total(&state.orders.orders[0]).unwrap(),
        Money::from_rubles(2150)
    );

    store.dispatch(StoreEvent::ResetStore).unwrap();
    let state = store.snapshot();
    assert!(!state.auth.is_authenticated);
    assert!(state.orders.orders.is_empty());
    assert_eq!(state.catalog.ingredients.len(), 15);
}
