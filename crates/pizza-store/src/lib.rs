//! # pizza-store: Application State & Initialization for the Pizza Builder
//!
//! Owns the root state the UI renders from, the reducer that moves it, and
//! the initialization sequence that fills the catalog from the backend.
//!
//! ## Architecture Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Store Architecture                              │
//! │                                                                         │
//! │  ┌──────────────┐    init()     ┌──────────────────────────────────┐   │
//! │  │  CatalogApi  │──────────────►│              Store               │   │
//! │  │  OrdersApi   │  StoreEvents  │  Arc<RwLock<RootState>>          │   │
//! │  │ (HTTP shell, │               │                                  │   │
//! │  │  fixture,    │               │  dispatch(event) ──► apply       │   │
//! │  │  test fakes) │               │            └──► plugins          │   │
//! │  └──────────────┘               └───────────────┬──────────────────┘   │
//! │                                                 │ read()               │
//! │                                                 ▼                      │
//! │                                 getters over pizza-core:               │
//! │                                 builder_price, builder_description,    │
//! │                                 cart_total, entity_by_id               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//! - [`state`] - Root state, sub-states, events and the reducer
//! - [`store`] - Shared store handle and plugins
//! - [`api`] - Collaborator traits and wire DTOs
//! - [`init`] - Concurrent catalog and user data loading
//! - [`fixture`] - JSON-backed API collaborator
//! - [`config`] - Configuration (file, environment, defaults)
//! - [`error`] - Store error types
//!
//! ## Usage
//!
//! ```rust,ignore
//! use pizza_store::{init, JsonFixtureApi, Store, TracingPlugin};
//!
//! let api = JsonFixtureApi::from_path("menu.json")?;
//! let store = Store::with_plugins(Default::default(), vec![Arc::new(TracingPlugin)]);
//!
//! init(&store, &api, &api).await?;
//!
//! let price = store.read(|state| state.builder_price())?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod api;
pub mod config;
pub mod error;
pub mod fixture;
pub mod init;
pub mod state;
pub mod store;

// =============================================================================
// Re-exports
// =============================================================================

pub use api::{Address, CatalogApi, CatalogItemDto, Order, OrdersApi, User};
pub use config::PizzaConfig;
pub use error::{ApiError, ApiResult, StoreError, StoreResult};
pub use fixture::JsonFixtureApi;
pub use init::{fetch_entity, init, init_with_report, InitReport};
pub use state::{
    AuthEvent, AuthState, BuilderEvent, BuilderState, CartEvent, CartState, OrdersEvent,
    OrdersState, PizzaDescription, RootState, StoreEvent,
};
pub use store::{Store, StorePlugin, TracingPlugin};
